use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Item count. `None` is the "not a number" state produced by a non-numeric
/// increment; it absorbs any further additions and serializes as `null`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Count(Option<i64>);

impl Count {
    pub const ONE: Count = Count(Some(1));
    pub const NAN: Count = Count(None);

    pub fn new(n: i64) -> Self { Count(Some(n)) }

    pub fn value(&self) -> Option<i64> { self.0 }

    pub fn is_nan(&self) -> bool { self.0.is_none() }
}

impl Add for Count {
    type Output = Count;

    fn add(self, rhs: Count) -> Count {
        match (self.0, rhs.0) {
            (Some(a), Some(b)) => Count(Some(a.saturating_add(b))),
            _ => Count::NAN,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub count: Count,
}

/// Body of `POST /items`. `count` stays untyped so the coercion rules in
/// [`super::parse`] see exactly what the client sent.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CreateItemInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub count: Option<serde_json::Value>,
}

/// Body of `PUT /items/:id`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateItemInput {
    #[serde(default)]
    pub name: Option<String>,
}

/// Whether a create inserted a new record or bumped an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    Incremented,
}

/// Presence check shared by create and update: absent and empty are the same.
pub(crate) fn required_name(name: Option<String>) -> Option<String> {
    name.filter(|n| !n.is_empty())
}
