use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
}

impl ServiceError {
    pub fn name_required() -> Self { Self::Validation("Name is required".into()) }

    pub fn item_not_found() -> Self { Self::NotFound("Item not found".into()) }

    /// The bare message, without the variant prefix used by `Display`.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg) | Self::NotFound(msg) => msg,
        }
    }
}
