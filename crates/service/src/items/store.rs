use std::sync::Arc;

use async_trait::async_trait;
use configs::IdStrategy;
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::ServiceError;
use super::domain::{required_name, CreateItemInput, CreateOutcome, Item, UpdateItemInput};
use super::parse::count_to_add;
use super::repository::ItemRepository;

#[derive(Debug, Default)]
struct Collection {
    items: Vec<Item>,
    /// Last id handed out under `IdStrategy::Sequence`.
    last_seq: i64,
}

impl Collection {
    fn next_id(&mut self, strategy: IdStrategy) -> i64 {
        match strategy {
            IdStrategy::Length => self.items.len() as i64 + 1,
            IdStrategy::Sequence => {
                self.last_seq += 1;
                self.last_seq
            }
        }
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }
}

/// In-memory, insertion-ordered item collection.
///
/// Every mutation does its lookup and its write under a single write-lock
/// acquisition, so concurrent requests are applied one at a time.
#[derive(Debug)]
pub struct ItemStore {
    inner: RwLock<Collection>,
    id_strategy: IdStrategy,
}

impl ItemStore {
    /// Empty store using the given id strategy.
    pub fn new(id_strategy: IdStrategy) -> Arc<Self> {
        Arc::new(Self { inner: RwLock::new(Collection::default()), id_strategy })
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn create(&self, input: CreateItemInput) -> Result<(Item, CreateOutcome), ServiceError> {
        let name = required_name(input.name).ok_or_else(ServiceError::name_required)?;
        let add = count_to_add(input.count.as_ref());

        let mut coll = self.inner.write().await;
        if let Some(existing) = coll.items.iter_mut().find(|i| i.name == name) {
            existing.count = existing.count + add;
            debug!(id = existing.id, name = %existing.name, count = ?existing.count.value(), "item count incremented");
            return Ok((existing.clone(), CreateOutcome::Incremented));
        }

        let item = Item { id: coll.next_id(self.id_strategy), name, count: add };
        coll.items.push(item.clone());
        debug!(id = item.id, name = %item.name, "item created");
        Ok((item, CreateOutcome::Created))
    }

    pub async fn list(&self) -> Vec<Item> {
        self.inner.read().await.items.clone()
    }

    pub async fn get(&self, id: i64) -> Result<Item, ServiceError> {
        let coll = self.inner.read().await;
        coll.items
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(ServiceError::item_not_found)
    }

    pub async fn update(&self, id: i64, input: UpdateItemInput) -> Result<Item, ServiceError> {
        let mut coll = self.inner.write().await;
        let idx = coll.position(id).ok_or_else(ServiceError::item_not_found)?;
        let name = required_name(input.name).ok_or_else(ServiceError::name_required)?;
        let item = &mut coll.items[idx];
        item.name = name;
        debug!(id, name = %item.name, "item renamed");
        Ok(item.clone())
    }

    pub async fn delete(&self, id: i64) -> Result<Item, ServiceError> {
        let mut coll = self.inner.write().await;
        let idx = coll.position(id).ok_or_else(ServiceError::item_not_found)?;
        let removed = coll.items.remove(idx);
        debug!(id, name = %removed.name, "item deleted");
        Ok(removed)
    }
}

#[async_trait]
impl ItemRepository for ItemStore {
    async fn create(&self, input: CreateItemInput) -> Result<(Item, CreateOutcome), ServiceError> { self.create(input).await }
    async fn list(&self) -> Vec<Item> { self.list().await }
    async fn get(&self, id: i64) -> Result<Item, ServiceError> { self.get(id).await }
    async fn update(&self, id: i64, input: UpdateItemInput) -> Result<Item, ServiceError> { self.update(id, input).await }
    async fn delete(&self, id: i64) -> Result<Item, ServiceError> { self.delete(id).await }
}
