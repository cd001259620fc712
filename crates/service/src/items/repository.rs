use async_trait::async_trait;

use crate::errors::ServiceError;
use super::domain::{CreateItemInput, CreateOutcome, Item, UpdateItemInput};

/// Trait abstraction for item storage, held by the HTTP layer as a trait object.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert a new item or add to the count of the one with the same name.
    async fn create(&self, input: CreateItemInput) -> Result<(Item, CreateOutcome), ServiceError>;
    /// All items in insertion order.
    async fn list(&self) -> Vec<Item>;
    async fn get(&self, id: i64) -> Result<Item, ServiceError>;
    /// Rename an item. Existence is checked before the name.
    async fn update(&self, id: i64, input: UpdateItemInput) -> Result<Item, ServiceError>;
    /// Remove the first item with `id` and return it.
    async fn delete(&self, id: i64) -> Result<Item, ServiceError>;
}
