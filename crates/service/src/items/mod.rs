//! Item records and the operations on the collection.

pub mod domain;
pub mod parse;
pub mod repository;
pub mod store;

pub use domain::{Count, CreateItemInput, CreateOutcome, Item, UpdateItemInput};
pub use repository::ItemRepository;
pub use store::ItemStore;
