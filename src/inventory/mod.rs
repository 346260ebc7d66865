mod store;
mod types;

pub use store::{InventoryStore, find_index};
pub use types::InventoryItem;
