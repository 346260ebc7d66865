use axum::{Router, body::Body, http::Response};
use inventory_service::{
    inventory::{InventoryItem, InventoryStore},
    server::{self, handlers::AppState},
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// The two items every API test starts from
pub fn default_items() -> Vec<InventoryItem> {
    vec![
        InventoryItem::new("1", "Test Item 1", "A description for Test Item 1", 10),
        InventoryItem::new("2", "Test Item 2", "A description for Test Item 2", 20),
    ]
}

/// Write `items` as the inventory file inside `dir`
pub async fn write_inventory(dir: &TempDir, items: &[InventoryItem]) -> PathBuf {
    let path = dir.path().join("inventory.json");
    tokio::fs::write(&path, serde_json::to_vec(items).unwrap())
        .await
        .unwrap();
    path
}

/// Read the inventory file back
pub async fn read_inventory(path: &Path) -> Vec<InventoryItem> {
    let data = tokio::fs::read(path).await.unwrap();
    serde_json::from_slice(&data).unwrap()
}

/// Router over a store seeded with [`default_items`]
pub async fn create_test_app() -> (Router, Arc<InventoryStore>, TempDir) {
    create_test_app_with(&default_items()).await
}

pub async fn create_test_app_with(
    items: &[InventoryItem],
) -> (Router, Arc<InventoryStore>, TempDir) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = write_inventory(&temp_dir, items).await;

    let store = Arc::new(InventoryStore::open(path).await.unwrap());
    let state = AppState {
        store: Arc::clone(&store),
    };

    (server::router(state), store, temp_dir)
}

/// Collect a response body as a string
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
