use axum::http::StatusCode;
use axum_test::TestServer;
use inventory_service::{
    inventory::{InventoryItem, InventoryStore},
    server::{self, handlers::AppState},
};
use pretty_assertions::assert_eq;
use serde_json::json;

mod common;

use common::test_utils::{create_test_app, default_items, read_inventory, write_inventory};

#[tokio::test]
async fn test_create_then_delete_scenario() {
    let (app, store, _temp_dir) = create_test_app().await;
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/inventory")
        .json(&json!({
            "id": "3",
            "name": "New Item",
            "description": "d",
            "quantity": 20
        }))
        .await;
    response.assert_status_ok();
    assert_eq!(store.len().await, 3);

    server.delete("/inventory/1").await.assert_status_ok();

    let ids: Vec<String> = server
        .get("/inventory")
        .await
        .json::<Vec<InventoryItem>>()
        .into_iter()
        .map(|item| item.id)
        .collect();
    assert_eq!(ids, vec!["2".to_string(), "3".to_string()]);

    server
        .delete("/inventory/1")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn test_create_then_list_contains_item() {
    let (app, _store, _temp_dir) = create_test_app().await;
    let server = TestServer::new(app).unwrap();

    let item = InventoryItem::new("fresh", "", "", -1);
    server.post("/inventory").json(&item).await.assert_status_ok();

    let listed = server.get("/inventory").await.json::<Vec<InventoryItem>>();
    assert_eq!(listed.iter().filter(|listed| **listed == item).count(), 1);
    assert_eq!(listed.len(), default_items().len() + 1);
}

#[tokio::test]
async fn test_changes_survive_restart() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = write_inventory(&temp_dir, &default_items()).await;

    {
        let store = InventoryStore::open(&path).await.unwrap();
        let server = TestServer::new(server::router(AppState::new(store))).unwrap();

        server
            .put("/inventory/2")
            .json(&InventoryItem::new("2", "Restocked", "Back in stock", 200))
            .await
            .assert_status_ok();
        server.delete("/inventory/1").await.assert_status_ok();
    }

    let expected = vec![InventoryItem::new("2", "Restocked", "Back in stock", 200)];
    assert_eq!(read_inventory(&path).await, expected);

    let reopened = InventoryStore::open(&path).await.unwrap();
    let server = TestServer::new(server::router(AppState::new(reopened))).unwrap();
    let listed = server.get("/inventory").await.json::<Vec<InventoryItem>>();
    assert_eq!(listed, expected);
}

#[tokio::test]
async fn test_startup_refuses_malformed_inventory_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("inventory.json");
    tokio::fs::write(&path, r#"[{"id":"1","name":"Widget""#)
        .await
        .unwrap();

    let result = InventoryStore::open(&path).await;
    assert!(matches!(
        result,
        Err(inventory_service::Error::Storage { .. })
    ));
}

#[tokio::test]
async fn test_startup_without_inventory_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("inventory.json");

    let store = InventoryStore::open(&path).await.unwrap();
    let server = TestServer::new(server::router(AppState::new(store))).unwrap();

    assert_eq!(
        server.get("/inventory").await.json::<Vec<InventoryItem>>(),
        Vec::<InventoryItem>::new()
    );

    // The first successful mutation creates the file.
    server
        .post("/inventory")
        .json(&InventoryItem::new("1", "Widget", "A widget", 10))
        .await
        .assert_status_ok();
    assert_eq!(
        read_inventory(&path).await,
        vec![InventoryItem::new("1", "Widget", "A widget", 10)]
    );
}
