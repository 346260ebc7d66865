use super::views;
use crate::{
    Error, Result,
    inventory::{InventoryItem, InventoryStore},
};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header::ACCEPT},
    response::{Html, IntoResponse, Json, Redirect, Response},
};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<InventoryStore>,
}

impl AppState {
    pub fn new(store: InventoryStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Decodes an item body regardless of the declared content type.
fn parse_item(body: &[u8]) -> Result<InventoryItem> {
    serde_json::from_slice(body).map_err(|e| Error::bad_request(e.to_string()))
}

fn wants_html(headers: &HeaderMap) -> bool {
    headers
        .get(ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

pub async fn home() -> Html<String> {
    Html(views::home_page())
}

pub async fn add_item_form() -> Html<String> {
    Html(views::add_item_page())
}

pub async fn list_inventory(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let items = state.store.list().await;
    debug!("Listing {} inventory items", items.len());

    if wants_html(&headers) {
        Html(views::inventory_page(&items)).into_response()
    } else {
        Json(items).into_response()
    }
}

pub async fn create_item(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<InventoryItem>> {
    let item = parse_item(&body)?;
    info!("Received create request for item: {}", item.id);

    let created = state.store.create(item).await?;
    Ok(Json(created))
}

pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<InventoryItem>> {
    let item = parse_item(&body)?;
    info!("Received update request for item: {}", id);

    let updated = state.store.update(&id, item).await?;
    Ok(Json(updated))
}

/// Form-driven variant of [`update_item`] that sends the browser back to the
/// inventory page.
pub async fn update_item_redirect(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Redirect> {
    let item = parse_item(&body)?;
    info!("Received update request for item: {}", id);

    state.store.update(&id, item).await?;
    Ok(Redirect::to("/inventory"))
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    info!("Received delete request for item: {}", id);

    state.store.delete(&id).await?;
    Ok(StatusCode::OK)
}
