use super::InventoryItem;
use crate::{Error, Result};
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Owns the authoritative item sequence and mirrors it to a JSON file.
///
/// Every read and mutation goes through one lock, and a mutation keeps the
/// lock until its save has finished, so file writes never interleave.
pub struct InventoryStore {
    path: PathBuf,
    items: Mutex<Vec<InventoryItem>>,
}

/// Position of the first item carrying `id`.
pub fn find_index(items: &[InventoryItem], id: &str) -> Option<usize> {
    items.iter().position(|item| item.id == id)
}

impl InventoryStore {
    /// Opens the store, loading whatever the file at `path` holds.
    ///
    /// A missing or unreadable file yields an empty inventory. A file that
    /// exists but does not hold a JSON array of items is an error.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let items = Self::load(&path).await?;
        info!(
            "Loaded {} inventory items from {}",
            items.len(),
            path.display()
        );

        Ok(Self {
            path,
            items: Mutex::new(items),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(path: &Path) -> Result<Vec<InventoryItem>> {
        let data = match tokio::fs::read(path).await {
            Ok(data) => data,
            Err(e) => {
                warn!(
                    "Could not load inventory from {}, starting with an empty list: {}",
                    path.display(),
                    e
                );
                return Ok(Vec::new());
            }
        };

        let items: Option<Vec<InventoryItem>> = serde_json::from_slice(&data)
            .map_err(|e| Error::storage(path, format!("malformed inventory file: {e}")))?;

        Ok(items.unwrap_or_default())
    }

    /// Writes the current sequence to disk.
    pub async fn save(&self) -> Result<()> {
        let items = self.items.lock().await;
        self.write_file(&items).await
    }

    async fn write_file(&self, items: &[InventoryItem]) -> Result<()> {
        let data = serde_json::to_vec(items).map_err(|e| Error::storage(&self.path, e))?;

        let tmp_path = tmp_path_for(&self.path);
        tokio::fs::write(&tmp_path, &data)
            .await
            .map_err(|e| Error::storage(&tmp_path, e))?;

        if let Err(e) = tokio::fs::rename(&tmp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(Error::storage(&self.path, e));
        }

        debug!(
            "Saved {} inventory items to {}",
            items.len(),
            self.path.display()
        );
        Ok(())
    }

    pub async fn list(&self) -> Vec<InventoryItem> {
        self.items.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.items.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.lock().await.is_empty()
    }

    /// Appends `item` unless its id is taken.
    ///
    /// If the save fails the item stays in memory; the returned storage
    /// error tells the caller that disk is now behind.
    pub async fn create(&self, item: InventoryItem) -> Result<InventoryItem> {
        let mut items = self.items.lock().await;
        if find_index(&items, &item.id).is_some() {
            return Err(Error::conflict(item.id));
        }

        items.push(item.clone());
        self.write_file(&items).await?;
        Ok(item)
    }

    /// Replaces the first item with `id` by `item`, keeping its position.
    ///
    /// `item.id` is stored as given, so an update may rename. A rename onto
    /// an id held by another item is rejected.
    pub async fn update(&self, id: &str, item: InventoryItem) -> Result<InventoryItem> {
        let mut items = self.items.lock().await;
        let index = find_index(&items, id).ok_or_else(|| Error::not_found(id))?;

        if item.id != id {
            if find_index(&items, &item.id).is_some() {
                return Err(Error::conflict(item.id));
            }
            info!("Renaming inventory item {} to {}", id, item.id);
        }

        items[index] = item.clone();
        self.write_file(&items).await?;
        Ok(item)
    }

    /// Removes the first item with `id`.
    pub async fn delete(&self, id: &str) -> Result<InventoryItem> {
        let mut items = self.items.lock().await;
        let index = find_index(&items, id).ok_or_else(|| Error::not_found(id))?;

        let removed = items.remove(index);
        self.write_file(&items).await?;
        Ok(removed)
    }
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
