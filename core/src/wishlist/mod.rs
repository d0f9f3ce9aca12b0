//! Wishlist state with injected persistence.
//!
//! The wishlist is an explicitly passed store object: callers construct it
//! with a [`WishlistStore`] adapter instead of the component reaching for
//! ambient browser storage. Persisted state that is missing or corrupt
//! degrades to an empty wishlist with a logged warning; it never fails
//! construction.

use std::path::PathBuf;

use crate::error::WishlistError;
use crate::types::ProductId;

/// Persistence seam for wishlist state.
pub trait WishlistStore: Send {
    fn load(&self) -> Result<Vec<ProductId>, WishlistError>;
    fn save(&self, ids: &[ProductId]) -> Result<(), WishlistError>;
}

/// JSON-file adapter: one array of product ids on disk.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WishlistStore for JsonFileStore {
    fn load(&self) -> Result<Vec<ProductId>, WishlistError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, ids: &[ProductId]) -> Result<(), WishlistError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string(ids)?)?;
        Ok(())
    }
}

/// Product ids the user has marked, persisted through the injected store.
pub struct Wishlist {
    ids: Vec<ProductId>,
    store: Box<dyn WishlistStore>,
}

impl Wishlist {
    /// Loads persisted state through the store.
    pub fn load(store: Box<dyn WishlistStore>) -> Self {
        let ids = match store.load() {
            Ok(ids) => ids,
            Err(err) => {
                tracing::warn!(error = %err, "failed to load wishlist, starting empty");
                Vec::new()
            }
        };
        Self { ids, store }
    }

    /// Adds the product if absent, removes it if present, and persists.
    /// Returns whether the product is in the wishlist afterwards.
    pub fn toggle(&mut self, id: ProductId) -> Result<bool, WishlistError> {
        match self.ids.iter().position(|&existing| existing == id) {
            Some(index) => {
                self.ids.remove(index);
            }
            None => self.ids.push(id),
        }
        self.store.save(&self.ids)?;
        Ok(self.contains(id))
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }
}
