//! Key-Value Catalog
//!
//! Catalog store over a string key-value storage (browser local storage in
//! the app, an in-memory map in tests). Collections are JSON arrays.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::{Branch, DomainResult, Entity, MenuItem, Restaurant, ViewScope};
use super::{CatalogStore, CatalogWriter};

pub const RESTAURANTS_KEY: &str = "restaurants";
pub const BRANCHES_KEY: &str = "branches";

/// Minimal string storage, shaped after the Web Storage API
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> DomainResult<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()>;

    fn has_item(&self, key: &str) -> DomainResult<bool> {
        Ok(self.get_item(key)?.is_some())
    }
}

/// In-memory storage; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Catalog backed by any `KeyValueStorage`
#[derive(Debug, Clone, Copy)]
pub struct KeyValueCatalog<S: KeyValueStorage> {
    storage: S,
}

impl<S: KeyValueStorage> KeyValueCatalog<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Missing key reads as an empty collection
    pub fn read_collection<T: DeserializeOwned>(&self, key: &str) -> DomainResult<Vec<T>> {
        match self.storage.get_item(key)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    pub fn write_collection<T: Serialize>(&self, key: &str, values: &[T]) -> DomainResult<()> {
        let json = serde_json::to_string(values)?;
        self.storage.set_item(key, &json)
    }

    fn find_in<T: Entity + DeserializeOwned>(&self, key: &str, id: T::Id) -> DomainResult<Option<T>> {
        Ok(self
            .read_collection::<T>(key)?
            .into_iter()
            .find(|entity| entity.id() == id))
    }
}

#[async_trait(?Send)]
impl<S: KeyValueStorage> CatalogStore for KeyValueCatalog<S> {
    async fn get_branch_by_id(&self, id: u32) -> DomainResult<Option<Branch>> {
        self.find_in(BRANCHES_KEY, id)
    }

    async fn get_restaurant_by_id(&self, id: u32) -> DomainResult<Option<Restaurant>> {
        self.find_in(RESTAURANTS_KEY, id)
    }

    async fn get_all_branches(&self, restaurant_id: u32) -> DomainResult<Vec<Branch>> {
        let mut branches = self.read_collection::<Branch>(BRANCHES_KEY)?;
        branches.retain(|b| b.restaurant_id == restaurant_id);
        Ok(branches)
    }

    async fn get_menu_items(&self, scope: ViewScope) -> DomainResult<Vec<MenuItem>> {
        self.read_collection(&scope.storage_key())
    }

    async fn list_restaurants(&self) -> DomainResult<Vec<Restaurant>> {
        self.read_collection(RESTAURANTS_KEY)
    }
}

impl<S: KeyValueStorage> CatalogWriter for KeyValueCatalog<S> {
    fn set_menu_items(&self, scope: ViewScope, items: &[MenuItem]) -> DomainResult<()> {
        let key = scope.storage_key();
        log::debug!("writing {} items to {}", items.len(), key);
        self.write_collection(&key, items)
    }
}
