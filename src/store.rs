//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use menu_catalog::{Branch, Restaurant};

/// Landing page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All restaurants
    pub restaurants: Vec<Restaurant>,
    /// All branches, grouped by restaurant in collection order
    pub branches: Vec<Branch>,
    /// Venues have been fetched at least once
    pub loaded: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace restaurants and branches after a fetch
pub fn store_set_venues(store: &AppStore, venues: Vec<(Restaurant, Vec<Branch>)>) {
    let mut restaurants = Vec::with_capacity(venues.len());
    let mut branches = Vec::new();
    for (restaurant, owned) in venues {
        restaurants.push(restaurant);
        branches.extend(owned);
    }
    *store.restaurants().write() = restaurants;
    *store.branches().write() = branches;
    *store.loaded().write() = true;
}

/// Branches of one restaurant
pub fn store_branches_of(store: &AppStore, restaurant_id: u32) -> Vec<Branch> {
    store
        .branches()
        .read()
        .iter()
        .filter(|b| b.restaurant_id == restaurant_id)
        .cloned()
        .collect()
}
