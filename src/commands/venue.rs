//! Venue Commands
//!
//! Restaurants and branches for the landing page.

use menu_catalog::store::CatalogStore;
use menu_catalog::{Branch, Restaurant};
use super::catalog_store;

pub async fn list_restaurants() -> Result<Vec<Restaurant>, String> {
    catalog_store().list_restaurants().await.map_err(|e| e.to_string())
}

pub async fn list_branches(restaurant_id: u32) -> Result<Vec<Branch>, String> {
    catalog_store().get_all_branches(restaurant_id).await.map_err(|e| e.to_string())
}

/// Every restaurant with its branches, in collection order
pub async fn list_venues() -> Result<Vec<(Restaurant, Vec<Branch>)>, String> {
    let restaurants = list_restaurants().await?;
    let mut venues = Vec::with_capacity(restaurants.len());
    for restaurant in restaurants {
        let branches = list_branches(restaurant.id).await?;
        venues.push((restaurant, branches));
    }
    Ok(venues)
}
