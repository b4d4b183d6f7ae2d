//! Demo Data Seeding
//!
//! Explicit startup routine that fills empty storage with demo restaurants,
//! branches and menus. Keys that already hold data are left alone.

use serde::Serialize;

use crate::domain::{Branch, DomainResult, ItemStatus, MenuItem, Price, Restaurant, ViewScope};
use super::key_value::{KeyValueStorage, BRANCHES_KEY, RESTAURANTS_KEY};

/// Which keys a seeding run wrote
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

pub fn seed_demo_data<S: KeyValueStorage>(storage: &S) -> DomainResult<SeedReport> {
    let mut report = SeedReport::default();

    seed_key(storage, RESTAURANTS_KEY, &demo_restaurants(), &mut report)?;
    seed_key(storage, BRANCHES_KEY, &demo_branches(), &mut report)?;
    for (scope, items) in demo_menus() {
        seed_key(storage, &scope.storage_key(), &items, &mut report)?;
    }

    log::info!(
        "demo data seeded: {} written, {} already present",
        report.written.len(),
        report.skipped.len()
    );
    Ok(report)
}

fn seed_key<S: KeyValueStorage, T: Serialize>(
    storage: &S,
    key: &str,
    values: &[T],
    report: &mut SeedReport,
) -> DomainResult<()> {
    if storage.has_item(key)? {
        report.skipped.push(key.to_string());
        return Ok(());
    }
    storage.set_item(key, &serde_json::to_string(values)?)?;
    report.written.push(key.to_string());
    Ok(())
}

fn demo_restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant { id: 1, name: "Golden Fork".to_string(), cuisine: Some("Italian".to_string()) },
        Restaurant { id: 2, name: "Spice Route".to_string(), cuisine: Some("Indian".to_string()) },
    ]
}

fn demo_branches() -> Vec<Branch> {
    let branch = |id, restaurant_id, name: &str, address: &str| Branch {
        id,
        restaurant_id,
        name: name.to_string(),
        address: Some(address.to_string()),
    };
    vec![
        branch(1, 1, "Downtown", "12 Market Street"),
        branch(2, 1, "Riverside", "4 Quay Road"),
        branch(3, 2, "Old Town", "88 Bazaar Lane"),
    ]
}

fn item(id: u32, title: &str, description: &str, cents: i64, category: &str) -> MenuItem {
    MenuItem::new(id, title, category, Price::from_minor(cents)).with_description(description)
}

fn demo_menus() -> Vec<(ViewScope, Vec<MenuItem>)> {
    let golden_fork = vec![
        item(1, "Bruschetta", "Grilled bread with tomato and basil", 750, "Appetizers"),
        item(2, "Calamari Fritti", "Crispy squid with lemon aioli", 1150, "Appetizers"),
        item(3, "Margherita Pizza", "San Marzano tomato, mozzarella, basil", 1400, "Mains"),
        item(4, "Tagliatelle Ragu", "Slow-cooked beef ragu", 1650, "Mains"),
        item(5, "Risotto ai Funghi", "Porcini and parmesan", 1550, "Mains"),
        item(6, "Tiramisu", "Mascarpone, espresso, cocoa", 800, "Desserts"),
        item(7, "Chocolate Cake", "Dark chocolate layer cake", 850, "Desserts"),
        item(8, "Panna Cotta", "Vanilla cream with berry coulis", 700, "Desserts")
            .with_status(ItemStatus::Inactive),
        item(9, "Lunch for Two", "Two mains and a shared dessert", 3200, "Deals"),
        item(10, "Chef's Tasting", "Seven courses, members only", 6500, "Exclusive Offers"),
    ];

    let riverside = vec![
        item(1, "Arancini", "Saffron rice balls with mozzarella", 800, "Appetizers"),
        item(2, "Seafood Linguine", "Clams, mussels, prawns", 1900, "Mains"),
        item(3, "Affogato", "Espresso over vanilla gelato", 600, "Desserts"),
        item(4, "Aperol Spritz", "Aperol, prosecco, soda", 950, "Drinks"),
    ];

    let spice_route = vec![
        item(1, "Samosa", "Spiced potato and pea pastry", 550, "Appetizers"),
        item(2, "Butter Chicken", "Tomato and cream curry", 1500, "Mains"),
        item(3, "Chana Masala", "Chickpea curry, vegan", 1200, "Mains"),
        item(4, "Gulab Jamun", "Milk dumplings in rose syrup", 600, "Desserts"),
        item(5, "Mango Lassi", "Yogurt and mango", 450, "Drinks"),
        item(6, "Thali Deal", "Three curries, rice, naan", 1800, "Deals"),
    ];

    vec![
        (ViewScope::Restaurant { restaurant_id: 1 }, golden_fork.clone()),
        (ViewScope::Branch { branch_id: 1 }, golden_fork),
        (ViewScope::Branch { branch_id: 2 }, riverside),
        (ViewScope::Restaurant { restaurant_id: 2 }, spice_route.clone()),
        (ViewScope::Branch { branch_id: 3 }, spice_route),
    ]
}
