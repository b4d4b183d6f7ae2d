//! Catalog Store Integration Tests
//!
//! Tests for KeyValueCatalog with in-memory storage.

#[cfg(test)]
mod tests {
    use crate::domain::{Branch, ItemStatus, MenuItem, Price, ViewScope};
    use crate::store::{
        seed_demo_data, CatalogStore, CatalogWriter, KeyValueCatalog, KeyValueStorage, MemoryStorage,
        BRANCHES_KEY, RESTAURANTS_KEY,
    };

    fn setup_seeded() -> KeyValueCatalog<MemoryStorage> {
        let storage = MemoryStorage::new();
        seed_demo_data(&storage).expect("Failed to seed");
        KeyValueCatalog::new(storage)
    }

    #[tokio::test]
    async fn test_find_branch_and_restaurant() {
        let catalog = setup_seeded();

        let branch = catalog.get_branch_by_id(2).await.expect("Find failed");
        assert_eq!(branch.as_ref().map(|b| b.name.as_str()), Some("Riverside"));

        let restaurant = catalog.get_restaurant_by_id(branch.unwrap().restaurant_id).await.unwrap();
        assert_eq!(restaurant.unwrap().name, "Golden Fork");
    }

    #[tokio::test]
    async fn test_missing_entities_are_none() {
        let catalog = setup_seeded();
        assert!(catalog.get_branch_by_id(99).await.unwrap().is_none());
        assert!(catalog.get_restaurant_by_id(99).await.unwrap().is_none());
        assert!(catalog.get_all_branches(99).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_branches_keep_collection_order() {
        let catalog = setup_seeded();
        let ids: Vec<u32> = catalog.get_all_branches(1).await.unwrap().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_write_then_read_scope_collection() {
        let catalog = KeyValueCatalog::new(MemoryStorage::new());
        let scope = ViewScope::Branch { branch_id: 5 };
        let items = vec![
            MenuItem::new(1, "Soup", "Starters", Price::from_minor(500)),
            MenuItem::new(2, "Stew", "Mains", Price::from_minor(1200)).with_status(ItemStatus::Inactive),
        ];

        catalog.set_menu_items(scope, &items).expect("Write failed");

        assert!(catalog.storage().has_item("branch_menu_5").unwrap());
        let loaded = catalog.get_menu_items(scope).await.unwrap();
        assert_eq!(loaded, items);
        // Other scope untouched
        assert!(catalog.get_menu_items(ViewScope::Restaurant { restaurant_id: 5 }).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_collection_is_serialization_error() {
        let storage = MemoryStorage::new();
        storage.set_item(BRANCHES_KEY, "{not json").unwrap();
        let catalog = KeyValueCatalog::new(storage);

        let err = catalog.get_branch_by_id(1).await.unwrap_err();
        assert!(matches!(err, crate::domain::DomainError::Serialization(_)));
    }

    #[test]
    fn test_seed_is_idempotent_and_preserves_existing() {
        let storage = MemoryStorage::new();
        let custom = vec![Branch { id: 9, restaurant_id: 1, name: "Pop-up".to_string(), address: None }];
        storage.set_item(BRANCHES_KEY, &serde_json::to_string(&custom).unwrap()).unwrap();

        let first = seed_demo_data(&storage).unwrap();
        assert!(first.skipped.contains(&BRANCHES_KEY.to_string()));
        assert!(first.written.contains(&RESTAURANTS_KEY.to_string()));

        let second = seed_demo_data(&storage).unwrap();
        assert!(second.written.is_empty());

        let branches: Vec<Branch> = serde_json::from_str(&storage.get_item(BRANCHES_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(branches, custom);
    }
}
