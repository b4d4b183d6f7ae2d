//! Item Mutators
//!
//! Single-item edits that write the whole scope collection back. Last write
//! wins; there is no check against other writers. The caller's items only
//! change once the write has gone through.

use crate::domain::{DomainResult, MenuItem, ViewScope};
use crate::store::CatalogWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Item changed and collection written under the scope key
    Saved(ViewScope),
    /// No scope to write to; nothing changed
    NoScope,
    /// No item with that id; nothing changed
    NotFound,
}

/// Flip active/inactive on the matching item
pub fn toggle_status(items: &mut [MenuItem], item_id: u32) -> bool {
    match items.iter_mut().find(|item| item.id == item_id) {
        Some(item) => {
            item.status = item.status.toggled();
            true
        }
        None => false,
    }
}

pub fn reassign_category(items: &mut [MenuItem], item_id: u32, category: &str) -> bool {
    match items.iter_mut().find(|item| item.id == item_id) {
        Some(item) => {
            item.category = category.to_string();
            true
        }
        None => false,
    }
}

/// Write-through wrapper binding a writer to the view's scope
pub struct ItemMutator<'a, W: CatalogWriter + ?Sized> {
    writer: &'a W,
    scope: Option<ViewScope>,
}

impl<'a, W: CatalogWriter + ?Sized> ItemMutator<'a, W> {
    pub fn new(writer: &'a W, scope: Option<ViewScope>) -> Self {
        Self { writer, scope }
    }

    pub fn toggle_status(&self, items: &mut [MenuItem], item_id: u32) -> DomainResult<MutationOutcome> {
        self.apply(items, |items| toggle_status(items, item_id))
    }

    pub fn reassign_category(
        &self,
        items: &mut [MenuItem],
        item_id: u32,
        category: &str,
    ) -> DomainResult<MutationOutcome> {
        self.apply(items, |items| reassign_category(items, item_id, category))
    }

    /// Persist a collection rewritten elsewhere (category edits)
    pub fn replace_all(&self, items: &[MenuItem]) -> DomainResult<MutationOutcome> {
        let Some(scope) = self.scope else {
            log::warn!("category edit not saved: view has no scope");
            return Ok(MutationOutcome::NoScope);
        };
        self.writer.set_menu_items(scope, items)?;
        tracing::info!(key = %scope.storage_key(), items = items.len(), "menu saved");
        Ok(MutationOutcome::Saved(scope))
    }

    fn apply(
        &self,
        items: &mut [MenuItem],
        edit: impl FnOnce(&mut [MenuItem]) -> bool,
    ) -> DomainResult<MutationOutcome> {
        let Some(scope) = self.scope else {
            log::warn!("item edit ignored: view has no scope");
            return Ok(MutationOutcome::NoScope);
        };
        let mut next = items.to_vec();
        if !edit(next.as_mut_slice()) {
            return Ok(MutationOutcome::NotFound);
        }
        self.writer.set_menu_items(scope, &next)?;
        tracing::info!(key = %scope.storage_key(), items = next.len(), "menu saved");
        items.clone_from_slice(&next);
        Ok(MutationOutcome::Saved(scope))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, ItemStatus, Price};
    use crate::store::{CatalogStore, KeyValueCatalog, KeyValueStorage, MemoryStorage};
    use log::LevelFilter;
    use rolling_logger::{LoggerConfig, NullSink, RollingLogger};
    use tracing_subscriber::layer::SubscriberExt;

    struct FailingWriter;

    impl CatalogWriter for FailingWriter {
        fn set_menu_items(&self, _scope: ViewScope, _items: &[MenuItem]) -> DomainResult<()> {
            Err(DomainError::Storage("quota exceeded".to_string()))
        }
    }

    fn scenario_items() -> Vec<MenuItem> {
        vec![
            MenuItem::new(1, "Soup", "Appetizers", Price::from_minor(500)),
            MenuItem::new(2, "Pie", "Desserts", Price::from_minor(600)).with_status(ItemStatus::Inactive),
        ]
    }

    #[tokio::test]
    async fn test_toggle_writes_branch_key() {
        let catalog = KeyValueCatalog::new(MemoryStorage::new());
        let scope = ViewScope::Branch { branch_id: 3 };
        let mut items = scenario_items();

        let outcome = ItemMutator::new(&catalog, Some(scope)).toggle_status(&mut items, 2).unwrap();

        assert_eq!(outcome, MutationOutcome::Saved(scope));
        assert_eq!(items[1].status, ItemStatus::Active);
        assert_eq!(items[0], scenario_items()[0]);
        assert_eq!(catalog.storage().keys(), vec!["branch_menu_3".to_string()]);
        assert_eq!(catalog.get_menu_items(scope).await.unwrap(), items);
    }

    #[test]
    fn test_reassign_writes_restaurant_key() {
        let catalog = KeyValueCatalog::new(MemoryStorage::new());
        let scope = ViewScope::Restaurant { restaurant_id: 8 };
        let mut items = scenario_items();

        let outcome = ItemMutator::new(&catalog, Some(scope)).reassign_category(&mut items, 1, "Mains").unwrap();

        assert_eq!(outcome, MutationOutcome::Saved(scope));
        assert_eq!(items[0].category, "Mains");
        assert_eq!(items[1].category, "Desserts");
        assert!(catalog.storage().has_item("restaurant_menu_8").unwrap());
    }

    #[test]
    fn test_no_scope_is_noop() {
        let catalog = KeyValueCatalog::new(MemoryStorage::new());
        let mut items = scenario_items();

        let outcome = ItemMutator::new(&catalog, None).toggle_status(&mut items, 1).unwrap();

        assert_eq!(outcome, MutationOutcome::NoScope);
        assert_eq!(items, scenario_items());
        assert!(catalog.storage().keys().is_empty());
    }

    #[test]
    fn test_unknown_item_not_written() {
        let catalog = KeyValueCatalog::new(MemoryStorage::new());
        let mut items = scenario_items();
        let outcome = ItemMutator::new(&catalog, Some(ViewScope::Branch { branch_id: 1 }))
            .toggle_status(&mut items, 99)
            .unwrap();
        assert_eq!(outcome, MutationOutcome::NotFound);
        assert!(catalog.storage().keys().is_empty());
    }

    #[test]
    fn test_failed_write_leaves_items_untouched() {
        let mutator = ItemMutator::new(&FailingWriter, Some(ViewScope::Branch { branch_id: 1 }));
        let mut items = scenario_items();

        assert!(matches!(mutator.toggle_status(&mut items, 1), Err(DomainError::Storage(_))));
        assert!(mutator.reassign_category(&mut items, 2, "Mains").is_err());
        assert_eq!(items, scenario_items());
    }

    #[test]
    fn test_saves_are_recorded_in_log_ring() {
        let ring = RollingLogger::new(LoggerConfig { capacity: 10, level: LevelFilter::Info }, Box::new(NullSink));
        let subscriber = tracing_subscriber::registry().with(ring.layer());
        let catalog = KeyValueCatalog::new(MemoryStorage::new());
        let mut items = scenario_items();

        tracing::subscriber::with_default(subscriber, || {
            ItemMutator::new(&catalog, Some(ViewScope::Branch { branch_id: 3 }))
                .toggle_status(&mut items, 1)
                .unwrap();
            ItemMutator::new(&catalog, None).replace_all(&items).unwrap();
        });

        let lines = ring.snapshot();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].message, "menu saved key=branch_menu_3 items=2");
        assert_eq!(lines[0].target, "menu_catalog::mutate");
    }
}
