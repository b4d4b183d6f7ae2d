//! Scope Resolution
//!
//! Turns route parameters into the branch/restaurant context of a catalog
//! view. Lookups run one after another; a failed lookup only blanks its own
//! entity.

use crate::cancel::CancelToken;
use crate::domain::{Branch, DomainError, DomainResult, NavParams, Restaurant, ViewScope};
use crate::store::CatalogStore;

/// Resolved context for one navigation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScopeResolution {
    pub params: NavParams,
    pub restaurant: Option<Restaurant>,
    pub branch: Option<Branch>,
    /// Candidate branches (restaurant view only)
    pub branches: Vec<Branch>,
    pub selected_branch_id: Option<u32>,
}

impl ScopeResolution {
    pub fn scope(&self) -> Option<ViewScope> {
        self.params.scope()
    }

    pub fn is_branch_view(&self) -> bool {
        self.params.is_branch_view()
    }

    pub fn is_restaurant_view(&self) -> bool {
        self.params.is_restaurant_view()
    }

    /// The entity the view is named after never resolved
    pub fn is_not_found(&self) -> bool {
        match self.scope() {
            Some(ViewScope::Branch { .. }) => self.branch.is_none(),
            Some(ViewScope::Restaurant { .. }) => self.restaurant.is_none(),
            None => true,
        }
    }

    pub fn title(&self) -> String {
        match self.scope() {
            Some(scope) => scope.title(
                self.restaurant.as_ref().map(|r| r.name.as_str()),
                self.branch.as_ref().map(|b| b.name.as_str()),
            ),
            None => "Menu".to_string(),
        }
    }

    pub fn back_link(&self) -> String {
        match self.scope() {
            Some(scope) => scope.back_link(self.restaurant.as_ref().map(|r| r.id)),
            None => "#/".to_string(),
        }
    }
}

/// Log and swallow recoverable lookup failures
fn recover<T>(what: &str, id: u32, result: DomainResult<Option<T>>) -> DomainResult<Option<T>> {
    match result {
        Ok(Some(found)) => Ok(Some(found)),
        Ok(None) => {
            log::warn!("{} {} not found", what, id);
            Ok(None)
        }
        Err(DomainError::Cancelled) => Err(DomainError::Cancelled),
        Err(e) if e.is_recoverable() => {
            log::warn!("failed to fetch {} {}: {}", what, id, e);
            Ok(None)
        }
        // Unreadable storage still renders as "missing", but louder
        Err(e) => {
            log::error!("{} {} unreadable: {}", what, id, e);
            Ok(None)
        }
    }
}

pub struct ScopeResolver<'a, C: CatalogStore + ?Sized> {
    store: &'a C,
}

impl<'a, C: CatalogStore + ?Sized> ScopeResolver<'a, C> {
    pub fn new(store: &'a C) -> Self {
        Self { store }
    }

    /// Only fails with `DomainError::Cancelled`
    pub async fn resolve(&self, params: NavParams, cancel: &CancelToken) -> DomainResult<ScopeResolution> {
        let mut resolution = ScopeResolution { params, ..Default::default() };

        match params.scope() {
            Some(ViewScope::Branch { branch_id }) => {
                self.resolve_branch(branch_id, &mut resolution, cancel).await?;
            }
            Some(ViewScope::Restaurant { restaurant_id }) => {
                cancel.check()?;
                let restaurant = self.store.get_restaurant_by_id(restaurant_id).await;
                resolution.restaurant = recover("restaurant", restaurant_id, restaurant)?;

                cancel.check()?;
                resolution.branches = match self.store.get_all_branches(restaurant_id).await {
                    Ok(branches) => branches,
                    Err(e) => {
                        log::warn!("failed to list branches of restaurant {}: {}", restaurant_id, e);
                        Vec::new()
                    }
                };

                // Explicit pick if it belongs to this restaurant, else first branch
                let selected = params
                    .selected_branch_id
                    .filter(|id| resolution.branches.iter().any(|b| b.id == *id))
                    .or_else(|| resolution.branches.first().map(|b| b.id));

                if let Some(branch_id) = selected {
                    cancel.check()?;
                    let branch = self.store.get_branch_by_id(branch_id).await;
                    resolution.branch = recover("branch", branch_id, branch)?;
                    resolution.selected_branch_id = Some(branch_id);
                }
            }
            None => log::warn!("catalog view opened without restaurant or branch id"),
        }

        cancel.check()?;
        log::debug!(
            "resolved scope {:?}: restaurant={:?} branch={:?} branches={}",
            resolution.scope(),
            resolution.restaurant.as_ref().map(|r| r.id),
            resolution.branch.as_ref().map(|b| b.id),
            resolution.branches.len()
        );
        Ok(resolution)
    }

    async fn resolve_branch(
        &self,
        branch_id: u32,
        resolution: &mut ScopeResolution,
        cancel: &CancelToken,
    ) -> DomainResult<()> {
        cancel.check()?;
        let branch = self.store.get_branch_by_id(branch_id).await;
        resolution.branch = recover("branch", branch_id, branch)?;
        resolution.selected_branch_id = resolution.branch.as_ref().map(|b| b.id);

        if let Some(restaurant_id) = resolution.branch.as_ref().map(|b| b.restaurant_id) {
            cancel.check()?;
            let restaurant = self.store.get_restaurant_by_id(restaurant_id).await;
            resolution.restaurant = recover("restaurant", restaurant_id, restaurant)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MenuItem;
    use crate::store::{seed_demo_data, KeyValueCatalog, MemoryStorage};
    use async_trait::async_trait;

    fn seeded() -> KeyValueCatalog<MemoryStorage> {
        let storage = MemoryStorage::new();
        seed_demo_data(&storage).unwrap();
        KeyValueCatalog::new(storage)
    }

    /// Store whose restaurant lookup always fails
    struct FlakyRestaurants(KeyValueCatalog<MemoryStorage>);

    #[async_trait(?Send)]
    impl CatalogStore for FlakyRestaurants {
        async fn get_branch_by_id(&self, id: u32) -> DomainResult<Option<Branch>> {
            self.0.get_branch_by_id(id).await
        }
        async fn get_restaurant_by_id(&self, _id: u32) -> DomainResult<Option<Restaurant>> {
            Err(DomainError::FetchFailed("service unavailable".to_string()))
        }
        async fn get_all_branches(&self, restaurant_id: u32) -> DomainResult<Vec<Branch>> {
            self.0.get_all_branches(restaurant_id).await
        }
        async fn get_menu_items(&self, scope: ViewScope) -> DomainResult<Vec<MenuItem>> {
            self.0.get_menu_items(scope).await
        }
        async fn list_restaurants(&self) -> DomainResult<Vec<Restaurant>> {
            self.0.list_restaurants().await
        }
    }

    #[tokio::test]
    async fn test_branch_view_resolves_parent_restaurant() {
        let store = seeded();
        let res = ScopeResolver::new(&store).resolve(NavParams::branch(2), &CancelToken::new()).await.unwrap();

        assert!(res.is_branch_view());
        assert_eq!(res.branch.as_ref().unwrap().name, "Riverside");
        assert_eq!(res.restaurant.as_ref().unwrap().id, 1);
        assert_eq!(res.selected_branch_id, Some(2));
        assert!(res.branches.is_empty());
        assert_eq!(res.back_link(), "#/restaurant/1/menu");
    }

    #[tokio::test]
    async fn test_restaurant_view_defaults_to_first_branch() {
        let store = seeded();
        let res = ScopeResolver::new(&store).resolve(NavParams::restaurant(1), &CancelToken::new()).await.unwrap();

        assert!(res.is_restaurant_view());
        assert_eq!(res.branches.len(), 2);
        assert_eq!(res.selected_branch_id, Some(1));
        assert_eq!(res.branch.as_ref().unwrap().id, 1);
        assert!(!res.is_not_found());
    }

    #[tokio::test]
    async fn test_restaurant_view_honours_picked_branch() {
        let store = seeded();
        let params = NavParams::restaurant(1).with_selected_branch(Some(2));
        let res = ScopeResolver::new(&store).resolve(params, &CancelToken::new()).await.unwrap();
        assert_eq!(res.selected_branch_id, Some(2));

        // A branch of another restaurant falls back to the first one
        let params = NavParams::restaurant(1).with_selected_branch(Some(3));
        let res = ScopeResolver::new(&store).resolve(params, &CancelToken::new()).await.unwrap();
        assert_eq!(res.selected_branch_id, Some(1));
    }

    #[tokio::test]
    async fn test_missing_branch_is_not_found() {
        let store = seeded();
        let res = ScopeResolver::new(&store).resolve(NavParams::branch(42), &CancelToken::new()).await.unwrap();
        assert!(res.branch.is_none());
        assert!(res.restaurant.is_none());
        assert!(res.is_not_found());
    }

    #[tokio::test]
    async fn test_restaurant_failure_keeps_branch() {
        let store = FlakyRestaurants(seeded());
        let res = ScopeResolver::new(&store).resolve(NavParams::branch(3), &CancelToken::new()).await.unwrap();
        assert_eq!(res.branch.as_ref().unwrap().id, 3);
        assert!(res.restaurant.is_none());
        assert!(!res.is_not_found());
    }

    #[tokio::test]
    async fn test_cancelled_resolution() {
        let store = seeded();
        let cancel = CancelToken::new();
        cancel.cancel();
        let err = ScopeResolver::new(&store).resolve(NavParams::restaurant(1), &cancel).await.unwrap_err();
        assert_eq!(err, DomainError::Cancelled);
    }

    #[test]
    fn test_recover_blanks_every_failure_but_cancellation() {
        assert!(DomainError::FetchFailed("timeout".to_string()).is_recoverable());
        assert!(!DomainError::Serialization("bad json".to_string()).is_recoverable());

        let corrupt: DomainResult<Option<Branch>> = Err(DomainError::Serialization("bad json".to_string()));
        assert_eq!(recover("branch", 1, corrupt), Ok(None));
        let missing: DomainResult<Option<Branch>> = Err(DomainError::not_found("branch", 1));
        assert_eq!(recover("branch", 1, missing), Ok(None));
        let cancelled: DomainResult<Option<Branch>> = Err(DomainError::Cancelled);
        assert_eq!(recover("branch", 1, cancelled), Err(DomainError::Cancelled));
    }
}
