//! View Scope
//!
//! Which collection a catalog view is bound to.

use serde::{Deserialize, Serialize};

/// Route parameters handed to the catalog view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavParams {
    pub restaurant_id: Option<u32>,
    pub branch_id: Option<u32>,
    /// Branch picked inside a restaurant view
    pub selected_branch_id: Option<u32>,
}

impl NavParams {
    pub fn branch(branch_id: u32) -> Self {
        Self { branch_id: Some(branch_id), ..Default::default() }
    }

    pub fn restaurant(restaurant_id: u32) -> Self {
        Self { restaurant_id: Some(restaurant_id), ..Default::default() }
    }

    pub fn with_selected_branch(mut self, branch_id: Option<u32>) -> Self {
        self.selected_branch_id = branch_id;
        self
    }

    /// Branch id wins when both are present
    pub fn scope(&self) -> Option<ViewScope> {
        match (self.branch_id, self.restaurant_id) {
            (Some(branch_id), _) => Some(ViewScope::Branch { branch_id }),
            (None, Some(restaurant_id)) => Some(ViewScope::Restaurant { restaurant_id }),
            (None, None) => None,
        }
    }

    pub fn is_branch_view(&self) -> bool {
        matches!(self.scope(), Some(ViewScope::Branch { .. }))
    }

    pub fn is_restaurant_view(&self) -> bool {
        matches!(self.scope(), Some(ViewScope::Restaurant { .. }))
    }
}

/// Mutually exclusive catalog scopes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ViewScope {
    Branch { branch_id: u32 },
    Restaurant { restaurant_id: u32 },
}

impl ViewScope {
    /// Local storage key holding the scope's item collection
    pub fn storage_key(&self) -> String {
        match self {
            ViewScope::Branch { branch_id } => format!("branch_menu_{}", branch_id),
            ViewScope::Restaurant { restaurant_id } => format!("restaurant_menu_{}", restaurant_id),
        }
    }

    /// Hash route the view's back link points to
    pub fn back_link(&self, restaurant_id: Option<u32>) -> String {
        match (self, restaurant_id) {
            (ViewScope::Branch { .. }, Some(id)) => format!("#/restaurant/{}/menu", id),
            (ViewScope::Branch { .. }, None) => "#/".to_string(),
            (ViewScope::Restaurant { .. }, _) => "#/".to_string(),
        }
    }

    pub fn title(&self, restaurant: Option<&str>, branch: Option<&str>) -> String {
        match self {
            ViewScope::Branch { .. } => match (branch, restaurant) {
                (Some(b), Some(r)) => format!("{} · {} Menu", r, b),
                (Some(b), None) => format!("{} Menu", b),
                _ => "Branch Menu".to_string(),
            },
            ViewScope::Restaurant { .. } => match restaurant {
                Some(r) => format!("{} Menu", r),
                None => "Restaurant Menu".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_takes_precedence() {
        let params = NavParams { restaurant_id: Some(1), branch_id: Some(7), selected_branch_id: None };
        assert_eq!(params.scope(), Some(ViewScope::Branch { branch_id: 7 }));
        assert!(params.is_branch_view());
        assert!(!params.is_restaurant_view());
    }

    #[test]
    fn test_storage_keys() {
        assert_eq!(ViewScope::Branch { branch_id: 4 }.storage_key(), "branch_menu_4");
        assert_eq!(ViewScope::Restaurant { restaurant_id: 2 }.storage_key(), "restaurant_menu_2");
        assert_eq!(NavParams::default().scope(), None);
    }
}
