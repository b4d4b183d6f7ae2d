//! Catalog Configuration
//!
//! Tunables read once at startup. Every field has a default so a partial
//! JSON document is enough.

use serde::{Deserialize, Serialize};
use crate::domain::{DomainError, DomainResult};

pub const DEFAULT_ITEMS_PER_PAGE: usize = 6;
pub const DEFAULT_FALLBACK_CATEGORY: &str = "Uncategorized";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogConfig {
    /// Page size of the item grid
    pub items_per_page: usize,
    /// Category used when a category edit leaves nothing else to fall back to
    pub fallback_category: String,
    /// Write demo restaurants, branches and menus into empty storage
    pub seed_demo_data: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            fallback_category: DEFAULT_FALLBACK_CATEGORY.to_string(),
            seed_demo_data: true,
        }
    }
}

impl CatalogConfig {
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let config: CatalogConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.items_per_page == 0 {
            return Err(DomainError::InvalidInput("itemsPerPage must be at least 1".to_string()));
        }
        if self.fallback_category.trim().is_empty() {
            return Err(DomainError::InvalidInput("fallbackCategory must not be blank".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = CatalogConfig::from_json(r#"{"itemsPerPage": 9}"#).unwrap();
        assert_eq!(config.items_per_page, 9);
        assert_eq!(config.fallback_category, "Uncategorized");
        assert!(config.seed_demo_data);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = CatalogConfig::from_json(r#"{"itemsPerPage": 0}"#).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }
}
