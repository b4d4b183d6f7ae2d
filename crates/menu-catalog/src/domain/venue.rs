//! Restaurant and Branch Entities
//!
//! Read-only from the catalog's point of view.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
}

/// A physical location owned by exactly one restaurant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id: u32,
    pub restaurant_id: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Entity for Restaurant {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

impl Entity for Branch {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}
