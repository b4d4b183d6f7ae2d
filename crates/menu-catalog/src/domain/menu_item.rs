//! Menu Item Entity
//!
//! A dish or drink on a branch or restaurant menu.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use super::entity::{DomainError, DomainResult, Entity};

/// Whether an item is currently offered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Active,
    Inactive,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Active => "active",
            ItemStatus::Inactive => "inactive",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ItemStatus::Active => ItemStatus::Inactive,
            ItemStatus::Inactive => ItemStatus::Active,
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, ItemStatus::Active)
    }
}

/// Currency amount in minor units (cents)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(i64);

impl Price {
    pub fn from_minor(cents: i64) -> Self {
        Price(cents)
    }

    pub fn minor_units(&self) -> i64 {
        self.0
    }

    /// Parse a display string such as `$12.99`, `12.9` or `8`
    pub fn parse(text: &str) -> DomainResult<Self> {
        let invalid = || DomainError::InvalidInput(format!("price '{}'", text));
        let trimmed = text.trim();
        let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();
        let (whole, frac) = match trimmed.split_once('.') {
            Some((w, f)) => (w, f),
            None => (trimmed, ""),
        };
        if whole.is_empty() || frac.len() > 2 {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let whole: i64 = whole.parse().map_err(|_| invalid())?;
        let frac: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };
        whole
            .checked_mul(100)
            .and_then(|v| v.checked_add(frac))
            .map(Price)
            .ok_or_else(invalid)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0)
    }
}

// Stored menus may carry cents, a decimal amount, or the display string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Minor(i64),
    Decimal(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawPrice::deserialize(deserializer)? {
            RawPrice::Minor(cents) => Ok(Price(cents)),
            RawPrice::Decimal(amount) => Ok(Price((amount * 100.0).round() as i64)),
            RawPrice::Text(text) => Price::parse(&text).map_err(serde::de::Error::custom),
        }
    }
}

/// A menu item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Unique within a scope
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: Price,
    pub category: String,
    #[serde(default)]
    pub status: ItemStatus,
    /// Display asset reference, never interpreted here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_url: Option<String>,
}

impl MenuItem {
    pub fn new(id: u32, title: impl Into<String>, category: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            price,
            category: category.into(),
            status: ItemStatus::Active,
            model_url: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }
}

impl Entity for MenuItem {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}
