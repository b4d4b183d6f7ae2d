//! Domain Layer - Core Entity Trait
//!
//! Basic contract for catalog entities plus the shared error type.

use serde::{Deserialize, Serialize};

/// Core trait for all catalog entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Display;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for catalog operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Catalog-level errors
///
/// `NotFound` and `FetchFailed` are the two recoverable kinds; the resolver
/// logs and swallows them per entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomainError {
    NotFound(String),
    FetchFailed(String),
    Storage(String),
    Serialization(String),
    InvalidInput(String),
    Cancelled,
}

impl DomainError {
    pub fn not_found(kind: &str, id: impl std::fmt::Display) -> Self {
        DomainError::NotFound(format!("{} {}", kind, id))
    }

    /// True for the errors the view treats as "entity missing"
    pub fn is_recoverable(&self) -> bool {
        matches!(self, DomainError::NotFound(_) | DomainError::FetchFailed(_))
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::FetchFailed(msg) => write!(f, "Fetch failed: {}", msg),
            DomainError::Storage(msg) => write!(f, "Storage error: {}", msg),
            DomainError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Serialization(e.to_string())
    }
}
