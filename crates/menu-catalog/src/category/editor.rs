//! Category Editor
//!
//! Staging copy of the category list. Nothing touches the items until
//! `commit`; `cancel` throws the staged edits away. Renames are remembered
//! against the label each item had when editing began.

use crate::domain::{DomainError, DomainResult, MenuItem};
use super::{is_sentinel, rename_categories, suggest, update_categories, Suggestion, ALL_CATEGORY};

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryEditor {
    committed: Vec<String>,
    staging: Vec<String>,
    input: String,
    /// (label before editing, current label)
    renames: Vec<(String, String)>,
}

impl CategoryEditor {
    pub fn new(committed: Vec<String>) -> Self {
        let mut committed = committed;
        if !committed.first().is_some_and(|c| c == ALL_CATEGORY) {
            committed.retain(|c| !is_sentinel(c));
            committed.insert(0, ALL_CATEGORY.to_string());
        }
        Self { staging: committed.clone(), committed, input: String::new(), renames: Vec::new() }
    }

    pub fn committed(&self) -> &[String] {
        &self.committed
    }

    pub fn staging(&self) -> &[String] {
        &self.staging
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn is_dirty(&self) -> bool {
        self.staging != self.committed
    }

    fn contains(&self, label: &str) -> bool {
        self.staging.iter().any(|c| c.eq_ignore_ascii_case(label))
    }

    /// Stage a new label; blank and duplicate labels are rejected
    pub fn add(&mut self, label: &str) -> DomainResult<()> {
        let label = label.trim();
        if label.is_empty() {
            return Err(DomainError::InvalidInput("category name is empty".to_string()));
        }
        if self.contains(label) {
            return Err(DomainError::InvalidInput(format!("category '{}' already exists", label)));
        }
        self.staging.push(label.to_string());
        Ok(())
    }

    /// Stage the current input and clear it on success
    pub fn add_input(&mut self) -> DomainResult<()> {
        let input = std::mem::take(&mut self.input);
        match self.add(&input) {
            Ok(()) => Ok(()),
            Err(e) => {
                self.input = input;
                Err(e)
            }
        }
    }

    /// Remove by exact label; the sentinel stays
    pub fn remove(&mut self, label: &str) -> bool {
        if label == ALL_CATEGORY {
            return false;
        }
        let before = self.staging.len();
        self.staging.retain(|c| c != label);
        self.renames.retain(|(_, to)| to != label);
        self.staging.len() != before
    }

    /// Rename a staged label in place
    ///
    /// On commit, items carrying the old label follow it to the new one.
    pub fn rename(&mut self, old: &str, new: &str) -> DomainResult<()> {
        if is_sentinel(old) {
            return Err(DomainError::InvalidInput(format!("'{}' cannot be renamed", ALL_CATEGORY)));
        }
        let Some(pos) = self.staging.iter().position(|c| c == old) else {
            return Err(DomainError::InvalidInput(format!("category '{}' is not staged", old)));
        };
        let new = new.trim();
        if new.is_empty() {
            return Err(DomainError::InvalidInput("category name is empty".to_string()));
        }
        if new == old {
            return Ok(());
        }
        let taken = self
            .staging
            .iter()
            .enumerate()
            .any(|(i, c)| i != pos && c.eq_ignore_ascii_case(new));
        if taken {
            return Err(DomainError::InvalidInput(format!("category '{}' already exists", new)));
        }

        self.staging[pos] = new.to_string();
        match self.renames.iter_mut().find(|(_, to)| to == old) {
            Some(entry) => entry.1 = new.to_string(),
            None => self.renames.push((old.to_string(), new.to_string())),
        }
        Ok(())
    }

    pub fn suggestions(&self) -> Vec<Suggestion> {
        suggest(&self.input, &self.staging)
    }

    /// Returns false when the label was already staged
    pub fn select_suggestion(&mut self, label: &str) -> bool {
        let added = self.add(label).is_ok();
        self.input.clear();
        added
    }

    /// Apply the staged list to the items and make it the committed list
    pub fn commit(&mut self, items: &[MenuItem], fallback: &str) -> Vec<MenuItem> {
        let renamed = rename_categories(items, &self.renames);
        let updated = update_categories(&renamed, &self.staging, fallback);
        self.committed = self.staging.clone();
        self.renames.clear();
        self.input.clear();
        updated
    }

    pub fn cancel(&mut self) {
        self.staging = self.committed.clone();
        self.renames.clear();
        self.input.clear();
    }
}
