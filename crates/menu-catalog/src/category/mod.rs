//! Category Registry
//!
//! Category labels are not persisted on their own: the set is derived from
//! the items, merged with whatever labels the editor last committed, and
//! editing it rewrites the items.

mod editor;
mod suggestions;

use crate::domain::MenuItem;

pub use editor::CategoryEditor;
pub use suggestions::{suggest, Suggestion, SuggestionGroup, MAX_SUGGESTIONS};

/// Sentinel label meaning "no category filter"
pub const ALL_CATEGORY: &str = "All";
/// Lower-cased sentinel used as the active filter value
pub const ALL_FILTER: &str = "all";
/// Labels exempt from cascade reassignment
pub const SPECIAL_CATEGORIES: [&str; 2] = ["Deals", "Exclusive Offers"];

pub fn is_special(label: &str) -> bool {
    SPECIAL_CATEGORIES.contains(&label)
}

pub fn is_sentinel(label: &str) -> bool {
    label.eq_ignore_ascii_case(ALL_CATEGORY)
}

/// `"All"` followed by each distinct item category in first-seen order
pub fn derive_categories(items: &[MenuItem]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORY.to_string()];
    for item in items {
        if !categories.iter().any(|c| c == &item.category) {
            categories.push(item.category.clone());
        }
    }
    categories
}

/// `"All"`, then the registry labels in order, then item categories the
/// registry does not name yet
pub fn merge_categories(registry: &[String], items: &[MenuItem]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORY.to_string()];
    let derived = derive_categories(items);
    for label in registry.iter().chain(derived.iter().skip(1)) {
        if !is_sentinel(label) && !categories.iter().any(|c| c == label) {
            categories.push(label.clone());
        }
    }
    categories
}

/// Rewrite item categories through `(from, to)` pairs
///
/// `from` is matched against the label the item had before any rename, so
/// chained or swapped renames resolve in one pass.
pub fn rename_categories(items: &[MenuItem], renames: &[(String, String)]) -> Vec<MenuItem> {
    items
        .iter()
        .map(|item| match renames.iter().find(|(from, _)| from == &item.category) {
            Some((from, to)) if from != to => {
                log::debug!("item {} renamed from '{}' to '{}'", item.id, from, to);
                MenuItem { category: to.clone(), ..item.clone() }
            }
            _ => item.clone(),
        })
        .collect()
}

/// First real category of the list, or the fallback
pub fn default_category(categories: &[String], fallback: &str) -> String {
    categories
        .iter()
        .find(|c| !is_sentinel(c))
        .cloned()
        .unwrap_or_else(|| fallback.to_string())
}

/// Reassign items whose category left the list
///
/// Special categories stay put even when absent from `categories`.
pub fn update_categories(items: &[MenuItem], categories: &[String], fallback: &str) -> Vec<MenuItem> {
    let default = default_category(categories, fallback);
    items
        .iter()
        .map(|item| {
            let valid = categories.iter().any(|c| c == &item.category) || is_special(&item.category);
            if valid {
                item.clone()
            } else {
                log::debug!("item {} moved from '{}' to '{}'", item.id, item.category, default);
                MenuItem { category: default.clone(), ..item.clone() }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Price;

    fn make_item(id: u32, category: &str) -> MenuItem {
        MenuItem::new(id, format!("Item {}", id), category, Price::from_minor(100))
    }

    fn labels(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_derive_categories_first_seen_unique() {
        let items = vec![
            make_item(1, "Mains"),
            make_item(2, "Desserts"),
            make_item(3, "Mains"),
            make_item(4, "Deals"),
        ];
        assert_eq!(derive_categories(&items), labels(&["All", "Mains", "Desserts", "Deals"]));
        assert_eq!(derive_categories(&[]), labels(&["All"]));
    }

    #[test]
    fn test_update_reassigns_removed_category() {
        let items = vec![make_item(1, "Appetizers"), make_item(2, "Appetizers"), make_item(3, "Deals")];
        let updated = update_categories(&items, &labels(&["All", "Mains"]), "Uncategorized");

        assert_eq!(updated[0].category, "Mains");
        assert_eq!(updated[1].category, "Mains");
        assert_eq!(updated[2].category, "Deals");
    }

    #[test]
    fn test_special_categories_survive_removal() {
        let items = vec![make_item(1, "Exclusive Offers"), make_item(2, "Desserts")];
        let updated = update_categories(&items, &labels(&["All", "Desserts"]), "Uncategorized");
        assert_eq!(updated[0].category, "Exclusive Offers");
        assert_eq!(updated[1].category, "Desserts");
    }

    #[test]
    fn test_empty_list_uses_fallback() {
        let items = vec![make_item(1, "Soups")];
        let updated = update_categories(&items, &labels(&["All"]), "Uncategorized");
        assert_eq!(updated[0].category, "Uncategorized");
        assert_eq!(default_category(&[], "Other"), "Other");
    }

    #[test]
    fn test_update_keeps_order_and_other_fields() {
        let items = vec![make_item(5, "Old"), make_item(2, "Kept")];
        let updated = update_categories(&items, &labels(&["All", "Kept"]), "Uncategorized");
        assert_eq!(updated.iter().map(|i| i.id).collect::<Vec<_>>(), vec![5, 2]);
        assert_eq!(updated[0].title, "Item 5");
        assert_eq!(updated[0].category, "Kept");
    }

    #[test]
    fn test_merge_keeps_registry_labels_without_items() {
        let items = vec![make_item(1, "Mains"), make_item(2, "Deals")];
        let merged = merge_categories(&labels(&["All", "Mains", "Soups"]), &items);
        assert_eq!(merged, labels(&["All", "Mains", "Soups", "Deals"]));
        assert_eq!(merge_categories(&[], &items), derive_categories(&items));
    }

    #[test]
    fn test_rename_resolves_swaps_in_one_pass() {
        let items = vec![make_item(1, "Starters"), make_item(2, "Mains"), make_item(3, "Deals")];
        let renames = vec![
            ("Starters".to_string(), "Mains".to_string()),
            ("Mains".to_string(), "Starters".to_string()),
        ];
        let updated = rename_categories(&items, &renames);
        assert_eq!(updated[0].category, "Mains");
        assert_eq!(updated[1].category, "Starters");
        assert_eq!(updated[2].category, "Deals");
    }
}
