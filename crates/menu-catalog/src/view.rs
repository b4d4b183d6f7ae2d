//! Filter / Paginate Engine
//!
//! Pure view computation over an item collection plus the small state
//! machine that owns the active category, search text and page.

use crate::category::{is_sentinel, ALL_FILTER};
use crate::domain::{MenuItem, ViewScope};

/// One page of the filtered collection
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VisiblePage {
    pub page_items: Vec<MenuItem>,
    pub total_pages: usize,
    pub filtered_count: usize,
}

fn matches_category(item: &MenuItem, active_category: &str) -> bool {
    is_sentinel(active_category) || item.category.to_lowercase() == active_category.to_lowercase()
}

fn matches_search(item: &MenuItem, needle: &str) -> bool {
    needle.is_empty()
        || item.title.to_lowercase().contains(needle)
        || item.description.to_lowercase().contains(needle)
        || item.category.to_lowercase().contains(needle)
}

/// Items passing both filters, in source order
pub fn filter_items<'a>(items: &'a [MenuItem], active_category: &str, search_query: &str) -> Vec<&'a MenuItem> {
    let needle = search_query.to_lowercase();
    items
        .iter()
        .filter(|item| matches_category(item, active_category))
        .filter(|item| matches_search(item, &needle))
        .collect()
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Filter then slice page `page` (1-indexed)
///
/// A page past the end yields no items rather than an error.
pub fn compute_visible(
    items: &[MenuItem],
    active_category: &str,
    search_query: &str,
    page: usize,
    page_size: usize,
) -> VisiblePage {
    let page_size = page_size.max(1);
    let filtered = filter_items(items, active_category, search_query);
    let start = page.saturating_sub(1).saturating_mul(page_size);

    VisiblePage {
        total_pages: total_pages(filtered.len(), page_size),
        filtered_count: filtered.len(),
        page_items: filtered.into_iter().skip(start).take(page_size).cloned().collect(),
    }
}

/// Active/inactive tally for the view header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogSummary {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

impl CatalogSummary {
    pub fn of(items: &[MenuItem]) -> Self {
        let active = items.iter().filter(|i| i.status.is_active()).count();
        Self { total: items.len(), active, inactive: items.len() - active }
    }
}

/// Per-mount view state
///
/// Every setter that changes what is filtered resets the page first, so a
/// recomputation never sees a stale page number.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogViewState {
    pub scope: Option<ViewScope>,
    active_category: String,
    search_query: String,
    current_page: usize,
    items_per_page: usize,
}

impl CatalogViewState {
    pub fn new(scope: Option<ViewScope>, items_per_page: usize) -> Self {
        Self {
            scope,
            active_category: ALL_FILTER.to_string(),
            search_query: String::new(),
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Stored lower-cased; `All` becomes the `all` sentinel
    pub fn set_active_category(&mut self, category: &str) {
        self.active_category = category.to_lowercase();
        self.current_page = 1;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.current_page = 1;
    }

    /// The item collection was replaced or mutated
    pub fn items_changed(&mut self) {
        self.current_page = 1;
    }

    pub fn reset_category(&mut self) {
        self.set_active_category(ALL_FILTER);
    }

    /// Move to `page` if it exists for `items`; out-of-range pages are ignored
    pub fn go_to_page(&mut self, page: usize, items: &[MenuItem]) -> bool {
        let pages = total_pages(
            filter_items(items, &self.active_category, &self.search_query).len(),
            self.items_per_page,
        );
        if page >= 1 && page <= pages {
            self.current_page = page;
            true
        } else {
            false
        }
    }

    pub fn visible(&self, items: &[MenuItem]) -> VisiblePage {
        compute_visible(items, &self.active_category, &self.search_query, self.current_page, self.items_per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ItemStatus, Price};

    fn make_item(id: u32, title: &str, description: &str, category: &str) -> MenuItem {
        MenuItem::new(id, title, category, Price::from_minor(500)).with_description(description)
    }

    fn many(n: u32) -> Vec<MenuItem> {
        (1..=n).map(|i| make_item(i, &format!("Dish {}", i), "", if i % 2 == 0 { "Mains" } else { "Sides" })).collect()
    }

    #[test]
    fn test_search_matches_title_only_cake() {
        let items = vec![
            make_item(1, "Chocolate Cake", "Rich", "Desserts"),
            make_item(2, "Vanilla Pudding", "Creamy", "Desserts"),
        ];
        for category in ["all", "desserts"] {
            let page = compute_visible(&items, category, "cake", 1, 6);
            assert_eq!(page.page_items.len(), 1);
            assert_eq!(page.page_items[0].id, 1);
        }
    }

    #[test]
    fn test_search_keeps_surrounding_whitespace() {
        let items = vec![
            make_item(1, "Chocolate Cake", "", "Desserts"),
            make_item(2, "Cakewalk", "", "Desserts"),
        ];
        let ids = |query: &str| filter_items(&items, "all", query).iter().map(|i| i.id).collect::<Vec<_>>();
        assert_eq!(ids(" cake"), vec![1]);
        assert_eq!(ids(" "), vec![1]);
        assert_eq!(ids(""), vec![1, 2]);
    }

    #[test]
    fn test_search_covers_description_and_category() {
        let items = vec![
            make_item(1, "Soup", "with CAKE crumbs", "Starters"),
            make_item(2, "Wine", "", "Drinks"),
            make_item(3, "Bread", "", "Starters"),
        ];
        assert_eq!(compute_visible(&items, "all", "cake", 1, 6).filtered_count, 1);
        assert_eq!(compute_visible(&items, "all", "drink", 1, 6).page_items[0].id, 2);
    }

    #[test]
    fn test_category_filter_case_insensitive() {
        let items = many(6);
        let page = compute_visible(&items, "mains", "", 1, 6);
        assert_eq!(page.page_items.iter().map(|i| i.id).collect::<Vec<_>>(), vec![2, 4, 6]);
        assert_eq!(compute_visible(&items, "All", "", 1, 6).filtered_count, 6);
    }

    #[test]
    fn test_pagination_and_out_of_range() {
        let items = many(13);
        let first = compute_visible(&items, "all", "", 1, 6);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.page_items.len(), 6);

        let last = compute_visible(&items, "all", "", 3, 6);
        assert_eq!(last.page_items.len(), 1);
        assert_eq!(last.page_items[0].id, 13);

        let beyond = compute_visible(&items, "all", "", 4, 6);
        assert!(beyond.page_items.is_empty());
        assert_eq!(beyond.total_pages, 3);

        assert_eq!(compute_visible(&[], "all", "", 1, 6).total_pages, 0);
    }

    #[test]
    fn test_compute_visible_idempotent() {
        let items = many(10);
        let a = compute_visible(&items, "sides", "dish", 2, 3);
        let b = compute_visible(&items, "sides", "dish", 2, 3);
        assert_eq!(a, b);
    }

    #[test]
    fn test_filters_reset_page() {
        let items = many(20);
        let mut state = CatalogViewState::new(None, 6);
        assert!(state.go_to_page(3, &items));
        state.set_search_query("dish");
        assert_eq!(state.current_page(), 1);

        assert!(state.go_to_page(2, &items));
        state.set_active_category("Mains");
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.active_category(), "mains");

        assert!(state.go_to_page(2, &items));
        state.items_changed();
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_go_to_page_rejects_out_of_range() {
        let items = many(7);
        let mut state = CatalogViewState::new(None, 6);
        assert!(!state.go_to_page(0, &items));
        assert!(!state.go_to_page(3, &items));
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_summary_counts() {
        let items = vec![
            make_item(1, "A", "", "Mains"),
            make_item(2, "B", "", "Mains").with_status(ItemStatus::Inactive),
        ];
        assert_eq!(CatalogSummary::of(&items), CatalogSummary { total: 2, active: 1, inactive: 1 });
    }
}
