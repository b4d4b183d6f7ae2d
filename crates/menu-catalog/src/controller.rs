//! Menu Catalog Controller
//!
//! Ties scope, categories, view state and mutators together for one mounted
//! catalog view. Loading is split in two: `load_catalog` does the awaiting,
//! `MenuCatalogController::apply_loaded` swaps the result in, so the UI can
//! hold the controller in a signal without borrowing it across an await.

use crate::cancel::CancelToken;
use crate::category::{is_special, merge_categories, CategoryEditor, ALL_CATEGORY};
use crate::config::CatalogConfig;
use crate::domain::{DomainResult, MenuItem, NavParams};
use crate::mutate::{ItemMutator, MutationOutcome};
use crate::resolve::{ScopeResolution, ScopeResolver};
use crate::store::{CatalogStore, CatalogWriter};
use crate::view::{CatalogSummary, CatalogViewState, VisiblePage};

/// Result of one navigation's fetches
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedCatalog {
    pub resolution: ScopeResolution,
    pub items: Vec<MenuItem>,
}

/// Resolve scope, then fetch the scope's items
pub async fn load_catalog<C: CatalogStore + ?Sized>(
    store: &C,
    params: NavParams,
    cancel: &CancelToken,
) -> DomainResult<LoadedCatalog> {
    let resolution = ScopeResolver::new(store).resolve(params, cancel).await?;

    let items = match resolution.scope() {
        Some(scope) => {
            cancel.check()?;
            match store.get_menu_items(scope).await {
                Ok(items) => items,
                Err(e) => {
                    log::warn!("failed to fetch menu items for {}: {}", scope.storage_key(), e);
                    Vec::new()
                }
            }
        }
        None => Vec::new(),
    };
    cancel.check()?;

    tracing::info!(items = items.len(), scope = ?resolution.scope(), "menu loaded");
    Ok(LoadedCatalog { resolution, items })
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuCatalogController {
    config: CatalogConfig,
    resolution: ScopeResolution,
    items: Vec<MenuItem>,
    /// Labels from the last committed category edit, kept even without items
    registry: Vec<String>,
    categories: Vec<String>,
    view: CatalogViewState,
    editor: Option<CategoryEditor>,
    /// Item whose category picker is open
    picking_category_for: Option<u32>,
}

impl MenuCatalogController {
    pub fn new(config: CatalogConfig) -> Self {
        let view = CatalogViewState::new(None, config.items_per_page);
        Self {
            config,
            resolution: ScopeResolution::default(),
            items: Vec::new(),
            registry: Vec::new(),
            categories: vec![ALL_CATEGORY.to_string()],
            view,
            editor: None,
            picking_category_for: None,
        }
    }

    pub fn apply_loaded(&mut self, loaded: LoadedCatalog) {
        self.view = CatalogViewState::new(loaded.resolution.scope(), self.config.items_per_page);
        self.resolution = loaded.resolution;
        self.editor = None;
        self.picking_category_for = None;
        self.registry.clear();
        self.replace_items(loaded.items);
    }

    fn replace_items(&mut self, items: Vec<MenuItem>) {
        self.items = items;
        self.categories = merge_categories(&self.registry, &self.items);
        self.view.items_changed();
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn resolution(&self) -> &ScopeResolution {
        &self.resolution
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Filter chips: `All`, the committed labels, then any other category in use
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Targets for reassigning one item
    pub fn assignable_categories(&self) -> Vec<String> {
        let mut options: Vec<String> = self.categories.iter().skip(1).cloned().collect();
        for special in crate::category::SPECIAL_CATEGORIES {
            if !options.iter().any(|c| c == special) {
                options.push(special.to_string());
            }
        }
        options
    }

    pub fn view(&self) -> &CatalogViewState {
        &self.view
    }

    pub fn visible(&self) -> VisiblePage {
        self.view.visible(&self.items)
    }

    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary::of(&self.items)
    }

    pub fn set_active_category(&mut self, category: &str) {
        self.view.set_active_category(category);
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.view.set_search_query(query);
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.view.go_to_page(page, &self.items)
    }

    // ========================
    // Item mutation
    // ========================

    pub fn toggle_status<W: CatalogWriter + ?Sized>(&mut self, writer: &W, item_id: u32) -> DomainResult<MutationOutcome> {
        let outcome = ItemMutator::new(writer, self.resolution.scope()).toggle_status(&mut self.items, item_id)?;
        if matches!(outcome, MutationOutcome::Saved(_)) {
            let items = std::mem::take(&mut self.items);
            self.replace_items(items);
        }
        Ok(outcome)
    }

    pub fn open_category_picker(&mut self, item_id: u32) {
        self.picking_category_for = Some(item_id);
    }

    pub fn close_category_picker(&mut self) {
        self.picking_category_for = None;
    }

    pub fn category_picker(&self) -> Option<u32> {
        self.picking_category_for
    }

    pub fn reassign_category<W: CatalogWriter + ?Sized>(
        &mut self,
        writer: &W,
        item_id: u32,
        category: &str,
    ) -> DomainResult<MutationOutcome> {
        self.picking_category_for = None;
        let outcome = ItemMutator::new(writer, self.resolution.scope())
            .reassign_category(&mut self.items, item_id, category)?;
        if matches!(outcome, MutationOutcome::Saved(_)) {
            let items = std::mem::take(&mut self.items);
            self.replace_items(items);
        }
        Ok(outcome)
    }

    // ========================
    // Category editing
    // ========================

    /// Editable categories exclude the special labels
    pub fn begin_category_edit(&mut self) -> &mut CategoryEditor {
        let editable = self.categories.iter().filter(|c| !is_special(c)).cloned().collect();
        self.editor.insert(CategoryEditor::new(editable))
    }

    pub fn editor(&self) -> Option<&CategoryEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut CategoryEditor> {
        self.editor.as_mut()
    }

    pub fn cancel_category_edit(&mut self) {
        if let Some(editor) = self.editor.as_mut() {
            editor.cancel();
        }
        self.editor = None;
    }

    /// Cascade the staged list into the items, persist, reset the filter
    ///
    /// The editor stays open when nothing could be saved.
    pub fn commit_category_edit<W: CatalogWriter + ?Sized>(&mut self, writer: &W) -> DomainResult<MutationOutcome> {
        let Some(editor) = self.editor.as_ref() else {
            return Ok(MutationOutcome::NotFound);
        };
        let mut committed = editor.clone();
        let updated = committed.commit(&self.items, &self.config.fallback_category);
        let outcome = ItemMutator::new(writer, self.resolution.scope()).replace_all(&updated)?;
        if matches!(outcome, MutationOutcome::Saved(_)) {
            self.editor = None;
            self.registry = committed.committed().to_vec();
            self.replace_items(updated);
            self.view.reset_category();
        }
        Ok(outcome)
    }
}
