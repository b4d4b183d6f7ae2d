//! Menu Catalog View
//!
//! One mounted catalog: resolves scope for the current route, loads the
//! scope's items and wires filters, paging and edits to the controller.
//! Each navigation gets its own cancel token; a newer navigation or
//! unmounting cancels the previous load so its results are dropped.

use leptos::prelude::*;
use leptos::task::spawn_local;
use menu_catalog::mutate::MutationOutcome;
use menu_catalog::{CancelToken, MenuCatalogController, NavParams};

use crate::commands;
use crate::components::{
    CatalogHeader, CategoryBar, CategoryEditorPanel, MenuItemCard, NotFound, Pagination, SearchBox,
};
use crate::context::use_app_context;

#[component]
pub fn MenuCatalogView(#[prop(into)] params: Signal<NavParams>) -> impl IntoView {
    let ctx = use_app_context();
    let controller = RwSignal::new(MenuCatalogController::new(ctx.config()));
    let (loading, set_loading) = signal(true);
    let active_load = StoredValue::new(None::<CancelToken>);

    // Resolve scope, then fetch items, whenever the route params change
    Effect::new(move |_| {
        let nav = params.get();
        let cancel = CancelToken::new();
        active_load.update_value(|slot| {
            if let Some(previous) = slot.replace(cancel.clone()) {
                previous.cancel();
            }
        });
        set_loading.set(true);
        log::debug!("[CATALOG] loading {:?}", nav);

        spawn_local(async move {
            match commands::load_menu(nav, &cancel).await {
                Ok(Some(loaded)) => {
                    controller.update(|c| c.apply_loaded(loaded));
                    set_loading.set(false);
                }
                Ok(None) => log::debug!("[CATALOG] dropped cancelled load {:?}", nav),
                Err(e) => {
                    ctx.notify(format!("Could not load menu: {}", e));
                    set_loading.set(false);
                }
            }
        });
    });

    on_cleanup(move || {
        active_load.try_with_value(|slot| {
            if let Some(token) = slot {
                token.cancel();
            }
        });
    });

    let report = move |result: Option<Result<MutationOutcome, String>>, action: &str| match result {
        Some(Ok(MutationOutcome::Saved(scope))) => log::debug!("[CATALOG] {} saved to {}", action, scope.storage_key()),
        Some(Ok(outcome)) => log::warn!("[CATALOG] {} not applied: {:?}", action, outcome),
        Some(Err(e)) => ctx.notify(format!("Could not {}: {}", action, e)),
        None => {}
    };

    let on_toggle = move |id: u32| {
        report(controller.try_update(|c| commands::toggle_item_status(c, id)), "update status");
    };
    let on_reassign = move |(id, category): (u32, String)| {
        report(controller.try_update(|c| commands::set_item_category(c, id, &category)), "change category");
    };
    let on_select_category = move |label: String| controller.update(|c| c.set_active_category(&label));
    let on_search = move |query: String| controller.update(|c| c.set_search_query(query));
    let on_page = move |page: usize| {
        controller.update(|c| {
            c.go_to_page(page);
        });
    };
    let on_edit = move |_: ()| {
        controller.update(|c| {
            c.begin_category_edit();
        });
    };

    let visible = Memo::new(move |_| controller.with(|c| c.visible()));
    let categories = Signal::derive(move || controller.with(|c| c.categories().to_vec()));
    let active_category = Signal::derive(move || controller.with(|c| c.view().active_category().to_string()));
    let search_query = Signal::derive(move || controller.with(|c| c.view().search_query().to_string()));
    let current_page = Signal::derive(move || controller.with(|c| c.view().current_page()));
    let total_pages = Signal::derive(move || visible.with(|v| v.total_pages));
    let editing = move || controller.with(|c| c.editor().is_some());

    let not_found = move || controller.with(|c| {
        let resolution = c.resolution();
        resolution.is_not_found().then(|| {
            let what = if resolution.is_branch_view() { "Branch" } else { "Restaurant" };
            (what.to_string(), resolution.back_link())
        })
    });

    view! {
        <section class="menu-catalog">
            {move || {
                if loading.get() {
                    return view! { <p class="loading">"Loading menu..."</p> }.into_any();
                }
                if let Some((what, back_href)) = not_found() {
                    return view! { <NotFound what=what back_href=back_href /> }.into_any();
                }
                view! {
                    <div class="catalog-layout">
                        <div class="catalog-main">
                            <CatalogHeader controller=controller />
                            <SearchBox query=search_query on_change=on_search />
                            <CategoryBar
                                categories=categories
                                active=active_category
                                on_select=on_select_category
                                on_edit=on_edit
                            />

                            <Show
                                when=move || visible.with(|v| !v.page_items.is_empty())
                                fallback=|| view! { <p class="empty">"No items match."</p> }
                            >
                                <div class="menu-grid">
                                    <For
                                        each=move || visible.get().page_items
                                        key=|item| (item.id, item.category.clone(), item.status)
                                        children=move |item| view! {
                                            <MenuItemCard
                                                item=item
                                                controller=controller
                                                on_toggle=on_toggle
                                                on_reassign=on_reassign
                                            />
                                        }
                                    />
                                </div>
                            </Show>

                            <p class="result-count">
                                {move || format!("{} matching items", visible.with(|v| v.filtered_count))}
                            </p>
                            <Pagination current_page=current_page total_pages=total_pages on_page=on_page />
                        </div>

                        <Show when=editing>
                            <CategoryEditorPanel controller=controller />
                        </Show>
                    </div>
                }.into_any()
            }}
        </section>
    }
}
