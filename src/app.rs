//! Menu Catalog Frontend App
//!
//! Root component: context, global store and hash routing.

use leptos::prelude::*;
use menu_catalog::{CatalogConfig, NavParams};
use reactive_stores::Store;

use crate::components::{DiagnosticsPanel, MenuCatalogView, NoticeBanner, NotFound, RestaurantList};
use crate::context::AppContext;
use crate::route::{use_route, Route};
use crate::store::AppState;

/// Which top-level page the route maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Home,
    Catalog,
    Diagnostics,
    Missing,
}

#[component]
pub fn App(config: CatalogConfig) -> impl IntoView {
    let reload_trigger = signal(0u32);
    let notice = signal::<Option<String>>(None);

    // Provide context to all children
    provide_context(AppContext::new(reload_trigger, notice, config));
    provide_context(Store::new(AppState::default()));

    let route = use_route();
    let page = Memo::new(move |_| match route.get() {
        Route::Home => Page::Home,
        Route::Catalog(_) => Page::Catalog,
        Route::Diagnostics => Page::Diagnostics,
        Route::NotFound => Page::Missing,
    });
    let catalog_params = Memo::new(move |_| match route.get() {
        Route::Catalog(params) => params,
        _ => NavParams::default(),
    });

    view! {
        <div class="app-layout">
            <nav class="top-bar">
                <a class="brand" href="#/">"Menu Manager"</a>
                <a class="nav-link" href=Route::Diagnostics.href()>"Diagnostics"</a>
            </nav>

            <NoticeBanner />

            <main class="main-content">
                // Catalog -> catalog navigation keeps the view mounted and re-resolves
                {move || match page.get() {
                    Page::Home => view! { <RestaurantList /> }.into_any(),
                    Page::Catalog => view! { <MenuCatalogView params=catalog_params /> }.into_any(),
                    Page::Diagnostics => view! { <DiagnosticsPanel /> }.into_any(),
                    Page::Missing => view! { <NotFound what="Page" back_href="#/" /> }.into_any(),
                }}
            </main>
        </div>
    }
}
