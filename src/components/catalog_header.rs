//! Catalog Header
//!
//! Title, back link, item counts and (restaurant view) the branch picker.

use leptos::prelude::*;
use menu_catalog::{MenuCatalogController, NavParams};

use crate::route::{navigate, Route};
use crate::storage::UiPrefs;

#[component]
pub fn CatalogHeader(controller: RwSignal<MenuCatalogController>) -> impl IntoView {
    let title = move || controller.with(|c| c.resolution().title());
    let back_link = move || controller.with(|c| c.resolution().back_link());
    let summary = move || controller.with(|c| c.summary());
    let is_restaurant_view = move || controller.with(|c| c.resolution().is_restaurant_view());

    let on_branch_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        let Ok(branch_id) = value.parse::<u32>() else {
            return;
        };
        let restaurant_id = controller.with(|c| c.resolution().params.restaurant_id);
        if let Some(restaurant_id) = restaurant_id {
            UiPrefs::remember_branch(restaurant_id, branch_id);
            navigate(Route::Catalog(NavParams::restaurant(restaurant_id).with_selected_branch(Some(branch_id))));
        }
    };

    view! {
        <header class="catalog-header">
            <a class="back-link" href=back_link>"← Back"</a>
            <h1>{title}</h1>
            <p class="catalog-summary">
                {move || {
                    let s = summary();
                    format!("{} items · {} active · {} inactive", s.total, s.active, s.inactive)
                }}
            </p>

            <Show when=is_restaurant_view>
                <label class="branch-picker">
                    "Branch "
                    <select on:change=on_branch_change>
                        {move || controller.with(|c| {
                            let selected = c.resolution().selected_branch_id;
                            c.resolution().branches.iter().map(|branch| {
                                let is_selected = Some(branch.id) == selected;
                                view! {
                                    <option value=branch.id.to_string() selected=is_selected>
                                        {branch.name.clone()}
                                    </option>
                                }
                            }).collect_view()
                        })}
                    </select>
                </label>
                {move || controller.with(|c| c.resolution().branch.as_ref().and_then(|b| b.address.clone()))
                    .map(|address| view! { <p class="branch-address">{address}</p> })}
            </Show>
        </header>
    }
}
