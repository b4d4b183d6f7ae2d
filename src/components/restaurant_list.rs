//! Restaurant List
//!
//! Landing page: every restaurant with links to its menu and to each
//! branch menu.

use leptos::prelude::*;
use leptos::task::spawn_local;
use menu_catalog::NavParams;

use crate::commands;
use crate::context::use_app_context;
use crate::route::Route;
use crate::storage::UiPrefs;
use crate::store::{store_branches_of, store_set_venues, use_app_store, AppStateStoreFields};

#[component]
pub fn RestaurantList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    // Load venues on mount and on reload
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        log::debug!("[VENUES] loading, trigger={}", trigger);
        spawn_local(async move {
            match commands::list_venues().await {
                Ok(venues) => {
                    log::debug!("[VENUES] loaded {} restaurants", venues.len());
                    store_set_venues(&store, venues);
                }
                Err(e) => ctx.notify(format!("Could not load restaurants: {}", e)),
            }
        });
    });

    view! {
        <section class="restaurant-list">
            <h1>"Restaurants"</h1>
            <Show
                when=move || store.loaded().get()
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                <Show
                    when=move || !store.restaurants().read().is_empty()
                    fallback=|| view! { <p class="empty">"No restaurants yet."</p> }
                >
                    <For
                        each=move || store.restaurants().get()
                        key=|restaurant| restaurant.id
                        children=move |restaurant| {
                            let branches = store_branches_of(&store, restaurant.id);
                            // Reopen the branch picked last time
                            let menu_href = Route::Catalog(
                                NavParams::restaurant(restaurant.id).with_selected_branch(UiPrefs::branch_for(restaurant.id)),
                            )
                            .href();
                            view! {
                                <article class="restaurant-card">
                                    <header>
                                        <h2>{restaurant.name.clone()}</h2>
                                        {restaurant.cuisine.clone().map(|c| view! { <span class="cuisine">{c}</span> })}
                                    </header>
                                    <a class="primary-link" href=menu_href>"Restaurant menu"</a>
                                    <ul class="branch-links">
                                        {branches.into_iter().map(|branch| {
                                            let href = Route::Catalog(NavParams::branch(branch.id)).href();
                                            view! {
                                                <li>
                                                    <a href=href>{branch.name}</a>
                                                    {branch.address.map(|a| view! { <span class="branch-address">{a}</span> })}
                                                </li>
                                            }
                                        }).collect_view()}
                                    </ul>
                                </article>
                            }
                        }
                    />
                </Show>
            </Show>
            <button class="secondary" on:click=move |_| ctx.reload()>"Refresh"</button>
        </section>
    }
}
