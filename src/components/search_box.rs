//! Search Box

use leptos::prelude::*;

#[component]
pub fn SearchBox(
    #[prop(into)] query: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="search-box">
            <input
                type="search"
                placeholder="Search dishes, descriptions, categories..."
                prop:value=move || query.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !query.get().is_empty()>
                <button class="icon-button" title="Clear search" on:click=move |_| on_change.run(String::new())>
                    "×"
                </button>
            </Show>
        </div>
    }
}
