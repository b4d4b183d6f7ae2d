//! Category Filter Bar
//!
//! Chips for each derived category; the active one is highlighted.

use leptos::prelude::*;

#[component]
pub fn CategoryBar(
    #[prop(into)] categories: Signal<Vec<String>>,
    /// Lower-cased active label or "all"
    #[prop(into)] active: Signal<String>,
    #[prop(into)] on_select: Callback<String>,
    #[prop(into)] on_edit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="category-bar">
            <For
                each=move || categories.get()
                key=|label| label.clone()
                children=move |label| {
                    let lowered = label.to_lowercase();
                    let value = label.clone();
                    view! {
                        <button
                            class=move || if active.get() == lowered { "category-chip active" } else { "category-chip" }
                            on:click=move |_| on_select.run(value.clone())
                        >
                            {label}
                        </button>
                    }
                }
            />
            <button class="category-chip edit" title="Edit categories" on:click=move |_| on_edit.run(())>
                "Edit"
            </button>
        </div>
    }
}
