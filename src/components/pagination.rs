//! Pagination Controls

use leptos::prelude::*;

#[component]
pub fn Pagination(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] on_page: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <nav class="pagination">
                <button
                    disabled=move || current_page.get() <= 1
                    on:click=move |_| on_page.run(current_page.get().saturating_sub(1))
                >
                    "‹ Prev"
                </button>
                {move || (1..=total_pages.get()).map(|page| {
                    let is_current = page == current_page.get();
                    view! {
                        <button
                            class=if is_current { "page-button current" } else { "page-button" }
                            on:click=move |_| on_page.run(page)
                        >
                            {page}
                        </button>
                    }
                }).collect_view()}
                <button
                    disabled=move || current_page.get() >= total_pages.get()
                    on:click=move |_| on_page.run(current_page.get() + 1)
                >
                    "Next ›"
                </button>
            </nav>
        </Show>
    }
}
