//! Not Found Panel

use leptos::prelude::*;

#[component]
pub fn NotFound(#[prop(into)] what: String, #[prop(into)] back_href: String) -> impl IntoView {
    view! {
        <section class="not-found">
            <h2>{format!("{} not found", what)}</h2>
            <p>"It may have been removed, or the link is out of date."</p>
            <a href=back_href>"Go back"</a>
        </section>
    }
}
