//! Notice Banner
//!
//! Shows the latest error; hides itself after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

const AUTO_DISMISS_MS: u32 = 5_000;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_app_context();

    Effect::new(move |_| {
        if let Some(message) = ctx.notice.get() {
            spawn_local(async move {
                TimeoutFuture::new(AUTO_DISMISS_MS).await;
                // A newer notice restarts its own timer
                if ctx.notice.get_untracked().as_deref() == Some(message.as_str()) {
                    ctx.dismiss_notice();
                }
            });
        }
    });

    view! {
        {move || ctx.notice.get().map(|message| view! {
            <div class="notice-banner" role="alert">
                <span>{message}</span>
                <button class="icon-button" title="Dismiss" on:click=move |_| ctx.dismiss_notice()>"×"</button>
            </div>
        })}
    }
}
