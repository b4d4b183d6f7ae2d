//! Diagnostics Panel
//!
//! Recent lines from the rolling logger, newest last.

use leptos::prelude::*;
use rolling_logger::LogLine;

fn level_class(line: &LogLine) -> &'static str {
    match line.level {
        log::Level::Error => "log-line error",
        log::Level::Warn => "log-line warn",
        _ => "log-line",
    }
}

#[component]
pub fn DiagnosticsPanel() -> impl IntoView {
    // The ring is not reactive; bump to re-read it
    let refresh = RwSignal::new(0u32);

    let lines = move || {
        refresh.track();
        rolling_logger::global().map(|logger| logger.snapshot()).unwrap_or_default()
    };

    let on_clear = move |_| {
        if let Some(logger) = rolling_logger::global() {
            logger.clear();
        }
        refresh.update(|n| *n += 1);
    };

    view! {
        <section class="diagnostics">
            <header class="diagnostics-header">
                <h2>"Diagnostics"</h2>
                <button class="secondary" on:click=move |_| refresh.update(|n| *n += 1)>"Refresh"</button>
                <button class="secondary" on:click=on_clear>"Clear"</button>
            </header>
            {move || {
                let lines = lines();
                if lines.is_empty() {
                    view! { <p class="empty">"No log lines yet."</p> }.into_any()
                } else {
                    view! {
                        <div class="log-lines">
                            {lines.into_iter().map(|line| view! {
                                <div class=level_class(&line)>{line.to_string()}</div>
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}
        </section>
    }
}
