//! Category Editor Panel
//!
//! Side panel editing a staged copy of the category list, with autocomplete
//! over the built-in suggestion groups. Labels can be renamed in place.
//! Save cascades the list into the items; cancel drops the staged edits.

use leptos::prelude::*;
use menu_catalog::category::{is_sentinel, Suggestion};
use menu_catalog::mutate::MutationOutcome;
use menu_catalog::MenuCatalogController;

use crate::commands;
use crate::context::use_app_context;

#[component]
pub fn CategoryEditorPanel(controller: RwSignal<MenuCatalogController>) -> impl IntoView {
    let ctx = use_app_context();
    let (selected_idx, set_selected_idx) = signal(0usize);
    let (error, set_error) = signal::<Option<String>>(None);
    // Label whose row is showing the rename input
    let (renaming, set_renaming) = signal::<Option<String>>(None);

    let staging = move || {
        controller.with(|c| c.editor().map(|e| e.staging().to_vec()).unwrap_or_default())
    };
    let input_value = move || {
        controller.with(|c| c.editor().map(|e| e.input().to_string()).unwrap_or_default())
    };
    let suggestions = move || -> Vec<Suggestion> {
        controller.with(|c| c.editor().map(|e| e.suggestions()).unwrap_or_default())
    };
    let is_dirty = move || controller.with(|c| c.editor().is_some_and(|e| e.is_dirty()));

    let set_input = move |value: String| {
        controller.update(|c| {
            if let Some(editor) = c.editor_mut() {
                editor.set_input(value);
            }
        });
        set_selected_idx.set(0);
        set_error.set(None);
    };

    let pick_suggestion = move |label: &'static str| {
        controller.update(|c| {
            if let Some(editor) = c.editor_mut() {
                editor.select_suggestion(label);
            }
        });
        set_selected_idx.set(0);
    };

    let add_typed = move || {
        let result = controller
            .try_update(|c| c.editor_mut().map(|e| e.add_input()))
            .flatten();
        if let Some(Err(e)) = result {
            set_error.set(Some(e.to_string()));
        }
    };

    let apply_rename = move |old: String, new: String| {
        let result = controller
            .try_update(|c| c.editor_mut().map(|e| e.rename(&old, &new)))
            .flatten();
        match result {
            Some(Err(e)) => set_error.set(Some(e.to_string())),
            _ => {
                set_renaming.set(None);
                set_error.set(None);
            }
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let sugg = suggestions();
        let sel = selected_idx.get();
        match sugg.get(sel) {
            Some(s) if s.label.eq_ignore_ascii_case(input_value().trim()) => pick_suggestion(s.label),
            _ => add_typed(),
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let sugg = suggestions();
        match ev.key().as_str() {
            "Tab" => {
                if let Some(s) = sugg.get(selected_idx.get()) {
                    ev.prevent_default();
                    pick_suggestion(s.label);
                }
            }
            "ArrowDown" => {
                ev.prevent_default();
                let sel = selected_idx.get();
                if sel + 1 < sugg.len() {
                    set_selected_idx.set(sel + 1);
                }
            }
            "ArrowUp" => {
                ev.prevent_default();
                let sel = selected_idx.get();
                if sel > 0 {
                    set_selected_idx.set(sel - 1);
                }
            }
            "Escape" => set_input(String::new()),
            _ => {}
        }
    };

    let on_save = move |_| {
        let result = controller.try_update(|c| commands::save_categories(c));
        match result {
            Some(Ok(MutationOutcome::NoScope)) => ctx.notify("Categories not saved: this view has no menu".to_string()),
            Some(Ok(outcome)) => log::info!("[CATEGORIES] saved: {:?}", outcome),
            Some(Err(e)) => ctx.notify(format!("Could not save categories: {}", e)),
            None => {}
        }
    };

    let on_cancel = move |_| controller.update(|c| c.cancel_category_edit());

    view! {
        <aside class="category-editor">
            <header class="category-editor-header">
                <h2>"Edit Categories"</h2>
                <button class="icon-button" title="Close" on:click=on_cancel>"×"</button>
            </header>

            <ul class="category-editor-list">
                {move || staging().into_iter().map(|label| {
                    let removable = !is_sentinel(&label);
                    if renaming.get().as_deref() == Some(label.as_str()) {
                        let old = label.clone();
                        return view! {
                            <li class="category-editor-row">
                                <input
                                    type="text"
                                    class="category-rename-input"
                                    prop:value=label
                                    on:change=move |ev| apply_rename(old.clone(), event_target_value(&ev))
                                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                                        if ev.key() == "Escape" {
                                            set_renaming.set(None);
                                        }
                                    }
                                />
                            </li>
                        }.into_any();
                    }

                    let label_for_rename = label.clone();
                    let label_for_click = label.clone();
                    view! {
                        <li class="category-editor-row">
                            <span>{label}</span>
                            {removable.then(|| view! {
                                <button
                                    class="icon-button"
                                    title="Rename"
                                    on:click=move |_| set_renaming.set(Some(label_for_rename.clone()))
                                >
                                    "✎"
                                </button>
                                <button
                                    class="icon-button danger"
                                    title="Remove"
                                    on:click=move |_| {
                                        let label = label_for_click.clone();
                                        controller.update(|c| {
                                            if let Some(editor) = c.editor_mut() {
                                                editor.remove(&label);
                                            }
                                        });
                                    }
                                >
                                    "−"
                                </button>
                            })}
                        </li>
                    }.into_any()
                }).collect_view()}
            </ul>

            <div class="category-input-wrapper">
                <form class="category-editor-form" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="New category..."
                        autocomplete="off"
                        prop:value=input_value
                        on:input=move |ev| set_input(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                    <button type="submit">"+"</button>
                </form>

                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

                {move || {
                    let sugg = suggestions();
                    if sugg.is_empty() {
                        view! { <div></div> }.into_any()
                    } else {
                        let selected = selected_idx.get();
                        view! {
                            <div class="autocomplete-list">
                                {sugg.into_iter().enumerate().map(|(i, s)| {
                                    let is_selected = i == selected;
                                    view! {
                                        <button
                                            type="button"
                                            class=if is_selected { "autocomplete-item selected" } else { "autocomplete-item" }
                                            on:click=move |ev| {
                                                ev.prevent_default();
                                                pick_suggestion(s.label);
                                            }
                                        >
                                            {s.label}
                                            <span class="autocomplete-group">{s.group.label()}</span>
                                        </button>
                                    }
                                }).collect_view()}
                            </div>
                        }.into_any()
                    }
                }}
            </div>

            <footer class="category-editor-actions">
                <button class="secondary" on:click=on_cancel>"Cancel"</button>
                <button class="primary" disabled=move || !is_dirty() on:click=on_save>"Save"</button>
            </footer>
        </aside>
    }
}
