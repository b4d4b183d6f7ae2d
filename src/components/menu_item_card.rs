//! Menu Item Card
//!
//! One grid cell: title, price, status toggle and the category picker.

use leptos::prelude::*;
use menu_catalog::{ItemStatus, MenuCatalogController, MenuItem};

#[component]
pub fn MenuItemCard(
    item: MenuItem,
    controller: RwSignal<MenuCatalogController>,
    #[prop(into)] on_toggle: Callback<u32>,
    #[prop(into)] on_reassign: Callback<(u32, String)>,
) -> impl IntoView {
    let id = item.id;
    let current_category = item.category.clone();
    let picker_open = move || controller.with(|c| c.category_picker() == Some(id));

    let (card_class, status_label, toggle_label) = match item.status {
        ItemStatus::Active => ("menu-card", "Active", "Deactivate"),
        ItemStatus::Inactive => ("menu-card inactive", "Inactive", "Activate"),
    };
    let badge_class = match item.status {
        ItemStatus::Active => "status-badge active",
        ItemStatus::Inactive => "status-badge inactive",
    };

    let toggle_picker = move |_| {
        controller.update(|c| {
            if c.category_picker() == Some(id) {
                c.close_category_picker();
            } else {
                c.open_category_picker(id);
            }
        });
    };

    view! {
        <article class=card_class>
            <header class="menu-card-header">
                <h3 class="menu-card-title">{item.title.clone()}</h3>
                <span class="menu-card-price">{item.price.to_string()}</span>
            </header>

            <p class="menu-card-description">{item.description.clone()}</p>

            <div class="menu-card-meta">
                <button class="category-badge" title="Change category" on:click=toggle_picker>
                    {item.category.clone()}
                </button>
                <span class=badge_class>{status_label}</span>
            </div>

            {move || picker_open().then(|| {
                let options = controller.with(|c| c.assignable_categories());
                let current = current_category.clone();
                view! {
                    <div class="category-picker">
                        {options.into_iter().map(|option| {
                            let is_current = option == current;
                            let value = option.clone();
                            view! {
                                <button
                                    type="button"
                                    class=if is_current { "category-option current" } else { "category-option" }
                                    disabled=is_current
                                    on:click=move |_| on_reassign.run((id, value.clone()))
                                >
                                    {option}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                }
            })}

            <footer class="menu-card-actions">
                <button class="secondary" on:click=move |_| on_toggle.run(id)>{toggle_label}</button>
            </footer>
        </article>
    }
}
