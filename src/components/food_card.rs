//! Food Card Component
//!
//! One catalog row with edit and delete affordances.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Food;

/// A single food row in the catalog
#[component]
pub fn FoodCard(food: Food, #[prop(into)] on_delete: Callback<u32>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = food.id;
    let available = food.available;
    let alt_text = food.name.clone();
    let name = food.name.clone();
    let description = food.description.clone();
    let image = food.image.clone();
    let price = format!("${:.2}", food.price);
    let edit_target = food;

    // Two-step delete: the first click arms, the second confirms.
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <article class=if available { "food-card" } else { "food-card unavailable" }>
            <img class="food-image" src=image alt=alt_text />
            <div class="food-body">
                <span class="food-name">{name}</span>
                <p class="food-description">{description}</p>
                <span class="food-price">{price}</span>
            </div>
            <div class="food-footer">
                <span class=if available { "availability-badge" } else { "availability-badge off" }>
                    {if available { "Available" } else { "Unavailable" }}
                </span>

                <button class="edit-btn" on:click=move |_| ctx.begin_edit(edit_target.clone())>
                    "Edit"
                </button>

                <Show when=move || !confirm_delete.get()>
                    <button
                        class="delete-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirm_delete.set(true);
                        }
                    >
                        "×"
                    </button>
                </Show>
                <Show when=move || confirm_delete.get()>
                    <span class="delete-confirm">
                        <span class="delete-confirm-text">"Delete?"</span>
                        <button
                            class="confirm-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_delete.run(id);
                            }
                        >
                            "✓"
                        </button>
                        <button
                            class="cancel-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                set_confirm_delete.set(false);
                            }
                        >
                            "✗"
                        </button>
                    </span>
                </Show>
            </div>
        </article>
    }
}
