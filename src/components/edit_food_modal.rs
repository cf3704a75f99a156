//! Edit Food Modal Component
//!
//! Modal form for editing the food selected in the list. Open state is
//! the presence of an editing target; closing drops the target.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::models::FoodInput;

/// Modal form for editing foods; fields are seeded from the editing target
#[component]
pub fn EditFoodModal(#[prop(into)] on_submit: Callback<FoodInput>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (image, set_image) = signal(String::new());
    let (field_error, set_field_error) = signal::<Option<&'static str>>(None);

    // Track which food we are editing to avoid resetting the fields when
    // something else re-runs the effect.
    let (last_edit_id, set_last_edit_id) = signal::<Option<u32>>(None);

    Effect::new(move |_| {
        match ctx.editing_food.get() {
            Some(food) => {
                if last_edit_id.get_untracked() != Some(food.id) {
                    set_last_edit_id.set(Some(food.id));
                    set_name.set(food.name);
                    set_description.set(food.description);
                    set_price.set(food.price.to_string());
                    set_image.set(food.image);
                    set_field_error.set(None);
                }
            }
            None => set_last_edit_id.set(None),
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let food_name = name.get();
        if food_name.is_empty() {
            return;
        }
        let Ok(parsed_price) = price.get().trim().parse::<f64>() else {
            set_field_error.set(Some("price must be a number"));
            return;
        };
        set_field_error.set(None);

        on_submit.run(FoodInput {
            name: food_name,
            description: description.get(),
            price: parsed_price,
            image: image.get(),
        });
    };

    view! {
        <Show when=move || ctx.editing_food.get().is_some()>
            <div class="modal-overlay">
                <div class="modal">
                    <div class="modal-header">
                        <span class="modal-title">"Edit food"</span>
                        <button class="close-btn" on:click=move |_| ctx.close_edit()>
                            "×"
                        </button>
                    </div>
                    <form class="food-form" on:submit=submit>
                        <input
                            type="text"
                            placeholder="Name"
                            prop:value=move || name.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_name.set(input.value());
                            }
                        />
                        <textarea
                            placeholder="Description"
                            prop:value=move || description.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                                set_description.set(input.value());
                            }
                        ></textarea>
                        <input
                            type="text"
                            placeholder="Price"
                            prop:value=move || price.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_price.set(input.value());
                            }
                        />
                        <input
                            type="text"
                            placeholder="Image URL"
                            prop:value=move || image.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_image.set(input.value());
                            }
                        />
                        {move || field_error.get().map(|message| view! {
                            <span class="field-error">{message}</span>
                        })}
                        <button type="submit">"Save changes"</button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
