//! Add Food Modal Component
//!
//! Modal form for registering a new food.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::models::FoodInput;

/// Modal form for creating foods
#[component]
pub fn AddFoodModal(#[prop(into)] on_submit: Callback<FoodInput>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (image, set_image) = signal(String::new());
    let (field_error, set_field_error) = signal::<Option<&'static str>>(None);

    // Fresh form every time the modal opens. A failed submit keeps the
    // modal open, so the user's input survives it.
    Effect::new(move |_| {
        if ctx.add_modal_open.get() {
            set_name.set(String::new());
            set_description.set(String::new());
            set_price.set(String::new());
            set_image.set(String::new());
            set_field_error.set(None);
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
        <Show when=move || ctx.add_modal_open.get()>
            <div class="modal-overlay">
                <div class="modal">
                    <div class="modal-header">
                        <span class="modal-title">"New food"</span>
                        <button class="close-btn" on:click=move |_| ctx.toggle_add_modal()>
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
                        <button type="submit">"Add food"</button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
