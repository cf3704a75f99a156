//! Food List Component
//!
//! Catalog grid rendered from the store.

use leptos::prelude::*;

use crate::components::FoodCard;
use crate::store::{use_app_store, AppStateStoreFields};

/// Catalog list with empty-state hint and count footer
#[component]
pub fn FoodList(#[prop(into)] on_delete: Callback<u32>) -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="foods-list">
            <Show when=move || store.foods().get().is_empty()>
                <p class="empty-hint">"No foods registered yet."</p>
            </Show>
            <For
                each=move || store.foods().get()
                key=|food| food.id
                children=move |food| {
                    view! { <FoodCard food=food on_delete=on_delete /> }
                }
            />
            <p class="food-count">{move || format!("{} foods", store.foods().get().len())}</p>
        </section>
    }
}
