//! Food Dashboard App
//!
//! Root component: wires the state slices and owns the command handlers
//! that mediate between UI events and the HTTP client.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{AddFoodModal, EditFoodModal, FlashMessage, FoodList, Header};
use crate::context::AppContext;
use crate::models::{Food, FoodInput};
use crate::store::{
    store_add_food, store_remove_food, store_replace_food, store_set_foods, AppState,
};

#[component]
pub fn App() -> impl IntoView {
    // State slices
    let store = Store::new(AppState::default());
    let add_modal_open = signal(false);
    let editing_food = signal::<Option<Food>>(None);
    let flash = signal::<Option<String>>(None);

    let ctx = AppContext::new(add_modal_open, editing_food, flash);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load the catalog on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_foods().await {
                Ok(foods) => store_set_foods(&store, foods),
                Err(err) => ctx.report_error(format!("failed to load foods: {err}")),
            }
        });
    });

    // Command handlers. Each awaits one call and applies one local list
    // edit once the server confirmed; failures only reach the flash.
    let handle_add_food = move |input: FoodInput| {
        spawn_local(async move {
            match api::create_food(input).await {
                Ok(created) => {
                    store_add_food(&store, created);
                    ctx.toggle_add_modal();
                }
                Err(err) => ctx.report_error(format!("failed to create food: {err}")),
            }
        });
    };

    let handle_update_food = move |input: FoodInput| {
        let Some(editing) = ctx.editing_food.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::update_food(&editing.with_input(input)).await {
                Ok(updated) => {
                    store_replace_food(&store, updated);
                    ctx.close_edit();
                }
                Err(err) => ctx.report_error(format!("failed to update food: {err}")),
            }
        });
    };

    let handle_delete_food = move |id: u32| {
        spawn_local(async move {
            match api::delete_food(id).await {
                Ok(()) => store_remove_food(&store, id),
                Err(err) => ctx.report_error(format!("failed to delete food: {err}")),
            }
        });
    };

    view! {
        <Header />
        <FlashMessage />
        <AddFoodModal on_submit=handle_add_food />
        <EditFoodModal on_submit=handle_update_food />

        <main class="main-content">
            <FoodList on_delete=handle_delete_food />
        </main>
    }
}
