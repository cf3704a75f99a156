//! Header Component
//!
//! Top banner with the new-food action.

use leptos::prelude::*;

use crate::context::AppContext;

/// Top banner with the "New food" button
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <header class="header">
            <span class="header-title">"Food Dashboard"</span>
            <button class="new-food-btn" on:click=move |_| ctx.toggle_add_modal()>
                "New food"
            </button>
        </header>
    }
}
