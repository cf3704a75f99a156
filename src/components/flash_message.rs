//! Flash Message Component
//!
//! Dismissible banner for surfaced command failures.

use leptos::prelude::*;

use crate::context::AppContext;

/// Error banner shown while a command failure is pending dismissal
#[component]
pub fn FlashMessage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.flash.get().map(|message| view! {
            <div class="flash-message" role="alert">
                <span class="flash-text">{message}</span>
                <button class="flash-dismiss-btn" on:click=move |_| ctx.dismiss_error()>
                    "×"
                </button>
            </div>
        })}
    }
}
