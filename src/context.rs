//! Application Context
//!
//! Modal and error-flash slices shared via the Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

use crate::models::Food;

/// How long a flash message stays up when not dismissed by hand.
const FLASH_DISMISS_MS: u32 = 5_000;

/// App-wide slices provided via context. Each command touches exactly
/// one slice.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Add-food modal open flag - read
    pub add_modal_open: ReadSignal<bool>,
    /// Add-food modal open flag - write
    set_add_modal_open: WriteSignal<bool>,
    /// Food currently being edited; `Some` means the edit modal is open - read
    pub editing_food: ReadSignal<Option<Food>>,
    /// Food currently being edited - write
    set_editing_food: WriteSignal<Option<Food>>,
    /// Last surfaced command failure - read
    pub flash: ReadSignal<Option<String>>,
    /// Last surfaced command failure - write
    set_flash: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        add_modal_open: (ReadSignal<bool>, WriteSignal<bool>),
        editing_food: (ReadSignal<Option<Food>>, WriteSignal<Option<Food>>),
        flash: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            add_modal_open: add_modal_open.0,
            set_add_modal_open: add_modal_open.1,
            editing_food: editing_food.0,
            set_editing_food: editing_food.1,
            flash: flash.0,
            set_flash: flash.1,
        }
    }

    /// Flip the add-food modal
    pub fn toggle_add_modal(&self) {
        self.set_add_modal_open.update(|open| *open = !*open);
    }

    /// Open the edit modal for one food
    pub fn begin_edit(&self, food: Food) {
        self.set_editing_food.set(Some(food));
    }

    /// Close the edit modal and drop the editing entity
    pub fn close_edit(&self) {
        self.set_editing_food.set(None);
    }

    /// Log a command failure and surface it in the flash banner.
    pub fn report_error(&self, message: String) {
        web_sys::console::error_1(&JsValue::from_str(&message));
        self.set_flash.set(Some(message.clone()));

        let flash = self.flash;
        let set_flash = self.set_flash;
        spawn_local(async move {
            TimeoutFuture::new(FLASH_DISMISS_MS).await;
            // A newer message may have replaced this one; only clear our own.
            if flash.get_untracked().as_deref() == Some(message.as_str()) {
                set_flash.set(None);
            }
        });
    }

    /// Dismiss the flash banner
    pub fn dismiss_error(&self) {
        self.set_flash.set(None);
    }
}
