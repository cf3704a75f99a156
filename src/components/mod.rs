//! UI Components
//!
//! Reusable Leptos components.

mod add_food_modal;
mod edit_food_modal;
mod flash_message;
mod food_card;
mod food_list;
mod header;

pub use add_food_modal::AddFoodModal;
pub use edit_food_modal::EditFoodModal;
pub use flash_message::FlashMessage;
pub use food_card::FoodCard;
pub use food_list::FoodList;
pub use header::Header;
