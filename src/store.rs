//! Food List Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the
//! catalog. Every mutation mirrors one confirmed server call.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Food;

/// Shared list state. Order is server/append order and is never re-sorted.
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub foods: Vec<Food>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the list wholesale with a fresh server snapshot
pub fn store_set_foods(store: &AppStore, foods: Vec<Food>) {
    *store.foods().write() = foods;
}

/// Append a newly created food at the end
pub fn store_add_food(store: &AppStore, food: Food) {
    store.foods().write().push(food);
}

/// Swap the entity with the matching id for the server-echoed one
pub fn store_replace_food(store: &AppStore, updated: Food) {
    replace_food(&mut store.foods().write(), updated);
}

/// Remove a food from the store by ID
pub fn store_remove_food(store: &AppStore, id: u32) {
    remove_food(&mut store.foods().write(), id);
}

// List edits, kept off the reactive wrapper so the semantics are
// testable without a DOM.

/// Replace the element whose id matches `updated`, leaving order and all
/// other elements untouched. No-op when nothing matches.
pub fn replace_food(foods: &mut Vec<Food>, updated: Food) {
    if let Some(slot) = foods.iter_mut().find(|food| food.id == updated.id) {
        *slot = updated;
    }
}

/// Remove the element with the given id, preserving the order of the rest.
pub fn remove_food(foods: &mut Vec<Food>, id: u32) {
    foods.retain(|food| food.id != id);
}

#[cfg(test)]
mod tests {
    use super::{remove_food, replace_food};
    use crate::models::Food;

    fn food(id: u32, name: &str) -> Food {
        Food {
            id,
            name: name.to_string(),
            description: format!("{name} with sides"),
            price: 12.5,
            image: format!("https://cdn.example/{id}.png"),
            available: true,
        }
    }

    #[test]
    fn test_replace_food_swaps_only_the_matching_entry() {
        let mut foods = vec![food(1, "Ale pie"), food(3, "Stew"), food(5, "Flatbread")];
        let mut renamed = food(3, "Hotpot");
        renamed.available = false;

        replace_food(&mut foods, renamed.clone());

        assert_eq!(foods.len(), 3);
        assert_eq!(foods[0], food(1, "Ale pie"));
        assert_eq!(foods[1], renamed);
        assert_eq!(foods[2], food(5, "Flatbread"));
    }

    #[test]
    fn test_replace_food_without_match_leaves_list_unchanged() {
        let mut foods = vec![food(1, "Ale pie"), food(3, "Stew")];
        let before = foods.clone();

        replace_food(&mut foods, food(9, "Ghost dish"));

        assert_eq!(foods, before);
    }

    #[test]
    fn test_remove_food_drops_only_the_matching_entry() {
        let mut foods = vec![food(1, "Ale pie"), food(4, "Stew"), food(7, "Flatbread")];

        remove_food(&mut foods, 4);

        assert_eq!(foods.len(), 2);
        assert!(foods.iter().all(|f| f.id != 4));
        assert_eq!(foods[0].id, 1);
        assert_eq!(foods[1].id, 7);
    }

    #[test]
    fn test_remove_food_without_match_is_a_no_op() {
        let mut foods = vec![food(1, "Ale pie")];

        remove_food(&mut foods, 99);

        assert_eq!(foods.len(), 1);
        assert_eq!(foods[0].id, 1);
    }
}
