//! Food Commands
//!
//! Typed wrappers for the `/foods` collection and item endpoints.

use crate::models::{Food, FoodInput, NewFood};

use super::{request_json, request_unit};

const FOODS_PATH: &str = "/foods";

fn item_path(id: u32) -> String {
    format!("{}/{}", FOODS_PATH, id)
}

/// List the whole catalog.
pub async fn list_foods() -> Result<Vec<Food>, String> {
    let value = request_json("GET", FOODS_PATH, None).await?;
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}

/// Create a food from form input. New foods always start available.
pub async fn create_food(input: FoodInput) -> Result<Food, String> {
    let payload = NewFood::from(input);
    let body = serde_json::to_string(&payload).map_err(|e| e.to_string())?;
    let value = request_json("POST", FOODS_PATH, Some(body)).await?;
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}

/// Replace the entity on the item endpoint with the merged food.
pub async fn update_food(food: &Food) -> Result<Food, String> {
    let body = serde_json::to_string(food).map_err(|e| e.to_string())?;
    let value = request_json("PUT", &item_path(food.id), Some(body)).await?;
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}

/// Delete on the item endpoint. The response body is ignored.
pub async fn delete_food(id: u32) -> Result<(), String> {
    request_unit("DELETE", &item_path(id)).await
}
