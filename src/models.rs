//! Frontend Models
//!
//! Data structures matching the `/foods` resource.

use serde::{Deserialize, Serialize};

/// Food entity as served by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub available: bool,
}

/// Fields collected by the add/edit forms. The server assigns `id`, and
/// availability is never set from a form.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
}

/// Create payload for the collection endpoint. New foods always start
/// available, whatever the form said.
#[derive(Debug, Clone, Serialize)]
pub struct NewFood {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub available: bool,
}

impl From<FoodInput> for NewFood {
    fn from(input: FoodInput) -> Self {
        Self {
            name: input.name,
            description: input.description,
            price: input.price,
            image: input.image,
            available: true,
        }
    }
}

impl Food {
    /// Merge form fields into this entity for the item endpoint.
    /// `id` and `available` are kept from the entity being edited.
    pub fn with_input(&self, input: FoodInput) -> Food {
        Food {
            id: self.id,
            available: self.available,
            name: input.name,
            description: input.description,
            price: input.price,
            image: input.image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Food, FoodInput, NewFood};

    fn sample_input() -> FoodInput {
        FoodInput {
            name: "Veggie burger".to_string(),
            description: "Grilled patty with greens".to_string(),
            price: 21.9,
            image: "https://cdn.example/veggie-burger.png".to_string(),
        }
    }

    #[test]
    fn test_new_food_is_always_available() {
        let payload = NewFood::from(sample_input());
        assert!(payload.available);

        let json = serde_json::to_value(&payload).expect("Failed to serialize payload");
        assert_eq!(json["available"], serde_json::Value::Bool(true));
        assert_eq!(json["name"], "Veggie burger");
    }

    #[test]
    fn test_with_input_keeps_id_and_availability() {
        let editing = Food {
            id: 3,
            name: "Old name".to_string(),
            description: "Old description".to_string(),
            price: 10.0,
            image: "https://cdn.example/old.png".to_string(),
            available: false,
        };

        let merged = editing.with_input(sample_input());

        assert_eq!(merged.id, 3);
        assert!(!merged.available);
        assert_eq!(merged.name, "Veggie burger");
        assert_eq!(merged.description, "Grilled patty with greens");
        assert_eq!(merged.price, 21.9);
        assert_eq!(merged.image, "https://cdn.example/veggie-burger.png");
    }

    #[test]
    fn test_food_wire_field_names() {
        let raw = r#"{
            "id": 1,
            "name": "Ale pie",
            "description": "Steak and ale",
            "price": 18.5,
            "image": "https://cdn.example/ale-pie.png",
            "available": false
        }"#;

        let food: Food = serde_json::from_str(raw).expect("Failed to deserialize food");
        assert_eq!(food.id, 1);
        assert_eq!(food.name, "Ale pie");
        assert!(!food.available);

        let json = serde_json::to_value(&food).expect("Failed to serialize food");
        for key in ["id", "name", "description", "price", "image", "available"] {
            assert!(json.get(key).is_some(), "missing wire field {key}");
        }
    }
}
