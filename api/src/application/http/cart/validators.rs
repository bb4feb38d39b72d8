use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddToCartValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    /// Unit price, e.g. `"8.99"`.
    #[validate(length(min = 1, message = "price is required"))]
    pub price: String,

    #[serde(default = "default_quantity")]
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: u32,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RemoveFromCartValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCartValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    /// `0` removes the item.
    pub quantity: u32,
}
