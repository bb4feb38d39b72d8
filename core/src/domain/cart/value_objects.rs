use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    cart::entities::{Cart, CartEntry, format_cents},
    common::entities::app_errors::CoreError,
};

#[derive(Debug, Clone)]
pub struct AddToCartInput {
    pub session_id: Uuid,
    pub name: String,
    pub price: String,
    pub quantity: u32,
}

#[derive(Debug, Clone)]
pub struct RemoveFromCartInput {
    pub session_id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct UpdateCartInput {
    pub session_id: Uuid,
    pub name: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CartSummary {
    pub items: Vec<CartEntry>,
    pub item_count: u64,
    /// Two-decimal total, e.g. `"20.97"`.
    pub total: String,
}

impl TryFrom<Cart> for CartSummary {
    type Error = CoreError;

    fn try_from(cart: Cart) -> Result<Self, Self::Error> {
        let total = format_cents(cart.total_cents()?);
        let item_count = cart.item_count();

        Ok(Self {
            items: cart.items,
            item_count,
            total,
        })
    }
}
