use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CartEntry {
    pub name: String,
    /// Unit price as submitted by the menu page, e.g. `"8.99"`.
    pub price: String,
    pub quantity: u32,
}

impl CartEntry {
    pub fn unit_price_cents(&self) -> Result<u64, CoreError> {
        parse_price_cents(&self.price)
    }

    pub fn subtotal_cents(&self) -> Result<u64, CoreError> {
        self.unit_price_cents()?
            .checked_mul(u64::from(self.quantity))
            .ok_or_else(total_too_large)
    }
}

fn total_too_large() -> CoreError {
    CoreError::InvalidInput("cart total is too large".to_string())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Cart {
    pub items: Vec<CartEntry>,
}

impl Cart {
    /// Adding a name already in the cart bumps its quantity instead of
    /// appending a second row. The cart is unchanged when the result
    /// would not have a representable total.
    pub fn add(&mut self, name: &str, price: &str, quantity: u32) -> Result<(), CoreError> {
        parse_price_cents(price)?;

        let mut next = self.clone();
        match next.items.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => {
                entry.quantity = entry
                    .quantity
                    .checked_add(quantity)
                    .ok_or_else(|| CoreError::InvalidInput("quantity is too large".to_string()))?;
            }
            None => next.items.push(CartEntry {
                name: name.to_string(),
                price: price.trim().to_string(),
                quantity,
            }),
        }

        self.replace_with(next)
    }

    /// No-op when the name is not in the cart.
    pub fn remove(&mut self, name: &str) {
        self.items.retain(|entry| entry.name != name);
    }

    /// A quantity of zero drops the entry. Unknown names are ignored.
    pub fn update_quantity(&mut self, name: &str, quantity: u32) -> Result<(), CoreError> {
        if quantity == 0 {
            self.remove(name);
            return Ok(());
        }

        let mut next = self.clone();
        if let Some(entry) = next.items.iter_mut().find(|entry| entry.name == name) {
            entry.quantity = quantity;
        }

        self.replace_with(next)
    }

    fn replace_with(&mut self, next: Cart) -> Result<(), CoreError> {
        next.total_cents()?;
        *self = next;

        Ok(())
    }

    pub fn total_cents(&self) -> Result<u64, CoreError> {
        self.items.iter().try_fold(0u64, |total, entry| {
            total
                .checked_add(entry.subtotal_cents()?)
                .ok_or_else(total_too_large)
        })
    }

    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|entry| u64::from(entry.quantity))
            .fold(0, u64::saturating_add)
    }
}

/// `"8.99"`, `"$8.99"` or `"9"` to cents. At most two decimals.
pub fn parse_price_cents(price: &str) -> Result<u64, CoreError> {
    let invalid = || CoreError::InvalidInput(format!("invalid price: {price:?}"));

    let trimmed = price.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));

    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if !whole.chars().all(|c| c.is_ascii_digit())
        || !fraction.chars().all(|c| c.is_ascii_digit())
        || fraction.len() > 2
    {
        return Err(invalid());
    }

    let whole: u64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid())?
    };
    let fraction: u64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<u64>().map_err(|_| invalid())? * 10,
        _ => fraction.parse().map_err(|_| invalid())?,
    };

    whole
        .checked_mul(100)
        .and_then(|cents| cents.checked_add(fraction))
        .ok_or_else(invalid)
}

pub fn format_cents(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}
