use std::sync::LazyLock;

use regex::Regex;

use crate::domain::chat::entities::OrderLine;

/// Typing this ends the ordering conversation.
pub const ORDER_CONFIRMATION_PHRASE: &str = "Confirm my order";

// "* 2 Burgers: $8.99 x 2 = $17.98"
static QUANTITY_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:[*\-•]\s*)?(\d+)\s*x?\s+([^:$=\n]+?)\s*(?::.*)?$")
        .expect("valid order line pattern")
});

// "Burgers: 2"
static NAME_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:[*\-•]\s*)?([^\d:*\-•][^:]*?)\s*:\s*(\d+)\s*$")
        .expect("valid order line pattern")
});

pub fn is_order_confirmation(input: &str) -> bool {
    input.contains(ORDER_CONFIRMATION_PHRASE)
}

pub fn build_order_system_prompt(menu_text: &str) -> String {
    format!(
        "Here is the food menu, use it whenever someone asks what's on the menu \
         or if they want to place an order:\n{menu_text}\n\
         Users should format orders as follows: Burgers: 2, French Fries: 3. \
         The number represents the quantity the person is ordering. \
         When you're ready to confirm the order, say '{ORDER_CONFIRMATION_PHRASE}'."
    )
}

/// Extract `quantity name` pairs from an order summary such as
/// `* 2 Burgers: $8.99 x 2 = $17.98`. Lines that are not order lines,
/// like totals, are skipped.
pub fn parse_order_summary(text: &str) -> Vec<OrderLine> {
    text.lines()
        .flat_map(|line| line.split(", "))
        .filter_map(parse_order_line)
        .collect()
}

fn parse_order_line(line: &str) -> Option<OrderLine> {
    if let Some(captures) = QUANTITY_FIRST.captures(line) {
        let quantity = captures[1].parse().ok()?;
        let name = captures[2].trim().to_string();
        if quantity > 0 && !name.is_empty() {
            return Some(OrderLine { quantity, name });
        }
    }

    let captures = NAME_FIRST.captures(line)?;
    let quantity = captures[2].parse().ok()?;
    let name = captures[1].trim().to_string();
    (quantity > 0 && !name.is_empty()).then_some(OrderLine { quantity, name })
}
