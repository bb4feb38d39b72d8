use crate::domain::menu::{entities::Menu, value_objects::MenuTextStyle};

/// Render the menu as newline-joined lines for a system prompt.
pub fn render_menu_text(menu: &Menu, style: MenuTextStyle) -> String {
    match style {
        MenuTextStyle::WithAmount => menu
            .items
            .iter()
            .map(|item| {
                let amount = item
                    .amount
                    .map(|amount| amount.to_string())
                    .unwrap_or_else(|| "n/a".to_string());
                format!(
                    "{}: ${} (Amount: {})",
                    item.item,
                    format_menu_price(item.price),
                    amount
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
        MenuTextStyle::PriceOnly => menu
            .in_stock()
            .map(|item| format!("{}: ${}", item.item, format_menu_price(item.price)))
            .collect::<Vec<_>>()
            .join("\n"),
        MenuTextStyle::WithDescription => menu
            .in_stock()
            .map(|item| {
                format!(
                    "{}: ${:.2} - {}",
                    item.item,
                    item.price,
                    item.description.as_deref().unwrap_or_default()
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Prices as the menu file writes them: whole amounts keep a `.0`
/// (`9.0`), others print their shortest form (`8.99`, `4.5`).
pub fn format_menu_price(price: f64) -> String {
    if price.is_finite() && price.fract() == 0.0 {
        format!("{price:.1}")
    } else {
        price.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::entities::MenuItem;

    fn menu() -> Menu {
        Menu::new(vec![
            MenuItem {
                item: "Burgers".to_string(),
                price: 8.99,
                amount: Some(20),
                in_stock: true,
                category: Some("Mains".to_string()),
                description: Some("Beef patty".to_string()),
            },
            MenuItem {
                item: "Milkshake".to_string(),
                price: 4.5,
                amount: Some(0),
                in_stock: false,
                category: Some("Drinks".to_string()),
                description: None,
            },
        ])
    }

    #[test]
    fn test_render_with_amount_lists_every_item() {
        let text = render_menu_text(&menu(), MenuTextStyle::WithAmount);
        assert_eq!(
            text,
            "Burgers: $8.99 (Amount: 20)\nMilkshake: $4.5 (Amount: 0)"
        );
    }

    #[test]
    fn test_render_price_only_skips_out_of_stock() {
        let text = render_menu_text(&menu(), MenuTextStyle::PriceOnly);
        assert_eq!(text, "Burgers: $8.99");
    }

    #[test]
    fn test_render_with_description_uses_two_decimals() {
        let mut menu = menu();
        menu.items[0].price = 9.0;
        let text = render_menu_text(&menu, MenuTextStyle::WithDescription);
        assert_eq!(text, "Burgers: $9.00 - Beef patty");
    }

    #[test]
    fn test_whole_prices_keep_one_decimal() {
        assert_eq!(format_menu_price(9.0), "9.0");
        assert_eq!(format_menu_price(8.99), "8.99");
        assert_eq!(format_menu_price(4.5), "4.5");

        let mut menu = menu();
        menu.items[0].price = 9.0;
        assert_eq!(
            render_menu_text(&menu, MenuTextStyle::PriceOnly),
            "Burgers: $9.0"
        );
    }
}
