use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn default_in_stock() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuItem {
    pub item: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u32>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MenuItem {
    pub fn in_category(&self, category_name: &str) -> bool {
        self.category.as_deref() == Some(category_name)
    }
}

/// The whole catalog, in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Menu {
    pub items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn in_stock(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(|item| item.in_stock)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for category in self.items.iter().filter_map(|item| item.category.as_ref()) {
            if !categories.contains(category) {
                categories.push(category.clone());
            }
        }
        categories
    }

    pub fn category_items(&self, category_name: &str) -> Vec<MenuItem> {
        self.in_stock()
            .filter(|item| item.in_category(category_name))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, category: &str, in_stock: bool) -> MenuItem {
        MenuItem {
            item: name.to_string(),
            price: 1.5,
            amount: None,
            in_stock,
            category: Some(category.to_string()),
            description: None,
        }
    }

    #[test]
    fn test_categories_keep_first_seen_order() {
        let menu = Menu::new(vec![
            item("Burger", "Mains", true),
            item("Cola", "Drinks", true),
            item("Wrap", "Mains", true),
        ]);

        assert_eq!(menu.categories(), vec!["Mains", "Drinks"]);
    }

    #[test]
    fn test_category_items_skip_out_of_stock() {
        let menu = Menu::new(vec![
            item("Burger", "Mains", true),
            item("Wrap", "Mains", false),
            item("Cola", "Drinks", true),
        ]);

        let mains = menu.category_items("Mains");
        assert_eq!(mains.len(), 1);
        assert_eq!(mains[0].item, "Burger");
        assert!(menu.category_items("Desserts").is_empty());
    }

    #[test]
    fn test_missing_in_stock_defaults_to_true() {
        let parsed: MenuItem =
            serde_json::from_str(r#"{"item": "Fries", "price": 2.99, "amount": 40, "id": 7}"#)
                .unwrap();

        assert!(parsed.in_stock);
        assert_eq!(parsed.amount, Some(40));
        assert_eq!(parsed.category, None);
    }
}
