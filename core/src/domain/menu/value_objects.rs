#[derive(Debug, Clone)]
pub struct GetCategoryItemsInput {
    pub category_name: String,
}

/// Line layout used when the menu is rendered into a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTextStyle {
    /// `Burgers: $8.99 (Amount: 20)`, every item.
    WithAmount,
    /// `Burgers: $8.99`, in-stock items only.
    PriceOnly,
    /// `Burgers: $8.99 - Beef patty`, in-stock items only.
    WithDescription,
}
