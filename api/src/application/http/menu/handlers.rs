pub mod get_category_items;
pub mod get_menu;
pub mod index;
