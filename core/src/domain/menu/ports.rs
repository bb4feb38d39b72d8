use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::{
        entities::{Menu, MenuItem},
        value_objects::{GetCategoryItemsInput, MenuTextStyle},
    },
};

/// Read-only access to the catalog
#[cfg_attr(test, mockall::automock)]
pub trait MenuRepository: Send + Sync {
    fn fetch_menu(&self) -> impl Future<Output = Result<Menu, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait MenuService: Send + Sync {
    fn get_menu(&self) -> impl Future<Output = Result<Menu, CoreError>> + Send;

    fn get_categories(&self) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn get_category_items(
        &self,
        input: GetCategoryItemsInput,
    ) -> impl Future<Output = Result<Vec<MenuItem>, CoreError>> + Send;

    fn get_menu_text(
        &self,
        style: MenuTextStyle,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
