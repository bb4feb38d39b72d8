use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    cart::value_objects::{AddToCartInput, CartSummary, RemoveFromCartInput, UpdateCartInput},
    common::entities::app_errors::CoreError,
};

#[cfg_attr(test, mockall::automock)]
pub trait CartService: Send + Sync {
    fn add_to_cart(
        &self,
        input: AddToCartInput,
    ) -> impl Future<Output = Result<CartSummary, CoreError>> + Send;

    fn remove_from_cart(
        &self,
        input: RemoveFromCartInput,
    ) -> impl Future<Output = Result<CartSummary, CoreError>> + Send;

    fn update_cart(
        &self,
        input: UpdateCartInput,
    ) -> impl Future<Output = Result<CartSummary, CoreError>> + Send;

    fn get_cart(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<CartSummary, CoreError>> + Send;
}
