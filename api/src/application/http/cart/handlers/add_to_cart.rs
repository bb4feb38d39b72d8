use axum::extract::State;
use axum_extra::extract::cookie::CookieJar;
use menubot_core::domain::cart::{
    ports::CartService,
    value_objects::{AddToCartInput, CartSummary},
};

use crate::application::http::{
    cart::validators::AddToCartValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    session::resolve_session,
};

#[utoipa::path(
    post,
    path = "/add_to_cart",
    tag = "cart",
    summary = "Add an item to the cart",
    description = "Adds an item to the session cart. Adding an item already in the cart increases its quantity.",
    request_body = AddToCartValidator,
    responses(
        (status = 200, body = CartSummary),
        (status = 400, description = "Invalid name, price or quantity")
    )
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidateJson(payload): ValidateJson<AddToCartValidator>,
) -> Result<(CookieJar, Response<CartSummary>), ApiError> {
    let (jar, session_id) = resolve_session(jar);

    let summary = state
        .service
        .add_to_cart(AddToCartInput {
            session_id,
            name: payload.name,
            price: payload.price,
            quantity: payload.quantity,
        })
        .await?;

    Ok((jar, Response::OK(summary)))
}
