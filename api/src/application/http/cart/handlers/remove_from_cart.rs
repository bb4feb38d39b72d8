use axum::extract::State;
use axum_extra::extract::cookie::CookieJar;
use menubot_core::domain::cart::{
    ports::CartService,
    value_objects::{CartSummary, RemoveFromCartInput},
};

use crate::application::http::{
    cart::validators::RemoveFromCartValidator,
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
    path = "/remove_from_cart",
    tag = "cart",
    summary = "Remove an item from the cart",
    description = "Removing an item that is not in the cart changes nothing.",
    request_body = RemoveFromCartValidator,
    responses(
        (status = 200, body = CartSummary)
    )
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidateJson(payload): ValidateJson<RemoveFromCartValidator>,
) -> Result<(CookieJar, Response<CartSummary>), ApiError> {
    let (jar, session_id) = resolve_session(jar);

    let summary = state
        .service
        .remove_from_cart(RemoveFromCartInput {
            session_id,
            name: payload.name,
        })
        .await?;

    Ok((jar, Response::OK(summary)))
}
