use axum::extract::State;
use axum_extra::extract::cookie::CookieJar;
use menubot_core::domain::cart::{ports::CartService, value_objects::CartSummary};

use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session::resolve_session,
};

#[utoipa::path(
    get,
    path = "/cart",
    tag = "cart",
    summary = "Get the cart",
    description = "Items in the session cart and their total.",
    responses(
        (status = 200, body = CartSummary)
    )
)]
pub async fn get_cart(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Response<CartSummary>), ApiError> {
    let (jar, session_id) = resolve_session(jar);

    let summary = state.service.get_cart(session_id).await?;

    Ok((jar, Response::OK(summary)))
}
