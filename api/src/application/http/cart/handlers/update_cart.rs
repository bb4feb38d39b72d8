use axum::extract::State;
use axum_extra::extract::cookie::CookieJar;
use menubot_core::domain::cart::{
    ports::CartService,
    value_objects::{CartSummary, UpdateCartInput},
};

use crate::application::http::{
    cart::validators::UpdateCartValidator,
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
    path = "/update_cart",
    tag = "cart",
    summary = "Set an item's quantity",
    description = "A quantity of 0 removes the item.",
    request_body = UpdateCartValidator,
    responses(
        (status = 200, body = CartSummary)
    )
)]
pub async fn update_cart(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidateJson(payload): ValidateJson<UpdateCartValidator>,
) -> Result<(CookieJar, Response<CartSummary>), ApiError> {
    let (jar, session_id) = resolve_session(jar);

    let summary = state
        .service
        .update_cart(UpdateCartInput {
            session_id,
            name: payload.name,
            quantity: payload.quantity,
        })
        .await?;

    Ok((jar, Response::OK(summary)))
}
