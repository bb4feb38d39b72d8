use axum::{Json, extract::State, http::StatusCode};
use menubot_core::domain::payment::{entities::PaymentCheck, ports::PaymentService};

use crate::application::http::{
    payment::validators::WebhookValidator,
    server::{
        api_entities::api_error::{ApiError, ValidateJson},
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/webhook",
    tag = "payment",
    summary = "Mined transaction notification",
    description = "Accepts `mined_transaction` events for transactions paying the shop wallet.",
    request_body = WebhookValidator,
    responses(
        (status = 200, body = PaymentCheck),
        (status = 400, body = PaymentCheck, description = "Invalid data.")
    )
)]
pub async fn webhook(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<WebhookValidator>,
) -> Result<(StatusCode, Json<PaymentCheck>), ApiError> {
    let check = state.service.handle_webhook(payload.into()).await?;

    let status = if check.is_success() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    Ok((status, Json(check)))
}
