use axum::{Json, extract::State};
use menubot_core::domain::payment::{entities::PaymentCheck, ports::PaymentService};
use serde_json::Value;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    post,
    path = "/depay_callback",
    tag = "payment",
    summary = "DePay widget callback",
    description = "Logs the payload sent by the DePay payment widget and acknowledges it.",
    responses(
        (status = 200, body = PaymentCheck)
    )
)]
pub async fn depay_callback(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Response<PaymentCheck>, ApiError> {
    let check = state.service.record_depay_callback(payload).await?;

    Ok(Response::OK(check))
}
