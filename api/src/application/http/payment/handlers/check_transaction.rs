use axum::extract::State;
use menubot_core::domain::payment::{
    entities::PaymentCheck, ports::PaymentService, value_objects::CheckTransactionInput,
};

use crate::application::http::{
    payment::validators::CheckTransactionValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/check_transaction",
    tag = "payment",
    summary = "Verify a payment",
    description = "Succeeds only when the transaction exists, pays the shop wallet and carries exactly the expected amount.",
    request_body = CheckTransactionValidator,
    responses(
        (status = 200, body = PaymentCheck),
        (status = 400, description = "Malformed hash or amount"),
        (status = 502, description = "Ethereum node unreachable")
    )
)]
pub async fn check_transaction(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CheckTransactionValidator>,
) -> Result<Response<PaymentCheck>, ApiError> {
    let check = state
        .service
        .check_transaction(CheckTransactionInput {
            tx_hash: payload.tx_hash,
            amount: payload.amount,
        })
        .await?;

    Ok(Response::OK(check))
}
