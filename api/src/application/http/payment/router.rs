use super::handlers::check_transaction::{__path_check_transaction, check_transaction};
use super::handlers::depay_callback::{__path_depay_callback, depay_callback};
use super::handlers::payment_page::{__path_payment_page, payment_page};
use super::handlers::webhook::{__path_webhook, webhook};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use menubot_core::domain::payment::ports::PaymentService;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(payment_page, check_transaction, webhook, depay_callback))]
pub struct PaymentApiDoc;

/// Empty unless an Ethereum endpoint and wallet are configured.
pub fn payment_routes(state: AppState) -> Router<AppState> {
    if !state.service.payments_enabled() {
        return Router::new();
    }

    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/payment", root_path), get(payment_page))
        .route(
            &format!("{}/check_transaction", root_path),
            post(check_transaction),
        )
        .route(&format!("{}/webhook", root_path), post(webhook))
        .route(
            &format!("{}/depay_callback", root_path),
            post(depay_callback),
        )
}
