use std::future::Future;

use serde_json::Value;

use crate::domain::{
    common::entities::app_errors::CoreError,
    payment::{
        entities::{OnChainTransaction, PaymentCheck},
        value_objects::{CheckTransactionInput, WebhookPayload},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait EthereumClient: Send + Sync {
    /// Connectivity check against the node.
    fn client_version(&self) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn get_transaction_by_hash(
        &self,
        hash: String,
    ) -> impl Future<Output = Result<Option<OnChainTransaction>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait PaymentService: Send + Sync {
    fn payments_enabled(&self) -> bool;

    fn payment_uri(&self) -> Result<String, CoreError>;

    fn check_transaction(
        &self,
        input: CheckTransactionInput,
    ) -> impl Future<Output = Result<PaymentCheck, CoreError>> + Send;

    fn handle_webhook(
        &self,
        payload: WebhookPayload,
    ) -> impl Future<Output = Result<PaymentCheck, CoreError>> + Send;

    fn record_depay_callback(
        &self,
        payload: Value,
    ) -> impl Future<Output = Result<PaymentCheck, CoreError>> + Send;
}
