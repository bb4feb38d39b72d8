use serde_json::Value;
use tracing::instrument;

use crate::domain::{
    chat::ports::ChatClient,
    common::{entities::app_errors::CoreError, services::Service},
    menu::ports::MenuRepository,
    payment::{
        entities::{PaymentCheck, PaymentGateway},
        ports::{EthereumClient, PaymentService},
        value_objects::{
            CheckTransactionInput, WebhookPayload, ether_to_wei, is_valid_tx_hash, wei_to_ether,
        },
    },
    session::ports::SessionRepository,
    voice::ports::{AudioPlayer, AudioRecorder, SpeechRecognizer, SpeechSynthesizer},
};

pub const PAYMENT_RECEIVED: &str = "Payment received!";
pub const PAYMENT_NOT_FOUND: &str = "Transaction not found or incorrect amount.";
pub const TRANSACTION_RECEIVED: &str = "Transaction received!";
pub const INVALID_WEBHOOK: &str = "Invalid data.";
pub const CALLBACK_RECEIVED: &str = "Callback received.";

impl<M, L, S, E, TTS, STT, AR, AP> Service<M, L, S, E, TTS, STT, AR, AP>
where
    M: MenuRepository,
    L: ChatClient,
    S: SessionRepository,
    E: EthereumClient,
    TTS: SpeechSynthesizer,
    STT: SpeechRecognizer,
    AR: AudioRecorder,
    AP: AudioPlayer,
{
    fn payment_gateway(&self) -> Result<&PaymentGateway<E>, CoreError> {
        self.payment.as_ref().ok_or(CoreError::PaymentsDisabled)
    }
}

impl<M, L, S, E, TTS, STT, AR, AP> PaymentService for Service<M, L, S, E, TTS, STT, AR, AP>
where
    M: MenuRepository,
    L: ChatClient,
    S: SessionRepository,
    E: EthereumClient,
    TTS: SpeechSynthesizer,
    STT: SpeechRecognizer,
    AR: AudioRecorder,
    AP: AudioPlayer,
{
    fn payments_enabled(&self) -> bool {
        self.payment.is_some()
    }

    fn payment_uri(&self) -> Result<String, CoreError> {
        let gateway = self.payment_gateway()?;

        Ok(format!("ethereum:{}", gateway.wallet_address))
    }

    #[instrument(skip(self, input), fields(tx_hash = %input.tx_hash))]
    async fn check_transaction(
        &self,
        input: CheckTransactionInput,
    ) -> Result<PaymentCheck, CoreError> {
        let gateway = self.payment_gateway()?;

        if !is_valid_tx_hash(&input.tx_hash) {
            return Err(CoreError::InvalidInput(format!(
                "invalid transaction hash: {}",
                input.tx_hash
            )));
        }
        let expected = ether_to_wei(&input.amount)?;

        let transaction = gateway
            .client
            .get_transaction_by_hash(input.tx_hash.clone())
            .await?;

        let paid = transaction
            .as_ref()
            .is_some_and(|tx| tx.pays(&gateway.wallet_address) && tx.value == expected);

        if paid {
            tracing::info!(amount = %input.amount, "Payment verified");
            Ok(PaymentCheck::success(PAYMENT_RECEIVED))
        } else {
            tracing::warn!(
                found = transaction.is_some(),
                amount = %input.amount,
                "Payment check failed"
            );
            Ok(PaymentCheck::failure(PAYMENT_NOT_FOUND))
        }
    }

    #[instrument(skip(self, payload), fields(event = ?payload.event))]
    async fn handle_webhook(&self, payload: WebhookPayload) -> Result<PaymentCheck, CoreError> {
        let gateway = self.payment_gateway()?;

        let Some(hash) = payload.mined_transaction_hash() else {
            return Ok(PaymentCheck::failure(INVALID_WEBHOOK));
        };
        if !is_valid_tx_hash(hash) {
            return Ok(PaymentCheck::failure(INVALID_WEBHOOK));
        }

        let transaction = gateway
            .client
            .get_transaction_by_hash(hash.to_string())
            .await?;

        match transaction {
            Some(tx) if tx.pays(&gateway.wallet_address) => {
                let amount = wei_to_ether(tx.value);
                tracing::info!(tx_hash = %tx.hash, from = %tx.from, %amount, "Transaction received");

                Ok(PaymentCheck::success(TRANSACTION_RECEIVED).with_amount_received(amount))
            }
            _ => Ok(PaymentCheck::failure(INVALID_WEBHOOK)),
        }
    }

    async fn record_depay_callback(&self, payload: Value) -> Result<PaymentCheck, CoreError> {
        self.payment_gateway()?;

        tracing::info!(%payload, "DePay callback received");

        Ok(PaymentCheck::success(CALLBACK_RECEIVED))
    }
}
