use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The fields of an on-chain transaction a payment check looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnChainTransaction {
    pub hash: String,
    pub from: String,
    /// `None` for contract creations.
    pub to: Option<String>,
    /// Value in wei.
    pub value: u128,
}

impl OnChainTransaction {
    pub fn pays(&self, wallet_address: &str) -> bool {
        self.to
            .as_deref()
            .is_some_and(|to| to.eq_ignore_ascii_case(wallet_address))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaymentCheck {
    pub status: PaymentStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_received: Option<String>,
}

impl PaymentCheck {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: PaymentStatus::Success,
            message: message.into(),
            amount_received: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: PaymentStatus::Failure,
            message: message.into(),
            amount_received: None,
        }
    }

    pub fn with_amount_received(mut self, amount: impl Into<String>) -> Self {
        self.amount_received = Some(amount.into());
        self
    }

    pub fn is_success(&self) -> bool {
        self.status == PaymentStatus::Success
    }
}

/// An Ethereum client bound to the wallet that receives payments.
#[derive(Debug, Clone)]
pub struct PaymentGateway<E> {
    pub client: E,
    pub wallet_address: String,
}

impl<E> PaymentGateway<E> {
    pub fn new(client: E, wallet_address: impl Into<String>) -> Self {
        Self {
            client,
            wallet_address: wallet_address.into(),
        }
    }
}
