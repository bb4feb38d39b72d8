use menubot_core::domain::payment::value_objects::WebhookPayload;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

/// Amounts arrive as `"0.01"` or `0.01`; both keep their decimal text.
fn amount_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(text) => text,
        TextOrNumber::Number(number) => number.to_string(),
    })
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CheckTransactionValidator {
    #[validate(length(equal = 66, message = "tx_hash must be 0x followed by 64 hex digits"))]
    pub tx_hash: String,

    /// Expected amount in ether, as a string or a number.
    #[serde(deserialize_with = "amount_text")]
    #[validate(length(min = 1, message = "amount is required"))]
    pub amount: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct WebhookValidator {
    #[serde(default)]
    pub event: Option<String>,

    #[serde(default)]
    pub hash: Option<String>,
}

impl From<WebhookValidator> for WebhookPayload {
    fn from(payload: WebhookValidator) -> Self {
        WebhookPayload {
            event: payload.event,
            hash: payload.hash,
        }
    }
}
