use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

pub const WEI_PER_ETHER_DECIMALS: u32 = 18;
const WEI_PER_ETHER: u128 = 10u128.pow(WEI_PER_ETHER_DECIMALS);

#[derive(Debug, Clone)]
pub struct CheckTransactionInput {
    pub tx_hash: String,
    /// Expected amount in ether, e.g. `"0.01"`.
    pub amount: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WebhookPayload {
    pub event: Option<String>,
    pub hash: Option<String>,
}

impl WebhookPayload {
    pub const MINED_TRANSACTION: &'static str = "mined_transaction";

    /// The transaction hash, when this is a mined transaction notification.
    pub fn mined_transaction_hash(&self) -> Option<&str> {
        match (self.event.as_deref(), self.hash.as_deref()) {
            (Some(Self::MINED_TRANSACTION), Some(hash)) => Some(hash),
            _ => None,
        }
    }
}

/// `0x` followed by 64 hex digits.
pub fn is_valid_tx_hash(hash: &str) -> bool {
    hash.strip_prefix("0x")
        .or_else(|| hash.strip_prefix("0X"))
        .is_some_and(|digits| digits.len() == 64 && digits.chars().all(|c| c.is_ascii_hexdigit()))
}

/// Exact ether to wei conversion. Accepts `"1"`, `"0.015"`, `".5"` and
/// exponent forms such as `"1.5e-3"`. Amounts finer than one wei are
/// rejected.
pub fn ether_to_wei(amount: &str) -> Result<u128, CoreError> {
    let invalid = || CoreError::InvalidInput(format!("invalid ether amount: {amount:?}"));

    let amount = amount.trim();
    let (mantissa, exponent) = match amount.find(['e', 'E']) {
        Some(index) => {
            let exponent: i32 = amount[index + 1..].parse().map_err(|_| invalid())?;
            (&amount[..index], exponent)
        }
        None => (amount, 0),
    };

    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let digits = format!("{whole}{fraction}");
    let digits = digits.trim_start_matches('0');
    let scale = WEI_PER_ETHER_DECIMALS as i64 + i64::from(exponent) - fraction.len() as i64;

    if digits.is_empty() {
        return Ok(0);
    }

    let value: u128 = digits.parse().map_err(|_| invalid())?;
    if scale >= 0 {
        let factor = 10u128.checked_pow(u32::try_from(scale).map_err(|_| invalid())?);
        factor
            .and_then(|factor| value.checked_mul(factor))
            .ok_or_else(invalid)
    } else {
        let divisor = u32::try_from(-scale)
            .ok()
            .and_then(|scale| 10u128.checked_pow(scale));
        match divisor {
            Some(divisor) if value % divisor == 0 => Ok(value / divisor),
            _ => Err(invalid()),
        }
    }
}

/// Render wei as ether without trailing zeros, e.g. `10^16` as `"0.01"`.
pub fn wei_to_ether(value: u128) -> String {
    let whole = value / WEI_PER_ETHER;
    let fraction = value % WEI_PER_ETHER;

    if fraction == 0 {
        return whole.to_string();
    }

    let fraction = format!("{fraction:018}");
    format!("{whole}.{}", fraction.trim_end_matches('0'))
}
