//! TrustSet: creates or modifies a trust line to an issuer.

use serde::{Deserialize, Serialize};

use crate::models::amount::XrpCurrencyAmount;
use crate::models::error::DecodeError;
use crate::models::wire::WireTrustSet;

/// Creates or modifies a trust line. Trust lines only exist for issued
/// currencies, so the limit amount can never be native XRP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XrpTrustSet {
    pub limit_amount: XrpCurrencyAmount,
    pub quality_in: Option<u32>,
    pub quality_out: Option<u32>,
}

impl XrpTrustSet {
    pub fn from_wire(wire: &WireTrustSet) -> Result<Self, DecodeError> {
        let limit_amount = wire
            .limit_amount
            .as_ref()
            .ok_or_else(|| {
                DecodeError::InvalidTransaction(
                    "TrustSet is missing its mandatory limit amount field".to_string(),
                )
            })
            .and_then(XrpCurrencyAmount::from_wire)?;

        if limit_amount.is_native() {
            return Err(DecodeError::InvalidTransaction(
                "TrustSet limit amount must not use the native currency".to_string(),
            ));
        }

        Ok(XrpTrustSet {
            limit_amount,
            quality_in: wire.quality_in,
            quality_out: wire.quality_out,
        })
    }
}
