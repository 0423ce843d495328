//! Currency amount codec.
//!
//! A wire amount is either a native drops magnitude or an issued-currency
//! triple; the wire union must carry exactly one of the two. Decoding is a
//! pure function with no side effects.

use serde::{Deserialize, Serialize};

use crate::constants::NATIVE_CURRENCY_CODE;
use crate::models::error::DecodeError;
use crate::models::wire::{WireCurrencyAmount, WireIssuedCurrency};

/// A validated currency amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum XrpCurrencyAmount {
    /// Native currency, as a non-negative magnitude in drops (the ledger's
    /// smallest unit).
    Drops(u64),
    /// Issued (non-native) currency held against an issuer.
    Issued(XrpIssuedCurrency),
}

/// An issued-currency amount. Invariant: `currency` is never the native
/// currency code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XrpIssuedCurrency {
    pub currency: String,
    pub issuer: String,
    pub value: String,
}

impl XrpCurrencyAmount {
    /// Decode a wire amount into a validated amount.
    ///
    /// Fails with [`DecodeError::InvalidAmount`] when the wire union carries
    /// neither or both members, when a drops value is not a non-negative
    /// integer, or when the issued triple is incomplete or claims the native
    /// currency code.
    pub fn from_wire(wire: &WireCurrencyAmount) -> Result<Self, DecodeError> {
        match (&wire.xrp_drops, &wire.issued_currency) {
            (Some(drops), None) => {
                let drops = drops.parse::<u64>().map_err(|_| {
                    DecodeError::InvalidAmount(format!(
                        "drops value '{drops}' is not a non-negative integer"
                    ))
                })?;
                Ok(XrpCurrencyAmount::Drops(drops))
            }
            (None, Some(issued)) => Ok(XrpCurrencyAmount::Issued(XrpIssuedCurrency::from_wire(
                issued,
            )?)),
            (Some(_), Some(_)) => Err(DecodeError::InvalidAmount(
                "amount carries both a drops value and an issued currency".to_string(),
            )),
            (None, None) => Err(DecodeError::InvalidAmount(
                "amount carries neither a drops value nor an issued currency".to_string(),
            )),
        }
    }

    /// Whether this amount is denominated in the native currency.
    pub fn is_native(&self) -> bool {
        matches!(self, XrpCurrencyAmount::Drops(_))
    }

    /// The drops magnitude, if this is a native amount.
    pub fn drops(&self) -> Option<u64> {
        match self {
            XrpCurrencyAmount::Drops(drops) => Some(*drops),
            XrpCurrencyAmount::Issued(_) => None,
        }
    }
}

impl XrpIssuedCurrency {
    fn from_wire(wire: &WireIssuedCurrency) -> Result<Self, DecodeError> {
        let currency = wire
            .currency
            .as_ref()
            .and_then(|currency| currency.name.clone())
            .ok_or_else(|| {
                DecodeError::InvalidAmount(
                    "issued currency is missing its currency code".to_string(),
                )
            })?;

        if currency == NATIVE_CURRENCY_CODE {
            return Err(DecodeError::InvalidAmount(
                "issued currency must not use the native currency code".to_string(),
            ));
        }

        let issuer = wire.issuer.clone().ok_or_else(|| {
            DecodeError::InvalidAmount("issued currency is missing its issuer".to_string())
        })?;

        let value = wire.value.clone().ok_or_else(|| {
            DecodeError::InvalidAmount("issued currency is missing its value".to_string())
        })?;

        let numeric = value.parse::<f64>().map_err(|_| {
            DecodeError::InvalidAmount(format!("issued currency value '{value}' is not numeric"))
        })?;
        if !numeric.is_finite() || numeric < 0.0 {
            return Err(DecodeError::InvalidAmount(format!(
                "issued currency value '{value}' is not a non-negative decimal"
            )));
        }

        Ok(XrpIssuedCurrency {
            currency,
            issuer,
            value,
        })
    }
}
