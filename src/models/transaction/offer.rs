//! Decentralized-exchange offers: OfferCancel and OfferCreate.

use serde::{Deserialize, Serialize};

use super::required;
use crate::models::amount::XrpCurrencyAmount;
use crate::models::error::DecodeError;
use crate::models::wire::{WireOfferCancel, WireOfferCreate};

/// Withdraws a previously placed offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XrpOfferCancel {
    /// Sequence number of the transaction that placed the offer.
    pub offer_sequence: u32,
}

impl XrpOfferCancel {
    pub fn from_wire(wire: &WireOfferCancel) -> Result<Self, DecodeError> {
        let offer_sequence = required(&wire.offer_sequence, "OfferCancel", "offer sequence")?;
        Ok(XrpOfferCancel { offer_sequence })
    }
}

/// Places an exchange offer: the sender pays up to `taker_gets` to receive
/// `taker_pays`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XrpOfferCreate {
    pub taker_gets: XrpCurrencyAmount,
    pub taker_pays: XrpCurrencyAmount,
    pub expiration: Option<u32>,
    /// An offer to replace, if this offer supersedes an existing one.
    pub offer_sequence: Option<u32>,
}

impl XrpOfferCreate {
    pub fn from_wire(wire: &WireOfferCreate) -> Result<Self, DecodeError> {
        let taker_gets = wire
            .taker_gets
            .as_ref()
            .ok_or_else(|| {
                DecodeError::InvalidTransaction(
                    "OfferCreate is missing its mandatory taker gets field".to_string(),
                )
            })
            .and_then(XrpCurrencyAmount::from_wire)?;

        let taker_pays = wire
            .taker_pays
            .as_ref()
            .ok_or_else(|| {
                DecodeError::InvalidTransaction(
                    "OfferCreate is missing its mandatory taker pays field".to_string(),
                )
            })
            .and_then(XrpCurrencyAmount::from_wire)?;

        Ok(XrpOfferCreate {
            taker_gets,
            taker_pays,
            expiration: wire.expiration,
            offer_sequence: wire.offer_sequence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::test_destination;
    use super::*;
    use crate::models::wire::{WireCurrency, WireCurrencyAmount, WireIssuedCurrency};

    fn drops(drops: &str) -> WireCurrencyAmount {
        WireCurrencyAmount {
            xrp_drops: Some(drops.to_string()),
            issued_currency: None,
        }
    }

    fn issued(value: &str) -> WireCurrencyAmount {
        WireCurrencyAmount {
            xrp_drops: None,
            issued_currency: Some(WireIssuedCurrency {
                currency: Some(WireCurrency {
                    name: Some("USD".to_string()),
                    code: None,
                }),
                issuer: Some(test_destination()),
                value: Some(value.to_string()),
            }),
        }
    }

    #[test]
    fn test_offer_cancel() {
        let wire = WireOfferCancel {
            offer_sequence: Some(6),
        };
        let offer_cancel = XrpOfferCancel::from_wire(&wire).unwrap();
        assert_eq!(offer_cancel.offer_sequence, 6);
    }

    #[test]
    fn test_offer_cancel_rejects_missing_offer_sequence() {
        assert!(matches!(
            XrpOfferCancel::from_wire(&WireOfferCancel::default()),
            Err(DecodeError::InvalidTransaction(_))
        ));
    }

    #[test]
    fn test_offer_create_all_fields() {
        let wire = WireOfferCreate {
            expiration: Some(570_113_521),
            offer_sequence: Some(12),
            taker_gets: Some(drops("1000000")),
            taker_pays: Some(issued("57.5")),
        };
        let offer_create = XrpOfferCreate::from_wire(&wire).unwrap();
        assert_eq!(offer_create.taker_gets, XrpCurrencyAmount::Drops(1_000_000));
        assert!(matches!(
            offer_create.taker_pays,
            XrpCurrencyAmount::Issued(_)
        ));
        assert_eq!(offer_create.expiration, Some(570_113_521));
        assert_eq!(offer_create.offer_sequence, Some(12));
    }

    #[test]
    fn test_offer_create_mandatory_fields_only() {
        let wire = WireOfferCreate {
            expiration: None,
            offer_sequence: None,
            taker_gets: Some(drops("1000000")),
            taker_pays: Some(issued("57.5")),
        };
        let offer_create = XrpOfferCreate::from_wire(&wire).unwrap();
        assert_eq!(offer_create.expiration, None);
        assert_eq!(offer_create.offer_sequence, None);
    }

    #[test]
    fn test_offer_create_rejects_missing_amounts() {
        let missing_taker_gets = WireOfferCreate {
            taker_gets: None,
            taker_pays: Some(issued("57.5")),
            ..Default::default()
        };
        assert!(matches!(
            XrpOfferCreate::from_wire(&missing_taker_gets),
            Err(DecodeError::InvalidTransaction(_))
        ));

        let missing_taker_pays = WireOfferCreate {
            taker_gets: Some(drops("1000000")),
            taker_pays: None,
            ..Default::default()
        };
        assert!(matches!(
            XrpOfferCreate::from_wire(&missing_taker_pays),
            Err(DecodeError::InvalidTransaction(_))
        ));
    }
}
