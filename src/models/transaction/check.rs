//! Check transactions: CheckCancel, CheckCash and CheckCreate.

use serde::{Deserialize, Serialize};

use super::{encode_x_address_field, required, required_bytes};
use crate::models::amount::XrpCurrencyAmount;
use crate::models::error::DecodeError;
use crate::models::network::XrplNetwork;
use crate::models::wire::{WireCheckCancel, WireCheckCash, WireCheckCreate};
use crate::services::address::AddressCodec;

/// Cancels an unredeemed check, removing it from the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XrpCheckCancel {
    /// Ledger object ID of the check to cancel.
    pub check_id: Vec<u8>,
}

impl XrpCheckCancel {
    pub fn from_wire(wire: &WireCheckCancel) -> Result<Self, DecodeError> {
        let check_id = required_bytes(&wire.check_id, "CheckCancel", "check ID")?;
        Ok(XrpCheckCancel { check_id })
    }
}

/// Redeems a check. Exactly one of `amount` (cash for a fixed amount) and
/// `deliver_min` (cash for a flexible amount) must be present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XrpCheckCash {
    pub check_id: Vec<u8>,
    pub amount: Option<XrpCurrencyAmount>,
    pub deliver_min: Option<XrpCurrencyAmount>,
}

impl XrpCheckCash {
    pub fn from_wire(wire: &WireCheckCash) -> Result<Self, DecodeError> {
        let check_id = required_bytes(&wire.check_id, "CheckCash", "check ID")?;

        let amount = wire
            .amount
            .as_ref()
            .map(XrpCurrencyAmount::from_wire)
            .transpose()?;
        let deliver_min = wire
            .deliver_min
            .as_ref()
            .map(XrpCurrencyAmount::from_wire)
            .transpose()?;

        match (&amount, &deliver_min) {
            (None, None) => Err(DecodeError::InvalidTransaction(
                "CheckCash requires either an amount or a deliver minimum".to_string(),
            )),
            (Some(_), Some(_)) => Err(DecodeError::InvalidTransaction(
                "CheckCash must not set both an amount and a deliver minimum".to_string(),
            )),
            _ => Ok(XrpCheckCash {
                check_id,
                amount,
                deliver_min,
            }),
        }
    }
}

/// Creates a check that the destination can later cash for up to the
/// `send_max` amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XrpCheckCreate {
    pub destination_x_address: String,
    pub send_max: XrpCurrencyAmount,
    pub expiration: Option<u32>,
    pub invoice_id: Option<Vec<u8>>,
}

impl XrpCheckCreate {
    pub fn from_wire(
        wire: &WireCheckCreate,
        network: XrplNetwork,
        codec: &dyn AddressCodec,
    ) -> Result<Self, DecodeError> {
        let destination = required(&wire.destination, "CheckCreate", "destination")?;
        let destination_x_address = encode_x_address_field(
            codec,
            network,
            &destination,
            wire.destination_tag,
            "CheckCreate destination",
        )?;

        let send_max = wire
            .send_max
            .as_ref()
            .ok_or_else(|| {
                DecodeError::InvalidTransaction(
                    "CheckCreate is missing its mandatory send max field".to_string(),
                )
            })
            .and_then(XrpCurrencyAmount::from_wire)?;

        Ok(XrpCheckCreate {
            destination_x_address,
            send_max,
            expiration: wire.expiration,
            invoice_id: wire.invoice_id.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::{
        bad_address, expected_x_address, test_destination, FakeAddressCodec, TEST_NETWORK,
    };
    use super::*;
    use crate::models::wire::WireCurrencyAmount;

    fn drops(drops: &str) -> WireCurrencyAmount {
        WireCurrencyAmount {
            xrp_drops: Some(drops.to_string()),
            issued_currency: None,
        }
    }

    fn check_id() -> Vec<u8> {
        vec![0x49, 0x13, 0x8A, 0xC8]
    }

    #[test]
    fn test_check_cancel() {
        let wire = WireCheckCancel {
            check_id: Some(check_id()),
        };
        let check_cancel = XrpCheckCancel::from_wire(&wire).unwrap();
        assert_eq!(check_cancel.check_id, check_id());
    }

    #[test]
    fn test_check_cancel_rejects_missing_check_id() {
        for wire in [
            WireCheckCancel::default(),
            WireCheckCancel {
                check_id: Some(vec![]),
            },
        ] {
            assert!(matches!(
                XrpCheckCancel::from_wire(&wire),
                Err(DecodeError::InvalidTransaction(_))
            ));
        }
    }

    #[test]
    fn test_check_cash_with_amount() {
        let wire = WireCheckCash {
            check_id: Some(check_id()),
            amount: Some(drops("100")),
            deliver_min: None,
        };
        let check_cash = XrpCheckCash::from_wire(&wire).unwrap();
        assert_eq!(check_cash.check_id, check_id());
        assert_eq!(check_cash.amount, Some(XrpCurrencyAmount::Drops(100)));
        assert_eq!(check_cash.deliver_min, None);
    }

    #[test]
    fn test_check_cash_with_deliver_min() {
        let wire = WireCheckCash {
            check_id: Some(check_id()),
            amount: None,
            deliver_min: Some(drops("99")),
        };
        let check_cash = XrpCheckCash::from_wire(&wire).unwrap();
        assert_eq!(check_cash.amount, None);
        assert_eq!(check_cash.deliver_min, Some(XrpCurrencyAmount::Drops(99)));
    }

    #[test]
    fn test_check_cash_rejects_missing_check_id() {
        let wire = WireCheckCash {
            check_id: None,
            amount: Some(drops("100")),
            deliver_min: None,
        };
        assert!(matches!(
            XrpCheckCash::from_wire(&wire),
            Err(DecodeError::InvalidTransaction(_))
        ));
    }

    #[test]
    fn test_check_cash_enforces_amount_exclusivity() {
        let wire = WireCheckCash {
            check_id: Some(check_id()),
            amount: None,
            deliver_min: None,
        };
        assert!(matches!(
            XrpCheckCash::from_wire(&wire),
            Err(DecodeError::InvalidTransaction(_))
        ));

        let wire = WireCheckCash {
            check_id: Some(check_id()),
            amount: Some(drops("100")),
            deliver_min: Some(drops("99")),
        };
        assert!(matches!(
            XrpCheckCash::from_wire(&wire),
            Err(DecodeError::InvalidTransaction(_))
        ));
    }

    #[test]
    fn test_check_create_all_fields() {
        let codec = FakeAddressCodec;
        let wire = WireCheckCreate {
            destination: Some(test_destination()),
            destination_tag: Some(2),
            send_max: Some(drops("500")),
            expiration: Some(570_113_521),
            invoice_id: Some(vec![0x60; 32]),
        };
        let check_create = XrpCheckCreate::from_wire(&wire, TEST_NETWORK, &codec).unwrap();
        assert_eq!(
            check_create.destination_x_address,
            expected_x_address(&test_destination(), Some(2))
        );
        assert_eq!(check_create.send_max, XrpCurrencyAmount::Drops(500));
        assert_eq!(check_create.expiration, Some(570_113_521));
        assert_eq!(check_create.invoice_id, Some(vec![0x60; 32]));
    }

    #[test]
    fn test_check_create_mandatory_fields_only() {
        let codec = FakeAddressCodec;
        let wire = WireCheckCreate {
            destination: Some(test_destination()),
            destination_tag: None,
            send_max: Some(drops("500")),
            expiration: None,
            invoice_id: None,
        };
        let check_create = XrpCheckCreate::from_wire(&wire, TEST_NETWORK, &codec).unwrap();
        assert_eq!(
            check_create.destination_x_address,
            expected_x_address(&test_destination(), None)
        );
        assert_eq!(check_create.expiration, None);
        assert_eq!(check_create.invoice_id, None);
    }

    #[test]
    fn test_check_create_rejects_missing_or_bad_fields() {
        let codec = FakeAddressCodec;

        let missing_destination = WireCheckCreate {
            send_max: Some(drops("500")),
            ..Default::default()
        };
        assert!(matches!(
            XrpCheckCreate::from_wire(&missing_destination, TEST_NETWORK, &codec),
            Err(DecodeError::InvalidTransaction(_))
        ));

        let bad_destination = WireCheckCreate {
            destination: Some(bad_address()),
            send_max: Some(drops("500")),
            ..Default::default()
        };
        assert!(matches!(
            XrpCheckCreate::from_wire(&bad_destination, TEST_NETWORK, &codec),
            Err(DecodeError::InvalidTransaction(_))
        ));

        let missing_send_max = WireCheckCreate {
            destination: Some(test_destination()),
            ..Default::default()
        };
        assert!(matches!(
            XrpCheckCreate::from_wire(&missing_send_max, TEST_NETWORK, &codec),
            Err(DecodeError::InvalidTransaction(_))
        ));
    }
}
