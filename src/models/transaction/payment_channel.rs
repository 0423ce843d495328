//! Payment channel transactions: PaymentChannelClaim, PaymentChannelCreate
//! and PaymentChannelFund.

use serde::{Deserialize, Serialize};

use super::{encode_x_address_field, required, required_bytes};
use crate::models::amount::XrpCurrencyAmount;
use crate::models::error::DecodeError;
use crate::models::network::XrplNetwork;
use crate::models::wire::{
    WirePaymentChannelClaim, WirePaymentChannelCreate, WirePaymentChannelFund,
};
use crate::services::address::AddressCodec;

/// Claims XRP from a payment channel, adjusts its expiration, or both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XrpPaymentChannelClaim {
    pub channel: Vec<u8>,
    pub balance: Option<XrpCurrencyAmount>,
    pub amount: Option<XrpCurrencyAmount>,
    pub signature: Option<Vec<u8>>,
    pub public_key: Option<Vec<u8>>,
}

impl XrpPaymentChannelClaim {
    pub fn from_wire(wire: &WirePaymentChannelClaim) -> Result<Self, DecodeError> {
        let channel = required_bytes(&wire.channel, "PaymentChannelClaim", "channel")?;

        // A claim signature is meaningless without the key to verify it
        // against. The reverse (key without signature) is allowed.
        if wire.signature.is_some() && wire.public_key.is_none() {
            return Err(DecodeError::InvalidTransaction(
                "PaymentChannelClaim with a signature requires a public key".to_string(),
            ));
        }

        let balance = wire
            .balance
            .as_ref()
            .map(XrpCurrencyAmount::from_wire)
            .transpose()?;
        let amount = wire
            .amount
            .as_ref()
            .map(XrpCurrencyAmount::from_wire)
            .transpose()?;

        Ok(XrpPaymentChannelClaim {
            channel,
            balance,
            amount,
            signature: wire.signature.clone(),
            public_key: wire.public_key.clone(),
        })
    }
}

/// Opens a payment channel from the sender to a destination account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XrpPaymentChannelCreate {
    pub amount: XrpCurrencyAmount,
    pub destination_x_address: String,
    /// Seconds the source must wait after requesting a close before the
    /// channel actually closes.
    pub settle_delay: u32,
    pub public_key: Vec<u8>,
    pub cancel_after: Option<u32>,
}

impl XrpPaymentChannelCreate {
    pub fn from_wire(
        wire: &WirePaymentChannelCreate,
        network: XrplNetwork,
        codec: &dyn AddressCodec,
    ) -> Result<Self, DecodeError> {
        let amount = wire
            .amount
            .as_ref()
            .ok_or_else(|| {
                DecodeError::InvalidTransaction(
                    "PaymentChannelCreate is missing its mandatory amount field".to_string(),
                )
            })
            .and_then(XrpCurrencyAmount::from_wire)?;

        let destination = required(&wire.destination, "PaymentChannelCreate", "destination")?;
        let destination_x_address = encode_x_address_field(
            codec,
            network,
            &destination,
            wire.destination_tag,
            "PaymentChannelCreate destination",
        )?;

        let settle_delay = required(&wire.settle_delay, "PaymentChannelCreate", "settle delay")?;
        let public_key =
            required_bytes(&wire.public_key, "PaymentChannelCreate", "public key")?;

        Ok(XrpPaymentChannelCreate {
            amount,
            destination_x_address,
            settle_delay,
            public_key,
            cancel_after: wire.cancel_after,
        })
    }
}

/// Adds XRP to an open payment channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XrpPaymentChannelFund {
    pub channel: Vec<u8>,
    pub amount: XrpCurrencyAmount,
    pub expiration: Option<u32>,
}

impl XrpPaymentChannelFund {
    pub fn from_wire(wire: &WirePaymentChannelFund) -> Result<Self, DecodeError> {
        let channel = required_bytes(&wire.channel, "PaymentChannelFund", "channel")?;
        let amount = wire
            .amount
            .as_ref()
            .ok_or_else(|| {
                DecodeError::InvalidTransaction(
                    "PaymentChannelFund is missing its mandatory amount field".to_string(),
                )
            })
            .and_then(XrpCurrencyAmount::from_wire)?;

        Ok(XrpPaymentChannelFund {
            channel,
            amount,
            expiration: wire.expiration,
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

    fn channel_id() -> Vec<u8> {
        vec![0xC1; 32]
    }

    fn claim_all_fields() -> WirePaymentChannelClaim {
        WirePaymentChannelClaim {
            channel: Some(channel_id()),
            balance: Some(drops("1000")),
            amount: Some(drops("2000")),
            signature: Some(vec![0x30, 0x44]),
            public_key: Some(vec![0x02; 33]),
        }
    }

    #[test]
    fn test_payment_channel_claim_all_fields() {
        let claim = XrpPaymentChannelClaim::from_wire(&claim_all_fields()).unwrap();
        assert_eq!(claim.channel, channel_id());
        assert_eq!(claim.balance, Some(XrpCurrencyAmount::Drops(1000)));
        assert_eq!(claim.amount, Some(XrpCurrencyAmount::Drops(2000)));
        assert_eq!(claim.signature, Some(vec![0x30, 0x44]));
        assert_eq!(claim.public_key, Some(vec![0x02; 33]));
    }

    #[test]
    fn test_payment_channel_claim_mandatory_field_only() {
        let wire = WirePaymentChannelClaim {
            channel: Some(channel_id()),
            ..Default::default()
        };
        let claim = XrpPaymentChannelClaim::from_wire(&wire).unwrap();
        assert_eq!(claim.channel, channel_id());
        assert_eq!(claim.balance, None);
        assert_eq!(claim.amount, None);
        assert_eq!(claim.signature, None);
        assert_eq!(claim.public_key, None);
    }

    #[test]
    fn test_payment_channel_claim_rejects_missing_channel() {
        let wire = WirePaymentChannelClaim {
            channel: None,
            ..claim_all_fields()
        };
        assert!(matches!(
            XrpPaymentChannelClaim::from_wire(&wire),
            Err(DecodeError::InvalidTransaction(_))
        ));
    }

    #[test]
    fn test_payment_channel_claim_signature_requires_public_key() {
        let wire = WirePaymentChannelClaim {
            public_key: None,
            ..claim_all_fields()
        };
        assert!(matches!(
            XrpPaymentChannelClaim::from_wire(&wire),
            Err(DecodeError::InvalidTransaction(_))
        ));

        // A public key without a signature stays valid.
        let wire = WirePaymentChannelClaim {
            signature: None,
            ..claim_all_fields()
        };
        assert!(XrpPaymentChannelClaim::from_wire(&wire).is_ok());
    }

    fn create_all_fields() -> WirePaymentChannelCreate {
        WirePaymentChannelCreate {
            amount: Some(drops("1000000")),
            destination: Some(test_destination()),
            destination_tag: Some(11),
            settle_delay: Some(86_400),
            public_key: Some(vec![0x02; 33]),
            cancel_after: Some(570_113_521),
        }
    }

    #[test]
    fn test_payment_channel_create_all_fields() {
        let codec = FakeAddressCodec;
        let create =
            XrpPaymentChannelCreate::from_wire(&create_all_fields(), TEST_NETWORK, &codec).unwrap();
        assert_eq!(create.amount, XrpCurrencyAmount::Drops(1_000_000));
        assert_eq!(
            create.destination_x_address,
            expected_x_address(&test_destination(), Some(11))
        );
        assert_eq!(create.settle_delay, 86_400);
        assert_eq!(create.public_key, vec![0x02; 33]);
        assert_eq!(create.cancel_after, Some(570_113_521));
    }

    #[test]
    fn test_payment_channel_create_mandatory_fields_only() {
        let codec = FakeAddressCodec;
        let wire = WirePaymentChannelCreate {
            cancel_after: None,
            destination_tag: None,
            ..create_all_fields()
        };
        let create = XrpPaymentChannelCreate::from_wire(&wire, TEST_NETWORK, &codec).unwrap();
        assert_eq!(create.cancel_after, None);
        assert_eq!(
            create.destination_x_address,
            expected_x_address(&test_destination(), None)
        );
    }

    #[test]
    fn test_payment_channel_create_rejects_missing_mandatory_fields() {
        let codec = FakeAddressCodec;

        for strip in ["amount", "destination", "settle_delay", "public_key"] {
            let mut wire = create_all_fields();
            match strip {
                "amount" => wire.amount = None,
                "destination" => wire.destination = None,
                "settle_delay" => wire.settle_delay = None,
                "public_key" => wire.public_key = None,
                _ => unreachable!(),
            }
            let result = XrpPaymentChannelCreate::from_wire(&wire, TEST_NETWORK, &codec);
            assert!(
                matches!(result, Err(DecodeError::InvalidTransaction(_))),
                "expected InvalidTransaction when {strip} is absent"
            );
        }
    }

    #[test]
    fn test_payment_channel_create_rejects_bad_destination() {
        let codec = FakeAddressCodec;
        let wire = WirePaymentChannelCreate {
            destination: Some(bad_address()),
            ..create_all_fields()
        };
        assert!(matches!(
            XrpPaymentChannelCreate::from_wire(&wire, TEST_NETWORK, &codec),
            Err(DecodeError::InvalidTransaction(_))
        ));
    }

    #[test]
    fn test_payment_channel_fund() {
        let all = WirePaymentChannelFund {
            channel: Some(channel_id()),
            amount: Some(drops("1000")),
            expiration: Some(570_113_521),
        };
        let fund = XrpPaymentChannelFund::from_wire(&all).unwrap();
        assert_eq!(fund.channel, channel_id());
        assert_eq!(fund.amount, XrpCurrencyAmount::Drops(1000));
        assert_eq!(fund.expiration, Some(570_113_521));

        let mandatory = WirePaymentChannelFund {
            expiration: None,
            ..all
        };
        let fund = XrpPaymentChannelFund::from_wire(&mandatory).unwrap();
        assert_eq!(fund.expiration, None);
    }

    #[test]
    fn test_payment_channel_fund_rejects_missing_mandatory_fields() {
        let missing_channel = WirePaymentChannelFund {
            channel: None,
            amount: Some(drops("1000")),
            expiration: None,
        };
        assert!(matches!(
            XrpPaymentChannelFund::from_wire(&missing_channel),
            Err(DecodeError::InvalidTransaction(_))
        ));

        let missing_amount = WirePaymentChannelFund {
            channel: Some(channel_id()),
            amount: None,
            expiration: None,
        };
        assert!(matches!(
            XrpPaymentChannelFund::from_wire(&missing_amount),
            Err(DecodeError::InvalidTransaction(_))
        ));
    }
}
