//! Wire-format transaction records as delivered by the XRPL query interface.
//!
//! These types belong to the transport boundary: they are produced by the
//! transport layer, passed into the decoders by reference for the duration of
//! one decode, and never mutated. Every field is optional on the wire; the
//! decoders in [`crate::models::transaction`] are the only place where
//! presence and cross-field rules are enforced.

use serde::{Deserialize, Serialize};

use crate::utils::hex_bytes_option;

/// A raw transaction record: the common envelope fields plus the tagged
/// union of kind-specific payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WireTransaction {
    pub account: Option<String>,
    pub fee_drops: Option<String>,
    pub sequence: Option<u32>,
    #[serde(default, with = "hex_bytes_option")]
    pub signing_public_key: Option<Vec<u8>>,
    pub last_ledger_sequence: Option<u32>,
    pub source_tag: Option<u32>,
    pub flags: Option<u32>,
    /// Ledger close time in seconds since the ripple epoch.
    pub date: Option<u32>,
    #[serde(default)]
    pub memos: Vec<WireMemo>,
    pub data: Option<WireTransactionData>,
}

/// The kind-specific payload union. An unrecognized tag deserializes to
/// [`WireTransactionData::Unknown`] so the dispatcher, not the transport,
/// owns the unknown-type error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "transaction_type")]
pub enum WireTransactionData {
    AccountSet(WireAccountSet),
    AccountDelete(WireAccountDelete),
    CheckCancel(WireCheckCancel),
    CheckCash(WireCheckCash),
    CheckCreate(WireCheckCreate),
    DepositPreauth(WireDepositPreauth),
    EscrowCancel(WireEscrowCancel),
    EscrowCreate(WireEscrowCreate),
    EscrowFinish(WireEscrowFinish),
    OfferCancel(WireOfferCancel),
    OfferCreate(WireOfferCreate),
    Payment(WirePayment),
    PaymentChannelClaim(WirePaymentChannelClaim),
    PaymentChannelCreate(WirePaymentChannelCreate),
    PaymentChannelFund(WirePaymentChannelFund),
    SetRegularKey(WireSetRegularKey),
    SignerListSet(WireSignerListSet),
    TrustSet(WireTrustSet),
    #[serde(other)]
    Unknown,
}

/// A currency amount on the wire: either a native drops magnitude or an
/// issued-currency triple. Exactly one member must be present; the amount
/// codec rejects anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WireCurrencyAmount {
    pub xrp_drops: Option<String>,
    pub issued_currency: Option<WireIssuedCurrency>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WireIssuedCurrency {
    pub currency: Option<WireCurrency>,
    pub issuer: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WireCurrency {
    pub name: Option<String>,
    #[serde(default, with = "hex_bytes_option")]
    pub code: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WireMemo {
    #[serde(default, with = "hex_bytes_option")]
    pub data: Option<Vec<u8>>,
    #[serde(default, with = "hex_bytes_option")]
    pub format: Option<Vec<u8>>,
    #[serde(default, with = "hex_bytes_option")]
    pub memo_type: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WireAccountSet {
    pub clear_flag: Option<u32>,
    pub domain: Option<String>,
    #[serde(default, with = "hex_bytes_option")]
    pub email_hash: Option<Vec<u8>>,
    #[serde(default, with = "hex_bytes_option")]
    pub message_key: Option<Vec<u8>>,
    pub set_flag: Option<u32>,
    pub transfer_rate: Option<u32>,
    pub tick_size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WireAccountDelete {
    pub destination: Option<String>,
    pub destination_tag: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WireCheckCancel {
    #[serde(default, with = "hex_bytes_option")]
    pub check_id: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WireCheckCash {
    #[serde(default, with = "hex_bytes_option")]
    pub check_id: Option<Vec<u8>>,
    pub amount: Option<WireCurrencyAmount>,
    pub deliver_min: Option<WireCurrencyAmount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WireCheckCreate {
    pub destination: Option<String>,
    pub destination_tag: Option<u32>,
    pub send_max: Option<WireCurrencyAmount>,
    pub expiration: Option<u32>,
    #[serde(default, with = "hex_bytes_option")]
    pub invoice_id: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WireDepositPreauth {
    pub authorize: Option<String>,
    pub unauthorize: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WireEscrowCancel {
    pub owner: Option<String>,
    pub offer_sequence: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WireEscrowCreate {
    pub amount: Option<WireCurrencyAmount>,
    pub destination: Option<String>,
    pub destination_tag: Option<u32>,
    pub cancel_after: Option<u32>,
    pub finish_after: Option<u32>,
    #[serde(default, with = "hex_bytes_option")]
    pub condition: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WireEscrowFinish {
    pub owner: Option<String>,
    pub offer_sequence: Option<u32>,
    #[serde(default, with = "hex_bytes_option")]
    pub condition: Option<Vec<u8>>,
    #[serde(default, with = "hex_bytes_option")]
    pub fulfillment: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WireOfferCancel {
    pub offer_sequence: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WireOfferCreate {
    pub expiration: Option<u32>,
    pub offer_sequence: Option<u32>,
    pub taker_gets: Option<WireCurrencyAmount>,
    pub taker_pays: Option<WireCurrencyAmount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WirePayment {
    pub amount: Option<WireCurrencyAmount>,
    pub destination: Option<String>,
    pub destination_tag: Option<u32>,
    pub deliver_min: Option<WireCurrencyAmount>,
    #[serde(default, with = "hex_bytes_option")]
    pub invoice_id: Option<Vec<u8>>,
    #[serde(default)]
    pub paths: Vec<WirePath>,
    pub send_max: Option<WireCurrencyAmount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WirePath {
    #[serde(default)]
    pub elements: Vec<WirePathElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WirePathElement {
    pub account: Option<String>,
    pub currency: Option<WireCurrency>,
    pub issuer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WirePaymentChannelClaim {
    #[serde(default, with = "hex_bytes_option")]
    pub channel: Option<Vec<u8>>,
    pub balance: Option<WireCurrencyAmount>,
    pub amount: Option<WireCurrencyAmount>,
    #[serde(default, with = "hex_bytes_option")]
    pub signature: Option<Vec<u8>>,
    #[serde(default, with = "hex_bytes_option")]
    pub public_key: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WirePaymentChannelCreate {
    pub amount: Option<WireCurrencyAmount>,
    pub destination: Option<String>,
    pub destination_tag: Option<u32>,
    pub settle_delay: Option<u32>,
    #[serde(default, with = "hex_bytes_option")]
    pub public_key: Option<Vec<u8>>,
    pub cancel_after: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WirePaymentChannelFund {
    #[serde(default, with = "hex_bytes_option")]
    pub channel: Option<Vec<u8>>,
    pub amount: Option<WireCurrencyAmount>,
    pub expiration: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WireSetRegularKey {
    pub regular_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WireSignerListSet {
    pub signer_quorum: Option<u32>,
    #[serde(default)]
    pub signer_entries: Vec<WireSignerEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WireSignerEntry {
    pub account: Option<String>,
    pub signer_weight: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WireTrustSet {
    pub limit_amount: Option<WireCurrencyAmount>,
    pub quality_in: Option<u32>,
    pub quality_out: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_transaction_type_tag_deserializes_to_unknown() {
        let raw = r#"{"transaction_type": "NftOfferCreate"}"#;
        let data: WireTransactionData = serde_json::from_str(raw).unwrap();
        assert_eq!(data, WireTransactionData::Unknown);
    }

    #[test]
    fn test_known_transaction_type_tag_roundtrips() {
        let data = WireTransactionData::OfferCancel(WireOfferCancel {
            offer_sequence: Some(42),
        });
        let encoded = serde_json::to_string(&data).unwrap();
        let decoded: WireTransactionData = serde_json::from_str(&encoded).unwrap();
        assert_eq!(data, decoded);
    }

    #[test]
    fn test_byte_fields_serialize_as_hex() {
        let wire = WireCheckCancel {
            check_id: Some(vec![0x49, 0x13]),
        };
        let encoded = serde_json::to_string(&wire).unwrap();
        assert_eq!(encoded, r#"{"check_id":"4913"}"#);
        assert_eq!(serde_json::from_str::<WireCheckCancel>(&encoded).unwrap(), wire);
    }
}
