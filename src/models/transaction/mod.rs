//! Validated domain transactions.
//!
//! Each XRPL transaction kind gets a domain struct whose only constructor is
//! a validating `from_wire` conversion; a value of one of these types exists
//! only if the full structural and semantic validation for its kind passed.
//! The kinds are grouped into family modules; [`TransactionPayload`] is the
//! closed variant over all of them and the single dispatch point for new
//! kinds.

mod account;
pub use account::*;

mod check;
pub use check::*;

mod escrow;
pub use escrow::*;

mod offer;
pub use offer::*;

mod payment;
pub use payment::*;

mod payment_channel;
pub use payment_channel::*;

mod signer_list;
pub use signer_list::*;

mod trust;
pub use trust::*;

#[cfg(test)]
pub(crate) mod test_helpers;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::constants::RIPPLE_EPOCH_OFFSET_SECONDS;
use crate::models::error::DecodeError;
use crate::models::network::XrplNetwork;
use crate::models::wire::{WireMemo, WireTransaction, WireTransactionData};
use crate::services::address::AddressCodec;

/// The closed set of transaction kinds this crate decodes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum XrplTransactionType {
    AccountSet,
    AccountDelete,
    CheckCancel,
    CheckCash,
    CheckCreate,
    DepositPreauth,
    EscrowCancel,
    EscrowCreate,
    EscrowFinish,
    OfferCancel,
    OfferCreate,
    Payment,
    PaymentChannelClaim,
    PaymentChannelCreate,
    PaymentChannelFund,
    SetRegularKey,
    SignerListSet,
    TrustSet,
}

/// A decoded, validated transaction payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "transaction_type")]
pub enum TransactionPayload {
    AccountSet(XrpAccountSet),
    AccountDelete(XrpAccountDelete),
    CheckCancel(XrpCheckCancel),
    CheckCash(XrpCheckCash),
    CheckCreate(XrpCheckCreate),
    DepositPreauth(XrpDepositPreauth),
    EscrowCancel(XrpEscrowCancel),
    EscrowCreate(XrpEscrowCreate),
    EscrowFinish(XrpEscrowFinish),
    OfferCancel(XrpOfferCancel),
    OfferCreate(XrpOfferCreate),
    Payment(XrpPayment),
    PaymentChannelClaim(XrpPaymentChannelClaim),
    PaymentChannelCreate(XrpPaymentChannelCreate),
    PaymentChannelFund(XrpPaymentChannelFund),
    SetRegularKey(XrpSetRegularKey),
    SignerListSet(XrpSignerListSet),
    TrustSet(XrpTrustSet),
}

impl TransactionPayload {
    /// Decode a wire record's payload into the matching domain variant.
    ///
    /// Fails with [`DecodeError::UnknownTransactionType`] when the wire union
    /// is unset or carries a tag this crate does not recognize; all other
    /// failures come from the selected variant decoder.
    pub fn from_wire(
        wire: &WireTransaction,
        network: XrplNetwork,
        codec: &dyn AddressCodec,
    ) -> Result<Self, DecodeError> {
        let data = wire.data.as_ref().ok_or_else(|| {
            DecodeError::UnknownTransactionType("transaction data is not set".to_string())
        })?;
        Self::from_wire_data(data, network, codec)
    }

    /// Dispatch a wire payload union to the one matching variant decoder.
    pub fn from_wire_data(
        data: &WireTransactionData,
        network: XrplNetwork,
        codec: &dyn AddressCodec,
    ) -> Result<Self, DecodeError> {
        match data {
            WireTransactionData::AccountSet(wire) => {
                Ok(Self::AccountSet(XrpAccountSet::from_wire(wire)?))
            }
            WireTransactionData::AccountDelete(wire) => Ok(Self::AccountDelete(
                XrpAccountDelete::from_wire(wire, network, codec)?,
            )),
            WireTransactionData::CheckCancel(wire) => {
                Ok(Self::CheckCancel(XrpCheckCancel::from_wire(wire)?))
            }
            WireTransactionData::CheckCash(wire) => {
                Ok(Self::CheckCash(XrpCheckCash::from_wire(wire)?))
            }
            WireTransactionData::CheckCreate(wire) => Ok(Self::CheckCreate(
                XrpCheckCreate::from_wire(wire, network, codec)?,
            )),
            WireTransactionData::DepositPreauth(wire) => Ok(Self::DepositPreauth(
                XrpDepositPreauth::from_wire(wire, network, codec)?,
            )),
            WireTransactionData::EscrowCancel(wire) => Ok(Self::EscrowCancel(
                XrpEscrowCancel::from_wire(wire, network, codec)?,
            )),
            WireTransactionData::EscrowCreate(wire) => Ok(Self::EscrowCreate(
                XrpEscrowCreate::from_wire(wire, network, codec)?,
            )),
            WireTransactionData::EscrowFinish(wire) => Ok(Self::EscrowFinish(
                XrpEscrowFinish::from_wire(wire, network, codec)?,
            )),
            WireTransactionData::OfferCancel(wire) => {
                Ok(Self::OfferCancel(XrpOfferCancel::from_wire(wire)?))
            }
            WireTransactionData::OfferCreate(wire) => {
                Ok(Self::OfferCreate(XrpOfferCreate::from_wire(wire)?))
            }
            WireTransactionData::Payment(wire) => {
                Ok(Self::Payment(XrpPayment::from_wire(wire, network, codec)?))
            }
            WireTransactionData::PaymentChannelClaim(wire) => Ok(Self::PaymentChannelClaim(
                XrpPaymentChannelClaim::from_wire(wire)?,
            )),
            WireTransactionData::PaymentChannelCreate(wire) => Ok(Self::PaymentChannelCreate(
                XrpPaymentChannelCreate::from_wire(wire, network, codec)?,
            )),
            WireTransactionData::PaymentChannelFund(wire) => Ok(Self::PaymentChannelFund(
                XrpPaymentChannelFund::from_wire(wire)?,
            )),
            WireTransactionData::SetRegularKey(wire) => {
                Ok(Self::SetRegularKey(XrpSetRegularKey::from_wire(wire)))
            }
            WireTransactionData::SignerListSet(wire) => Ok(Self::SignerListSet(
                XrpSignerListSet::from_wire(wire, network, codec)?,
            )),
            WireTransactionData::TrustSet(wire) => {
                Ok(Self::TrustSet(XrpTrustSet::from_wire(wire)?))
            }
            WireTransactionData::Unknown => Err(DecodeError::UnknownTransactionType(
                "unrecognized transaction type tag".to_string(),
            )),
        }
    }

    /// The kind tag of this payload.
    pub fn transaction_type(&self) -> XrplTransactionType {
        match self {
            Self::AccountSet(_) => XrplTransactionType::AccountSet,
            Self::AccountDelete(_) => XrplTransactionType::AccountDelete,
            Self::CheckCancel(_) => XrplTransactionType::CheckCancel,
            Self::CheckCash(_) => XrplTransactionType::CheckCash,
            Self::CheckCreate(_) => XrplTransactionType::CheckCreate,
            Self::DepositPreauth(_) => XrplTransactionType::DepositPreauth,
            Self::EscrowCancel(_) => XrplTransactionType::EscrowCancel,
            Self::EscrowCreate(_) => XrplTransactionType::EscrowCreate,
            Self::EscrowFinish(_) => XrplTransactionType::EscrowFinish,
            Self::OfferCancel(_) => XrplTransactionType::OfferCancel,
            Self::OfferCreate(_) => XrplTransactionType::OfferCreate,
            Self::Payment(_) => XrplTransactionType::Payment,
            Self::PaymentChannelClaim(_) => XrplTransactionType::PaymentChannelClaim,
            Self::PaymentChannelCreate(_) => XrplTransactionType::PaymentChannelCreate,
            Self::PaymentChannelFund(_) => XrplTransactionType::PaymentChannelFund,
            Self::SetRegularKey(_) => XrplTransactionType::SetRegularKey,
            Self::SignerListSet(_) => XrplTransactionType::SignerListSet,
            Self::TrustSet(_) => XrplTransactionType::TrustSet,
        }
    }
}

/// A memo attached to a transaction. All fields are free-form bytes; the
/// ledger attaches no semantics to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct XrpMemo {
    pub data: Option<Vec<u8>>,
    pub format: Option<Vec<u8>>,
    pub memo_type: Option<Vec<u8>>,
}

impl From<&WireMemo> for XrpMemo {
    fn from(wire: &WireMemo) -> Self {
        XrpMemo {
            data: wire.data.clone(),
            format: wire.format.clone(),
            memo_type: wire.memo_type.clone(),
        }
    }
}

/// A fully decoded transaction: the validated common envelope fields plus the
/// kind-specific payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XrplTransaction {
    /// The sending account and its source tag, folded into an X-address.
    pub source_x_address: String,
    /// The transaction fee, in drops.
    pub fee_drops: u64,
    pub sequence: u32,
    pub signing_public_key: Vec<u8>,
    pub last_ledger_sequence: Option<u32>,
    pub flags: Option<u32>,
    pub memos: Vec<XrpMemo>,
    /// Close time of the ledger the transaction appeared in, if any.
    pub timestamp: Option<DateTime<Utc>>,
    pub payload: TransactionPayload,
}

impl XrplTransaction {
    /// Decode a full wire record: the common envelope fields plus the
    /// dispatched payload.
    pub fn from_wire(
        wire: &WireTransaction,
        network: XrplNetwork,
        codec: &dyn AddressCodec,
    ) -> Result<Self, DecodeError> {
        let account = required(&wire.account, "transaction", "account")?;
        let source_x_address = encode_x_address_field(
            codec,
            network,
            &account,
            wire.source_tag,
            "transaction source account",
        )?;

        let fee = required(&wire.fee_drops, "transaction", "fee")?;
        let fee_drops = fee.parse::<u64>().map_err(|_| {
            DecodeError::InvalidTransaction(format!(
                "transaction fee '{fee}' is not a non-negative drops value"
            ))
        })?;

        let sequence = required(&wire.sequence, "transaction", "sequence")?;
        let signing_public_key =
            required_bytes(&wire.signing_public_key, "transaction", "signing public key")?;

        let timestamp = wire.date.and_then(|date| {
            DateTime::from_timestamp(i64::from(date) + RIPPLE_EPOCH_OFFSET_SECONDS, 0)
        });

        let payload = TransactionPayload::from_wire(wire, network, codec)?;

        Ok(XrplTransaction {
            source_x_address,
            fee_drops,
            sequence,
            signing_public_key,
            last_ledger_sequence: wire.last_ledger_sequence,
            flags: wire.flags,
            memos: wire.memos.iter().map(XrpMemo::from).collect(),
            timestamp,
            payload,
        })
    }

    /// The kind tag of the decoded payload.
    pub fn transaction_type(&self) -> XrplTransactionType {
        self.payload.transaction_type()
    }
}

/// Extract a mandatory scalar field, failing with a message that names the
/// transaction kind and the field.
pub(crate) fn required<T: Clone>(
    value: &Option<T>,
    transaction_type: &str,
    field: &str,
) -> Result<T, DecodeError> {
    value.clone().ok_or_else(|| {
        DecodeError::InvalidTransaction(format!(
            "{transaction_type} is missing its mandatory {field} field"
        ))
    })
}

/// Extract a mandatory byte field. An empty byte string counts as absent.
pub(crate) fn required_bytes(
    value: &Option<Vec<u8>>,
    transaction_type: &str,
    field: &str,
) -> Result<Vec<u8>, DecodeError> {
    match value {
        Some(bytes) if !bytes.is_empty() => Ok(bytes.clone()),
        _ => Err(DecodeError::InvalidTransaction(format!(
            "{transaction_type} is missing its mandatory {field} field"
        ))),
    }
}

/// Encode an address and optional tag through the codec collaborator,
/// re-wrapping any codec failure into the decode taxonomy.
pub(crate) fn encode_x_address_field(
    codec: &dyn AddressCodec,
    network: XrplNetwork,
    address: &str,
    tag: Option<u32>,
    context: &str,
) -> Result<String, DecodeError> {
    codec
        .encode_x_address(address, tag, network.is_test())
        .map_err(|e| {
            DecodeError::InvalidTransaction(format!(
                "{context} could not be encoded as an X-address: {e}"
            ))
        })
}
