//! Escrow transactions: EscrowCancel, EscrowCreate and EscrowFinish.

use serde::{Deserialize, Serialize};

use super::{encode_x_address_field, required};
use crate::models::amount::XrpCurrencyAmount;
use crate::models::error::DecodeError;
use crate::models::network::XrplNetwork;
use crate::models::wire::{WireEscrowCancel, WireEscrowCreate, WireEscrowFinish};
use crate::services::address::AddressCodec;

/// Returns escrowed XRP to the sender after the escrow has expired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XrpEscrowCancel {
    pub owner_x_address: String,
    pub offer_sequence: u32,
}

impl XrpEscrowCancel {
    pub fn from_wire(
        wire: &WireEscrowCancel,
        network: XrplNetwork,
        codec: &dyn AddressCodec,
    ) -> Result<Self, DecodeError> {
        let owner = required(&wire.owner, "EscrowCancel", "owner")?;
        let owner_x_address =
            encode_x_address_field(codec, network, &owner, None, "EscrowCancel owner")?;
        let offer_sequence = required(&wire.offer_sequence, "EscrowCancel", "offer sequence")?;
        Ok(XrpEscrowCancel {
            owner_x_address,
            offer_sequence,
        })
    }
}

/// Sequesters XRP until an escrow condition (time window or crypto-condition)
/// releases it to the destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XrpEscrowCreate {
    /// Escrowed amount. Only native XRP can be escrowed.
    pub amount: XrpCurrencyAmount,
    pub destination_x_address: String,
    pub cancel_after: Option<u32>,
    pub finish_after: Option<u32>,
    pub condition: Option<Vec<u8>>,
}

impl XrpEscrowCreate {
    pub fn from_wire(
        wire: &WireEscrowCreate,
        network: XrplNetwork,
        codec: &dyn AddressCodec,
    ) -> Result<Self, DecodeError> {
        let amount = wire
            .amount
            .as_ref()
            .ok_or_else(|| {
                DecodeError::InvalidTransaction(
                    "EscrowCreate is missing its mandatory amount field".to_string(),
                )
            })
            .and_then(XrpCurrencyAmount::from_wire)?;
        if !amount.is_native() {
            return Err(DecodeError::InvalidTransaction(
                "EscrowCreate amount must be denominated in XRP".to_string(),
            ));
        }

        let destination = required(&wire.destination, "EscrowCreate", "destination")?;
        let destination_x_address = encode_x_address_field(
            codec,
            network,
            &destination,
            wire.destination_tag,
            "EscrowCreate destination",
        )?;

        match (wire.cancel_after, wire.finish_after) {
            (None, None) => {
                return Err(DecodeError::InvalidTransaction(
                    "EscrowCreate requires at least one of cancel after and finish after"
                        .to_string(),
                ));
            }
            (Some(cancel_after), Some(finish_after)) if cancel_after <= finish_after => {
                return Err(DecodeError::InvalidTransaction(format!(
                    "EscrowCreate cancel after ({cancel_after}) must be strictly later than finish after ({finish_after})"
                )));
            }
            _ => {}
        }

        // A cancel-after alone gives no way to ever finish the escrow unless
        // a condition can release it.
        if wire.finish_after.is_none() && wire.condition.is_none() {
            return Err(DecodeError::InvalidTransaction(
                "EscrowCreate without a finish after requires a condition".to_string(),
            ));
        }

        Ok(XrpEscrowCreate {
            amount,
            destination_x_address,
            cancel_after: wire.cancel_after,
            finish_after: wire.finish_after,
            condition: wire.condition.clone(),
        })
    }
}

/// Delivers escrowed XRP to its destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XrpEscrowFinish {
    pub owner_x_address: String,
    pub offer_sequence: u32,
    pub condition: Option<Vec<u8>>,
    pub fulfillment: Option<Vec<u8>>,
}

impl XrpEscrowFinish {
    pub fn from_wire(
        wire: &WireEscrowFinish,
        network: XrplNetwork,
        codec: &dyn AddressCodec,
    ) -> Result<Self, DecodeError> {
        let owner = required(&wire.owner, "EscrowFinish", "owner")?;
        let owner_x_address =
            encode_x_address_field(codec, network, &owner, None, "EscrowFinish owner")?;
        let offer_sequence = required(&wire.offer_sequence, "EscrowFinish", "offer sequence")?;
        Ok(XrpEscrowFinish {
            owner_x_address,
            offer_sequence,
            condition: wire.condition.clone(),
            fulfillment: wire.fulfillment.clone(),
        })
    }
}
