//! Account management transactions: AccountSet, AccountDelete,
//! SetRegularKey and DepositPreauth.

use serde::{Deserialize, Serialize};

use super::{encode_x_address_field, required};
use crate::constants::{
    DISABLING_TICK_SIZE, DISABLING_TRANSFER_RATE, MAX_TICK_SIZE, MAX_TRANSFER_RATE, MIN_TICK_SIZE,
    MIN_TRANSFER_RATE,
};
use crate::models::error::DecodeError;
use crate::models::network::XrplNetwork;
use crate::models::wire::{
    WireAccountDelete, WireAccountSet, WireDepositPreauth, WireSetRegularKey,
};
use crate::services::address::AddressCodec;

/// Changes the settings of the sending account. Every field is optional; an
/// absent field leaves the corresponding setting untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XrpAccountSet {
    pub clear_flag: Option<u32>,
    pub domain: Option<String>,
    pub email_hash: Option<Vec<u8>>,
    pub message_key: Option<Vec<u8>>,
    pub set_flag: Option<u32>,
    pub transfer_rate: Option<u32>,
    pub tick_size: Option<u32>,
}

impl XrpAccountSet {
    pub fn from_wire(wire: &WireAccountSet) -> Result<Self, DecodeError> {
        if let Some(domain) = &wire.domain {
            if *domain != domain.to_lowercase() {
                return Err(DecodeError::InvalidTransaction(format!(
                    "AccountSet domain '{domain}' is not lowercase"
                )));
            }
        }

        if let Some(rate) = wire.transfer_rate {
            if rate != DISABLING_TRANSFER_RATE
                && !(MIN_TRANSFER_RATE..=MAX_TRANSFER_RATE).contains(&rate)
            {
                return Err(DecodeError::InvalidTransaction(format!(
                    "AccountSet transfer rate {rate} is outside [{MIN_TRANSFER_RATE}, {MAX_TRANSFER_RATE}]"
                )));
            }
        }

        if let Some(tick_size) = wire.tick_size {
            if tick_size != DISABLING_TICK_SIZE
                && !(MIN_TICK_SIZE..=MAX_TICK_SIZE).contains(&tick_size)
            {
                return Err(DecodeError::InvalidTransaction(format!(
                    "AccountSet tick size {tick_size} is outside [{MIN_TICK_SIZE}, {MAX_TICK_SIZE}]"
                )));
            }
        }

        if let (Some(clear_flag), Some(set_flag)) = (wire.clear_flag, wire.set_flag) {
            if clear_flag == set_flag {
                return Err(DecodeError::InvalidTransaction(format!(
                    "AccountSet clears and sets the same flag {set_flag}"
                )));
            }
        }

        Ok(XrpAccountSet {
            clear_flag: wire.clear_flag,
            domain: wire.domain.clone(),
            email_hash: wire.email_hash.clone(),
            message_key: wire.message_key.clone(),
            set_flag: wire.set_flag,
            transfer_rate: wire.transfer_rate,
            tick_size: wire.tick_size,
        })
    }
}

/// Deletes the sending account, sending its remaining XRP to a destination
/// account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XrpAccountDelete {
    /// The destination and its optional tag, folded into an X-address.
    pub destination_x_address: String,
}

impl XrpAccountDelete {
    pub fn from_wire(
        wire: &WireAccountDelete,
        network: XrplNetwork,
        codec: &dyn AddressCodec,
    ) -> Result<Self, DecodeError> {
        let destination = required(&wire.destination, "AccountDelete", "destination")?;
        let destination_x_address = encode_x_address_field(
            codec,
            network,
            &destination,
            wire.destination_tag,
            "AccountDelete destination",
        )?;
        Ok(XrpAccountDelete {
            destination_x_address,
        })
    }
}

/// Assigns, changes or removes the regular key pair of the sending account.
/// An absent regular key means "remove the current regular key".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XrpSetRegularKey {
    pub regular_key: Option<String>,
}

impl XrpSetRegularKey {
    pub fn from_wire(wire: &WireSetRegularKey) -> Self {
        XrpSetRegularKey {
            regular_key: wire.regular_key.clone(),
        }
    }
}

/// Preauthorizes (or revokes preauthorization of) an account to deliver
/// payments to the sender. Exactly one of the two addresses must be present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XrpDepositPreauth {
    pub authorize_x_address: Option<String>,
    pub unauthorize_x_address: Option<String>,
}

impl XrpDepositPreauth {
    pub fn from_wire(
        wire: &WireDepositPreauth,
        network: XrplNetwork,
        codec: &dyn AddressCodec,
    ) -> Result<Self, DecodeError> {
        match (&wire.authorize, &wire.unauthorize) {
            (Some(authorize), None) => Ok(XrpDepositPreauth {
                authorize_x_address: Some(encode_x_address_field(
                    codec,
                    network,
                    authorize,
                    None,
                    "DepositPreauth authorize",
                )?),
                unauthorize_x_address: None,
            }),
            (None, Some(unauthorize)) => Ok(XrpDepositPreauth {
                authorize_x_address: None,
                unauthorize_x_address: Some(encode_x_address_field(
                    codec,
                    network,
                    unauthorize,
                    None,
                    "DepositPreauth unauthorize",
                )?),
            }),
            (Some(_), Some(_)) => Err(DecodeError::InvalidTransaction(
                "DepositPreauth sets both authorize and unauthorize".to_string(),
            )),
            (None, None) => Err(DecodeError::InvalidTransaction(
                "DepositPreauth sets neither authorize nor unauthorize".to_string(),
            )),
        }
    }
}
