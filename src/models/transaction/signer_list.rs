//! SignerListSet: replaces or deletes the multi-signing list of an account.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{encode_x_address_field, required};
use crate::constants::{MAX_SIGNER_ENTRIES, SIGNER_LIST_DELETE_QUORUM};
use crate::models::error::DecodeError;
use crate::models::network::XrplNetwork;
use crate::models::wire::{WireSignerEntry, WireSignerListSet};
use crate::services::address::AddressCodec;

/// One member of a signer list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XrpSignerEntry {
    pub account_x_address: String,
    pub signer_weight: u16,
}

impl XrpSignerEntry {
    pub fn from_wire(
        wire: &WireSignerEntry,
        network: XrplNetwork,
        codec: &dyn AddressCodec,
    ) -> Result<Self, DecodeError> {
        let account = required(&wire.account, "SignerEntry", "account")?;
        let account_x_address =
            encode_x_address_field(codec, network, &account, None, "SignerEntry account")?;
        let signer_weight = required(&wire.signer_weight, "SignerEntry", "signer weight")?;
        Ok(XrpSignerEntry {
            account_x_address,
            signer_weight,
        })
    }
}

/// Replaces the account's signer list, or deletes it when the quorum is the
/// deletion sentinel and no entries are given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XrpSignerListSet {
    pub signer_quorum: u32,
    pub signer_entries: Vec<XrpSignerEntry>,
}

impl XrpSignerListSet {
    pub fn from_wire(
        wire: &WireSignerListSet,
        network: XrplNetwork,
        codec: &dyn AddressCodec,
    ) -> Result<Self, DecodeError> {
        let signer_quorum = required(&wire.signer_quorum, "SignerListSet", "signer quorum")?;

        if wire.signer_entries.is_empty() {
            if signer_quorum != SIGNER_LIST_DELETE_QUORUM {
                return Err(DecodeError::InvalidTransaction(
                    "SignerListSet without entries is only valid when deleting the list"
                        .to_string(),
                ));
            }
            return Ok(XrpSignerListSet {
                signer_quorum,
                signer_entries: Vec::new(),
            });
        }

        if wire.signer_entries.len() > MAX_SIGNER_ENTRIES {
            return Err(DecodeError::InvalidTransaction(format!(
                "SignerListSet has {} entries, the network maximum is {MAX_SIGNER_ENTRIES}",
                wire.signer_entries.len()
            )));
        }

        let mut seen_accounts = HashSet::new();
        for entry in &wire.signer_entries {
            if let Some(account) = &entry.account {
                if !seen_accounts.insert(account.as_str()) {
                    return Err(DecodeError::InvalidTransaction(format!(
                        "SignerListSet entries repeat the address {account}"
                    )));
                }
            }
        }

        let signer_entries = wire
            .signer_entries
            .iter()
            .map(|entry| XrpSignerEntry::from_wire(entry, network, codec))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(XrpSignerListSet {
            signer_quorum,
            signer_entries,
        })
    }
}
