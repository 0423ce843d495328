//! Address codec collaborator.
//!
//! X-address encoding and decoding is owned by an external component; this
//! module only specifies the contract the decoders and the finality poller
//! rely on. Every decoder that touches an address field goes through this
//! trait, and the poller uses it once to resolve the sender to a classic
//! address before querying ledger indices.

#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised by the address codec collaborator.
///
/// Re-wrapped into [`crate::models::DecodeError::InvalidTransaction`] at
/// decode boundaries; surfaced as-is at the poller's sender-resolution step.
#[derive(Error, Debug, Clone, Serialize)]
pub enum AddressDecodeError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
}

/// A classic (non-extended) account identifier with the tag and network flag
/// that were folded into the X-address form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassicAddress {
    pub address: String,
    pub tag: Option<u32>,
    pub test: bool,
}

/// Contract for the external X-address codec.
#[cfg_attr(test, automock)]
pub trait AddressCodec: Send + Sync {
    /// Fold a classic address and an optional tag into an X-address for the
    /// given network flavor.
    fn encode_x_address(
        &self,
        classic_address: &str,
        tag: Option<u32>,
        test: bool,
    ) -> Result<String, AddressDecodeError>;

    /// Resolve an X-address back to its classic address, tag and network
    /// flag. Classic addresses are what the ledger-index queries require.
    fn decode_x_address(&self, x_address: &str) -> Result<ClassicAddress, AddressDecodeError>;
}
