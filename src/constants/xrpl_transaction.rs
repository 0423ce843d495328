//! Constants for XRPL transaction decoding and submission tracking.
//!
//! This module contains the protocol values used throughout the decoding and
//! finality-polling logic: result-code class prefixes, poll timing, signer
//! list limits and account-set field ranges.

use std::time::Duration;

/// Approximate time for the XRPL network to close and validate a ledger.
/// Used as the fixed poll period when waiting for transaction finality.
pub const XRPL_LEDGER_CLOSE_INTERVAL_SECONDS: u64 = 4;

/// Currency code of the ledger's native currency. Issued amounts must never
/// claim this code.
pub const NATIVE_CURRENCY_CODE: &str = "XRP";

/// Result-code prefix for malformed transactions. A `tem` code is terminal:
/// the transaction can never succeed, regardless of further ledger closes.
pub const MALFORMED_TRANSACTION_RESULT_PREFIX: &str = "tem";

/// Result-code prefix for successfully applied transactions.
pub const SUCCESS_TRANSACTION_RESULT_PREFIX: &str = "tes";

/// Maximum number of entries allowed in a signer list.
pub const MAX_SIGNER_ENTRIES: usize = 8;

/// Signer quorum value that requests deletion of the signer list.
pub const SIGNER_LIST_DELETE_QUORUM: u32 = 0;

/// Lowest valid non-zero transfer rate (no fee, 1.0 billion units).
pub const MIN_TRANSFER_RATE: u32 = 1_000_000_000;

/// Highest valid transfer rate (100% fee, 2.0 billion units).
pub const MAX_TRANSFER_RATE: u32 = 2_000_000_000;

/// Transfer rate value that resets the fee to zero.
pub const DISABLING_TRANSFER_RATE: u32 = 0;

/// Lowest valid non-zero tick size for offers against an issuer.
pub const MIN_TICK_SIZE: u32 = 3;

/// Highest valid tick size for offers against an issuer.
pub const MAX_TICK_SIZE: u32 = 15;

/// Tick size value that disables the setting.
pub const DISABLING_TICK_SIZE: u32 = 0;

/// Payment flag marking a payment as potentially partial.
pub const TF_PARTIAL_PAYMENT: u32 = 0x0002_0000;

/// Offset in seconds between the ripple epoch (2000-01-01T00:00:00Z) and the
/// unix epoch.
pub const RIPPLE_EPOCH_OFFSET_SECONDS: i64 = 946_684_800;

/// Get the ledger close interval used as the poll period
pub fn get_ledger_close_interval() -> Duration {
    Duration::from_secs(XRPL_LEDGER_CLOSE_INTERVAL_SECONDS)
}
