//! Raw transaction status snapshots and terminal outcomes.

use serde::{Deserialize, Serialize};

use crate::constants::TF_PARTIAL_PAYMENT;
use crate::models::wire::{WireTransaction, WireTransactionData};

/// A snapshot of a transaction's ledger state, as returned by the network
/// provider.
///
/// A snapshot is short-lived: it is re-fetched on every poll and superseded
/// whole by the next fetch, never merged. The embedded wire transaction is
/// the record the network reports for the hash, kept for payload inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTransactionStatus {
    /// Whether the transaction is included in a validated ledger.
    pub validated: bool,
    /// The engine result code, e.g. `tesSUCCESS` or `temBAD_FEE`. The
    /// 3-letter prefix classifies the result.
    pub transaction_status_code: Option<String>,
    /// The last ledger index in which the transaction can be included. Bounds
    /// the finality poll.
    pub last_ledger_sequence: Option<u32>,
    /// The wire record the network reports for the hash.
    pub transaction: Option<WireTransaction>,
}

impl RawTransactionStatus {
    /// Whether the reported transaction is a payment that delivers its full
    /// amount, i.e. a Payment without the partial-payment flag. Non-payment
    /// transactions and absent records report false.
    pub fn is_full_payment(&self) -> bool {
        let Some(transaction) = &self.transaction else {
            return false;
        };
        let is_payment = matches!(transaction.data, Some(WireTransactionData::Payment(_)));
        let partial = transaction.flags.unwrap_or(0) & TF_PARTIAL_PAYMENT != 0;
        is_payment && !partial
    }
}

/// The terminal outcome of a submitted transaction, derived purely from a
/// [`RawTransactionStatus`] snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionOutcome {
    /// Validated with a success-class result code.
    Succeeded,
    /// Validated with any non-success result code.
    Failed,
    /// Carries a malformed-class result code; resubmitting the same payload
    /// can never succeed.
    MalformedTransaction,
    /// The expiry window passed without validation. The caller decides
    /// whether to resubmit.
    Pending,
}
