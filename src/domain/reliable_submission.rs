//! This module contains the finality-tracking loop for submitted XRPL
//! transactions. It polls the raw transaction status until the transaction is
//! validated or its ledger-sequence expiry window has passed, with an early
//! exit for malformed transactions, then classifies the terminal state.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::constants::{
    get_ledger_close_interval, MALFORMED_TRANSACTION_RESULT_PREFIX,
    SUCCESS_TRANSACTION_RESULT_PREFIX,
};
use crate::models::{RawTransactionStatus, SubmissionError, TransactionOutcome};
use crate::services::address::AddressCodec;
use crate::services::provider::XrplProviderTrait;

/// Classify a raw status snapshot into a terminal outcome.
///
/// A snapshot that is not validated maps to `Pending`, unless its result code
/// is in the malformed class, which is terminal regardless of validation. A
/// validated snapshot maps to `Succeeded` for success-class codes and
/// `Failed` for everything else.
///
/// Fails with [`SubmissionError::DataContractViolation`] when the snapshot
/// carries no result code at all; the outcome cannot be determined from such
/// a snapshot and retrying on absent data could mask a protocol mismatch.
pub fn classify_final_outcome(
    status: &RawTransactionStatus,
) -> Result<TransactionOutcome, SubmissionError> {
    let code = status.transaction_status_code.as_deref().ok_or_else(|| {
        SubmissionError::DataContractViolation(
            "transaction status carries no result code".to_string(),
        )
    })?;

    if !status.validated {
        return Ok(if is_malformed_code(code) {
            TransactionOutcome::MalformedTransaction
        } else {
            TransactionOutcome::Pending
        });
    }

    Ok(if code.starts_with(SUCCESS_TRANSACTION_RESULT_PREFIX) {
        TransactionOutcome::Succeeded
    } else {
        TransactionOutcome::Failed
    })
}

fn is_malformed_code(code: &str) -> bool {
    code.starts_with(MALFORMED_TRANSACTION_RESULT_PREFIX)
}

/// Tracks submitted transactions until they reach a deterministic state.
///
/// Each wait owns only its loop-local state; any number of waits for
/// different transaction hashes may run concurrently without coordination.
pub struct ReliableSubmission<P, A>
where
    P: XrplProviderTrait,
    A: AddressCodec,
{
    provider: P,
    address_codec: A,
    ledger_close_interval: Duration,
}

impl<P, A> ReliableSubmission<P, A>
where
    P: XrplProviderTrait,
    A: AddressCodec,
{
    pub fn new(provider: P, address_codec: A) -> Self {
        Self {
            provider,
            address_codec,
            ledger_close_interval: get_ledger_close_interval(),
        }
    }

    /// Override the poll period. Intended for tests and for private networks
    /// with a non-standard close time; the poller never adapts the interval
    /// at runtime.
    pub fn with_ledger_close_interval(mut self, interval: Duration) -> Self {
        self.ledger_close_interval = interval;
        self
    }

    /// Wait until the transaction reaches a deterministic state and return
    /// the final raw status snapshot. See
    /// [`Self::await_final_status_with_cancellation`].
    pub async fn await_final_status(
        &self,
        transaction_hash: &str,
        sender_x_address: &str,
    ) -> Result<RawTransactionStatus, SubmissionError> {
        self.await_final_status_with_cancellation(
            transaction_hash,
            sender_x_address,
            &CancellationToken::new(),
        )
        .await
    }

    /// Wait for a deterministic state and classify it in one call.
    pub async fn await_final_outcome(
        &self,
        transaction_hash: &str,
        sender_x_address: &str,
    ) -> Result<(RawTransactionStatus, TransactionOutcome), SubmissionError> {
        let status = self
            .await_final_status(transaction_hash, sender_x_address)
            .await?;
        let outcome = classify_final_outcome(&status)?;
        Ok((status, outcome))
    }

    /// Wait until the transaction is validated, its expiry window has passed,
    /// or it is reported malformed, whichever comes first.
    ///
    /// The loop suspends for one ledger-close interval between refreshes and
    /// is bounded by the transaction's last-valid-ledger-sequence: once the
    /// network's latest validated ledger index passes it, the transaction can
    /// no longer be included and the last snapshot is returned for
    /// classification (typically as `Pending`).
    ///
    /// Cancelling the token aborts the wait at the next suspension point with
    /// [`SubmissionError::Cancelled`].
    pub async fn await_final_status_with_cancellation(
        &self,
        transaction_hash: &str,
        sender_x_address: &str,
        cancellation: &CancellationToken,
    ) -> Result<RawTransactionStatus, SubmissionError> {
        // The network cannot have validated the transaction before at least
        // one ledger close.
        self.wait_one_ledger_close(cancellation).await?;

        let mut status = self
            .provider
            .get_raw_transaction_status(transaction_hash)
            .await?;
        let last_valid_ledger_sequence = status.last_ledger_sequence.ok_or_else(|| {
            SubmissionError::DataContractViolation(
                "transaction status carries no last ledger sequence, so finality cannot be \
                 reliably determined"
                    .to_string(),
            )
        })?;

        // Ledger-index queries require the sender in classic form. The
        // account is assumed to still exist: deleting it would consume the
        // in-flight transaction's sequence number and supersede it anyway.
        let classic = self.address_codec.decode_x_address(sender_x_address)?;

        let mut latest_ledger_sequence = self
            .provider
            .get_latest_validated_ledger_sequence(&classic.address)
            .await?;

        while latest_ledger_sequence <= last_valid_ledger_sequence && !status.validated {
            debug!(
                transaction_hash = %transaction_hash,
                latest_ledger_sequence,
                last_valid_ledger_sequence,
                "transaction not yet validated, waiting one ledger close"
            );
            self.wait_one_ledger_close(cancellation).await?;

            latest_ledger_sequence = self
                .provider
                .get_latest_validated_ledger_sequence(&classic.address)
                .await?;
            status = self
                .provider
                .get_raw_transaction_status(transaction_hash)
                .await?;

            let code = status.transaction_status_code.as_deref().ok_or_else(|| {
                SubmissionError::DataContractViolation(
                    "refreshed transaction status carries no result code".to_string(),
                )
            })?;

            if is_malformed_code(code) {
                // Malformed classification never changes by waiting out the
                // expiry window.
                warn!(
                    transaction_hash = %transaction_hash,
                    result_code = %code,
                    "transaction is malformed, returning early"
                );
                return Ok(status);
            }
        }

        Ok(status)
    }

    async fn wait_one_ledger_close(
        &self,
        cancellation: &CancellationToken,
    ) -> Result<(), SubmissionError> {
        tokio::select! {
            _ = cancellation.cancelled() => Err(SubmissionError::Cancelled),
            _ = tokio::time::sleep(self.ledger_close_interval) => Ok(()),
        }
    }
}
