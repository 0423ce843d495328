use crate::services::address::AddressDecodeError;
use crate::services::provider::ProviderError;
use serde::Serialize;
use thiserror::Error;

/// Errors raised while waiting for a submitted transaction to reach a
/// deterministic state.
///
/// `DataContractViolation` marks conditions where the network response broke
/// an assumed invariant (a status without an expiry bound or without a result
/// code). These are fatal and never retried: retrying on absent data could
/// mask a real protocol mismatch. A `Pending` outcome is a valid return
/// value of classification, never an error.
#[derive(Error, Debug, Serialize)]
pub enum SubmissionError {
    #[error("Data contract violation: {0}")]
    DataContractViolation(String),

    #[error("Address decode error: {0}")]
    AddressDecode(#[from] AddressDecodeError),

    #[error("Underlying provider error: {0}")]
    UnderlyingProvider(#[from] ProviderError),

    #[error("Finality wait cancelled before a terminal status was reached")]
    Cancelled,
}

impl SubmissionError {
    /// Determines if this error is transient (a retry of the whole wait may
    /// succeed) or permanent.
    ///
    /// Only provider transport failures are transient; everything else either
    /// violated a data contract or was an explicit caller decision.
    pub fn is_transient(&self) -> bool {
        match self {
            SubmissionError::UnderlyingProvider(err) => err.is_transient(),
            SubmissionError::DataContractViolation(_) => false,
            SubmissionError::AddressDecode(_) => false,
            SubmissionError::Cancelled => false,
        }
    }
}
