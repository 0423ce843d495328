//! XRPL network provider contract.
//!
//! The provider wraps whatever transport the surrounding application uses
//! (JSON-RPC, gRPC) behind the two queries the finality poller needs. The
//! core never retries or reinterprets provider failures; a retry policy, if
//! any, belongs to the transport implementation.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::Serialize;
use thiserror::Error;

use crate::models::RawTransactionStatus;

#[derive(Error, Debug, Clone, Serialize)]
pub enum ProviderError {
    #[error("Request timeout")]
    Timeout,
    #[error("Rate limited (HTTP 429)")]
    RateLimited,
    #[error("Request error (HTTP {status_code}): {error}")]
    RequestError { error: String, status_code: u16 },
    #[error("JSON-RPC error (code {code}): {message}")]
    RpcErrorCode { code: i64, message: String },
    #[error("Transport error: {0}")]
    TransportError(String),
    #[error("Other provider error: {0}")]
    Other(String),
}

impl ProviderError {
    /// Determines if this error is transient (can retry) or permanent (should fail).
    pub fn is_transient(&self) -> bool {
        match self {
            ProviderError::Timeout | ProviderError::RateLimited => true,
            ProviderError::TransportError(_) => true,
            ProviderError::RequestError { status_code, .. } => *status_code >= 500,
            ProviderError::RpcErrorCode { .. } => false,
            ProviderError::Other(_) => false,
        }
    }
}

/// Contract for querying a transaction's raw status and the network's latest
/// validated ledger index.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait XrplProviderTrait: Send + Sync {
    /// Fetch the current raw status snapshot for a transaction hash. The
    /// snapshot is superseded on every fetch; it is never merged with a
    /// previous one.
    async fn get_raw_transaction_status(
        &self,
        transaction_hash: &str,
    ) -> Result<RawTransactionStatus, ProviderError>;

    /// Fetch the index of the latest ledger validated by the network, scoped
    /// to an account. The address must already exist on the ledger and be in
    /// classic (non-extended) form.
    async fn get_latest_validated_ledger_sequence(
        &self,
        classic_address: &str,
    ) -> Result<u32, ProviderError>;
}
