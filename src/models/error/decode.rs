use crate::services::address::AddressDecodeError;
use serde::Serialize;
use thiserror::Error;

/// Errors raised while converting wire transaction records into domain
/// objects.
///
/// Variant-specific structural and semantic violations all surface as
/// `InvalidTransaction` with a descriptive message rather than per-violation
/// subtypes, so callers only deal with one taxonomy at this layer. Address
/// codec failures are re-wrapped into `InvalidTransaction` for the same
/// reason.
#[derive(Error, Debug, Serialize)]
pub enum DecodeError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid transaction: {0}")]
    InvalidTransaction(String),

    #[error("Unknown transaction type: {0}")]
    UnknownTransactionType(String),
}

impl From<AddressDecodeError> for DecodeError {
    fn from(error: AddressDecodeError) -> Self {
        DecodeError::InvalidTransaction(error.to_string())
    }
}
