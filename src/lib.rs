//! # XRPL Relayer
//!
//! Transaction decoding, validation and reliable-submission tracking for the
//! XRP Ledger.
//!
//! The crate sits between a raw XRPL wire protocol and a typed application
//! model and covers two responsibilities:
//!
//! - **Decoding**: converting wire-format transaction records into validated
//!   domain objects ([`models::TransactionPayload`], [`models::XrplTransaction`]),
//!   rejecting malformed or semantically inconsistent records before they are
//!   acted upon.
//! - **Finality tracking**: polling a submitted transaction's raw status until
//!   it reaches a deterministic state, then classifying the terminal outcome
//!   ([`domain::ReliableSubmission`], [`domain::classify_final_outcome`]).
//!
//! Network transport and address encoding are consumed as collaborators
//! ([`services::provider::XrplProviderTrait`], [`services::address::AddressCodec`]);
//! the crate performs no I/O of its own beyond calling those traits.

pub mod constants;
pub mod domain;
pub mod models;
pub mod services;
pub mod utils;

pub use domain::{classify_final_outcome, ReliableSubmission};
pub use models::{
    DecodeError, RawTransactionStatus, SubmissionError, TransactionOutcome, TransactionPayload,
    XrpCurrencyAmount, XrplNetwork, XrplTransaction,
};
pub use services::address::{AddressCodec, AddressDecodeError, ClassicAddress};
pub use services::provider::{ProviderError, XrplProviderTrait};
