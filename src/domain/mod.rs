//! # Domain Module
//!
//! The submit-and-observe loop: polls a submitted transaction's raw status
//! until it reaches a deterministic state and classifies the terminal
//! outcome.

mod reliable_submission;
pub use reliable_submission::*;
