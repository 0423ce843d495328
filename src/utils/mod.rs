//! # Utils Module
//!
//! Small shared helpers with no domain logic of their own.

mod serde;
pub use serde::*;
