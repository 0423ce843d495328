mod xrpl_transaction;
pub use xrpl_transaction::*;
