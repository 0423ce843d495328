mod amount;
pub use amount::*;

mod error;
pub use error::*;

mod network;
pub use network::*;

mod status;
pub use status::*;

mod transaction;
pub use transaction::*;

mod wire;
pub use wire::*;
