mod hex_bytes;
pub use hex_bytes::*;
