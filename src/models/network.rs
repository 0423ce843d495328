use serde::{Deserialize, Serialize};

/// The XRPL network a wire record originates from.
///
/// Address encoding differs between the production network and the
/// test/development networks, so every decoder touching an address needs to
/// know which network it is operating against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XrplNetwork {
    Mainnet,
    Testnet,
    Devnet,
}

impl XrplNetwork {
    /// Whether addresses on this network carry the test-network tag.
    pub fn is_test(&self) -> bool {
        !matches!(self, XrplNetwork::Mainnet)
    }
}
