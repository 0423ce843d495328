//! Shared fixtures for decoder tests.

use crate::models::network::XrplNetwork;
use crate::services::address::{AddressCodec, AddressDecodeError, ClassicAddress};

pub(crate) const TEST_NETWORK: XrplNetwork = XrplNetwork::Testnet;

pub(crate) fn test_account() -> String {
    "rsegqrgSP8XmhCYwL9enkZ9BNDNawfPZnn".to_string()
}

pub(crate) fn test_destination() -> String {
    "rPEPPER7kfTD9w2To4CQk6UCfuHM9c6GDY".to_string()
}

pub(crate) fn bad_address() -> String {
    "badEncodingNotAnAccount".to_string()
}

/// Deterministic stand-in for the external X-address codec. Classic
/// addresses start with `r`; anything else fails to encode, which is how the
/// invalid-address decoder tests drive the re-wrapping path.
pub(crate) struct FakeAddressCodec;

impl AddressCodec for FakeAddressCodec {
    fn encode_x_address(
        &self,
        classic_address: &str,
        tag: Option<u32>,
        test: bool,
    ) -> Result<String, AddressDecodeError> {
        if !classic_address.starts_with('r') {
            return Err(AddressDecodeError::InvalidAddress(format!(
                "not a classic address: {classic_address}"
            )));
        }
        let prefix = if test { "T" } else { "X" };
        Ok(match tag {
            Some(tag) => format!("{prefix}{classic_address}.{tag}"),
            None => format!("{prefix}{classic_address}"),
        })
    }

    fn decode_x_address(&self, x_address: &str) -> Result<ClassicAddress, AddressDecodeError> {
        let test = x_address.starts_with('T');
        let rest = x_address
            .strip_prefix('T')
            .or_else(|| x_address.strip_prefix('X'))
            .ok_or_else(|| {
                AddressDecodeError::InvalidAddress(format!("not an X-address: {x_address}"))
            })?;
        let (address, tag) = match rest.split_once('.') {
            Some((address, tag)) => {
                let tag = tag.parse::<u32>().map_err(|_| {
                    AddressDecodeError::InvalidAddress(format!("bad tag in: {x_address}"))
                })?;
                (address.to_string(), Some(tag))
            }
            None => (rest.to_string(), None),
        };
        Ok(ClassicAddress { address, tag, test })
    }
}

/// Encode the way [`FakeAddressCodec`] does, for building expected values in
/// assertions.
pub(crate) fn expected_x_address(classic_address: &str, tag: Option<u32>) -> String {
    FakeAddressCodec
        .encode_x_address(classic_address, tag, TEST_NETWORK.is_test())
        .unwrap()
}
