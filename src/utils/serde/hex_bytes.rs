//! Serialization utilities for optional byte fields
//!
//! Wire records carry binary fields (check IDs, channel IDs, public keys,
//! conditions) that read much better as hex strings than as JSON integer
//! arrays. This module provides a `with`-compatible serializer for
//! `Option<Vec<u8>>` fields.

/// Serde adapter serializing `Option<Vec<u8>>` as an optional hex string.
pub mod hex_bytes_option {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(bytes) => serializer.serialize_some(&hex::encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<String> = Option::deserialize(deserializer)?;
        value
            .map(|encoded| hex::decode(&encoded).map_err(de::Error::custom))
            .transpose()
    }
}
