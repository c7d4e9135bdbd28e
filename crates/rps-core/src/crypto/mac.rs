//! Keyed digest over a move name.

use super::CryptoError;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;

/// Keyed message authentication capability
pub trait MacProvider {
    /// Compute the MAC of `message` under `key`
    fn mac(&self, key: &[u8], message: &[u8]) -> Result<Digest, CryptoError>;
}

/// HMAC-SHA256
#[derive(Clone, Copy, Debug, Default)]
pub struct HmacSha256;

impl MacProvider for HmacSha256 {
    fn mac(&self, key: &[u8], message: &[u8]) -> Result<Digest, CryptoError> {
        let mut mac =
            Hmac::<Sha256>::new_from_slice(key).map_err(|e| CryptoError::Mac(e.to_string()))?;
        mac.update(message);
        Ok(Digest(mac.finalize().into_bytes().to_vec()))
    }
}

/// Published MAC output, shown as uppercase hex
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Digest(#[serde(with = "hex_upper")] Vec<u8>);

impl Digest {
    /// Create from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Digest {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(hex::decode(s.trim())?))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head = &self.0[..self.0.len().min(8)];
        write!(f, "Digest({})", hex::encode_upper(head))
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode_upper(&self.0))
    }
}

mod hex_upper {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], s: S) -> Result<S::Ok, S::Error> {
        hex::encode_upper(bytes).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<u8>, D::Error> {
        let hex_str = String::deserialize(d)?;
        hex::decode(&hex_str).map_err(serde::de::Error::custom)
    }
}
