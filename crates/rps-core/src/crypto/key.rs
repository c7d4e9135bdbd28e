//! Per-round secret keys.

use super::CryptoError;
use rand::rngs::OsRng;
use rand::RngCore;
use sha3::{Digest as _, Sha3_256};
use std::fmt;
use std::str::FromStr;

/// Raw random bytes drawn for every key before hashing
pub const RAW_KEY_BYTES: usize = 256;

/// Source of secret key material
pub trait KeySource {
    /// Fill `buf` with secret random bytes
    ///
    /// Must fail rather than fall back to a weaker generator.
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), CryptoError>;
}

/// Operating system CSPRNG
#[derive(Clone, Copy, Debug, Default)]
pub struct OsKeySource;

impl KeySource for OsKeySource {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), CryptoError> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| CryptoError::Randomness(e.to_string()))
    }
}

/// HMAC key for one round: SHA3-256 over fresh random bytes
///
/// The key is used in its uppercase hex form, which is also what the
/// player sees after the reveal, so any standard HMAC tool can check it.
#[derive(Clone, PartialEq, Eq)]
pub struct CommitmentKey([u8; 32]);

impl CommitmentKey {
    /// Draw a fresh key from `source`
    pub fn generate<K: KeySource>(source: &mut K) -> Result<Self, CryptoError> {
        let mut raw = [0u8; RAW_KEY_BYTES];
        source.fill(&mut raw)?;
        let hashed = Sha3_256::digest(raw);
        Ok(Self(hashed.into()))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Uppercase hex form, 64 characters
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }
}

impl FromStr for CommitmentKey {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s.trim())?;
        let actual = bytes.len();
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|_| CryptoError::InvalidLength {
                expected: 32,
                actual,
            })?;
        Ok(Self(arr))
    }
}

// Never print key material through Debug; only `to_hex` exposes it.
impl fmt::Debug for CommitmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommitmentKey(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct BrokenSource;

    impl KeySource for BrokenSource {
        fn fill(&mut self, _buf: &mut [u8]) -> Result<(), CryptoError> {
            Err(CryptoError::Randomness("device gone".to_string()))
        }
    }

    #[test]
    fn test_key_hex_is_64_uppercase_chars() {
        let key = CommitmentKey::generate(&mut OsKeySource).unwrap();
        let hex = key.to_hex();

        assert_eq!(hex.len(), 64);
        assert!(hex
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_keys_are_pairwise_distinct() {
        let mut source = OsKeySource;
        let keys: HashSet<[u8; 32]> = (0..1000)
            .map(|_| *CommitmentKey::generate(&mut source).unwrap().as_bytes())
            .collect();

        assert_eq!(keys.len(), 1000);
    }

    #[test]
    fn test_broken_source_is_fatal() {
        let result = CommitmentKey::generate(&mut BrokenSource);
        assert!(matches!(result, Err(CryptoError::Randomness(_))));
    }

    #[test]
    fn test_key_parses_from_hex_any_case() {
        let key = CommitmentKey::generate(&mut OsKeySource).unwrap();
        let upper: CommitmentKey = key.to_hex().parse().unwrap();
        let lower: CommitmentKey = key.to_hex().to_lowercase().parse().unwrap();

        assert_eq!(upper, key);
        assert_eq!(lower, key);
    }

    #[test]
    fn test_key_rejects_wrong_length() {
        let result = "ABCD".parse::<CommitmentKey>();
        assert!(matches!(
            result,
            Err(CryptoError::InvalidLength {
                expected: 32,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_debug_hides_key() {
        let key = CommitmentKey::from_bytes([0xAB; 32]);
        assert!(!format!("{:?}", key).contains("AB"));
    }
}
