//! Commit-reveal over a single move name.

use super::{CommitmentKey, CryptoError, Digest, HmacSha256, KeySource, MacProvider, OsKeySource};
use tracing::debug;

/// Produces fresh keys and keyed digests binding a move name
///
/// Both capabilities are injected so tests can substitute deterministic
/// or failing implementations.
#[derive(Clone, Debug, Default)]
pub struct CommitmentGenerator<M = HmacSha256, K = OsKeySource> {
    mac: M,
    keys: K,
}

impl CommitmentGenerator {
    /// HMAC-SHA256 with keys from the OS CSPRNG
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M: MacProvider, K: KeySource> CommitmentGenerator<M, K> {
    /// Create with explicit capabilities
    pub fn with_capabilities(mac: M, keys: K) -> Self {
        Self { mac, keys }
    }

    /// Draw a fresh key; never reuses earlier material
    pub fn generate_key(&mut self) -> Result<CommitmentKey, CryptoError> {
        CommitmentKey::generate(&mut self.keys)
    }

    /// Keyed digest of `move_name` under `key`
    pub fn commit(&self, key: &CommitmentKey, move_name: &str) -> Result<Digest, CryptoError> {
        self.mac.mac(key.to_hex().as_bytes(), move_name.as_bytes())
    }

    /// Generate a key and bind `move_name` to it in one step
    pub fn seal(&mut self, move_name: &str) -> Result<Commitment, CryptoError> {
        let key = self.generate_key()?;
        let digest = self.commit(&key, move_name)?;
        debug!(%digest, "sealed commitment");
        Ok(Commitment { key, digest })
    }

    /// Check that `key` and `move_name` reproduce `digest`
    pub fn verify(
        &self,
        digest: &Digest,
        key: &CommitmentKey,
        move_name: &str,
    ) -> Result<bool, CryptoError> {
        Ok(self.commit(key, move_name)? == *digest)
    }
}

/// A sealed move: the digest is public, the key stays hidden until `reveal`
#[derive(Clone, Debug)]
pub struct Commitment {
    key: CommitmentKey,
    digest: Digest,
}

impl Commitment {
    /// The published digest
    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    /// Open the commitment, giving up the key
    pub fn reveal(self) -> CommitmentKey {
        self.key
    }

    /// Verify that `move_name` is the move this commitment sealed
    pub fn verify<M: MacProvider>(&self, mac: &M, move_name: &str) -> Result<bool, CryptoError> {
        Ok(mac.mac(self.key.to_hex().as_bytes(), move_name.as_bytes())? == self.digest)
    }
}
