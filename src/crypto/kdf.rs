//! # Key Expansion
//!
//! ```text
//! HKDF-SHA256(
//!   ikm  = shared_secret,
//!   salt = none,
//!   info = "catapult",
//! ) → 32-byte AES-256 key
//! ```
//!
//! The info label must be byte-identical to the one other network clients
//! use, otherwise the derived keys do not interoperate.

use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::agreement::{shared_secret, SharedSecret};
use super::keys::{PrivateKey, PublicKey};
use super::schema::SignSchema;
use super::KEY_SIZE;
use crate::error::{Error, Result};

/// Domain separation strings for HKDF
pub mod domain {
    /// Info label for message keys
    pub const MESSAGE_KEY: &[u8; 8] = b"catapult";
}

/// An AES-256 key derived from a shared secret
///
/// Zeroized when dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey([u8; KEY_SIZE]);

impl DerivedKey {
    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Get the raw key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DerivedKey(..)")
    }
}

/// Expand a shared secret into the AES key
pub fn derive_key(shared: &SharedSecret) -> Result<DerivedKey> {
    let hkdf = Hkdf::<Sha256>::new(None, shared.as_bytes());

    let mut key = [0u8; KEY_SIZE];
    hkdf.expand(domain::MESSAGE_KEY, &mut key)
        .map_err(|_| Error::KeyDerivationFailed("HKDF expansion failed".into()))?;

    Ok(DerivedKey(key))
}

/// Key agreement followed by expansion
pub fn derive_shared_key(
    private_key: &PrivateKey,
    counterpart: &PublicKey,
    schema: SignSchema,
) -> Result<DerivedKey> {
    let shared = shared_secret(private_key, counterpart, schema)?;
    derive_key(&shared)
}

// ============================================================================
// TESTS
// ============================================================================
