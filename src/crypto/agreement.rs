//! # Shared Secret Derivation
//!
//! Static-static Diffie-Hellman on the Ed25519 curve:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Alice: encode( prepare(alice.priv) · decode(bob.pub) )                 │
//! │  Bob:   encode( prepare(bob.priv)   · decode(alice.pub) )               │
//! │                                                                         │
//! │  Both equal encode( a · b · B ), so both sides get the same 32 bytes.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The compressed encoding of the product point is the shared secret; no
//! coordinate is extracted separately. The scalar is multiplied unreduced,
//! in constant time.

use curve25519_dalek::edwards::CompressedEdwardsY;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::keys::{PrivateKey, PublicKey};
use super::scalar::prepare;
use super::schema::SignSchema;
use crate::error::{Error, Result};

/// Raw 32-byte output of the key agreement
///
/// Lives only for the duration of one encrypt or decrypt call.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret([u8; 32]);

impl SharedSecret {
    /// Create from raw agreement output
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes (for key derivation)
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl std::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SharedSecret(..)")
    }
}

/// Compute the shared secret between `private_key` and `counterpart`
///
/// ## Errors
///
/// `InvalidPublicKey` if the counterpart encoding is not on the curve or
/// decodes to a small-order point.
pub fn shared_secret(
    private_key: &PrivateKey,
    counterpart: &PublicKey,
    schema: SignSchema,
) -> Result<SharedSecret> {
    let point = CompressedEdwardsY(*counterpart.as_bytes())
        .decompress()
        .ok_or_else(|| Error::InvalidPublicKey("Point is not on the curve".into()))?;

    if point.is_small_order() {
        return Err(Error::InvalidPublicKey("Point has small order".into()));
    }

    let scalar = prepare(private_key, schema);
    let shared = point.mul_clamped(*scalar.to_bytes()).compress();

    Ok(SharedSecret(shared.to_bytes()))
}

// ============================================================================
// TESTS
// ============================================================================
