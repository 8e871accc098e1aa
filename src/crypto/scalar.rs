//! # Scalar Preparation
//!
//! Turns a raw 32-byte private key into the clamped scalar used in group
//! arithmetic:
//!
//! ```text
//! private key (32 bytes)
//!       │
//!       ▼
//! reverse bytes      (Keccak schema only)
//!       │
//!       ▼
//! hash_long(schema)  ──►  64 bytes, keep the first 32
//!       │
//!       ▼
//! clamp:  s[0]  &= 0b1111_1000
//!         s[31] &= 0b0111_1111
//!         s[31] |= 0b0100_0000
//! ```
//!
//! Any divergence here does not fail; it silently yields keys that cannot
//! talk to the rest of the network. The vectors in the tests pin it down.

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::keys::PrivateKey;
use super::schema::SignSchema;

/// A clamped private scalar, little-endian
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ClampedScalar([u8; 32]);

impl ClampedScalar {
    /// Raw scalar bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Scalar copy for dalek's by-value `*_clamped` multiplies
    pub(crate) fn to_bytes(&self) -> Zeroizing<[u8; 32]> {
        Zeroizing::new(self.0)
    }
}

impl std::fmt::Debug for ClampedScalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ClampedScalar(..)")
    }
}

/// Apply Edwards-curve clamping in place
pub fn clamp(bytes: &mut [u8; 32]) {
    bytes[0] &= 0xF8;
    bytes[31] &= 0x7F;
    bytes[31] |= 0x40;
}

/// Derive the clamped scalar for `private_key` under `schema`
pub fn prepare(private_key: &PrivateKey, schema: SignSchema) -> ClampedScalar {
    let hash = match schema {
        SignSchema::Sha3 => Zeroizing::new(schema.hash_long(&[private_key.as_bytes()])),
        SignSchema::Keccak => {
            let reversed = Zeroizing::new(SignSchema::reverse(private_key.as_bytes()));
            Zeroizing::new(schema.hash_long(&[reversed.as_slice()]))
        }
    };

    let mut scalar = ClampedScalar([0u8; 32]);
    scalar.0.copy_from_slice(&hash[..32]);
    clamp(&mut scalar.0);
    scalar
}

// ============================================================================
// TESTS
// ============================================================================
