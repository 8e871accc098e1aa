//! # Key Management
//!
//! Account key types consumed by the cipher.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  KeyPair                                                                │
//! │  ─────────                                                              │
//! │  • private: Option<PrivateKey>   (32 bytes, zeroized on drop)           │
//! │  • public:  PublicKey            (32-byte compressed Edwards point)     │
//! │                                                                         │
//! │  from_private(key, schema):  public = encode(prepare(key, schema) · B)  │
//! │  public_only(public):        counterparty import, cannot act           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Generating and storing keys is the caller's job; this module only holds
//! them and keeps the public half consistent with the private half.

use curve25519_dalek::edwards::EdwardsPoint;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::scalar::prepare;
use super::schema::SignSchema;
use super::KEY_SIZE;
use crate::error::{Error, Result};

/// A 32-byte account private key
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey([u8; KEY_SIZE]);

impl PrivateKey {
    /// Wrap raw key bytes
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Parse a 64-character hex string
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let mut bytes = decode_key_hex(hex_str, "Private")?;
        let key = Self(bytes);
        bytes.zeroize();
        Ok(key)
    }

    /// Get the raw key bytes
    ///
    /// ## Security Warning
    ///
    /// Never log or transmit these bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

/// A 32-byte encoded account public key
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKey(#[serde(with = "hex_bytes")] [u8; KEY_SIZE]);

impl PublicKey {
    /// Wrap raw encoded point bytes
    ///
    /// No curve validation happens here; a bad encoding surfaces as
    /// `InvalidPublicKey` when the key is used for agreement.
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Parse a 64-character hex string
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        Ok(Self(decode_key_hex(hex_str, "Public")?))
    }

    /// Get the raw encoded bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }

    /// Uppercase hex, as the network displays keys
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }
}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

impl std::fmt::Display for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// An account key pair
///
/// The public key is always the one derived from the private key, unless
/// the pair was imported with [`KeyPair::public_only`].
#[derive(Debug)]
pub struct KeyPair {
    private: Option<PrivateKey>,
    public: PublicKey,
}

impl KeyPair {
    /// Build a key pair around a private key
    pub fn from_private(private: PrivateKey, schema: SignSchema) -> Self {
        let scalar = prepare(&private, schema);
        let public = EdwardsPoint::mul_base_clamped(*scalar.to_bytes())
            .compress()
            .to_bytes();

        Self {
            private: Some(private),
            public: PublicKey(public),
        }
    }

    /// Import a counterparty's public key
    pub fn public_only(public: PublicKey) -> Self {
        Self {
            private: None,
            public,
        }
    }

    /// Whether this pair can act (encrypt as sender, decrypt as recipient)
    pub fn has_private_key(&self) -> bool {
        self.private.is_some()
    }

    /// Get the private key
    pub fn private_key(&self) -> Result<&PrivateKey> {
        self.private.as_ref().ok_or(Error::MissingPrivateKey)
    }

    /// Get the public key
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }
}

fn decode_key_hex(hex_str: &str, kind: &str) -> Result<[u8; KEY_SIZE]> {
    if hex_str.len() != KEY_SIZE * 2 {
        return Err(Error::InvalidKey(format!(
            "{} key hex must be {} characters",
            kind,
            KEY_SIZE * 2
        )));
    }

    let mut out = [0u8; KEY_SIZE];
    hex::decode_to_slice(hex_str, &mut out)?;
    Ok(out)
}

/// Serde helper for serializing byte arrays as hex
mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8; 32], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&hex::encode_upper(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<[u8; 32], D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let bytes = hex::decode(&s).map_err(serde::de::Error::custom)?;
        bytes.try_into().map_err(|_| serde::de::Error::custom("Invalid length"))
    }
}

// ============================================================================
// TESTS
// ============================================================================
