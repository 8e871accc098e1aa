//! # Direction Policy
//!
//! Fixes which key pair supplies the private scalar and which supplies the
//! public point. The acting party always brings its own private key:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  encrypt(plaintext, sender, recipient)                                  │
//! │      shared = sender.private   ×  recipient.public                      │
//! │                                                                         │
//! │  decrypt(envelope, recipient, sender)                                   │
//! │      shared = recipient.private ×  sender.public                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Because the agreement is symmetric, the sender can also decrypt its own
//! envelope by acting as "recipient" with the roles swapped.

use rand::rngs::OsRng;
use rand_core::{CryptoRng, RngCore};

use super::encryption::{decrypt_envelope, encrypt_with_key, Envelope};
use super::kdf::derive_shared_key;
use super::keys::KeyPair;
use super::schema::SignSchema;
use crate::config::CipherConfig;
use crate::error::Result;

/// Encrypt `plaintext` from `sender` to `recipient`
///
/// Draws the IV from the operating system RNG.
pub fn encrypt(
    plaintext: &[u8],
    sender: &KeyPair,
    recipient: &KeyPair,
    schema: SignSchema,
) -> Result<Vec<u8>> {
    encrypt_with_rng(plaintext, sender, recipient, schema, &mut OsRng)
}

/// Encrypt `plaintext` from `sender` to `recipient`, drawing the IV from `rng`
pub fn encrypt_with_rng<R>(
    plaintext: &[u8],
    sender: &KeyPair,
    recipient: &KeyPair,
    schema: SignSchema,
    rng: &mut R,
) -> Result<Vec<u8>>
where
    R: RngCore + CryptoRng,
{
    tracing::debug!(%schema, plaintext_len = plaintext.len(), "Encrypting message");

    let key = derive_shared_key(sender.private_key()?, recipient.public_key(), schema)?;
    encrypt_with_key(&key, plaintext, rng)
}

/// Decrypt an envelope `sender` addressed to `recipient`
///
/// ## Errors
///
/// - `EnvelopeTooShort` / `DecryptionFailed`: not decryptable with these keys
/// - `InvalidPublicKey`: the sender key is not a usable curve point
/// - `MissingPrivateKey`: `recipient` is public-only
pub fn decrypt(
    envelope: &[u8],
    recipient: &KeyPair,
    sender: &KeyPair,
    schema: SignSchema,
) -> Result<Vec<u8>> {
    tracing::debug!(%schema, envelope_len = envelope.len(), "Decrypting message");

    let envelope = Envelope::parse(envelope)?;
    let key = derive_shared_key(recipient.private_key()?, sender.public_key(), schema)?;

    decrypt_envelope(&key, &envelope).map_err(|e| {
        tracing::debug!("Envelope not decryptable with supplied keys");
        e
    })
}

/// A cipher bound to one sender and one recipient
///
/// `encrypt` acts as the sender, `decrypt` acts as the recipient.
#[derive(Debug, Clone, Copy)]
pub struct BlockCipher<'a> {
    sender: &'a KeyPair,
    recipient: &'a KeyPair,
    schema: SignSchema,
}

impl<'a> BlockCipher<'a> {
    /// Bind a sender and recipient under `schema`
    pub fn new(sender: &'a KeyPair, recipient: &'a KeyPair, schema: SignSchema) -> Self {
        Self {
            sender,
            recipient,
            schema,
        }
    }

    /// Bind a sender and recipient using the schema from `config`
    pub fn from_config(sender: &'a KeyPair, recipient: &'a KeyPair, config: &CipherConfig) -> Self {
        Self::new(sender, recipient, config.sign_schema)
    }

    /// The schema in use
    pub fn schema(&self) -> SignSchema {
        self.schema
    }

    /// Encrypt as the sender
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        encrypt(plaintext, self.sender, self.recipient, self.schema)
    }

    /// Encrypt as the sender, drawing the IV from `rng`
    pub fn encrypt_with_rng<R>(&self, plaintext: &[u8], rng: &mut R) -> Result<Vec<u8>>
    where
        R: RngCore + CryptoRng,
    {
        encrypt_with_rng(plaintext, self.sender, self.recipient, self.schema, rng)
    }

    /// Decrypt as the recipient
    pub fn decrypt(&self, envelope: &[u8]) -> Result<Vec<u8>> {
        decrypt(envelope, self.recipient, self.sender, self.schema)
    }
}

// ============================================================================
// TESTS
// ============================================================================
