//! # Cryptography Module
//!
//! Account-to-account message encryption.
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    MESSAGE ENCRYPTION PIPELINE                          │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  1. Direction Policy (cipher)                                          │
//! │     encrypt: sender.private    × recipient.public                      │
//! │     decrypt: recipient.private × sender.public                         │
//! │                                                                         │
//! │  2. Scalar Preparation (scalar)                                        │
//! │     clamp( hash_long_schema(private)[..32] )                           │
//! │     (keccak schema hashes the byte-reversed private key)               │
//! │                                                                         │
//! │  3. Shared Secret (agreement)                                          │
//! │     encode( scalar · decode(public) )   → 32 bytes                     │
//! │                                                                         │
//! │  4. Key Expansion (kdf)                                                │
//! │     HKDF-SHA256(ikm = shared, salt = none, info = "catapult")          │
//! │                                                                         │
//! │  5. Envelope (encryption)                                              │
//! │     IV(16, random) || AES-256-CBC-PKCS7(key, IV, plaintext)            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Security Considerations
//!
//! 1. **Key Zeroization**: private keys, shared secrets and derived keys are
//!    zeroized when dropped
//! 2. **Constant-Time Operations**: curve arithmetic is done by dalek
//! 3. **Secure Random**: `rand::rngs::OsRng` unless the caller injects a RNG
//! 4. **No IV Reuse**: a fresh IV for every encryption
//! 5. **No Forward Secrecy**: static-static agreement, as on the network
//! 6. **No Integrity Tag**: CBC only detects tampering through padding
//!    failures; a flipped bit in a non-final block of a multi-block message
//!    can still unpad

mod agreement;
mod cipher;
mod encryption;
mod kdf;
mod keys;
mod scalar;
mod schema;

pub use agreement::{shared_secret, SharedSecret};
pub use cipher::{decrypt, encrypt, encrypt_with_rng, BlockCipher};
pub use encryption::{
    decrypt_envelope, decrypt_with_key, encrypt_with_key, envelope_len, Envelope, BLOCK_SIZE,
    IV_SIZE, MIN_ENVELOPE_LEN,
};
pub use kdf::{derive_key, derive_shared_key, domain, DerivedKey};
pub use keys::{KeyPair, PrivateKey, PublicKey};
pub use scalar::{clamp, prepare, ClampedScalar};
pub use schema::SignSchema;

/// Size of private keys, public keys and derived keys in bytes
pub const KEY_SIZE: usize = 32;
