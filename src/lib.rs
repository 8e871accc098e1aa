//! # Catapult Cipher
//!
//! Account-to-account message encryption for catapult-based chains: one
//! account encrypts a payload (a transfer message, a harvesting-delegation
//! key bundle) that only the recipient account can read.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   caller (message builders, delegation requests)                       │
//! │        │  sender KeyPair, recipient KeyPair, SignSchema, bytes          │
//! │        ▼                                                                │
//! │   ┌─────────────┐   ┌─────────────┐   ┌──────────┐   ┌──────────────┐   │
//! │   │  Direction  │──►│   Shared    │──►│   HKDF   │──►│ AES-256-CBC  │   │
//! │   │   Policy    │   │   Secret    │   │ catapult │   │   envelope   │   │
//! │   └─────────────┘   └─────────────┘   └──────────┘   └──────────────┘   │
//! │                                                             │          │
//! │                                   IV || ciphertext  ◄───────┘          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Hierarchy
//!
//! - [`error`] - Error types
//! - [`config`] - Cipher configuration (sign schema)
//! - [`crypto`] - Keys, key agreement, key expansion, envelope
//!
//! ## Example
//!
//! ```
//! use catapult_cipher::{decrypt, encrypt, KeyPair, PrivateKey, SignSchema};
//!
//! let alice = KeyPair::from_private(PrivateKey::from_bytes([1u8; 32]), SignSchema::Sha3);
//! let bob = KeyPair::from_private(PrivateKey::from_bytes([2u8; 32]), SignSchema::Sha3);
//!
//! let envelope = encrypt(b"hello bob", &alice, &bob, SignSchema::Sha3).unwrap();
//! let plaintext = decrypt(&envelope, &bob, &alice, SignSchema::Sha3).unwrap();
//! assert_eq!(plaintext, b"hello bob");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod crypto;
pub mod error;

pub use config::CipherConfig;
pub use crypto::{
    decrypt, encrypt, encrypt_with_rng, BlockCipher, KeyPair, PrivateKey, PublicKey, SignSchema,
};
pub use error::{Error, Result};
