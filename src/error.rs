//! # Error Handling
//!
//! Error types for the message cipher.
//!
//! ## Error Hierarchy
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           ERROR HIERARCHY                               │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  Error (top-level)                                                     │
//! │  │                                                                      │
//! │  ├── Key Errors                                                        │
//! │  │   ├── InvalidKey            - Bad hex or wrong length on import     │
//! │  │   └── MissingPrivateKey     - Public-only key pair asked to act     │
//! │  │                                                                      │
//! │  ├── Key Agreement Errors                                              │
//! │  │   ├── InvalidPublicKey      - Counterpart key is not a usable point │
//! │  │   └── KeyDerivationFailed   - HKDF expansion failed                 │
//! │  │                                                                      │
//! │  ├── Envelope Errors                                                   │
//! │  │   ├── EncryptionFailed      - Cipher setup failed                   │
//! │  │   ├── EnvelopeTooShort      - Input shorter than IV + one block     │
//! │  │   └── DecryptionFailed      - Unpad failed (tampered / wrong key)   │
//! │  │                                                                      │
//! │  └── Configuration Errors                                              │
//! │      └── InvalidConfig         - Unparseable cipher configuration      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Probing Foreign Payloads
//!
//! Callers routinely try to decrypt payloads that may not be addressed to
//! them. [`Error::is_not_for_me`] groups the envelope failures that simply
//! mean "not decryptable with these keys". `DecryptionFailed` never says
//! which byte or step failed.

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the message cipher
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ========================================================================
    // Key Errors (100-199)
    // ========================================================================

    /// Key material could not be parsed
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// The key pair only holds a public key
    #[error("Private key hasn't been provided.")]
    MissingPrivateKey,

    // ========================================================================
    // Key Agreement Errors (200-299)
    // ========================================================================

    /// Counterpart public key does not decode to a usable curve point
    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    /// HKDF expansion failed
    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    // ========================================================================
    // Envelope Errors (300-399)
    // ========================================================================

    /// Encryption could not be set up
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Envelope is shorter than the minimum valid size
    #[error("Envelope too short: {len} bytes (minimum {min})")]
    EnvelopeTooShort {
        /// Length of the rejected input
        len: usize,
        /// Minimum accepted length
        min: usize,
    },

    /// Ciphertext did not decrypt under the derived key
    #[error("Decryption failed.")]
    DecryptionFailed,

    // ========================================================================
    // Configuration Errors (900-999)
    // ========================================================================

    /// Cipher configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Get the numeric error code
    ///
    /// Error codes are organized by category:
    /// - 100-199: Keys
    /// - 200-299: Key agreement
    /// - 300-399: Envelope
    /// - 900-999: Configuration
    pub fn code(&self) -> i32 {
        match self {
            Error::InvalidKey(_) => 100,
            Error::MissingPrivateKey => 101,

            Error::InvalidPublicKey(_) => 200,
            Error::KeyDerivationFailed(_) => 201,

            Error::EncryptionFailed(_) => 300,
            Error::EnvelopeTooShort { .. } => 301,
            Error::DecryptionFailed => 302,

            Error::InvalidConfig(_) => 900,
        }
    }

    /// Whether this error only means the payload is not decryptable with
    /// the supplied keys
    pub fn is_not_for_me(&self) -> bool {
        matches!(self, Error::EnvelopeTooShort { .. } | Error::DecryptionFailed)
    }
}

// ============================================================================
// ERROR CONVERSIONS
// ============================================================================

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Error::InvalidKey(format!("Invalid hex: {}", err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidConfig(err.to_string())
    }
}

// ============================================================================
// TESTS
// ============================================================================
