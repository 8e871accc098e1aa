//! # Envelope Encryption
//!
//! AES-256-CBC with PKCS7 padding under a [`DerivedKey`].
//!
//! ## Wire Format
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │ offset 0   │ IV, 16 bytes, random, fresh for every message             │
//! │ offset 16  │ AES-256-CBC(PKCS7(plaintext))                             │
//! │            │ length = ceil((len(plaintext) + 1) / 16) * 16             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Critical Security Requirement
//!
//! **NEVER reuse an IV with the same key.** Every call to
//! [`encrypt_with_key`] draws a new IV from the supplied RNG; there is no
//! public entry point that takes a caller-chosen IV.
//!
//! ## Failure Reporting
//!
//! Every decrypt failure past the length check collapses into
//! `Error::DecryptionFailed`. Misalignment and bad padding look the same to
//! the caller and to the logs.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand_core::{CryptoRng, RngCore};

use super::kdf::DerivedKey;
use crate::error::{Error, Result};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Size of the initialization vector in bytes
pub const IV_SIZE: usize = 16;

/// AES block size in bytes
pub const BLOCK_SIZE: usize = 16;

/// Smallest envelope that can hold a valid message: the IV plus one
/// padded block (an empty plaintext still pads to a full block)
pub const MIN_ENVELOPE_LEN: usize = IV_SIZE + BLOCK_SIZE;

/// Length of the envelope produced for a plaintext of `plaintext_len` bytes
pub fn envelope_len(plaintext_len: usize) -> usize {
    IV_SIZE + (plaintext_len / BLOCK_SIZE + 1) * BLOCK_SIZE
}

/// A borrowed, length-checked view over an encrypted payload
#[derive(Debug, Clone, Copy)]
pub struct Envelope<'a> {
    iv: &'a [u8; IV_SIZE],
    ciphertext: &'a [u8],
}

impl<'a> Envelope<'a> {
    /// Split raw bytes into IV and ciphertext
    ///
    /// ## Errors
    ///
    /// `EnvelopeTooShort` when `bytes` is shorter than [`MIN_ENVELOPE_LEN`].
    pub fn parse(bytes: &'a [u8]) -> Result<Self> {
        match bytes.split_first_chunk::<IV_SIZE>() {
            Some((iv, ciphertext)) if ciphertext.len() >= BLOCK_SIZE => {
                Ok(Self { iv, ciphertext })
            }
            _ => Err(Error::EnvelopeTooShort {
                len: bytes.len(),
                min: MIN_ENVELOPE_LEN,
            }),
        }
    }

    /// The initialization vector
    pub fn iv(&self) -> &'a [u8; IV_SIZE] {
        self.iv
    }

    /// The ciphertext following the IV
    pub fn ciphertext(&self) -> &'a [u8] {
        self.ciphertext
    }
}

/// Encrypt `plaintext` under `key` with a fresh IV drawn from `rng`
///
/// Returns `IV || ciphertext`.
pub fn encrypt_with_key<R>(key: &DerivedKey, plaintext: &[u8], rng: &mut R) -> Result<Vec<u8>>
where
    R: RngCore + CryptoRng,
{
    let mut iv = [0u8; IV_SIZE];
    rng.fill_bytes(&mut iv);

    let cipher = Aes256CbcEnc::new_from_slices(key.as_bytes(), &iv)
        .map_err(|e| Error::EncryptionFailed(format!("Invalid key: {}", e)))?;
    let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let mut envelope = Vec::with_capacity(IV_SIZE + ciphertext.len());
    envelope.extend_from_slice(&iv);
    envelope.extend_from_slice(&ciphertext);

    tracing::trace!(
        plaintext_len = plaintext.len(),
        envelope_len = envelope.len(),
        "Encrypted envelope"
    );

    Ok(envelope)
}

/// Decrypt an `IV || ciphertext` envelope under `key`
///
/// ## Errors
///
/// - `EnvelopeTooShort` if the input cannot hold an IV and one block
/// - `DecryptionFailed` if the ciphertext is misaligned or does not unpad,
///   i.e. it was tampered with or the key is wrong
pub fn decrypt_with_key(key: &DerivedKey, envelope: &[u8]) -> Result<Vec<u8>> {
    decrypt_envelope(key, &Envelope::parse(envelope)?)
}

/// Decrypt an already parsed envelope under `key`
///
/// ## Errors
///
/// `DecryptionFailed` if the ciphertext is misaligned or does not unpad.
pub fn decrypt_envelope(key: &DerivedKey, envelope: &Envelope<'_>) -> Result<Vec<u8>> {
    let ciphertext = envelope.ciphertext();

    if ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(Error::DecryptionFailed);
    }

    let cipher = Aes256CbcDec::new_from_slices(key.as_bytes(), envelope.iv())
        .map_err(|_| Error::DecryptionFailed)?;

    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| Error::DecryptionFailed)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_encrypt_decrypt_basic() {
        let key = DerivedKey::from_bytes([42u8; 32]);
        let plaintext = b"Hello, World!";

        let envelope = encrypt_with_key(&key, plaintext, &mut rng()).unwrap();
        let decrypted = decrypt_with_key(&key, &envelope).unwrap();

        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn test_envelope_lengths() {
        let key = DerivedKey::from_bytes([42u8; 32]);
        for len in [0usize, 1, 12, 15, 16, 17, 31, 32, 100] {
            let plaintext = vec![0xABu8; len];
            let envelope = encrypt_with_key(&key, &plaintext, &mut rng()).unwrap();
            assert_eq!(envelope.len(), envelope_len(len), "plaintext length {}", len);
        }
        assert_eq!(envelope_len(0), 32);
        assert_eq!(envelope_len(16), 48);
    }

    #[test]
    fn test_seeded_rng_reproducible() {
        let key = DerivedKey::from_bytes([42u8; 32]);
        let ct1 = encrypt_with_key(&key, b"same", &mut rng()).unwrap();
        let ct2 = encrypt_with_key(&key, b"same", &mut rng()).unwrap();
        assert_eq!(ct1, ct2);
    }

    #[test]
    fn test_fresh_iv_per_call() {
        let key = DerivedKey::from_bytes([42u8; 32]);
        let mut rng = rng();

        let ct1 = encrypt_with_key(&key, b"same", &mut rng).unwrap();
        let ct2 = encrypt_with_key(&key, b"same", &mut rng).unwrap();

        assert_ne!(ct1[..IV_SIZE], ct2[..IV_SIZE]);
        assert_ne!(ct1, ct2);
    }

    #[test]
    fn test_too_short_rejected() {
        let key = DerivedKey::from_bytes([42u8; 32]);
        for len in [0usize, 1, IV_SIZE, MIN_ENVELOPE_LEN - 1] {
            let result = decrypt_with_key(&key, &vec![0u8; len]);
            assert_eq!(
                result.unwrap_err(),
                Error::EnvelopeTooShort { len, min: MIN_ENVELOPE_LEN }
            );
        }
    }

    #[test]
    fn test_misaligned_ciphertext_fails() {
        let key = DerivedKey::from_bytes([42u8; 32]);
        let mut envelope = encrypt_with_key(&key, b"Hello, World!", &mut rng()).unwrap();
        envelope.push(0);

        assert_eq!(decrypt_with_key(&key, &envelope).unwrap_err(), Error::DecryptionFailed);
    }

    #[test]
    fn test_wrong_key_fails() {
        let key1 = DerivedKey::from_bytes([42u8; 32]);
        let key2 = DerivedKey::from_bytes([99u8; 32]);

        let envelope = encrypt_with_key(&key1, b"secret", &mut rng()).unwrap();
        let result = decrypt_with_key(&key2, &envelope);

        assert_ne!(result.as_deref().ok(), Some(&b"secret"[..]));
    }

    #[test]
    fn test_envelope_parse() {
        let bytes: Vec<u8> = (0u8..48).collect();
        let envelope = Envelope::parse(&bytes).unwrap();

        assert_eq!(envelope.iv()[0], 0);
        assert_eq!(envelope.iv()[15], 15);
        assert_eq!(envelope.ciphertext().len(), 32);
        assert_eq!(envelope.ciphertext()[0], 16);
    }

    #[test]
    fn test_envelope_parse_boundary() {
        let bytes = [0u8; MIN_ENVELOPE_LEN];
        assert_eq!(Envelope::parse(&bytes).unwrap().ciphertext().len(), BLOCK_SIZE);
        assert_eq!(
            Envelope::parse(&bytes[..MIN_ENVELOPE_LEN - 1]).unwrap_err(),
            Error::EnvelopeTooShort { len: MIN_ENVELOPE_LEN - 1, min: MIN_ENVELOPE_LEN }
        );
    }

    #[test]
    fn test_decrypt_parsed_envelope() {
        let key = DerivedKey::from_bytes([42u8; 32]);
        let bytes = encrypt_with_key(&key, b"Hello, World!", &mut rng()).unwrap();
        let envelope = Envelope::parse(&bytes).unwrap();

        assert_eq!(decrypt_envelope(&key, &envelope).unwrap(), b"Hello, World!");
        assert_eq!(
            decrypt_envelope(&key, &envelope).unwrap(),
            decrypt_with_key(&key, &bytes).unwrap()
        );
    }
}
