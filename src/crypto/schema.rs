//! # Sign Schema
//!
//! Selects which hash family produced an account's key material.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SignSchema   │  hash_long (512-bit)  │  hash_short (256-bit)          │
//! ├───────────────┼───────────────────────┼────────────────────────────────┤
//! │  Sha3         │  SHA3-512             │  SHA3-256                      │
//! │  Keccak       │  Keccak-512           │  Keccak-256                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The schema only changes how the private scalar is prepared; the public
//! key encoding is the same compressed Edwards point either way.
//!
//! Keccak-schema accounts keep their private keys in reversed byte order, so
//! scalar preparation runs [`SignSchema::reverse`] on them before hashing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256, Keccak512, Sha3_256, Sha3_512};

use crate::error::{Error, Result};

/// Hash family used when the key material was generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignSchema {
    /// SHA3 (FIPS 202) hashers
    #[default]
    #[serde(alias = "SHA3")]
    Sha3,
    /// Keccak hashers with pre-FIPS padding
    #[serde(alias = "KECCAK")]
    Keccak,
}

impl SignSchema {
    /// All schemas, in declaration order
    pub const ALL: [SignSchema; 2] = [SignSchema::Sha3, SignSchema::Keccak];

    /// 512-bit hash of the concatenated inputs
    pub fn hash_long(self, inputs: &[&[u8]]) -> [u8; 64] {
        let mut out = [0u8; 64];
        match self {
            SignSchema::Sha3 => out.copy_from_slice(&digest::<Sha3_512>(inputs)),
            SignSchema::Keccak => out.copy_from_slice(&digest::<Keccak512>(inputs)),
        }
        out
    }

    /// 256-bit hash of the concatenated inputs
    pub fn hash_short(self, inputs: &[&[u8]]) -> [u8; 32] {
        let mut out = [0u8; 32];
        match self {
            SignSchema::Sha3 => out.copy_from_slice(&digest::<Sha3_256>(inputs)),
            SignSchema::Keccak => out.copy_from_slice(&digest::<Keccak256>(inputs)),
        }
        out
    }

    /// Reverse the byte order of a 32-byte key
    pub fn reverse(bytes: &[u8; 32]) -> [u8; 32] {
        let mut out = *bytes;
        out.reverse();
        out
    }

    /// Lowercase name used in configuration
    pub fn as_str(self) -> &'static str {
        match self {
            SignSchema::Sha3 => "sha3",
            SignSchema::Keccak => "keccak",
        }
    }
}

fn digest<D: Digest>(inputs: &[&[u8]]) -> sha3::digest::Output<D> {
    let mut hasher = D::new();
    for input in inputs {
        hasher.update(input);
    }
    hasher.finalize()
}

impl fmt::Display for SignSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignSchema {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sha3" => Ok(SignSchema::Sha3),
            "keccak" => Ok(SignSchema::Keccak),
            other => Err(Error::InvalidConfig(format!("Unknown sign schema '{}'", other))),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn long_hex(schema: SignSchema, input: &str) -> String {
        hex::encode(schema.hash_long(&[&hex::decode(input).unwrap()]))
    }

    fn short_hex(schema: SignSchema, input: &str) -> String {
        hex::encode(schema.hash_short(&[&hex::decode(input).unwrap()]))
    }

    const HASH_VECTORS: [(&str, SignSchema, bool, &str); 12] = [
        ("227F", SignSchema::Sha3, true, "dc229a6d2bb1ee8ce10e5b283254c68b4ee8ab8a28fa078f6c47ddd3d2bb25ee1cdb45f58b6fb2bb164cd5652ba482e6b44beeca293a2b24b70cdf9fe8d4051c"),
        ("227F", SignSchema::Keccak, true, "764011e5b78404847b0a0a55f3a19c3db5401889ff438fc950537797baf42d7724ed681857bfe632cf5a132fa43dd881dbf15e4d11f518acb7fd03cacb81177a"),
        ("AAAA", SignSchema::Sha3, true, "e192911d630f8fcad20b896b9d42f7a79c9fe2146bc8543ab4dcf7263e119215a741a9e774d97c3ccd5a63c484787903f9cb694e22c3f865f866a4f93537eb23"),
        ("AAAA", SignSchema::Keccak, true, "e9cc94aeeab674586e0d62ad5f7dab2678dbdf43b73f13debdd014ed5a0c68ca18a35c6a68c9b8c7a6bd3d62a2d94f492b9f61837e985d80217f4b12ce0bd4c9"),
        ("BBADABA123", SignSchema::Sha3, true, "800df91a0217b997945f94dbd62c2b278925a56f040ebbc677671e396e7e38996992ee527087800b2bb5cdb1cc29658afd8ba49f734e2e17c11b6dffacdd2de6"),
        ("BBADABA123", SignSchema::Keccak, true, "72f35d7c791981554bae85677606e61e1f29e70e0d8d7f288af795933f03a6c2b5fccdae53b437238df35cd531cfaac5fb9d4a5590d764adb8c5dec315ab80bd"),
        ("227F", SignSchema::Sha3, false, "7f735e6b0665ceb120bff1bc1478ef2684bace93e82d5ff6d6e5066381bb365e"),
        ("227F", SignSchema::Keccak, false, "8b768bd38b5ff80edb8a9aeb460606a682580616d512ff566d0176b1c8fc1034"),
        ("AAAA", SignSchema::Sha3, false, "4ee18b807b7dfa443a9d87dd51bc03d868b1cde26581c092ca57a366b8b408ca"),
        ("AAAA", SignSchema::Keccak, false, "6330b989705733cc5c1f7285b8a5b892e08be86ed6fbe9d254713a4277bc5bd2"),
        ("BBADABA123", SignSchema::Sha3, false, "faff241e629dfc621077481a4fec760a86675f74fba39a3c90587f0cefe177f4"),
        ("BBADABA123", SignSchema::Keccak, false, "9aad08fdd5ee6599b94c0440b81d5fddc8d03882f1856d72b38d72f743123304"),
    ];

    const REVERSE_VECTORS: [(&str, &str); 7] = [
        ("575dbb3062267eff57c970a336ebbc8fbcfe12c5bd3ed7bc11eb0481d7704ced", "ED4C70D78104EB11BCD73EBDC512FEBC8FBCEB36A370C957FF7E266230BB5D57"),
        ("5b0e3fa5d3b49a79022d7c1e121ba1cbbf4db5821f47ab8c708ef88defc29bfe", "FE9BC2EF8DF88E708CAB471F82B54DBFCBA11B121E7C2D02799AB4D3A53F0E5B"),
        ("738ba9bb9110aea8f15caa353aca5653b4bdfca1db9f34d0efed2ce1325aeeda", "DAEE5A32E12CEDEFD0349FDBA1FCBDB45356CA3A35AA5CF1A8AE1091BBA98B73"),
        ("e8bf9bc0f35c12d8c8bf94dd3a8b5b4034f1063948e3cc5304e55e31aa4b95a6", "A6954BAA315EE50453CCE3483906F134405B8B3ADD94BFC8D8125CF3C09BBFE8"),
        ("c325ea529674396db5675939e7988883d59a5fc17a28ca977e3ba85370232a83", "832A237053A83B7E97CA287AC15F9AD5838898E7395967B56D39749652EA25C3"),
        ("ABF4CF55A2B3F742D7543D9CC17F50447B969E6E06F5EA9195D428AB12B7318D", "8D31B712AB28D49591EAF5066E9E967B44507FC19C3D54D742F7B3A255CFF4AB"),
        ("6aa6dad25d3acb3385d5643293133936cdddd7f7e11818771db1ff2f9d3f9215", "15923F9D2FFFB11D771818E1F7D7DDCD363913933264D58533CB3A5DD2DAA66A"),
    ];

    #[test]
    fn test_hash_vectors() {
        for (input, schema, long, expected) in HASH_VECTORS {
            let actual = if long {
                long_hex(schema, input)
            } else {
                short_hex(schema, input)
            };
            assert_eq!(actual, expected, "{} {} long={}", schema, input, long);
        }
    }

    #[test]
    fn test_reverse_vectors() {
        for (input, expected) in REVERSE_VECTORS {
            let mut bytes = [0u8; 32];
            hex::decode_to_slice(input, &mut bytes).unwrap();
            assert_eq!(hex::encode_upper(SignSchema::reverse(&bytes)), expected);
        }
    }

    #[test]
    fn test_reverse_is_involution() {
        let bytes: [u8; 32] = std::array::from_fn(|i| i as u8);
        assert_eq!(SignSchema::reverse(&SignSchema::reverse(&bytes)), bytes);
    }

    #[test]
    fn test_hash_concatenates_inputs() {
        let whole = SignSchema::Sha3.hash_long(&[&[0x22, 0x7f]]);
        let split = SignSchema::Sha3.hash_long(&[&[0x22], &[0x7f]]);
        assert_eq!(whole, split);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("SHA3".parse::<SignSchema>().unwrap(), SignSchema::Sha3);
        assert_eq!("keccak".parse::<SignSchema>().unwrap(), SignSchema::Keccak);
        assert!("sha2".parse::<SignSchema>().is_err());
        assert_eq!(SignSchema::Keccak.to_string(), "keccak");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&SignSchema::Keccak).unwrap();
        assert_eq!(json, "\"keccak\"");
        let parsed: SignSchema = serde_json::from_str("\"SHA3\"").unwrap();
        assert_eq!(parsed, SignSchema::Sha3);
    }
}
