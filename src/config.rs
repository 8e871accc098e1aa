//! Cipher configuration.
//!
//! The sign schema normally comes from the network the SDK is pointed at,
//! so it is loadable from the same JSON the caller already parses.

use serde::{Deserialize, Serialize};

use crate::crypto::SignSchema;
use crate::error::Result;

/// Configuration for the message cipher
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CipherConfig {
    /// Hash family the network's keys were generated with
    pub sign_schema: SignSchema,
}

impl CipherConfig {
    /// Create a config for `sign_schema`
    pub fn new(sign_schema: SignSchema) -> Self {
        Self { sign_schema }
    }

    /// Parse from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config = serde_json::from_str(json)?;
        tracing::debug!(?config, "Loaded cipher config");
        Ok(config)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
