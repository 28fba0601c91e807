//! Signed license envelope framing.
//!
//! A signed license is persisted as the exact bytes the signing
//! collaborator produced: a bincode frame carrying the XML payload, a
//! detached signature over it, and the signing key's identifier. This
//! module frames and deframes; producing or checking the signature is the
//! signer's concern, not this crate's.

use serde::{Deserialize, Serialize};

use crate::error::{LicenseError, Result};

/// Current envelope frame version.
const ENVELOPE_VERSION: u16 = 1;

/// Binary envelope wrapping a serialized license and its signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedEnvelope {
    version: u16,
    /// UTF-8 XML rendering of the license terms.
    payload: Vec<u8>,
    /// Detached signature over `payload`.
    signature: Vec<u8>,
    /// Identifier of the signing key.
    key_id: String,
}

impl SignedEnvelope {
    pub fn new(payload: Vec<u8>, signature: Vec<u8>, key_id: impl Into<String>) -> Self {
        Self {
            version: ENVELOPE_VERSION,
            payload,
            signature,
            key_id: key_id.into(),
        }
    }

    /// Frame the envelope into its on-disk byte form.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| LicenseError::Serialization(e.to_string()))
    }

    /// Deframe an envelope from on-disk bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let envelope: Self = bincode::deserialize(bytes)
            .map_err(|e| LicenseError::Decode(format!("signed envelope: {e}")))?;
        if envelope.version != ENVELOPE_VERSION {
            return Err(LicenseError::Decode(format!(
                "unsupported envelope version {}",
                envelope.version
            )));
        }
        Ok(envelope)
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    pub fn key_id(&self) -> &str {
        &self.key_id
    }
}
