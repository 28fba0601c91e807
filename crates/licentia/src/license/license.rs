//! The license value — plain terms, or terms carrying a signed envelope.

use serde::{Deserialize, Serialize};

use crate::license::{LicenseData, LicenseId};

/// A license record.
///
/// Exactly one variant applies to any value, and the variant alone decides
/// the on-disk encoding: a plain license is serialized to XML text, a
/// signed license is written as its envelope bytes verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum License {
    /// Terms with no integrity protection; serialized on write.
    Plain(LicenseData),
    /// Terms wrapped in a pre-encoded, integrity-protected envelope;
    /// written verbatim.
    Signed(SignedLicense),
}

impl License {
    /// The license identifier, independent of variant.
    pub fn id(&self) -> LicenseId {
        self.data().id
    }

    /// The license terms, independent of variant.
    pub fn data(&self) -> &LicenseData {
        match self {
            Self::Plain(data) => data,
            Self::Signed(signed) => signed.data(),
        }
    }

    pub fn is_signed(&self) -> bool {
        matches!(self, Self::Signed(_))
    }
}

/// License terms together with the envelope bytes they were decoded from.
///
/// The envelope is produced by an external signing collaborator; this crate
/// treats it as opaque and preserves it byte-for-byte, so storing a signed
/// license writes back exactly what the signer emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedLicense {
    data: LicenseData,
    encoded: Vec<u8>,
}

impl SignedLicense {
    /// Pair decoded terms with their original envelope bytes.
    pub fn from_parts(data: LicenseData, encoded: Vec<u8>) -> Self {
        Self { data, encoded }
    }

    /// The decoded license terms.
    pub fn data(&self) -> &LicenseData {
        &self.data
    }

    /// The envelope bytes, exactly as persisted.
    pub fn encoded(&self) -> &[u8] {
        &self.encoded
    }
}
