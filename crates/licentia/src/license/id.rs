//! License identifiers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{LicenseError, Result};

/// Unique identifier for a license.
///
/// Backed by a UUID. The string form is the canonical lowercase-hyphenated
/// rendering; the on-disk file naming scheme depends on it staying stable
/// and filesystem-safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LicenseId(Uuid);

impl LicenseId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier from its string form.
    ///
    /// Accepts any UUID rendering; the canonical form is produced on
    /// display regardless of the input shape.
    pub fn parse(s: &str) -> Result<Self> {
        Uuid::try_parse(s)
            .map(Self)
            .map_err(|e| LicenseError::Decode(format!("invalid license id '{s}': {e}")))
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for LicenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for LicenseId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl std::fmt::Display for LicenseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Uuid renders lowercase hyphenated by default.
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_is_canonical() {
        let id = LicenseId::parse("3FA85F64-5717-4562-B3FC-2C963F66AFA6").unwrap();
        assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    }

    #[test]
    fn test_id_parse_roundtrip() {
        let id = LicenseId::new();
        let parsed = LicenseId::parse(&id.to_string()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_id_parse_rejects_garbage() {
        assert!(LicenseId::parse("not-a-uuid").is_err());
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(LicenseId::new(), LicenseId::new());
    }
}
