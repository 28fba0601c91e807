//! License terms — the fields a license grants and restricts.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LicenseError;
use crate::license::LicenseId;

/// Commercial category of a license.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseType {
    Free,
    Trial,
    Paid,
}

impl LicenseType {
    /// Stable lowercase tag used in the persisted form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Trial => "trial",
            Self::Paid => "paid",
        }
    }
}

impl std::fmt::Display for LicenseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LicenseType {
    type Err = LicenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(Self::Free),
            "trial" => Ok(Self::Trial),
            "paid" => Ok(Self::Paid),
            other => Err(LicenseError::Decode(format!(
                "unknown license type '{other}'"
            ))),
        }
    }
}

/// The terms of one license.
///
/// `licensee` uses a `BTreeMap` so the persisted rendering is
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseData {
    /// Unique identifier; also the file name stem in a multi store.
    pub id: LicenseId,
    /// Commercial category.
    pub license_type: LicenseType,
    /// Identifiers of the features this license unlocks.
    pub features: Vec<String>,
    /// Instances the license is bound to.
    pub instance_ids: Vec<String>,
    /// Free-form licensee information (name, email, ...).
    pub licensee: BTreeMap<String, String>,
    /// Expiration instant; `None` means perpetual.
    pub expiration: Option<DateTime<Utc>>,
    /// Maximum number of users covered; `None` means unlimited.
    pub max_user_count: Option<u64>,
}

impl LicenseData {
    /// Create an empty license of the given type with a fresh id.
    pub fn new(license_type: LicenseType) -> Self {
        Self {
            id: LicenseId::new(),
            license_type,
            features: Vec::new(),
            instance_ids: Vec::new(),
            licensee: BTreeMap::new(),
            expiration: None,
            max_user_count: None,
        }
    }
}
