//! Filesystem persistence for license records.
//!
//! # Directory layout
//!
//! A multi store is a directory with one file per license, named by id; a
//! single store is one file holding at most one license:
//!
//! ```text
//! /var/lib/app/licenses/                               ← multi store
//! ├── 3fa85f64-5717-4562-b3fc-2c963f66afa6.license
//! └── 9f0c2f1e-8a41-4f0a-9c7d-5b2d8f1e6a33.license
//!
//! /var/lib/app/app.license                             ← single store
//! ```
//!
//! File content is either XML text or signed-envelope bytes; the leading
//! bytes decide (see [`codec::content`](crate::codec::content)), never the
//! file extension.
//!
//! Error policy is split per operation: store/retrieve propagate every
//! failure with the offending path, while iteration and whole-store
//! deletion are best-effort and swallow per-item failures (logged, not
//! raised).
//!
//! # Modules
//!
//! - [`reference`] — where a store lives, and its single/multi mode.
//! - [`fs`] — store/retrieve/delete over the resolved location.
//! - [`iter`] — lazy, fault-tolerant directory iteration.

pub mod fs;
pub mod iter;
pub mod reference;

// Re-export the primary types so callers can write `store::FsLicenseStore`
// without reaching into sub-modules.
pub use fs::FsLicenseStore;
pub use iter::LicenseFileIter;
pub use reference::{FileStoreReference, StoreReference};

/// Extension carried by every license file in a multi store.
pub(crate) const LICENSE_FILE_EXT: &str = ".license";
