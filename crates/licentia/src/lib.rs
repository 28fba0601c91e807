//! Licentia — file-backed persistence for license records.
//!
//! A license store is either a single file holding one license or a
//! directory keyed by license id. Two on-disk encodings are supported
//! transparently: plain XML text and a signed binary envelope, told apart
//! by content sniffing rather than file metadata, so any previously
//! written license file can be read back without knowing how it was
//! produced.
//!
//! ```no_run
//! use licentia::{FileStoreReference, FsLicenseStore, License, LicenseData, LicenseType, XmlCodec};
//!
//! # fn main() -> licentia::Result<()> {
//! let store = FsLicenseStore::new(XmlCodec);
//! let licenses = FileStoreReference::multi("/var/lib/app/licenses");
//!
//! let license = License::Plain(LicenseData::new(LicenseType::Trial));
//! store.store(&licenses, &license)?;
//!
//! for license in store.licenses(&licenses)? {
//!     println!("{} ({})", license.id(), license.data().license_type);
//! }
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod error;
pub mod license;
pub mod store;

// Re-export primary types
pub use codec::{FileContent, LicenseDecoder, LicenseSerializer, SignedEnvelope, XmlCodec};
pub use error::{LicenseError, Result};
pub use license::{License, LicenseData, LicenseId, LicenseType, SignedLicense};
pub use store::{FileStoreReference, FsLicenseStore, LicenseFileIter, StoreReference};
