//! Encoding boundary between license values and file bytes.
//!
//! The store never interprets file content itself; it sniffs the encoding
//! and hands the result to a codec. The two traits here are that boundary:
//! [`LicenseSerializer`] renders plain terms to text, [`LicenseDecoder`]
//! turns sniffed content back into a typed [`License`]. [`XmlCodec`] is the
//! production implementation of both.
//!
//! # Modules
//!
//! - [`content`] — byte-prefix sniffing into [`FileContent`].
//! - [`envelope`] — the signed-envelope binary frame.
//! - [`xml`] — the XML rendering of license terms.

pub mod content;
pub mod envelope;
pub mod xml;

pub use content::FileContent;
pub use envelope::SignedEnvelope;
pub use xml::XmlCodec;

use crate::error::Result;
use crate::license::{License, LicenseData};

/// Renders plain license terms to their persisted textual form.
///
/// Only reached for plain licenses; signed licenses bypass serialization
/// entirely and are written as their envelope bytes.
pub trait LicenseSerializer {
    fn serialize(&self, data: &LicenseData) -> Result<String>;
}

/// Decodes sniffed file content into a typed license.
///
/// Text content is the XML form; binary content is a signed envelope. The
/// decoder decides how far to trust either — this crate's [`XmlCodec`]
/// recovers the envelope payload without verifying its signature, which is
/// the signing collaborator's job.
pub trait LicenseDecoder {
    fn decode(&self, content: FileContent) -> Result<License>;
}
