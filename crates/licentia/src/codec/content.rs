//! Content sniffing for license files.
//!
//! License files carry no metadata about their encoding; the leading bytes
//! decide. A file starting with an XML declaration is textual, everything
//! else is an opaque signed envelope. Extensions are never consulted.

/// The `<?xml ` prefix in bytes.
const XML_MAGIC: [u8; 6] = [0x3c, 0x3f, 0x78, 0x6d, 0x6c, 0x20];

/// Raw content of a license file, classified by encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// UTF-8 XML text.
    Text(String),
    /// Opaque signed-envelope bytes.
    Binary(Vec<u8>),
}

impl FileContent {
    /// Classify raw file bytes by their leading magic.
    ///
    /// Content shorter than the magic prefix is binary; content carrying
    /// the prefix is text regardless of total length. Invalid UTF-8
    /// sequences in text content are replaced rather than rejected, so a
    /// mangled document surfaces as a parse failure with context instead
    /// of an opaque conversion error.
    pub fn sniff(data: Vec<u8>) -> Self {
        if data.len() >= XML_MAGIC.len() && data[..XML_MAGIC.len()] == XML_MAGIC {
            match String::from_utf8(data) {
                Ok(text) => Self::Text(text),
                Err(e) => Self::Text(String::from_utf8_lossy(e.as_bytes()).into_owned()),
            }
        } else {
            Self::Binary(data)
        }
    }
}
