//! Error types for license persistence.
//!
//! All errors are strongly typed and propagated without panicking.
//! "No license at this location" is never an error — read paths model
//! absence as `Ok(None)`.

/// License persistence error types covering all operations.
#[derive(Debug, thiserror::Error)]
pub enum LicenseError {
    /// A store reference kind this implementation cannot resolve to a path.
    #[error("Unsupported store reference: {0}")]
    UnsupportedReference(String),

    /// A single-store operation was invoked on a multi reference, or the
    /// other way around.
    #[error("Wrong store kind: {0}")]
    WrongStoreKind(String),

    /// A license could not be rendered to its persisted form.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// File content could not be interpreted as a license.
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, LicenseError>;
