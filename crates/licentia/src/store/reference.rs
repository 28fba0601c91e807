//! Store references — where a license store lives.

use std::path::{Path, PathBuf};

/// Opaque handle naming a persistence location.
///
/// Implementations describe *where* licenses live; the store decides how
/// to read and write them. A reference kind that does not explicitly
/// declare itself single-license is treated as a keyed multi-license
/// store — callers depend on that default, so implementors should only
/// override [`is_multi`](StoreReference::is_multi) to opt into single mode.
pub trait StoreReference {
    /// The filesystem-backed view of this reference, if it has one.
    fn as_file(&self) -> Option<&FileStoreReference> {
        None
    }

    /// Whether this reference names a keyed multi-license store.
    fn is_multi(&self) -> bool {
        true
    }
}

/// Filesystem-backed store reference.
///
/// In multi mode the path names a directory holding one file per license;
/// in single mode it names one file holding at most one license. The mode
/// is fixed for the lifetime of the reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStoreReference {
    path: PathBuf,
    multi: bool,
}

impl FileStoreReference {
    /// Reference a directory holding one file per license.
    pub fn multi(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            multi: true,
        }
    }

    /// Reference a single file holding at most one license.
    pub fn single(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            multi: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StoreReference for FileStoreReference {
    fn as_file(&self) -> Option<&FileStoreReference> {
        Some(self)
    }

    fn is_multi(&self) -> bool {
        self.multi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A reference kind the file store knows nothing about.
    struct OpaqueReference;

    impl StoreReference for OpaqueReference {}

    #[test]
    fn test_unknown_reference_defaults_to_multi() {
        // Kinds that do not declare themselves single are multi.
        assert!(OpaqueReference.is_multi());
        assert!(OpaqueReference.as_file().is_none());
    }

    #[test]
    fn test_file_reference_modes() {
        let multi = FileStoreReference::multi("/var/lib/licenses");
        assert!(multi.is_multi());
        assert_eq!(multi.path(), Path::new("/var/lib/licenses"));

        let single = FileStoreReference::single("/var/lib/app.license");
        assert!(!single.is_multi());
        assert!(single.as_file().is_some());
    }
}
