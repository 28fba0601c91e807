//! Filesystem implementation of the license store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::codec::{FileContent, LicenseDecoder, LicenseSerializer};
use crate::error::{LicenseError, Result};
use crate::license::{License, LicenseId};
use crate::store::iter::{license_files, LicenseFileIter};
use crate::store::reference::{FileStoreReference, StoreReference};
use crate::store::LICENSE_FILE_EXT;

/// Filesystem-backed license store.
///
/// Generic over the codec so hosts can substitute their own serializer and
/// decoder; [`XmlCodec`](crate::codec::XmlCodec) is the stock choice.
///
/// Parent directories of a store are expected to pre-exist — creating them
/// is the caller's responsibility, and their absence surfaces as the
/// underlying I/O error. Writes are not transactional and no locking is
/// performed; the host serializes access across requests. A crash
/// mid-write can leave a truncated file, which later reads surface as a
/// decode failure rather than silently succeeding.
pub struct FsLicenseStore<C> {
    codec: C,
}

impl<C> FsLicenseStore<C> {
    pub fn new(codec: C) -> Self {
        Self { codec }
    }

    fn file_reference<'a>(&self, store: &'a dyn StoreReference) -> Result<&'a FileStoreReference> {
        store.as_file().ok_or_else(|| {
            LicenseError::UnsupportedReference(
                "only filesystem-backed references are supported by this store".into(),
            )
        })
    }

    fn license_file(&self, store: &dyn StoreReference, id: LicenseId) -> Result<PathBuf> {
        let file = self.file_reference(store)?;
        if !store.is_multi() {
            return Err(LicenseError::WrongStoreKind(format!(
                "{} should be a multi-license store",
                file.path().display()
            )));
        }
        Ok(file.path().join(format!("{id}{LICENSE_FILE_EXT}")))
    }
}

impl<C: LicenseSerializer + LicenseDecoder> FsLicenseStore<C> {
    /// Persist a license, creating or overwriting its file.
    ///
    /// Signed licenses are written as their envelope bytes verbatim; plain
    /// licenses go through the serializer and are written as UTF-8. A
    /// failed write may leave a truncated file — callers must treat
    /// failure as "state unknown; retry or recreate."
    pub fn store(&self, store: &dyn StoreReference, license: &License) -> Result<()> {
        let path = if store.is_multi() {
            self.license_file(store, license.id())?
        } else {
            self.file_reference(store)?.path().to_path_buf()
        };

        match license {
            License::Signed(signed) => write_bytes(&path, signed.encoded())?,
            License::Plain(data) => write_bytes(&path, self.codec.serialize(data)?.as_bytes())?,
        }
        log::debug!("Stored license {} at {}", license.id(), path.display());
        Ok(())
    }

    /// Retrieve the license held by a single-license store.
    ///
    /// A missing file is a normal outcome and returns `Ok(None)`.
    pub fn retrieve(&self, store: &dyn StoreReference) -> Result<Option<License>> {
        let file = self.file_reference(store)?;
        if store.is_multi() {
            return Err(LicenseError::WrongStoreKind(format!(
                "{} should be a single-license store",
                file.path().display()
            )));
        }
        self.read_optional(file.path())
    }

    /// Retrieve a license by id from a multi-license store.
    ///
    /// The per-id path is computed directly; the directory is never
    /// listed. A missing file returns `Ok(None)`.
    pub fn retrieve_by_id(
        &self,
        store: &dyn StoreReference,
        id: LicenseId,
    ) -> Result<Option<License>> {
        let path = self.license_file(store, id)?;
        self.read_optional(&path)
    }

    /// Iterate the licenses of a multi store.
    ///
    /// The directory listing is snapshotted up front; concurrent changes
    /// are not reflected. Entries that fail to decode are logged and
    /// skipped, never surfaced. A missing directory yields an empty
    /// iteration.
    pub fn licenses(&self, store: &dyn StoreReference) -> Result<LicenseFileIter<'_, C>> {
        let file = self.file_reference(store)?;
        if !store.is_multi() {
            return Err(LicenseError::WrongStoreKind(format!(
                "cannot iterate a single-license store {}",
                file.path().display()
            )));
        }
        Ok(LicenseFileIter::new(
            &self.codec,
            license_files(file.path())?,
        ))
    }

    /// Delete a whole store.
    ///
    /// Multi stores are removed recursively, best-effort: failures are
    /// logged and swallowed. For single stores the one file is removed; a
    /// missing file is not an error.
    pub fn delete(&self, store: &dyn StoreReference) -> Result<()> {
        let file = self.file_reference(store)?;
        if store.is_multi() {
            if let Err(e) = fs::remove_dir_all(file.path()) {
                if e.kind() != io::ErrorKind::NotFound {
                    log::warn!(
                        "Failed to delete license store {}: {e}",
                        file.path().display()
                    );
                }
            }
            Ok(())
        } else {
            match fs::remove_file(file.path()) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            }
        }
    }

    /// Delete one license from a multi store. Absence is a silent no-op.
    pub fn delete_by_id(&self, store: &dyn StoreReference, id: LicenseId) -> Result<()> {
        let path = self.license_file(store, id)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn read_optional(&self, path: &Path) -> Result<Option<License>> {
        if !path.exists() {
            return Ok(None);
        }
        read_license_file(&self.codec, path).map(Some)
    }
}

/// Read and decode one license file, prefixing failures with the
/// offending path.
pub(crate) fn read_license_file<D>(decoder: &D, path: &Path) -> Result<License>
where
    D: LicenseDecoder + ?Sized,
{
    let data = fs::read(path).map_err(|e| with_path(path, e))?;
    match decoder.decode(FileContent::sniff(data)) {
        Err(LicenseError::Decode(msg)) => {
            Err(LicenseError::Decode(format!("{}: {msg}", path.display())))
        }
        other => other,
    }
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|e| with_path(path, e).into())
}

fn with_path(path: &Path, e: io::Error) -> io::Error {
    io::Error::new(e.kind(), format!("{}: {e}", path.display()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
