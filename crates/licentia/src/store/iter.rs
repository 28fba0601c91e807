//! Lazy iteration over a multi-license store directory.

use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::codec::LicenseDecoder;
use crate::error::Result;
use crate::license::License;
use crate::store::fs::read_license_file;
use crate::store::LICENSE_FILE_EXT;

/// Whether `name` is a candidate license file name: a canonical
/// lowercase-hyphenated UUID followed by the license extension.
///
/// The stem must re-render to itself, which rejects uppercase, braced, URN
/// and 32-digit compact forms that the UUID parser would otherwise accept.
pub(crate) fn is_license_file_name(name: &str) -> bool {
    name.strip_suffix(LICENSE_FILE_EXT)
        .and_then(|stem| Uuid::try_parse(stem).ok().map(|uuid| uuid.to_string() == stem))
        .unwrap_or(false)
}

/// Snapshot the candidate license files of `dir`, in listing order.
///
/// A missing directory is an empty snapshot, so a deleted store iterates
/// as empty rather than failing.
pub(crate) fn license_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry?;
        if entry.file_name().to_str().is_some_and(is_license_file_name) {
            files.push(entry.path());
        }
    }
    Ok(files)
}

/// Forward-only, single-pass iterator over the licenses in a directory
/// snapshot.
///
/// Files are read and decoded lazily, one at a time, when the next element
/// is first demanded. A file that fails to read or decode is logged as a
/// warning and skipped; the failure never reaches the consumer and never
/// ends the iteration early. The snapshot is fixed at construction —
/// concurrent directory changes are not reflected.
pub struct LicenseFileIter<'a, D: ?Sized> {
    decoder: &'a D,
    files: Vec<PathBuf>,
    index: usize,
    pending: Option<License>,
}

impl<'a, D: LicenseDecoder + ?Sized> LicenseFileIter<'a, D> {
    pub(crate) fn new(decoder: &'a D, files: Vec<PathBuf>) -> Self {
        Self {
            decoder,
            files,
            index: 0,
            pending: None,
        }
    }

    /// Whether another license can be produced.
    ///
    /// Idempotent: repeated calls without consuming neither advance the
    /// position nor re-read files — the decoded element is buffered until
    /// [`next`](Iterator::next) takes it.
    pub fn has_next(&mut self) -> bool {
        if self.pending.is_none() {
            self.pending = self.advance();
        }
        self.pending.is_some()
    }

    fn advance(&mut self) -> Option<License> {
        while self.index < self.files.len() {
            let path = &self.files[self.index];
            self.index += 1;
            match read_license_file(self.decoder, path) {
                Ok(license) => return Some(license),
                Err(e) => log::warn!("Failed to read license file {}: {e}", path.display()),
            }
        }
        None
    }
}

impl<D: LicenseDecoder + ?Sized> Iterator for LicenseFileIter<'_, D> {
    type Item = License;

    fn next(&mut self) -> Option<License> {
        if self.pending.is_none() {
            self.pending = self.advance();
        }
        self.pending.take()
    }
}
