//! JSON file persistence for the address book.

use crate::book::AddressBook;
use crate::error::{StorageError, StorageResult};
use crate::models::Record;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Current on-disk format version.
const BOOK_FILE_VERSION: u32 = 1;

/// The persisted shape of an address book.
///
/// Records carry their field values as raw validated strings, so
/// deserializing re-validates every field and a round trip reproduces
/// the book element-wise, duplicates and note order included.
#[derive(Debug, Serialize, Deserialize)]
struct BookFile {
    version: u32,
    page_size: usize,
    records: Vec<Record>,
}

/// Persistence adapter for one book file on disk.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store for the given file path. Nothing is touched on
    /// disk until [`save`](Self::save) or [`load`](Self::load) runs.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize the whole book to disk.
    ///
    /// The content is written to a sibling temporary file first and then
    /// renamed over the destination, so a failed save never leaves a
    /// truncated or half-written book behind.
    pub fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let file = BookFile {
            version: BOOK_FILE_VERSION,
            page_size: book.page_size(),
            records: book.iter().cloned().collect(),
        };
        let content = serde_json::to_string_pretty(&file)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.temp_path();
        fs::write(&tmp, content)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            // The old file is still intact; drop the orphaned temp file.
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        debug!(path = %self.path.display(), records = book.len(), "saved book");
        Ok(())
    }

    /// Load a previously saved book.
    ///
    /// A missing file is the bootstrap path and yields an empty book.
    /// I/O and decode failures are propagated so corruption is never
    /// mistaken for an empty store; callers wanting the lenient
    /// behavior can fall back to `AddressBook::new()` themselves.
    pub fn load(&self) -> StorageResult<AddressBook> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "no book file, starting empty");
            return Ok(AddressBook::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let file: BookFile = serde_json::from_str(&content)?;
        if file.version != BOOK_FILE_VERSION {
            return Err(StorageError::UnsupportedVersion(file.version));
        }

        debug!(path = %self.path.display(), records = file.records.len(), "loaded book");
        Ok(AddressBook::from_parts(file.records, file.page_size))
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
