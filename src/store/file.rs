//! File-backed store for the club document
//!
//! Saves go through a temp file in the same directory followed by a rename,
//! so a crash mid-write leaves the previous document intact.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::state::ClubState;

/// File-backed persistent store
///
/// Holds the paths only; all I/O happens per call. The engine serializes
/// callers, so no internal locking is needed here.
pub struct FileStore {
    /// Directory containing the document
    data_dir: PathBuf,

    /// Path of the persisted document
    document_path: PathBuf,

    /// Path of the temp file used for atomic rewrites
    temp_path: PathBuf,
}

impl FileStore {
    const DOCUMENT_FILENAME: &'static str = "club.json";
    const TEMP_FILENAME: &'static str = "club.json.tmp";

    /// Open a store rooted at the given directory, creating it if needed
    pub fn open(data_dir: &Path) -> Result<Self> {
        fs::create_dir_all(data_dir)?;

        Ok(Self {
            data_dir: data_dir.to_path_buf(),
            document_path: data_dir.join(Self::DOCUMENT_FILENAME),
            temp_path: data_dir.join(Self::TEMP_FILENAME),
        })
    }

    /// Load the last-saved state
    ///
    /// Returns a fresh empty state if no document exists yet. A document
    /// that exists but cannot be read or parsed is a persistence error.
    pub fn load(&self) -> Result<ClubState> {
        if !self.document_path.exists() {
            tracing::debug!(path = %self.document_path.display(), "no club document, starting empty");
            return Ok(ClubState::new());
        }

        let contents = fs::read_to_string(&self.document_path)?;
        let state = serde_json::from_str(&contents)?;
        Ok(state)
    }

    /// Save the full state, atomically replacing the previous document
    ///
    /// Steps:
    /// 1. Serialize the whole state to JSON
    /// 2. Write to a temp file in the same directory and fsync it
    /// 3. Rename over the document (atomic on the same filesystem)
    pub fn save(&self, state: &ClubState) -> Result<()> {
        let json = serde_json::to_string_pretty(state)?;

        {
            let mut file = File::create(&self.temp_path)?;
            file.write_all(json.as_bytes())?;
            file.sync_all()?;
        }

        fs::rename(&self.temp_path, &self.document_path)?;

        tracing::debug!(bytes = json.len(), "club document saved");
        Ok(())
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the document path
    pub fn document_path(&self) -> &Path {
        &self.document_path
    }
}
