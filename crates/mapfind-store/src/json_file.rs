use std::io::Write;
use std::path::{Path, PathBuf};

use mapfind_core::ResultList;
use tempfile::NamedTempFile;

use crate::error::StoreError;

/// A [`ResultList`] persisted as a JSON array in one file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored list, starting empty when there is nothing usable.
    ///
    /// A missing file is the normal first-run case. An unreadable or corrupt
    /// file is logged and treated as empty; it is overwritten by the next save.
    #[must_use]
    pub fn load(&self) -> ResultList {
        match self.try_load() {
            Ok(Some(list)) => {
                tracing::debug!(path = %self.path.display(), count = list.len(), "loaded results");
                list
            }
            Ok(None) => ResultList::new(),
            Err(e) => {
                tracing::warn!(error = %e, "could not load saved results; starting empty");
                ResultList::new()
            }
        }
    }

    /// Loads the stored list, distinguishing "no file" from a failed read.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Io`] if the file exists but cannot be read.
    /// - [`StoreError::Json`] if its contents are not a valid result list.
    pub fn try_load(&self) -> Result<Option<ResultList>, StoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Json {
                path: self.path.clone(),
                source,
            })
    }

    /// Replaces the stored list with `results`.
    ///
    /// Writes to a temporary file in the same directory, then renames it over
    /// the target.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Json`] if serialization fails.
    /// - [`StoreError::Io`] if the directory, temp file, or rename fails.
    pub fn save(&self, results: &ResultList) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(results).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir).map_err(|source| self.io_error(source))?;

        let mut tmp = NamedTempFile::new_in(&dir).map_err(|source| self.io_error(source))?;
        tmp.write_all(&json)
            .map_err(|source| self.io_error(source))?;
        tmp.as_file()
            .sync_all()
            .map_err(|source| self.io_error(source))?;
        tmp.persist(&self.path).map_err(|e| self.io_error(e.error))?;

        tracing::debug!(path = %self.path.display(), count = results.len(), "saved results");
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
