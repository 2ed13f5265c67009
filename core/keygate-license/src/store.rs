//! The read-only license table.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{StoreError, StoreResult};
use crate::license::{License, LicenseEntry};

#[derive(Debug, Deserialize)]
struct LicenseFile {
    licenses: HashMap<String, LicenseEntry>,
}

/// In-memory mapping of license key to license, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct LicenseStore {
    licenses: HashMap<String, License>,
}

impl LicenseStore {
    /// Reads and parses the license file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] if the file cannot be read and
    /// [`StoreError::Parse`] if it does not match the license file shape.
    pub fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json(&contents)?;
        tracing::debug!(path = %path.display(), licenses = store.len(), "license file loaded");
        Ok(store)
    }

    /// Parses license data from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Parse`] on malformed JSON, a missing
    /// `licenses` object, wrong field types or an unparseable `expiresAt`.
    pub fn from_json(json: &str) -> StoreResult<Self> {
        let file: LicenseFile = serde_json::from_str(json)?;
        Ok(Self::from_licenses(
            file.licenses
                .into_iter()
                .map(|(key, entry)| entry.into_license(key)),
        ))
    }

    /// Builds a store from license records. A later record replaces an
    /// earlier one with the same key.
    pub fn from_licenses(licenses: impl IntoIterator<Item = License>) -> Self {
        let licenses = licenses
            .into_iter()
            .map(|license| (license.key().to_string(), license))
            .collect();
        Self { licenses }
    }

    /// Looks up a license by exact, case-sensitive key.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&License> {
        self.licenses.get(key)
    }

    /// Returns the number of licenses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.licenses.len()
    }

    /// Returns true if the store holds no licenses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.licenses.is_empty()
    }
}
