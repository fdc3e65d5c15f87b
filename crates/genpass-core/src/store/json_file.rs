//! JSON file constraint store.
//!
//! Storage model:
//! - One JSON object: domain -> `[length, digit, special, upper, lower]`
//! - A missing file reads as an empty mapping
//! - Every save re-reads the file, changes one entry and rewrites the
//!   whole object, pretty-printed, through an atomic rename
//!
//! Concurrent writers are not coordinated here. Callers that may save from
//! more than one process must serialize those saves themselves.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::constraints::Constraints;
use crate::error::{GenpassError, Result};
use crate::fs::write_atomic;

use super::record::StoredConstraints;
use super::traits::ConstraintStore;

type RawMap = BTreeMap<String, StoredConstraints>;

/// Constraint store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store at `path`. Nothing is read or created until first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_raw(&self) -> Result<RawMap> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "constraint store missing; treating as empty");
                return Ok(RawMap::new());
            }
            Err(err) => {
                return Err(GenpassError::Storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    err
                )))
            }
        };
        if contents.trim().is_empty() {
            return Ok(RawMap::new());
        }
        serde_json::from_str(&contents).map_err(|e| {
            GenpassError::Format(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    fn write_raw(&self, map: &RawMap) -> Result<()> {
        let mut contents = serde_json::to_string_pretty(map)?;
        contents.push('\n');
        write_atomic(&self.path, contents.as_bytes()).map_err(|e| {
            GenpassError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        tracing::debug!(path = %self.path.display(), entries = map.len(), "constraint store written");
        Ok(())
    }
}

impl ConstraintStore for JsonFileStore {
    fn load(&self, domain: &str) -> Result<Option<Constraints>> {
        self.read_raw()?
            .get(domain)
            .map(|stored| Constraints::try_from(*stored))
            .transpose()
    }

    fn save(&mut self, domain: &str, constraints: &Constraints) -> Result<()> {
        let mut map = self.read_raw()?;
        if constraints.is_default() {
            if map.remove(domain).is_none() {
                return Ok(());
            }
        } else {
            map.insert(domain.to_string(), StoredConstraints::from(constraints));
        }
        self.write_raw(&map)
    }

    fn remove(&mut self, domain: &str) -> Result<bool> {
        let mut map = self.read_raw()?;
        if map.remove(domain).is_none() {
            return Ok(false);
        }
        self.write_raw(&map)?;
        Ok(true)
    }

    fn list(&self) -> Result<BTreeMap<String, Constraints>> {
        self.read_raw()?
            .into_iter()
            .map(|(domain, stored)| Constraints::try_from(stored).map(|c| (domain, c)))
            .collect()
    }
}
