use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{ReminderError, Result};

const EMPTY_COLLECTION: &str = "[]";

/// Reads a JSON array of records. A missing file is created as an empty
/// array and yields no records.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        tracing::warn!(
            "{} does not exist. Creating an empty file.",
            path.display()
        );
        create_empty(path)?;
        return Ok(Vec::new());
    }

    let raw = fs::read_to_string(path).map_err(|source| ReminderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<T> =
        serde_json::from_str(&raw).map_err(|source| ReminderError::DataFormat {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

fn create_empty(path: &Path) -> Result<()> {
    let io_err = |source| ReminderError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, EMPTY_COLLECTION).map_err(io_err)
}
