//! Whole-file JSON persistence.
//!
//! Every mutation of a container is followed by a full rewrite of its store.
//! Writes are staged to a `.tmp` sibling and renamed into place so a failed
//! write never leaves a truncated store behind. There is no locking; a store
//! is assumed to be touched by a single process at a time, last writer wins.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::TrackerError;

const TMP_SUFFIX: &str = "tmp";

/// Loads a container from `path`.
///
/// A missing file is not an error: the empty container is returned so a
/// fresh install starts from nothing. An unreadable or unparsable file is
/// surfaced to the caller, who decides whether to fall back to empty.
pub fn load_store<T>(path: &Path) -> Result<T, TrackerError>
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        return Ok(T::default());
    }
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|err| {
        TrackerError::Storage(format!("failed to parse `{}`: {}", path.display(), err))
    })
}

/// Persists a container to `path`, replacing whatever was there.
pub fn save_store<T>(value: &T, path: &Path) -> Result<(), TrackerError>
where
    T: Serialize,
{
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    let tmp = tmp_path(path);
    write_file(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Creates `path` and its parents when absent.
pub fn ensure_dir(path: &Path) -> Result<(), TrackerError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<(), TrackerError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
