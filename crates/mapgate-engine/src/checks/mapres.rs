//! Approved resource listings and content hashes.

use std::path::Path;

use mapgate_core::errors::EvaluationError;
use rustc_hash::FxHashSet;
use sha2::{Digest, Sha512};

/// File stems of every regular file in `dir`.
pub fn resource_stems(dir: &Path) -> Result<FxHashSet<String>, EvaluationError> {
    let entries =
        std::fs::read_dir(dir).map_err(|e| EvaluationError::io(dir.display().to_string(), e))?;

    let mut stems = FxHashSet::default();
    for entry in entries {
        let path = entry
            .map_err(|e| EvaluationError::io(dir.display().to_string(), e))?
            .path();
        if !path.is_file() {
            continue;
        }
        if let Some(stem) = path.file_stem() {
            stems.insert(stem.to_string_lossy().into_owned());
        }
    }
    Ok(stems)
}

/// Lowercase hex SHA-512 of `data`.
pub fn sha512_hex(data: &[u8]) -> String {
    format!("{:x}", Sha512::digest(data))
}

/// Name under which an embedded resource must be approved: `<name>-<sha512>`.
pub fn approved_stem(name: &str, data: &[u8]) -> String {
    format!("{name}-{}", sha512_hex(data))
}
