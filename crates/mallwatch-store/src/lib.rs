//! Durable round-trip of a [`Point`] collection as a JSON file.
//!
//! Loading is deliberately infallible: a missing snapshot is the normal
//! first-run state and a corrupt one degrades to an empty baseline, so the
//! monitoring run always has something to diff against. Saving reports its
//! failures so the caller can decide how loudly to complain.

pub mod error;

use std::path::Path;

use mallwatch_core::Point;

pub use error::StoreError;

/// Reads the snapshot at `path`.
///
/// Missing files yield an empty collection (first run). Unreadable or
/// malformed content is logged at `warn` and also yields an empty
/// collection; this function never fails.
#[must_use]
pub fn load_snapshot(path: &Path) -> Vec<Point> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "no snapshot found; starting from an empty baseline");
        return Vec::new();
    }

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read snapshot; treating as empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Point>>(&content) {
        Ok(points) => points,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "malformed snapshot; treating as empty");
            Vec::new()
        }
    }
}

/// Writes the full collection to `path`, overwriting prior content and
/// creating missing parent directories.
///
/// # Errors
///
/// Returns [`StoreError::Io`] on filesystem failure or
/// [`StoreError::Serialize`] if the points cannot be encoded.
pub fn save_snapshot(path: &Path, points: &[Point]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
    }

    let json = serde_json::to_string_pretty(points)?;
    std::fs::write(path, json).map_err(|e| StoreError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), count = points.len(), "snapshot saved");
    Ok(())
}
