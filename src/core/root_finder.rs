use crate::core::paths::clean_path;
use crate::domain::ports::FileSystem;
use crate::utils::error::{LocatorError, Result};
use std::path::{is_separator, Path, PathBuf};

/// Walks up from the directory containing `start` until a directory holding
/// `marker` is found.
///
/// The walk stops without a match at the filesystem root (which is never
/// probed) or at `boundary`, which is cleaned the same way as the visited
/// directories and compared before probing.
pub fn find_root_dir<F: FileSystem>(
    fs: &F,
    marker: &str,
    start: &Path,
    boundary: Option<&Path>,
) -> Result<PathBuf> {
    match lexical_dir(start) {
        Some(dir) => walk_up(fs, marker, &dir, start, boundary),
        None => Err(not_found(marker, start)),
    }
}

/// Directory part of `path`: the last element is dropped before cleaning, so
/// `/a/b/` and `/a/b/..` both yield `/a/b`. `None` for a bare relative file
/// name, which has no directory to search.
fn lexical_dir(path: &Path) -> Option<PathBuf> {
    let bytes = path.as_os_str().as_encoded_bytes();
    let ends_with_separator = bytes.last().is_some_and(|b| is_separator(char::from(*b)));
    let ends_with_dot = bytes.ends_with(b".")
        && (bytes.len() == 1 || is_separator(char::from(bytes[bytes.len() - 2])));

    let dir = if ends_with_separator || ends_with_dot {
        clean_path(path)
    } else {
        clean_path(path.parent()?)
    };

    if dir == Path::new(".") {
        return None;
    }
    Some(dir)
}

/// Same walk as [`find_root_dir`], but `dir` itself is the first candidate.
pub fn find_root_from_dir<F: FileSystem>(
    fs: &F,
    marker: &str,
    dir: &Path,
    boundary: Option<&Path>,
) -> Result<PathBuf> {
    let dir = clean_path(dir);
    walk_up(fs, marker, &dir, &dir, boundary)
}

fn walk_up<F: FileSystem>(
    fs: &F,
    marker: &str,
    from: &Path,
    start: &Path,
    boundary: Option<&Path>,
) -> Result<PathBuf> {
    let boundary = boundary.map(clean_path);
    let mut dir = from;

    // a path without a parent is the filesystem root (or an exhausted relative path)
    while let Some(parent) = dir.parent() {
        if boundary.as_deref() == Some(dir) {
            tracing::debug!(boundary = %dir.display(), "stopped at boundary");
            break;
        }

        let candidate = dir.join(marker);
        tracing::trace!(candidate = %candidate.display(), "probing");
        if fs.exists(&candidate)? {
            tracing::debug!(root = %dir.display(), marker, "found root dir");
            return Ok(dir.to_path_buf());
        }

        dir = parent;
    }

    Err(not_found(marker, start))
}

fn not_found(marker: &str, start: &Path) -> LocatorError {
    LocatorError::RootNotFound {
        marker: marker.to_string(),
        start: start.to_path_buf(),
    }
}
