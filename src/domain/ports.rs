use std::io;
use std::path::Path;

/// Filesystem access needed by the locator.
///
/// Errors are plain `io::Error`s so they can be surfaced to callers unchanged.
pub trait FileSystem: Send + Sync {
    /// `Ok(false)` only when the path is known not to exist.
    fn exists(&self, path: &Path) -> io::Result<bool>;

    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

