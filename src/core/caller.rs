use crate::core::paths::clean_path;
use crate::domain::model::CallSite;
use crate::domain::ports::FileSystem;
use crate::utils::error::{LocatorError, Result};
use std::path::{Path, PathBuf};

/// Turns a captured call site into the path of its source file.
///
/// Relative locations are tried against every ancestor of the caller's
/// manifest directory, falling back to `manifest_dir` when the call site did
/// not capture one. The first candidate that exists wins. Without either base
/// the location is not guessed from the current directory.
pub fn resolve_caller_path<F: FileSystem>(
    fs: &F,
    site: &CallSite,
    manifest_dir: Option<&Path>,
) -> Result<PathBuf> {
    let failed = || LocatorError::CallerResolutionFailed {
        file: site.file.to_string(),
    };

    let file = Path::new(site.file);
    if file.as_os_str().is_empty() {
        return Err(failed());
    }
    if file.is_absolute() {
        return Ok(clean_path(file));
    }

    let base = match (site.manifest_dir, manifest_dir) {
        (Some(dir), _) => Path::new(dir),
        (None, Some(dir)) => dir,
        (None, None) => return Err(failed()),
    };

    for ancestor in base.ancestors() {
        let candidate = ancestor.join(file);
        if fs.exists(&candidate)? {
            tracing::debug!(
                file = site.file,
                line = site.line,
                resolved = %candidate.display(),
                "resolved caller path"
            );
            return Ok(clean_path(&candidate));
        }
    }

    Err(failed())
}
