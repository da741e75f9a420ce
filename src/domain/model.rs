use serde::Serialize;
use std::panic::Location;
use std::path::PathBuf;

/// Source location of the code that asked for its project root.
///
/// Stands in for a runtime stack frame: `file` is what rustc recorded for the
/// call site, which is relative to the workspace root for local crates and
/// absolute for crates built from the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    /// `CARGO_MANIFEST_DIR` of the calling crate, when captured by `call_site!`.
    pub manifest_dir: Option<&'static str>,
}

impl CallSite {
    /// Location of the nearest caller that is not itself `#[track_caller]`.
    #[track_caller]
    pub fn here() -> Self {
        Self::from(Location::caller())
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            manifest_dir: None,
        }
    }
}

/// Result of a lookup as printed by the command line tool.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LookupReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative: Option<PathBuf>,
}
