#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::declaration::DECLARATION_FILE;
use crate::core::paths::clean_path;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_name, validate_path, Validate};
use std::ffi::OsString;
use std::path::PathBuf;

pub const DEFAULT_MARKER_FILE: &str = DECLARATION_FILE;

/// Environment variable read by [`LocatorConfig::from_env`] for the boundary.
pub const BOUNDARY_ENV_VAR: &str = "GOPATH";

/// Runtime fallback for call sites captured without a manifest directory.
pub const MANIFEST_DIR_ENV_VAR: &str = "CARGO_MANIFEST_DIR";

/// Settings for an upward root search.
///
/// The boundary is stored already cleaned; `None` means the walk only stops
/// at the filesystem root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatorConfig {
    pub marker_file: String,
    pub boundary: Option<PathBuf>,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            marker_file: DEFAULT_MARKER_FILE.to_string(),
            boundary: None,
        }
    }
}

impl LocatorConfig {
    pub fn new(marker_file: impl Into<String>) -> Self {
        Self {
            marker_file: marker_file.into(),
            boundary: None,
        }
    }

    /// 空字串視為未設定邊界
    pub fn with_boundary(mut self, boundary: Option<PathBuf>) -> Self {
        self.boundary = boundary
            .filter(|b| !b.as_os_str().is_empty())
            .map(|b| clean_path(&b));
        self
    }

    /// Default marker, boundary taken from `GOPATH`.
    pub fn from_env() -> Self {
        Self::from_env_var(BOUNDARY_ENV_VAR)
    }

    pub fn from_env_var(name: &str) -> Self {
        Self::from_env_lookup(name, |key| std::env::var_os(key))
    }

    /// Same as [`LocatorConfig::from_env_var`] with the environment supplied
    /// by `lookup`.
    pub fn from_env_lookup<L>(name: &str, lookup: L) -> Self
    where
        L: Fn(&str) -> Option<OsString>,
    {
        Self::default().with_boundary(path_from_lookup(name, lookup))
    }
}

/// Reads a path from the environment. Unset and empty are both `None`.
pub fn path_from_env_var(name: &str) -> Option<PathBuf> {
    path_from_lookup(name, |key| std::env::var_os(key))
}

pub fn path_from_lookup<L>(name: &str, lookup: L) -> Option<PathBuf>
where
    L: Fn(&str) -> Option<OsString>,
{
    lookup(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Manifest directory cargo exports to `cargo run` and `cargo test` processes.
pub fn manifest_dir_from_env() -> Option<PathBuf> {
    path_from_env_var(MANIFEST_DIR_ENV_VAR)
}

impl Validate for LocatorConfig {
    fn validate(&self) -> Result<()> {
        validate_file_name("marker_file", &self.marker_file)?;
        if let Some(boundary) = &self.boundary {
            validate_path("boundary", boundary)?;
        }
        Ok(())
    }
}
