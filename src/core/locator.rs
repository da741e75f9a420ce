use crate::adapters::fs::LocalFileSystem;
use crate::config::{self, LocatorConfig};
use crate::core::{caller, declaration, paths, root_finder};
use crate::domain::model::CallSite;
use crate::domain::ports::FileSystem;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Finds project roots and answers questions relative to them.
///
/// Holds only immutable configuration, so one instance can be shared freely.
#[derive(Debug, Clone)]
pub struct Locator<F: FileSystem = LocalFileSystem> {
    config: LocatorConfig,
    fs: F,
}

impl Locator {
    pub fn new(config: LocatorConfig) -> Self {
        Self::with_fs(config, LocalFileSystem::new())
    }

    /// Default marker, boundary from `GOPATH`.
    pub fn from_env() -> Self {
        Self::new(LocatorConfig::from_env())
    }
}

impl Default for Locator {
    fn default() -> Self {
        Self::new(LocatorConfig::default())
    }
}

impl<F: FileSystem> Locator<F> {
    pub fn with_fs(config: LocatorConfig, fs: F) -> Self {
        Self { config, fs }
    }

    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    /// Root of the project containing the calling source file, using the
    /// configured marker.
    #[track_caller]
    pub fn find_root(&self) -> Result<PathBuf> {
        self.find_root_dir_with_marker(&self.config.marker_file)
    }

    /// Root of the project containing the calling source file.
    ///
    /// The caller is the first frame outside a chain of `#[track_caller]`
    /// functions, so wrappers that want to report their own callers should be
    /// `#[track_caller]` as well.
    #[track_caller]
    pub fn find_root_dir_with_marker(&self, marker: &str) -> Result<PathBuf> {
        let site = CallSite::here();
        self.find_root_dir_from(marker, &site)
    }

    /// Root found from an explicitly captured call site, see [`crate::call_site!`].
    ///
    /// Sites captured without a manifest directory are resolved against the
    /// `CARGO_MANIFEST_DIR` cargo sets at run time; outside cargo they fail
    /// with `CallerResolutionFailed` rather than being looked up from the
    /// current directory.
    pub fn find_root_dir_from(&self, marker: &str, site: &CallSite) -> Result<PathBuf> {
        let manifest_dir = config::manifest_dir_from_env();
        let start = caller::resolve_caller_path(&self.fs, site, manifest_dir.as_deref())?;
        self.find_root_dir(marker, &start)
    }

    /// Walks up from the directory that contains `start`.
    pub fn find_root_dir(&self, marker: &str, start: &Path) -> Result<PathBuf> {
        root_finder::find_root_dir(&self.fs, marker, start, self.config.boundary.as_deref())
    }

    /// Walks up starting at `dir` itself.
    pub fn find_root_from_dir(&self, marker: &str, dir: &Path) -> Result<PathBuf> {
        root_finder::find_root_from_dir(&self.fs, marker, dir, self.config.boundary.as_deref())
    }

    pub fn read_module_identity(&self, root: &Path) -> Result<String> {
        declaration::read_module_identity(&self.fs, root, declaration::DECLARATION_FILE)
    }

    pub fn relative_package_path(&self, root: &Path, full_path: &Path) -> Result<PathBuf> {
        paths::relative_package_path(root, full_path)
    }
}
