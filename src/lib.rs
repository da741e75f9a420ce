pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::fs::LocalFileSystem;
pub use crate::config::LocatorConfig;
pub use crate::core::declaration::{parse_module_identity, DECLARATION_FILE};
pub use crate::core::locator::Locator;
pub use crate::domain::model::{CallSite, LookupReport};
pub use crate::domain::ports::FileSystem;
pub use crate::utils::error::{LocatorError, Result};

/// Captures the invoking source file together with its crate's manifest
/// directory, which lets relative `file!()` paths be resolved from any
/// working directory.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite {
            file: file!(),
            line: line!(),
            manifest_dir: Some(env!("CARGO_MANIFEST_DIR")),
        }
    };
}
