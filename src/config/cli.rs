use crate::config::toml_config::TomlConfig;
use crate::config::{LocatorConfig, BOUNDARY_ENV_VAR};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "modroot")]
#[command(about = "Locate the module root of a source tree")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Marker file that identifies a root directory")]
    pub marker: Option<String>,

    #[arg(long, global = true, help = "Directory the upward search must not reach")]
    pub boundary: Option<PathBuf>,

    #[arg(long, global = true, default_value = BOUNDARY_ENV_VAR)]
    pub boundary_env: String,

    #[arg(short, long, global = true, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Print results and logs as JSON")]
    pub json: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the nearest ancestor directory holding the marker file
    Root {
        /// File or directory to start from (defaults to the current directory)
        #[arg(long)]
        from: Option<PathBuf>,
    },
    /// Print the module identity declared at the root
    Module {
        /// Root directory (discovered from the current directory when omitted)
        #[arg(long)]
        root: Option<PathBuf>,
    },
    /// Print the directory containing PATH, relative to ROOT
    Rel {
        #[arg(long)]
        root: PathBuf,
        path: PathBuf,
    },
}

impl CliConfig {
    /// 命令列參數覆蓋設定檔，設定檔覆蓋環境變數
    pub fn locator_config(&self) -> Result<LocatorConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.into_locator_config(),
            None => LocatorConfig::from_env_var(&self.boundary_env),
        };

        if let Some(marker) = &self.marker {
            config.marker_file = marker.clone();
        }
        if let Some(boundary) = &self.boundary {
            config = config.with_boundary(Some(boundary.clone()));
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_parse_root_command() {
        let cli = CliConfig::parse_from(["modroot", "root", "--from", "/src/app/main.go"]);
        match cli.command {
            Command::Root { from } => assert_eq!(from.as_deref(), Some(Path::new("/src/app/main.go"))),
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.boundary_env, "GOPATH");
    }

    #[test]
    fn test_flag_overrides() {
        let cli = CliConfig::parse_from([
            "modroot",
            "module",
            "--marker",
            "Cargo.toml",
            "--boundary",
            "/work/",
        ]);
        let config = cli.locator_config().unwrap();
        assert_eq!(config.marker_file, "Cargo.toml");
        assert_eq!(config.boundary, Some(PathBuf::from("/work")));
    }

    #[test]
    fn test_invalid_marker_flag() {
        let cli = CliConfig::parse_from(["modroot", "root", "--marker", "a/b"]);
        assert!(cli.locator_config().is_err());
    }

    #[test]
    fn test_rel_requires_root() {
        assert!(CliConfig::try_parse_from(["modroot", "rel", "/a/b/c"]).is_err());
    }
}
