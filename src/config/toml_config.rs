use crate::config::{path_from_lookup, LocatorConfig, DEFAULT_MARKER_FILE};
use crate::utils::error::{LocatorError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::Deserialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub locator: LocatorSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocatorSection {
    pub marker_file: Option<String>,
    pub boundary: Option<PathBuf>,
    /// 環境變數名稱，`boundary` 未設定時使用
    pub boundary_env: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_toml_str_with(content, |key| std::env::var_os(key))
    }

    /// 變數值由 `lookup` 提供
    pub fn from_toml_str_with<L>(content: &str, lookup: L) -> Result<Self>
    where
        L: Fn(&str) -> Option<OsString>,
    {
        let processed_content = Self::substitute_env_vars(content, lookup)?;

        toml::from_str(&processed_content).map_err(|e| LocatorError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HOME})，未設定的變數保留原樣
    fn substitute_env_vars<L>(content: &str, lookup: L) -> Result<String>
    where
        L: Fn(&str) -> Option<OsString>,
    {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LocatorError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            lookup(var_name)
                .and_then(|value| value.into_string().ok())
                .unwrap_or_else(|| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// `boundary` 優先於 `boundary_env`
    pub fn into_locator_config(self) -> LocatorConfig {
        self.into_locator_config_with(|key| std::env::var_os(key))
    }

    pub fn into_locator_config_with<L>(self, lookup: L) -> LocatorConfig
    where
        L: Fn(&str) -> Option<OsString>,
    {
        let section = self.locator;
        let boundary = section.boundary.or_else(|| {
            section
                .boundary_env
                .as_deref()
                .and_then(|name| path_from_lookup(name, &lookup))
        });

        LocatorConfig::new(
            section
                .marker_file
                .unwrap_or_else(|| DEFAULT_MARKER_FILE.to_string()),
        )
        .with_boundary(boundary)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.clone().into_locator_config().validate()
    }
}
