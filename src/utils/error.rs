use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocatorError {
    #[error("failed to get caller info for source file `{file}`")]
    CallerResolutionFailed { file: String },

    #[error("cannot find root dir for file [{marker}] in filepath [{}]", start.display())]
    RootNotFound { marker: String, start: PathBuf },

    #[error("module path not found in {}", path.display())]
    ModuleIdentityNotFound { path: PathBuf },

    #[error("cannot make {} relative to {}", full.display(), root.display())]
    PathNotRelatable { root: PathBuf, full: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// 查找失敗，輸入本身合法
    Low,
    /// 設定錯誤
    Medium,
    /// 系統 I/O 錯誤
    High,
}

impl LocatorError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LocatorError::CallerResolutionFailed { .. }
            | LocatorError::RootNotFound { .. }
            | LocatorError::ModuleIdentityNotFound { .. }
            | LocatorError::PathNotRelatable { .. } => ErrorSeverity::Low,
            LocatorError::ConfigError { .. } | LocatorError::InvalidConfigValue { .. } => {
                ErrorSeverity::Medium
            }
            LocatorError::Io(_) => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            LocatorError::CallerResolutionFailed { .. } => {
                "Pass an explicit start path, or run from inside the source tree that was compiled"
                    .to_string()
            }
            LocatorError::RootNotFound { marker, .. } => format!(
                "Check that {} exists in an ancestor directory and that the boundary setting is not cutting the search short",
                marker
            ),
            LocatorError::ModuleIdentityNotFound { .. } => {
                "Add a `module <path>` line to the declaration file".to_string()
            }
            LocatorError::PathNotRelatable { .. } => {
                "Use two absolute paths on the same volume".to_string()
            }
            LocatorError::Io(_) => "Check that the path exists and is readable".to_string(),
            LocatorError::ConfigError { .. } | LocatorError::InvalidConfigValue { .. } => {
                "Fix the configuration file or command line flags".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, LocatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = LocatorError::from(io);
        assert_eq!(err.to_string(), "no such file");
        assert_eq!(err.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_root_not_found_message() {
        let err = LocatorError::RootNotFound {
            marker: "go.mod".to_string(),
            start: PathBuf::from("/tmp/x/main.go"),
        };
        assert_eq!(
            err.to_string(),
            "cannot find root dir for file [go.mod] in filepath [/tmp/x/main.go]"
        );
        assert!(err.recovery_suggestion().contains("go.mod"));
    }
}
