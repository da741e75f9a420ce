use crate::domain::ports::FileSystem;
use crate::utils::error::{LocatorError, Result};
use std::path::Path;

/// Module declaration file expected at a project root.
pub const DECLARATION_FILE: &str = "go.mod";

const MODULE_DIRECTIVE: &str = "module ";
const QUOTES: &[char] = &['"', '`'];
const VCS_SUFFIX: &str = ".git";

/// Reads `<root>/<file_name>` and returns the declared module identity.
///
/// Read failures come back as the untouched `io::Error`.
pub fn read_module_identity<F: FileSystem>(fs: &F, root: &Path, file_name: &str) -> Result<String> {
    let path = root.join(file_name);
    let content = fs.read_to_string(&path)?;

    parse_module_identity(&content).ok_or(LocatorError::ModuleIdentityNotFound { path })
}

/// Identity from the first line starting with `module `, if any.
pub fn parse_module_identity(content: &str) -> Option<String> {
    content
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix(MODULE_DIRECTIVE))
        .map(normalize_identity)
}

fn normalize_identity(raw: &str) -> String {
    let mut identity = raw.trim();
    identity = identity.strip_prefix(QUOTES).unwrap_or(identity);
    identity = identity.strip_suffix(QUOTES).unwrap_or(identity);
    identity = identity.strip_suffix(VCS_SUFFIX).unwrap_or(identity);
    identity.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_identity() {
        let content = "module example.com/project\n\ngo 1.22\n";
        assert_eq!(
            parse_module_identity(content).as_deref(),
            Some("example.com/project")
        );
    }

    #[test]
    fn test_quoted_identity_with_git_suffix() {
        assert_eq!(
            parse_module_identity("module \"example.com/project.git\"").as_deref(),
            Some("example.com/project")
        );
        assert_eq!(
            parse_module_identity("module `example.com/project`").as_deref(),
            Some("example.com/project")
        );
    }

    #[test]
    fn test_first_directive_wins_after_indentation() {
        let content = "// header\r\n   module   first.dev/a  \r\nmodule second.dev/b\r\n";
        assert_eq!(parse_module_identity(content).as_deref(), Some("first.dev/a"));
    }

    #[test]
    fn test_only_one_quote_layer_is_stripped() {
        assert_eq!(
            parse_module_identity("module \"\"odd\"\"").as_deref(),
            Some("\"odd\"")
        );
    }

    #[test]
    fn test_no_directive() {
        assert_eq!(parse_module_identity("go 1.22\nmodulex foo\nmodule\n"), None);
        assert_eq!(parse_module_identity(""), None);
    }
}
