use crate::utils::error::{LocatorError, Result};
use std::path::{Component, Path, PathBuf};

/// Lexically normalizes a path: drops `.` segments, folds `name/..` pairs and
/// keeps leading `..` on relative paths. An empty result becomes `.`.
///
/// Never touches the filesystem, so symlinked `..` are folded as text.
pub fn clean_path(path: &Path) -> PathBuf {
    let parts = clean_components(path);
    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

fn clean_components(path: &Path) -> Vec<Component<'_>> {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out
}

/// Relative path from `base` to `target`, computed purely lexically.
pub fn relative_path(base: &Path, target: &Path) -> Result<PathBuf> {
    let not_relatable = || LocatorError::PathNotRelatable {
        root: base.to_path_buf(),
        full: target.to_path_buf(),
    };

    if base.is_absolute() != target.is_absolute() {
        return Err(not_relatable());
    }

    let base_parts = clean_components(base);
    let target_parts = clean_components(target);

    let common = base_parts
        .iter()
        .zip(&target_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let base_rest = &base_parts[common..];
    let target_rest = &target_parts[common..];

    // 剩下的 base 只能是一般目錄名稱，否則無法用 `..` 回溯
    if base_rest.iter().any(|c| !matches!(c, Component::Normal(_))) {
        return Err(not_relatable());
    }
    if target_rest
        .iter()
        .any(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
    {
        return Err(not_relatable());
    }

    let mut relative = PathBuf::new();
    for _ in base_rest {
        relative.push("..");
    }
    for component in target_rest {
        relative.push(component);
    }

    if relative.as_os_str().is_empty() {
        return Ok(PathBuf::from("."));
    }
    Ok(relative)
}

/// Everything but the last segment of a relative path; `.` when nothing is left.
pub fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Directory that contains `full_path`, expressed relative to `root`.
///
/// `root` is a discovered project root like `/Users/username/project` and
/// `full_path` a path inside it like `/Users/username/project/pkg/destination`;
/// the result for those is `pkg`.
pub fn relative_package_path(root: &Path, full_path: &Path) -> Result<PathBuf> {
    tracing::debug!(
        mod_root = %root.display(),
        full_path = %full_path.display(),
        "relative_package_path"
    );

    let relative = relative_path(root, full_path)?;
    let result = parent_dir(&relative);

    tracing::debug!(
        relative = %relative.display(),
        result = %result.display(),
        "relative_package_path"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(base: &str, target: &str) -> Result<PathBuf> {
        relative_path(Path::new(base), Path::new(target))
    }

    #[test]
    fn test_clean_path() {
        assert_eq!(clean_path(Path::new("")), PathBuf::from("."));
        assert_eq!(clean_path(Path::new("./")), PathBuf::from("."));
        assert_eq!(clean_path(Path::new("/a/./b/../c/")), PathBuf::from("/a/c"));
        assert_eq!(clean_path(Path::new("/../a")), PathBuf::from("/a"));
        assert_eq!(clean_path(Path::new("../../a/b/..")), PathBuf::from("../../a"));
        assert_eq!(clean_path(Path::new("a/..")), PathBuf::from("."));
    }

    #[test]
    fn test_relative_path_under_root() {
        assert_eq!(rel("/a/b", "/a/b/pkg/sub").unwrap(), PathBuf::from("pkg/sub"));
        assert_eq!(rel("/a/b/", "/a/b/./pkg").unwrap(), PathBuf::from("pkg"));
    }

    #[test]
    fn test_relative_path_equal_and_sibling() {
        assert_eq!(rel("/a/b", "/a/b").unwrap(), PathBuf::from("."));
        assert_eq!(rel("/a/b", "/a/c/d").unwrap(), PathBuf::from("../c/d"));
        assert_eq!(rel("a", "../b").unwrap(), PathBuf::from("../../b"));
    }

    #[test]
    fn test_relative_path_not_relatable() {
        assert!(matches!(
            rel("/a/b", "a/b"),
            Err(LocatorError::PathNotRelatable { .. })
        ));
        assert!(matches!(
            rel("../a", "b"),
            Err(LocatorError::PathNotRelatable { .. })
        ));
    }

    #[test]
    fn test_parent_dir() {
        assert_eq!(parent_dir(Path::new("pkg/sub")), PathBuf::from("pkg"));
        assert_eq!(parent_dir(Path::new("pkg")), PathBuf::from("."));
        assert_eq!(parent_dir(Path::new(".")), PathBuf::from("."));
        assert_eq!(parent_dir(Path::new("../x")), PathBuf::from(".."));
    }

    #[test]
    fn test_relative_package_path() {
        let result = relative_package_path(Path::new("/a/b"), Path::new("/a/b/pkg/sub")).unwrap();
        assert_eq!(result, PathBuf::from("pkg"));

        let result =
            relative_package_path(Path::new("/a/b"), Path::new("/a/b/pkg/sub/file.go")).unwrap();
        assert_eq!(result, PathBuf::from("pkg/sub"));

        let result = relative_package_path(Path::new("/a/b"), Path::new("/a/b")).unwrap();
        assert_eq!(result, PathBuf::from("."));
    }
}
