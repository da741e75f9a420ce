use crate::domain::ports::FileSystem;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFileSystem {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        path.try_exists()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_exists_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("go.mod");
        let fs = LocalFileSystem::new();

        assert!(!fs.exists(&file).unwrap());
        std::fs::write(&file, "module example.com/x\n").unwrap();
        assert!(fs.exists(&file).unwrap());
        assert_eq!(fs.read_to_string(&file).unwrap(), "module example.com/x\n");
    }

    #[test]
    fn test_read_missing_file_keeps_error_kind() {
        let temp_dir = TempDir::new().unwrap();
        let err = LocalFileSystem::new()
            .read_to_string(&temp_dir.path().join("missing"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
