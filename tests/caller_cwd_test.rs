//! Kept in its own test binary: it changes the process working directory.

use modroot::{Locator, LocatorConfig};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_caller_root_ignores_decoy_working_directory() {
    // a tree that mirrors this crate's relative layout
    let decoy = TempDir::new().unwrap();
    fs::create_dir_all(decoy.path().join("tests")).unwrap();
    fs::write(decoy.path().join("Cargo.toml"), "[package]\nname = \"decoy\"\n").unwrap();
    fs::write(decoy.path().join("tests/caller_cwd_test.rs"), "").unwrap();

    let original_dir = std::env::current_dir().unwrap();
    std::env::set_current_dir(decoy.path()).unwrap();

    let locator = Locator::new(LocatorConfig::new("Cargo.toml"));
    let result = locator.find_root();

    std::env::set_current_dir(original_dir).unwrap();

    assert_eq!(result.unwrap(), PathBuf::from(env!("CARGO_MANIFEST_DIR")));
}
