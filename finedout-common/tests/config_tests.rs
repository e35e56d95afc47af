//! Integration tests for configuration and root folder resolution
//!
//! Covers:
//! - Priority order: CLI > FINEDOUT_ROOT_FOLDER > FINEDOUT_ROOT > TOML > default
//! - Missing config files never cause an error
//! - Automatic root folder creation
//!
//! Note: Uses serial_test to prevent ENV variable race conditions.
//! Tests that touch FINEDOUT_ROOT_FOLDER or FINEDOUT_ROOT are marked
//! #[serial] so they never run in parallel.

use finedout_common::config::{
    CompiledDefaults, RootFolderInitializer, RootFolderResolver, TomlConfig, ROOT_ENV,
    ROOT_FOLDER_ENV,
};
use finedout_common::Error;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

fn clear_root_env() {
    env::remove_var(ROOT_FOLDER_ENV);
    env::remove_var(ROOT_ENV);
}

#[test]
#[serial]
fn test_resolver_with_no_overrides_uses_default() {
    clear_root_env();

    let root_folder = RootFolderResolver::new().resolve();

    assert!(!root_folder.as_os_str().is_empty());
    assert_eq!(root_folder, CompiledDefaults::for_current_platform().root_folder);
}

#[test]
fn test_compiled_default_ends_in_finedout() {
    let defaults = CompiledDefaults::for_current_platform();
    assert!(defaults.root_folder.ends_with("finedout") || defaults.root_folder.ends_with("finedout_data"));
}

#[test]
#[serial]
fn test_resolver_env_var_root_folder() {
    clear_root_env();
    env::set_var(ROOT_FOLDER_ENV, "/tmp/finedout-test-env-folder");

    let root_folder = RootFolderResolver::new().resolve();
    assert_eq!(root_folder, PathBuf::from("/tmp/finedout-test-env-folder"));

    clear_root_env();
}

#[test]
#[serial]
fn test_resolver_env_var_root() {
    clear_root_env();
    env::set_var(ROOT_ENV, "/tmp/finedout-test-env-root");

    let root_folder = RootFolderResolver::new().resolve();
    assert_eq!(root_folder, PathBuf::from("/tmp/finedout-test-env-root"));

    clear_root_env();
}

#[test]
#[serial]
fn test_resolver_root_folder_takes_precedence_over_root() {
    clear_root_env();
    env::set_var(ROOT_FOLDER_ENV, "/tmp/finedout-priority-1");
    env::set_var(ROOT_ENV, "/tmp/finedout-priority-2");

    let root_folder = RootFolderResolver::new().resolve();
    assert_eq!(root_folder, PathBuf::from("/tmp/finedout-priority-1"));

    clear_root_env();
}

#[test]
#[serial]
fn test_resolver_empty_env_var_is_ignored() {
    clear_root_env();
    env::set_var(ROOT_FOLDER_ENV, "");

    let root_folder = RootFolderResolver::new().resolve();
    assert_eq!(root_folder, CompiledDefaults::for_current_platform().root_folder);

    clear_root_env();
}

#[test]
#[serial]
fn test_resolver_env_beats_toml_and_cli_beats_env() {
    clear_root_env();
    env::set_var(ROOT_FOLDER_ENV, "/tmp/finedout-from-env");
    let config = TomlConfig {
        root_folder: Some(PathBuf::from("/tmp/finedout-from-toml")),
        ..TomlConfig::default()
    };

    let resolver = RootFolderResolver::new().with_toml_config(&config);
    assert_eq!(resolver.resolve(), PathBuf::from("/tmp/finedout-from-env"));

    let resolver = resolver.with_cli_arg(Some(PathBuf::from("/tmp/finedout-from-cli")));
    assert_eq!(resolver.resolve(), PathBuf::from("/tmp/finedout-from-cli"));

    clear_root_env();
}

#[test]
#[serial]
fn test_resolver_toml_used_without_env() {
    clear_root_env();
    let config = TomlConfig {
        root_folder: Some(PathBuf::from("/tmp/finedout-from-toml")),
        ..TomlConfig::default()
    };

    let root_folder = RootFolderResolver::new().with_toml_config(&config).resolve();
    assert_eq!(root_folder, PathBuf::from("/tmp/finedout-from-toml"));
}

#[test]
fn test_load_explicit_config_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(&path, "default_step_amount = 20\ncurrency = \"USD\"\n").unwrap();

    let config = TomlConfig::load(Some(&path)).unwrap();
    assert_eq!(config.default_step_amount, 20);
    assert_eq!(config.currency, "USD");
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_load_missing_explicit_config_is_error() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("absent.toml");

    let result = TomlConfig::load(Some(&path));
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_initializer_creates_nested_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("level1").join("level2");

    let initializer = RootFolderInitializer::new(root.clone());
    let result = initializer.ensure_directory_exists();

    assert!(result.is_ok(), "Failed to create directory: {:?}", result.err());
    assert!(root.is_dir());
    assert_eq!(initializer.database_path(), root.join("finedout.db"));
}

#[test]
fn test_initializer_idempotent_directory_creation() {
    let tmp = tempfile::tempdir().unwrap();
    let initializer = RootFolderInitializer::new(tmp.path().join("root"));

    assert!(initializer.ensure_directory_exists().is_ok());
    assert!(initializer.ensure_directory_exists().is_ok());
    assert!(initializer.root().exists());
}

#[test]
fn test_initializer_rejects_file_as_root() {
    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("not-a-dir");
    std::fs::write(&file, "x").unwrap();

    let result = RootFolderInitializer::new(file).ensure_directory_exists();
    assert!(matches!(result, Err(Error::Config(_))));
}
