// tests/config_test.rs
use release_tools::config::{discover_root, load_config, Config, CONFIG_FILE_NAME};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.bump.manifests.len(), 4);
    assert_eq!(config.bump.manifests[0], PathBuf::from("package.json"));
    assert_eq!(
        config.bump.build_config,
        PathBuf::from("apps/mobile/android/app/build.gradle")
    );
    assert_eq!(
        config.screenshots.source,
        PathBuf::from("screenshots/mobile/original")
    );
    assert!(config.screenshots.skip_unchanged);
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = load_config(dir.path()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let toml_content = r#"
[bump]
manifests = ["package.json", "web/package.json"]
build_config = "android/app/build.gradle"

[screenshots]
source = "shots"
store_order = ["Home.png", "Map.png"]
"#;
    fs::write(dir.path().join(CONFIG_FILE_NAME), toml_content).unwrap();

    let config = load_config(dir.path()).unwrap();
    assert_eq!(
        config.bump.manifests,
        vec![
            PathBuf::from("package.json"),
            PathBuf::from("web/package.json")
        ]
    );
    assert_eq!(
        config.bump.build_config,
        PathBuf::from("android/app/build.gradle")
    );
    assert_eq!(config.screenshots.source, PathBuf::from("shots"));
    assert_eq!(config.screenshots.store_order, vec!["Home.png", "Map.png"]);
    // untouched keys keep their defaults
    assert_eq!(config.screenshots.extension, "png");
}

#[test]
fn test_invalid_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), "[bump\nmanifests = 3").unwrap();

    let err = load_config(dir.path()).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
fn test_discover_root_prefers_config_file() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("apps/mobile/android");
    fs::create_dir_all(&nested).unwrap();
    fs::create_dir_all(dir.path().join("apps/.git")).unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), "").unwrap();

    assert_eq!(discover_root(&nested), dir.path());
}

#[test]
fn test_discover_root_falls_back_to_git_dir() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("scripts");
    fs::create_dir_all(&nested).unwrap();
    fs::create_dir_all(dir.path().join(".git")).unwrap();

    assert_eq!(discover_root(&nested), dir.path());
}
