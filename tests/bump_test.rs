// tests/bump_test.rs
use release_tools::bump::VersionBumper;
use release_tools::cli::{run_bump_workflow, BumpWorkflowArgs};
use release_tools::config::BumpConfig;
use release_tools::domain::ReleaseVersion;
use release_tools::ReleaseToolsError;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ROOT_PACKAGE: &str = r#"{
  "name": "monorepo",
  "version": "1.3.0",
  "private": true,
  "workspaces": [
    "apps/*",
    "packages/*"
  ],
  "devDependencies": {
    "typescript": "^5.4.0"
  }
}
"#;

const DOCS_PACKAGE: &str = "{\n    \"name\": \"docs\",\n    \"version\": \"1.3.0\",\n    \"scripts\": {\n        \"start\": \"docusaurus start\"\n    }\n}\n";

const BUILD_GRADLE: &str = r#"apply plugin: "com.android.application"

android {
    namespace "com.example.mobile"
    defaultConfig {
        applicationId "com.example.mobile"
        versionCode 17
        versionName "1.3.0"
    }
}
"#;

fn config() -> BumpConfig {
    BumpConfig {
        manifests: vec![
            PathBuf::from("package.json"),
            PathBuf::from("apps/docs/package.json"),
            PathBuf::from("packages/shared/package.json"),
        ],
        build_config: PathBuf::from("apps/mobile/android/app/build.gradle"),
    }
}

fn setup_repo(root: &Path) {
    fs::create_dir_all(root.join("apps/docs")).unwrap();
    fs::create_dir_all(root.join("apps/mobile/android/app")).unwrap();
    fs::write(root.join("package.json"), ROOT_PACKAGE).unwrap();
    fs::write(root.join("apps/docs/package.json"), DOCS_PACKAGE).unwrap();
    fs::write(root.join("apps/mobile/android/app/build.gradle"), BUILD_GRADLE).unwrap();
}

fn v(s: &str) -> ReleaseVersion {
    ReleaseVersion::parse(s).unwrap()
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

#[test]
fn test_bump_updates_every_existing_manifest() {
    let dir = TempDir::new().unwrap();
    setup_repo(dir.path());
    let cfg = config();

    let report = VersionBumper::new(dir.path(), &cfg)
        .run(&v("1.4.0"), &mut ())
        .unwrap();

    assert_eq!(report.manifests.len(), 2);
    assert_eq!(report.manifests[0].path, PathBuf::from("package.json"));
    assert_eq!(report.manifests[0].old_version, "1.3.0");
    assert_eq!(report.manifests[1].path, PathBuf::from("apps/docs/package.json"));

    // only the version literal changes; order, values and indentation stay
    assert_eq!(
        read(dir.path(), "package.json"),
        ROOT_PACKAGE.replace("\"version\": \"1.3.0\"", "\"version\": \"1.4.0\"")
    );
    assert_eq!(
        read(dir.path(), "apps/docs/package.json"),
        DOCS_PACKAGE.replace("\"version\": \"1.3.0\"", "\"version\": \"1.4.0\"")
    );
}

#[test]
fn test_bump_updates_build_config() {
    let dir = TempDir::new().unwrap();
    setup_repo(dir.path());
    let cfg = config();

    let report = VersionBumper::new(dir.path(), &cfg)
        .run(&v("1.4.0"), &mut ())
        .unwrap();

    let gradle = report.build_config.expect("build config should be updated");
    assert_eq!(gradle.old_name, "1.3.0");
    assert_eq!(gradle.new_name, "1.4.0");
    assert_eq!(gradle.old_code, 17);
    assert_eq!(gradle.new_code, 18);
    assert_eq!(
        read(dir.path(), "apps/mobile/android/app/build.gradle"),
        BUILD_GRADLE
            .replace("versionCode 17", "versionCode 18")
            .replace("versionName \"1.3.0\"", "versionName \"1.4.0\"")
    );
}

#[test]
fn test_two_bumps_increment_code_twice() {
    let dir = TempDir::new().unwrap();
    setup_repo(dir.path());
    let cfg = config();
    let bumper = VersionBumper::new(dir.path(), &cfg);

    bumper.run(&v("1.0.0"), &mut ()).unwrap();
    let report = bumper.run(&v("1.0.1"), &mut ()).unwrap();

    assert_eq!(report.build_config.unwrap().new_code, 19);
    let gradle = read(dir.path(), "apps/mobile/android/app/build.gradle");
    assert!(gradle.contains("versionCode 19"));
    assert!(gradle.contains("versionName \"1.0.1\""));
}

#[test]
fn test_missing_manifest_is_a_warning() {
    let dir = TempDir::new().unwrap();
    setup_repo(dir.path());
    let cfg = config();

    let report = VersionBumper::new(dir.path(), &cfg)
        .run(&v("2.0.0"), &mut ())
        .unwrap();

    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0]
        .to_string()
        .contains("packages/shared/package.json"));
    assert!(report.build_config.is_some());
}

#[test]
fn test_malformed_manifest_halts_remaining_work() {
    let dir = TempDir::new().unwrap();
    setup_repo(dir.path());
    let broken = "{\n  \"name\": \"docs\",\n  \"version\": \"1.3.0\"\n";
    fs::write(dir.path().join("apps/docs/package.json"), broken).unwrap();
    let cfg = config();

    let err = VersionBumper::new(dir.path(), &cfg)
        .run(&v("1.4.0"), &mut ())
        .unwrap_err();

    assert!(matches!(err, ReleaseToolsError::ManifestParse { .. }));
    assert!(err.to_string().contains("apps/docs/package.json"));
    // earlier files stay written, later ones are never reached
    assert!(read(dir.path(), "package.json").contains("\"version\": \"1.4.0\""));
    assert_eq!(read(dir.path(), "apps/docs/package.json"), broken);
    assert_eq!(
        read(dir.path(), "apps/mobile/android/app/build.gradle"),
        BUILD_GRADLE
    );
}

#[test]
fn test_invalid_version_is_rejected_before_any_write() {
    let dir = TempDir::new().unwrap();
    setup_repo(dir.path());

    let files = [
        "package.json",
        "apps/docs/package.json",
        "apps/mobile/android/app/build.gradle",
    ];
    let before: Vec<Vec<u8>> = files
        .iter()
        .map(|f| fs::read(dir.path().join(f)).unwrap())
        .collect();

    for input in ["1.4", "v1.4.0", "1.4.0-rc.1", "latest", "1.4.0\n"] {
        let err = run_bump_workflow(BumpWorkflowArgs {
            version: input.to_string(),
            root: Some(dir.path().to_path_buf()),
        })
        .unwrap_err();
        assert!(
            matches!(
                err.downcast_ref::<ReleaseToolsError>(),
                Some(ReleaseToolsError::InvalidVersionFormat(_))
            ),
            "expected '{}' to be rejected, got {:#}",
            input.escape_debug(),
            err
        );
    }

    let after: Vec<Vec<u8>> = files
        .iter()
        .map(|f| fs::read(dir.path().join(f)).unwrap())
        .collect();
    assert_eq!(after, before);
}
