// E2E tests for building registry.json

use crate::common::harness::{binary, RunResult, ThemesFixture};
use std::fs;
use std::process::Command;

const ALPHA: &str = r##"{"mPrimary": "#111", "mSurface": "#222"}"##;
const BETA: &str = r##"{"dark": {"mPrimary": "#000"}, "light": {"mPrimary": "#fff"}}"##;

const ALPHA_BETA_REGISTRY: &str = r##"{
  "version": 1,
  "themes": [
    {
      "name": "Alpha",
      "path": "Alpha",
      "dark": {
        "mPrimary": "#111",
        "mSurface": "#222"
      },
      "light": {
        "mPrimary": "#111",
        "mSurface": "#222"
      }
    },
    {
      "name": "beta",
      "path": "beta",
      "dark": {
        "mPrimary": "#000"
      },
      "light": {
        "mPrimary": "#fff"
      }
    }
  ]
}
"##;

#[test]
fn test_alpha_beta_registry() {
    let fixture = ThemesFixture::new();
    fixture
        .add_file("beta", "beta.json", BETA)
        .add_file("Alpha", "alpha.json", ALPHA);

    let result = fixture.run(&[]);
    assert_eq!(result.status, Some(0), "stderr: {}", result.stderr);
    assert_eq!(fixture.read_registry(), ALPHA_BETA_REGISTRY);

    assert!(result.stdout.contains("Scanning for themes in"));
    assert!(result.stdout.contains("Found theme: Alpha"));
    assert!(result.stdout.contains("Found theme: beta"));
    assert!(
        result.stdout.contains("with 2 themes"),
        "summary missing: {}",
        result.stdout
    );
    assert!(result
        .stdout
        .contains(&fixture.registry_path().display().to_string()));
    // redirected output carries no color escapes
    assert!(!result.stdout.contains('\x1b'), "stdout: {:?}", result.stdout);
}

#[test]
fn test_rerun_is_byte_identical() {
    let fixture = ThemesFixture::new();
    fixture
        .add_file("Gruvbox", "gruvbox.json", r##"{"mOutline": "#928374", "mShadow": "#000"}"##)
        .add_file("catppuccin", "theme.json", BETA)
        .add_file("Ayu", "ayu.JSON", ALPHA);

    assert_eq!(fixture.run(&[]).status, Some(0));
    let first = fs::read(fixture.registry_path()).unwrap();

    assert_eq!(fixture.run(&[]).status, Some(0));
    let second = fs::read(fixture.registry_path()).unwrap();

    assert_eq!(first, second);
    assert_eq!(fixture.theme_names(), vec!["Ayu", "catppuccin", "Gruvbox"]);
}

#[test]
fn test_mixed_case_names_are_sorted() {
    let fixture = ThemesFixture::new();
    for name in [
        "zenburn", "Monokai", "gruvbox-dark", "ayu-dark", "Ayu", "ayu", "Éclair", "1984",
        "gruvbox_dark",
    ] {
        fixture.add_file(name, "colors.json", "{}");
    }

    assert_eq!(fixture.run(&[]).status, Some(0));
    assert_eq!(
        fixture.theme_names(),
        vec![
            "1984", "ayu", "Ayu", "ayu-dark", "Éclair", "gruvbox_dark", "gruvbox-dark",
            "Monokai", "zenburn",
        ]
    );
}

#[test]
fn test_hidden_and_node_modules_are_never_scanned() {
    let fixture = ThemesFixture::new();
    fixture
        .add_file(".git", "config.json", ALPHA)
        .add_file("node_modules", "package.json", ALPHA)
        .add_file("Nord", "nord.json", ALPHA);

    let result = fixture.run(&[]);
    assert_eq!(result.status, Some(0));
    assert_eq!(fixture.theme_names(), vec!["Nord"]);
}

#[test]
fn test_extra_exclusions_from_cli() {
    let fixture = ThemesFixture::new();
    fixture
        .add_file("target", ".rustc_info.json", "{}")
        .add_file("Nord", "nord.json", ALPHA);

    assert_eq!(fixture.run(&["--exclude", "target"]).status, Some(0));
    assert_eq!(fixture.theme_names(), vec!["Nord"]);
}

#[test]
fn test_directory_without_json_is_ignored_silently() {
    let fixture = ThemesFixture::new();
    fixture
        .add_dir("empty")
        .add_file("docs", "README.md", "# docs")
        .add_file("Nord", "nord.json", ALPHA);

    let result = fixture.run(&[]);
    assert_eq!(result.status, Some(0));
    assert_eq!(fixture.theme_names(), vec!["Nord"]);
    assert!(!result.stderr.contains("ERROR"), "stderr: {}", result.stderr);
}

#[test]
fn test_malformed_theme_is_logged_and_skipped() {
    let fixture = ThemesFixture::new();
    fixture
        .add_file("Broken", "broken.json", "{ \"mPrimary\": ")
        .add_file("Nord", "nord.json", ALPHA);

    let result = fixture.run(&[]);
    assert_eq!(result.status, Some(0), "stderr: {}", result.stderr);
    assert!(
        result.stderr.contains("Error reading theme Broken"),
        "stderr: {}",
        result.stderr
    );
    assert_eq!(fixture.theme_names(), vec!["Nord"]);
}

#[test]
fn test_no_themes_writes_empty_registry_with_warning() {
    let fixture = ThemesFixture::new();
    fixture.add_dir("not-a-theme");

    let result = fixture.run(&[]);
    assert_eq!(result.status, Some(0));
    assert!(result.stderr.contains("No themes found"), "stderr: {}", result.stderr);
    assert_eq!(
        fixture.read_registry(),
        "{\n  \"version\": 1,\n  \"themes\": []\n}\n"
    );
}

#[test]
fn test_missing_root_exits_with_error() {
    let fixture = ThemesFixture::new();
    let missing = fixture.root().join("does-not-exist");

    let result: RunResult = Command::new(binary())
        .arg("--root")
        .arg(&missing)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
        .into();

    assert_eq!(result.status, Some(1));
    assert!(
        result.stderr.contains("failed to read themes directory"),
        "stderr: {}",
        result.stderr
    );
    assert!(!missing.join("registry.json").exists());
}

#[test]
fn test_unwritable_output_exits_with_error() {
    let fixture = ThemesFixture::new();
    fixture.add_file("Nord", "nord.json", ALPHA);
    let output = fixture.root().join("no-such-dir").join("registry.json");

    let result = fixture.run(&["--output", output.to_str().unwrap()]);
    assert_eq!(result.status, Some(1));
    assert!(result.stderr.contains("failed to write"), "stderr: {}", result.stderr);
}

#[test]
fn test_custom_output_path() {
    let fixture = ThemesFixture::new();
    fixture.add_file("Nord", "nord.json", ALPHA);
    let output = fixture.root().join("dist-registry.json");

    let result = fixture.run(&["--output", output.to_str().unwrap()]);
    assert_eq!(result.status, Some(0));
    assert!(output.exists());
    assert!(!fixture.registry_path().exists());
}

/// Without --root, the themes root is two levels above the binary's directory.
#[test]
fn test_default_root_is_relative_to_executable() {
    let fixture = ThemesFixture::new();
    fixture.add_file("Nord", "nord.json", ALPHA);

    let bin_dir = fixture.root().join(".build").join("release");
    fs::create_dir_all(&bin_dir).unwrap();
    let exe = bin_dir.join(binary().file_name().unwrap());
    fs::copy(binary(), &exe).unwrap();

    // Working directory must not matter
    let elsewhere = tempfile::tempdir().unwrap();
    let result: RunResult = Command::new(&exe)
        .current_dir(elsewhere.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
        .into();

    assert_eq!(result.status, Some(0), "stderr: {}", result.stderr);
    assert_eq!(fixture.theme_names(), vec!["Nord"]);
    assert!(!elsewhere.path().join("registry.json").exists());
}
