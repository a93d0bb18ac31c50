use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Path of the binary under test
pub fn binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_theme-registry"))
}

/// A temporary themes collection plus helpers for running the binary against it
pub struct ThemesFixture {
    dir: TempDir,
}

/// Captured result of one binary run
pub struct RunResult {
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for RunResult {
    fn from(output: Output) -> Self {
        Self {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl ThemesFixture {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn registry_path(&self) -> PathBuf {
        self.root().join("registry.json")
    }

    /// Create `<root>/<dir>/<file>` with the given content
    pub fn add_file(&self, dir: &str, file: &str, content: &str) -> &Self {
        let theme_dir = self.root().join(dir);
        fs::create_dir_all(&theme_dir).expect("Failed to create theme dir");
        fs::write(theme_dir.join(file), content).expect("Failed to write theme file");
        self
    }

    /// Create an empty directory under the root
    pub fn add_dir(&self, dir: &str) -> &Self {
        fs::create_dir_all(self.root().join(dir)).expect("Failed to create dir");
        self
    }

    /// Run the binary with `--root <fixture>` plus extra arguments
    pub fn run(&self, extra: &[&str]) -> RunResult {
        Command::new(binary())
            .arg("--root")
            .arg(self.root())
            .args(extra)
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run theme-registry")
            .into()
    }

    pub fn read_registry(&self) -> String {
        fs::read_to_string(self.registry_path()).expect("registry.json should exist")
    }

    pub fn registry_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_registry()).expect("registry.json should be valid JSON")
    }

    pub fn theme_names(&self) -> Vec<String> {
        self.registry_json()["themes"]
            .as_array()
            .expect("themes should be an array")
            .iter()
            .map(|t| t["name"].as_str().unwrap().to_string())
            .collect()
    }
}
