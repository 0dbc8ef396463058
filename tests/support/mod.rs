#![allow(dead_code)]

use anyhow::{Context, Result};
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub const CATALOG_RELATIVE_PATH: &str = "package-catalog/catalog.json";

// Scratch repository that removes itself on drop; the validator runs with
// this directory as its working directory.
pub struct TempRepo {
    dir: TempDir,
}

impl TempRepo {
    pub fn new() -> Result<Self> {
        let dir = TempDir::new().context("failed to allocate temp repo")?;
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.root().join(CATALOG_RELATIVE_PATH)
    }

    pub fn write_catalog(&self, catalog: &Value) -> Result<PathBuf> {
        self.write_catalog_text(&serde_json::to_string_pretty(catalog)?)
    }

    pub fn write_catalog_text(&self, contents: &str) -> Result<PathBuf> {
        let path = self.catalog_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&path, contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }

    pub fn run_validator(&self) -> Result<Output> {
        Command::new(validator_binary())
            .current_dir(self.root())
            .env_remove("RUST_LOG")
            .output()
            .context("failed to execute validate-catalog")
    }
}

pub fn validator_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_validate-catalog"))
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

pub fn valid_catalog() -> Value {
    json!({
        "categories": [{"name": "db", "packages": [{"name": "pg", "pg_versions": ["14"]}]}],
        "platforms": {"linux": {"install_pattern": "apt"}},
        "meta_packages": [],
        "pg_versions": ["14"]
    })
}
