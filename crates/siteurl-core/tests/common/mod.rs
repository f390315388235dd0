//! Shared fixtures for integration tests.

use std::path::PathBuf;

use tempfile::TempDir;

pub const ROOT_URL: &str = "http://localhost/ProjectCom";
pub const ROOT_DIR: &str = "/path/to/html";
pub const LIVE_URL: &str = "http://project.com";

/// Writes a `config.toml` into a fresh temp dir. Keep the `TempDir` alive while using the path.
pub fn write_config(body: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, body).unwrap();
    (dir, path)
}

pub fn full_config_toml() -> String {
    format!("root_url = \"{ROOT_URL}\"\nroot_dir = \"{ROOT_DIR}\"\nlive_url = \"{LIVE_URL}\"\n")
}
