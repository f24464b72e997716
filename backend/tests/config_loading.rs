//! Integration tests for layered configuration loading
//!
//! Verifies file and environment precedence.

use backend::config::{self, LogConfig, WindowConfig};
use serde::{Deserialize, Serialize};
use serial_test::serial;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Serialize, Deserialize)]
struct DemoConfig {
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    log: LogConfig,
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("backend-config-{}-{name}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn file_overrides_defaults() {
    let dir = scratch_dir("file");
    fs::write(
        dir.join("demo.toml"),
        "[window]\ntitle = \"From File\"\nwidth = 320\nheight = 240\nresizable = false\n",
    )
    .unwrap();

    let config: DemoConfig = config::load_from(&dir, "demo", "DEMO_TEST_FILE_").unwrap();
    assert_eq!(config.window.title, "From File");
    assert_eq!(config.window.width, 320);
    assert!(!config.window.resizable);
    assert_eq!(config.log.level, "info");

    fs::remove_dir_all(dir).unwrap();
}

#[test]
#[serial]
fn user_file_overrides_default_file() {
    let dir = scratch_dir("user");
    fs::write(dir.join("demo.toml"), "[log]\nlevel = \"warn\"\n").unwrap();
    fs::write(dir.join("demo.user.toml"), "[log]\nlevel = \"trace\"\n").unwrap();

    let config: DemoConfig = config::load_from(&dir, "demo", "DEMO_TEST_USER_").unwrap();
    assert_eq!(config.log.level, "trace");

    fs::remove_dir_all(dir).unwrap();
}

#[test]
#[serial]
fn env_overrides_everything() {
    let dir = scratch_dir("env");
    fs::write(dir.join("demo.toml"), "[window]\ntitle = \"From File\"\n").unwrap();

    std::env::set_var("DEMO_TEST_ENV_WINDOW__TITLE", "From Env");
    let config: DemoConfig = config::load_from(&dir, "demo", "DEMO_TEST_ENV_").unwrap();
    std::env::remove_var("DEMO_TEST_ENV_WINDOW__TITLE");

    assert_eq!(config.window.title, "From Env");
    // untouched keys keep their defaults
    assert_eq!(config.window.width, 640);

    fs::remove_dir_all(dir).unwrap();
}

#[test]
#[serial]
fn malformed_file_is_an_error() {
    let dir = scratch_dir("bad");
    fs::write(dir.join("demo.toml"), "[window]\nwidth = \"wide\"\n").unwrap();

    let result: Result<DemoConfig, _> = config::load_from(&dir, "demo", "DEMO_TEST_BAD_");
    assert!(result.is_err());

    fs::remove_dir_all(dir).unwrap();
}
