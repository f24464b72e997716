//! Layered program configuration
//!
//! Every program reads, in increasing priority:
//! 1. `config/<program>.toml` (version controlled)
//! 2. `config/<program>.user.toml` (local overrides)
//! 3. Environment variables (`<PREFIX>SECTION__KEY`)
//!
//! Missing files are skipped, so a program with no config directory runs on
//! its compiled-in defaults.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Window configuration shared by both programs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels (also the logical render width)
    pub width: u32,
    /// Window height in pixels (also the logical render height)
    pub height: u32,
    /// Let the user resize the window
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Window".to_string(),
            width: 640,
            height: 480,
            resizable: true,
        }
    }
}

/// Log configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter in `env_logger` syntax; `RUST_LOG` still wins
    pub level: String,
    /// Terminal colors: "auto", "always" or "never"
    #[serde(default = "default_log_style")]
    pub style: String,
}

fn default_log_style() -> String {
    "auto".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            style: default_log_style(),
        }
    }
}

/// Loads `T` for `program` from the `config` directory.
pub fn load<T>(program: &str, env_prefix: &str) -> Result<T, ConfigError>
where
    T: Default + Serialize + DeserializeOwned,
{
    load_from("config", program, env_prefix)
}

/// Loads `T` for `program` from a specific config directory
pub fn load_from<T, P>(config_dir: P, program: &str, env_prefix: &str) -> Result<T, ConfigError>
where
    T: Default + Serialize + DeserializeOwned,
    P: AsRef<Path>,
{
    let config_dir = config_dir.as_ref();
    let default_path = config_dir.join(format!("{program}.toml"));
    let user_path = config_dir.join(format!("{program}.user.toml"));

    let mut figment = Figment::from(Serialized::defaults(T::default()));

    if default_path.exists() {
        figment = figment.merge(Toml::file(&default_path));
    }

    if user_path.exists() {
        log::debug!("applying overrides from {}", user_path.display());
        figment = figment.merge(Toml::file(&user_path));
    }

    // POINTS_WINDOW__TITLE=Test -> window.title = "Test"
    figment = figment.merge(Env::prefixed(env_prefix).split("__"));

    figment.extract().map_err(ConfigError::from)
}

/// Configuration error
#[derive(Debug, Error)]
#[error("configuration error: {0}")]
pub struct ConfigError(#[from] figment::Error);
