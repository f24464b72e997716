use backend::config::{LogConfig, WindowConfig};
use backend::logging::init_logging;
use backend::system::{Platform, System};
use backend::BackendError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct WindowDemoConfig {
    /// How long the window stays up, in milliseconds
    #[serde(default = "default_hold_ms")]
    hold_ms: u32,
    #[serde(default = "default_window")]
    window: WindowConfig,
    #[serde(default)]
    log: LogConfig,
}

fn default_hold_ms() -> u32 {
    5000
}

fn default_window() -> WindowConfig {
    WindowConfig {
        // the tutorial's title, even though this build links SDL2
        title: "Cavan - SDL3".to_string(),
        width: 320,
        height: 240,
        resizable: true,
    }
}

impl Default for WindowDemoConfig {
    fn default() -> Self {
        Self {
            hold_ms: default_hold_ms(),
            window: default_window(),
            log: LogConfig::default(),
        }
    }
}

/// Opens one window, keeps it up for `hold_ms` and tears everything down.
/// Returns the process exit status.
fn run<P, F>(init: F, config: &WindowDemoConfig) -> i32
where
    P: Platform,
    F: FnOnce() -> Result<P, BackendError>,
{
    let platform = match init() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Failed! {e}");
            return -1;
        }
    };

    let window = match platform.create_window(&config.window) {
        Ok(w) => Some(w),
        Err(e) => {
            log::warn!("{e}");
            None
        }
    };

    log::info!("holding for {} ms", config.hold_ms);
    platform.delay(config.hold_ms);

    // window first, then the subsystem
    drop(window);
    drop(platform);
    0
}

fn main() {
    let loaded = backend::config::load::<WindowDemoConfig>("window_demo", "WINDOW_DEMO_");
    let log_config = loaded.as_ref().map(|c| c.log.clone()).unwrap_or_default();
    init_logging(&log_config);

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("{e}. Using defaults.");
        WindowDemoConfig::default()
    });

    std::process::exit(run(System::new, &config));
}
