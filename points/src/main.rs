mod config;
mod demo;
mod glow;
mod particles;
mod ship;

use std::process::ExitCode;

use backend::app;
use backend::logging::init_logging;

use config::PointsConfig;
use demo::ShipDemo;

fn main() -> ExitCode {
    let loaded = backend::config::load::<PointsConfig>("points", "POINTS_");
    let log_config = loaded.as_ref().map(|c| c.log.clone()).unwrap_or_default();
    init_logging(&log_config);

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("{e}. Using defaults.");
        PointsConfig::default()
    });

    app::run::<ShipDemo>(&config).into()
}
