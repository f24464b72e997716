pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod math;
pub mod render;
pub mod system;

pub use error::BackendError;
