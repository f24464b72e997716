use thiserror::Error;

/// Failures reported by the SDL platform layer.
///
/// SDL hands back plain strings; they are wrapped here so callers can tell
/// which stage of start-up went wrong.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("couldn't initialize SDL: {0}")]
    Init(String),
    #[error("couldn't create window: {0}")]
    Window(String),
    #[error("couldn't create renderer: {0}")]
    Canvas(String),
    #[error("couldn't create texture: {0}")]
    Texture(String),
    #[error("render call failed: {0}")]
    Render(String),
    #[error("event pump unavailable: {0}")]
    EventPump(String),
}
