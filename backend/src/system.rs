use std::time::{Duration, Instant};

use sdl2::event::Event;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::config::WindowConfig;
use crate::error::BackendError;

/// Platform-neutral view of an SDL event. The demos only react to a quit
/// request, so every other event kind collapses into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoEvents {
    Quit,
    Other,
}

impl From<&Event> for IoEvents {
    fn from(event: &Event) -> Self {
        match event {
            Event::Quit { .. } => IoEvents::Quit,
            _ => IoEvents::Other,
        }
    }
}

/// Name, version and identifier of the running program.
#[derive(Debug, Clone, Copy)]
pub struct AppMetadata {
    pub name: &'static str,
    pub version: &'static str,
    pub identifier: &'static str,
}

/// Publishes the metadata to SDL. Must run before `System::new`.
pub fn set_app_metadata(metadata: &AppMetadata) {
    if !sdl2::hint::set("SDL_APP_NAME", metadata.name) {
        log::debug!("SDL_APP_NAME hint was not accepted");
    }
    log::info!(
        "{} {} ({})",
        metadata.name,
        metadata.version,
        metadata.identifier
    );
}

/// What a program needs from the platform to open a window and wait.
pub trait Platform {
    type Window;

    fn create_window(&self, config: &WindowConfig) -> Result<Self::Window, BackendError>;
    fn delay(&self, ms: u32);
}

pub struct System {
    pub sdl_context: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    event_pump: sdl2::EventPump,
    started: Instant,
    pub events: Vec<IoEvents>,
}

impl System {
    /// Initializes SDL with the video subsystem. The subsystem is released
    /// when the returned value is dropped.
    pub fn new() -> Result<System, BackendError> {
        let sdl_context = sdl2::init().map_err(BackendError::Init)?;
        let video_subsystem = sdl_context.video().map_err(BackendError::Init)?;
        let event_pump = sdl_context.event_pump().map_err(BackendError::EventPump)?;
        log::debug!("video driver: {}", video_subsystem.current_video_driver());

        Ok(System {
            sdl_context,
            video_subsystem,
            event_pump,
            started: Instant::now(),
            events: Vec::new(),
        })
    }

    pub fn create_window_and_canvas(
        &self,
        config: &WindowConfig,
    ) -> Result<Canvas<Window>, BackendError> {
        let window = self.create_window(config)?;
        let mut canvas = window
            .into_canvas()
            .build()
            .map_err(|e| BackendError::Canvas(e.to_string()))?;

        // SDL2 logical size always letterboxes
        canvas
            .set_logical_size(config.width, config.height)
            .map_err(|e| BackendError::Canvas(e.to_string()))?;
        log::debug!(
            "renderer '{}' with logical size {}x{}",
            canvas.info().name,
            config.width,
            config.height
        );
        Ok(canvas)
    }

    /// Drains the SDL queue into `events`.
    pub fn process_io_events(&mut self) -> &[IoEvents] {
        self.events.clear();
        for event in self.event_pump.poll_iter() {
            self.events.push(IoEvents::from(&event));
        }
        &self.events
    }

    /// Milliseconds since the subsystem was initialized.
    pub fn ticks(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}

impl Platform for System {
    type Window = Window;

    fn create_window(&self, config: &WindowConfig) -> Result<Window, BackendError> {
        let mut builder = self
            .video_subsystem
            .window(&config.title, config.width, config.height);
        if config.resizable {
            builder.resizable();
        }
        match builder.position_centered().build() {
            Ok(w) => Ok(w),
            Err(e) => Err(BackendError::Window(format!(
                "error while building window: {e}"
            ))),
        }
    }

    fn delay(&self, ms: u32) {
        ::std::thread::sleep(Duration::from_millis(ms as u64));
    }
}
