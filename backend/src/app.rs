//! Application lifecycle: a program implements [`App`] and hands control to
//! [`run`], which owns SDL and calls back into the program once per event
//! and once per frame.

use std::process::ExitCode;

use crate::error::BackendError;
use crate::system::{set_app_metadata, AppMetadata, IoEvents, System};

/// What a lifecycle callback asks the runner to do next.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AppResult {
    Continue,
    /// Stop and report success to the OS.
    Success,
    /// Stop and report failure to the OS.
    Failure,
}

impl From<AppResult> for ExitCode {
    fn from(result: AppResult) -> Self {
        match result {
            AppResult::Continue | AppResult::Success => ExitCode::SUCCESS,
            AppResult::Failure => ExitCode::FAILURE,
        }
    }
}

pub trait App: Sized {
    type Config;

    const METADATA: AppMetadata;

    /// Builds the program state once SDL is up. `now_ms` is the clock at
    /// start-up so the first frame sees a sane elapsed time.
    fn init(system: &System, config: &Self::Config, now_ms: u64) -> Result<Self, BackendError>;

    /// Called for every pending event before each frame.
    fn event(&mut self, event: &IoEvents) -> AppResult;

    /// Called once per frame.
    fn iterate(&mut self, now_ms: u64) -> AppResult;

    /// Called once when the loop ends, with the result that ended it.
    fn quit(&mut self, _result: AppResult) {}
}

/// One pass of the loop: hand over `events`, then run a frame unless an
/// event already ended the program.
pub fn step<A: App>(app: &mut A, events: &[IoEvents], now_ms: u64) -> AppResult {
    for event in events {
        match app.event(event) {
            AppResult::Continue => {}
            done => return done,
        }
    }
    app.iterate(now_ms)
}

/// Runs `A` until one of its callbacks returns something other than
/// `Continue`.
pub fn run<A: App>(config: &A::Config) -> AppResult {
    set_app_metadata(&A::METADATA);

    let mut system = match System::new() {
        Ok(s) => s,
        Err(e) => {
            log::error!("{e}");
            return AppResult::Failure;
        }
    };

    let mut app = match A::init(&system, config, system.ticks()) {
        Ok(app) => app,
        Err(e) => {
            log::error!("{e}");
            return AppResult::Failure;
        }
    };
    log::info!("{} started", A::METADATA.name);

    let result = loop {
        system.process_io_events();
        let now = system.ticks();
        match step(&mut app, &system.events, now) {
            AppResult::Continue => {}
            done => break done,
        }
    };

    app.quit(result);
    log::info!("{} finished: {result:?}", A::METADATA.name);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        events_seen: usize,
        frames: Vec<u64>,
        fail_at: Option<u64>,
    }

    impl App for Recorder {
        type Config = ();

        const METADATA: AppMetadata = AppMetadata {
            name: "recorder",
            version: "0",
            identifier: "test.recorder",
        };

        fn init(_: &System, _: &(), _: u64) -> Result<Self, BackendError> {
            Ok(Self::default())
        }

        fn event(&mut self, event: &IoEvents) -> AppResult {
            self.events_seen += 1;
            match event {
                IoEvents::Quit => AppResult::Success,
                _ => AppResult::Continue,
            }
        }

        fn iterate(&mut self, now_ms: u64) -> AppResult {
            self.frames.push(now_ms);
            if self.fail_at == Some(now_ms) {
                AppResult::Failure
            } else {
                AppResult::Continue
            }
        }
    }

    #[test]
    fn frame_runs_after_events() {
        let mut app = Recorder::default();
        let events = [IoEvents::Other, IoEvents::Other];
        assert_eq!(step(&mut app, &events, 16), AppResult::Continue);
        assert_eq!(app.events_seen, 2);
        assert_eq!(app.frames, vec![16]);
    }

    #[test]
    fn quit_skips_the_frame_and_remaining_events() {
        let mut app = Recorder::default();
        let events = [IoEvents::Quit, IoEvents::Other];
        assert_eq!(step(&mut app, &events, 16), AppResult::Success);
        assert_eq!(app.events_seen, 1);
        assert!(app.frames.is_empty());
    }

    #[test]
    fn iterate_can_end_the_loop() {
        let mut app = Recorder {
            fail_at: Some(32),
            ..Recorder::default()
        };
        assert_eq!(step(&mut app, &[], 16), AppResult::Continue);
        assert_eq!(step(&mut app, &[], 32), AppResult::Failure);
    }
}
