use backend::app::{App, AppResult};
use backend::math::Vec2;
use backend::render::{check_sdl_err, render_triangle, ColoredVertex};
use backend::system::{AppMetadata, IoEvents, System};
use backend::BackendError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sdl2::pixels::Color;
use sdl2::rect::FPoint;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

use crate::config::PointsConfig;
use crate::glow::{create_glow_texture, glow_rect};
use crate::particles::{Bounds, ParticleSystem};
use crate::ship::ShipPose;

/// Stars, a wobbling ship and its glowing thruster.
pub struct ShipDemo {
    canvas: Canvas<Window>,
    glow: Texture,
    particles: ParticleSystem,
    star_buffer: Vec<FPoint>,
    center: Vec2,
    last_time: u64,
    config: PointsConfig,
}

/// Only a quit request ends the demo.
pub fn handle_event(event: &IoEvents) -> AppResult {
    match event {
        IoEvents::Quit => AppResult::Success,
        _ => AppResult::Continue,
    }
}

/// Seconds between two clock readings in milliseconds.
pub fn elapsed_seconds(last_ms: u64, now_ms: u64) -> f32 {
    now_ms.saturating_sub(last_ms) as f32 / 1000.0
}

/// Logs a failed draw call and counts it. The rest of the frame is still
/// drawn.
fn note_draw(step: &str, result: Result<(), BackendError>, failures: &mut usize) {
    if let Err(e) = result {
        log::debug!("{step}: {e}");
        *failures += 1;
    }
}

pub fn flame_triangle(pose: &ShipPose) -> [ColoredVertex; 3] {
    [
        ColoredVertex::new(pose.thruster, Color::RGBA(255, 100, 30, 255)),
        ColoredVertex::new(pose.base_left, Color::RGBA(255, 200, 30, 255)),
        ColoredVertex::new(pose.base_right, Color::RGBA(255, 200, 30, 255)),
    ]
}

pub fn hull_triangle(pose: &ShipPose) -> [ColoredVertex; 3] {
    [
        ColoredVertex::new(pose.apex, Color::RGBA(0, 255, 0, 255)),
        ColoredVertex::new(pose.base_left, Color::RGBA(0, 200, 0, 255)),
        ColoredVertex::new(pose.base_right, Color::RGBA(0, 200, 0, 255)),
    ]
}

impl ShipDemo {
    /// Draws one frame and returns how many draw calls failed.
    fn draw_frame(&mut self, now_ms: u64) -> usize {
        let mut failures = 0;
        self.canvas.set_draw_color(Color::RGBA(0, 0, 0, 255));
        self.canvas.clear();

        self.star_buffer.clear();
        self.star_buffer.extend(
            self.particles
                .points()
                .iter()
                .map(|p| FPoint::new(p.x, p.y)),
        );
        self.canvas.set_draw_color(Color::RGBA(255, 255, 255, 255));
        let stars = self.canvas.draw_fpoints(self.star_buffer.as_slice());
        note_draw("stars", check_sdl_err(stars), &mut failures);

        let pose = ShipPose::at(now_ms, self.center, &self.config.ship);
        let flame = render_triangle(&mut self.canvas, &flame_triangle(&pose));
        note_draw("flame", flame, &mut failures);
        let hull = render_triangle(&mut self.canvas, &hull_triangle(&pose));
        note_draw("hull", hull, &mut failures);

        let glow = &self.config.glow;
        let sprites = [
            ("thruster glow", pose.flame_tip, glow.thruster_size),
            ("hull glow", pose.center, glow.body_size),
            ("ambient bloom", pose.center, glow.ambient_size),
        ];
        for (step, center, size) in sprites {
            let copied = self.canvas.copy_f(&self.glow, None, glow_rect(center, size));
            note_draw(step, check_sdl_err(copied), &mut failures);
        }
        failures
    }
}

impl App for ShipDemo {
    type Config = PointsConfig;

    const METADATA: AppMetadata = AppMetadata {
        name: "Example Renderer Points",
        version: "1.0",
        identifier: "com.example.renderer-points",
    };

    fn init(system: &System, config: &PointsConfig, now_ms: u64) -> Result<Self, BackendError> {
        let mut canvas = system.create_window_and_canvas(&config.window)?;
        let texture_creator = canvas.texture_creator();
        let glow = create_glow_texture(&mut canvas, &texture_creator, &config.glow)?;

        let bounds = Bounds {
            width: config.window.width as f32,
            height: config.window.height as f32,
        };
        let rng = match config.seed {
            Some(seed) => {
                log::info!("using fixed seed {seed}");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };
        let particles = ParticleSystem::new(&config.particles, bounds, rng);
        log::debug!("seeded {} points", particles.len());

        Ok(ShipDemo {
            canvas,
            glow,
            star_buffer: Vec::with_capacity(particles.len()),
            particles,
            center: Vec2::new(bounds.width * 0.5, bounds.height * 0.5),
            last_time: now_ms,
            config: config.clone(),
        })
    }

    fn event(&mut self, event: &IoEvents) -> AppResult {
        handle_event(event)
    }

    fn iterate(&mut self, now_ms: u64) -> AppResult {
        let elapsed = elapsed_seconds(self.last_time, now_ms);
        self.particles.update(elapsed);
        self.last_time = now_ms;

        let failures = self.draw_frame(now_ms);
        if failures > 0 {
            log::trace!("frame at {now_ms}ms had {failures} failed draw calls");
        }
        self.canvas.present();
        AppResult::Continue
    }

    fn quit(&mut self, result: AppResult) {
        // renderer, window and glow texture go away with SDL itself
        log::debug!("quit with {result:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShipConfig;
    use sdl2::event::Event;

    #[test]
    fn quit_ends_with_success() {
        assert_eq!(handle_event(&IoEvents::Quit), AppResult::Success);
    }

    #[test]
    fn other_events_continue() {
        let events = [
            Event::AppLowMemory { timestamp: 0 },
            Event::AppWillEnterBackground { timestamp: 0 },
            Event::AppDidEnterForeground { timestamp: 0 },
        ];
        for event in &events {
            assert_eq!(handle_event(&IoEvents::from(event)), AppResult::Continue);
        }
        assert_eq!(
            handle_event(&IoEvents::from(&Event::Quit { timestamp: 0 })),
            AppResult::Success
        );
    }

    #[test]
    fn failed_draw_calls_are_counted_not_fatal() {
        let mut failures = 0;
        let mut reached = Vec::new();
        let steps = [
            ("flame", Err(BackendError::Render("geometry unsupported".to_string()))),
            ("hull", Err(BackendError::Render("geometry unsupported".to_string()))),
            ("thruster glow", Ok(())),
            ("hull glow", Ok(())),
        ];
        for (step, result) in steps {
            reached.push(step);
            note_draw(step, result, &mut failures);
        }
        assert_eq!(failures, 2);
        assert_eq!(reached, ["flame", "hull", "thruster glow", "hull glow"]);
    }

    #[test]
    fn elapsed_is_in_seconds() {
        assert_eq!(elapsed_seconds(1_000, 2_000), 1.0);
        assert_eq!(elapsed_seconds(500, 516), 0.016);
        // clock never runs backwards, but don't underflow if it does
        assert_eq!(elapsed_seconds(2_000, 1_000), 0.0);
    }

    #[test]
    fn triangles_share_the_base() {
        let pose = ShipPose::at(250, Vec2::new(320.0, 240.0), &ShipConfig::default());
        let flame = flame_triangle(&pose);
        let hull = hull_triangle(&pose);

        assert_eq!(flame[0].pos, pose.thruster);
        assert_eq!(hull[0].pos, pose.apex);
        assert_eq!(flame[1].pos, hull[1].pos);
        assert_eq!(flame[2].pos, hull[2].pos);
    }

    #[test]
    fn flame_runs_orange_to_yellow_and_hull_is_green() {
        let pose = ShipPose::at(0, Vec2::new(320.0, 240.0), &ShipConfig::default());
        let flame = flame_triangle(&pose);
        let hull = hull_triangle(&pose);

        assert_eq!(flame[0].color, Color::RGBA(255, 100, 30, 255));
        assert!(flame[1..].iter().all(|v| v.color == Color::RGBA(255, 200, 30, 255)));
        assert_eq!(hull[0].color, Color::RGBA(0, 255, 0, 255));
        assert!(hull[1..].iter().all(|v| v.color == Color::RGBA(0, 200, 0, 255)));
    }
}
