use backend::math::Vec2;
use rand::rngs::StdRng;
use rand::Rng;

use crate::config::ParticleConfig;

/// Visible area the points live in, origin top-left.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x < self.width && p.y < self.height
    }
}

/// Points drifting down-right along the diagonal, each at its own speed.
///
/// Positions and speeds are kept as two index-aligned arrays so the whole
/// field can be handed to a single draw call.
pub struct ParticleSystem<R: Rng = StdRng> {
    points: Vec<Vec2>,
    speeds: Vec<f32>,
    bounds: Bounds,
    min_speed: f32,
    max_speed: f32,
    rng: R,
}

impl<R: Rng> ParticleSystem<R> {
    /// Scatters `config.count` points uniformly over `bounds`.
    pub fn new(config: &ParticleConfig, bounds: Bounds, rng: R) -> Self {
        let mut system = Self::from_parts(
            Vec::with_capacity(config.count),
            Vec::with_capacity(config.count),
            bounds,
            config,
            rng,
        );
        for _ in 0..config.count {
            let x = system.random_coord(bounds.width);
            let y = system.random_coord(bounds.height);
            let speed = system.random_speed();
            system.points.push(Vec2::new(x, y));
            system.speeds.push(speed);
        }
        system
    }

    /// Builds a system from explicit state.
    ///
    /// # Panics
    ///
    /// When `points` and `speeds` differ in length.
    pub fn from_parts(
        points: Vec<Vec2>,
        speeds: Vec<f32>,
        bounds: Bounds,
        config: &ParticleConfig,
        rng: R,
    ) -> Self {
        assert_eq!(
            points.len(),
            speeds.len(),
            "every point needs exactly one speed"
        );
        Self {
            points,
            speeds,
            bounds,
            min_speed: config.min_speed,
            max_speed: config.max_speed,
            rng,
        }
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    #[cfg(test)]
    pub fn speeds(&self) -> &[f32] {
        &self.speeds
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Moves every point `speed * elapsed` pixels along both axes. A point
    /// that reaches the right or bottom edge reappears on the top or left
    /// edge with a fresh speed.
    pub fn update(&mut self, elapsed: f32) {
        for i in 0..self.points.len() {
            let distance = elapsed * self.speeds[i];
            let p = &mut self.points[i];
            p.x += distance;
            p.y += distance;

            if p.x >= self.bounds.width || p.y >= self.bounds.height {
                self.respawn(i);
            }
            debug_assert!(self.bounds.contains(self.points[i]));
        }
    }

    fn respawn(&mut self, i: usize) {
        let Bounds { width, height } = self.bounds;
        self.points[i] = if self.rng.random_bool(0.5) {
            Vec2::new(self.random_coord(width), 0.0)
        } else {
            Vec2::new(0.0, self.random_coord(height))
        };
        self.speeds[i] = self.random_speed();
        log::trace!("point {i} respawned at {:?}", self.points[i]);
    }

    // uniform in [0, extent)
    fn random_coord(&mut self, extent: f32) -> f32 {
        let v = self.rng.random::<f32>() * extent;
        if v < extent {
            v
        } else {
            0.0
        }
    }

    fn random_speed(&mut self) -> f32 {
        self.min_speed + self.rng.random::<f32>() * (self.max_speed - self.min_speed)
    }
}
