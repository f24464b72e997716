use backend::math::Vec2;

use crate::config::ShipConfig;

/// Where everything about the ship is on a given frame.
#[derive(Debug, Copy, Clone)]
pub struct ShipPose {
    pub center: Vec2,
    pub angle: f32,
    pub apex: Vec2,
    pub base_left: Vec2,
    pub base_right: Vec2,
    /// Middle of the base, where the flame attaches
    pub thruster: Vec2,
    pub flame_len: f32,
    pub flame_tip: Vec2,
}

/// Unrotated hull: an upward isosceles triangle around `center`.
pub fn hull(center: Vec2, half_size: f32) -> [Vec2; 3] {
    [
        Vec2::new(center.x, center.y - half_size),
        Vec2::new(center.x - half_size, center.y + half_size),
        Vec2::new(center.x + half_size, center.y + half_size),
    ]
}

impl ShipPose {
    pub fn at(now_ms: u64, center: Vec2, config: &ShipConfig) -> ShipPose {
        let t = now_ms as f32;

        let wobble = (t * config.wobble_rate).sin() * config.wobble_amplitude;
        let angle = config.heading_deg.to_radians() + wobble;

        let [apex, base_left, base_right] =
            hull(center, config.half_size).map(|v| v.rotate_about(center, angle));

        let thruster = base_left.midpoint(base_right);
        let flame_len = config.flame_length + (t * config.flame_rate).sin() * config.flame_flicker;
        let flame_tip = thruster - Vec2::from_angle(angle) * flame_len;

        ShipPose {
            center,
            angle,
            apex,
            base_left,
            base_right,
            thruster,
            flame_len,
            flame_tip,
        }
    }
}
