use std::ops::{Add, Mul, Sub};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline(always)]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    #[inline(always)]
    pub fn distance(self, other: Vec2) -> f32 {
        (self - other).length()
    }

    #[inline(always)]
    pub fn midpoint(self, other: Vec2) -> Vec2 {
        Vec2::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    /// Unit vector pointing along `angle` (radians, y down).
    #[inline(always)]
    pub fn from_angle(angle: f32) -> Vec2 {
        Vec2::new(angle.cos(), angle.sin())
    }

    /// Rotates the point about `center`: translate to the origin, apply the
    /// rotation matrix, translate back.
    pub fn rotate_about(self, center: Vec2, angle: f32) -> Vec2 {
        Mat2x2::rotation(angle) * (self - center) + center
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline(always)]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline(always)]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline(always)]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

// column-major, same layout as the GL matrices
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat2x2 {
    pub c0: Vec2,
    pub c1: Vec2,
}

impl Mat2x2 {
    pub fn rotation(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            c0: Vec2::new(c, s),
            c1: Vec2::new(-s, c),
        }
    }
}

impl Mul<Vec2> for Mat2x2 {
    type Output = Vec2;
    #[inline(always)]
    fn mul(self, v: Vec2) -> Vec2 {
        Vec2::new(
            self.c0.x * v.x + self.c1.x * v.y,
            self.c0.y * v.x + self.c1.y * v.y,
        )
    }
}
