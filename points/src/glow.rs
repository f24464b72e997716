use backend::math::Vec2;
use backend::render::{check_sdl_err, create_render_target, draw_into_texture};
use backend::BackendError;
use sdl2::pixels::Color;
use sdl2::rect::{FRect, Point};
use sdl2::render::{BlendMode, Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};

use crate::config::GlowConfig;

/// Warm off-white
const GLOW_RGB: (u8, u8, u8) = (255, 255, 200);

/// Opacity of texel `(x, y)` in a glow of the given radius: 255 at the
/// center, fading linearly to 0 at `radius` and beyond.
pub fn glow_alpha(x: u32, y: u32, radius: u32) -> u8 {
    if radius == 0 {
        return 0;
    }
    let r = radius as f32;
    let dx = x as f32 - r;
    let dy = y as f32 - r;
    let dist = ((dx * dx + dy * dy).sqrt() / r).min(1.0);
    ((1.0 - dist) * 255.0) as u8
}

/// Renders the radial gradient into a fresh `2r x 2r` target texture, one
/// texel at a time. The result is meant to be stamped with additive blending.
pub fn create_glow_texture(
    canvas: &mut Canvas<Window>,
    creator: &TextureCreator<WindowContext>,
    config: &GlowConfig,
) -> Result<Texture, BackendError> {
    let size = config.radius * 2;
    let mut texture = create_render_target(creator, size, size, BlendMode::Add)?;

    draw_into_texture(canvas, &mut texture, |target| {
        // write texels as-is instead of blending them over garbage
        target.set_blend_mode(BlendMode::None);
        let (r, g, b) = GLOW_RGB;
        for y in 0..size {
            for x in 0..size {
                let alpha = glow_alpha(x, y, config.radius);
                target.set_draw_color(Color::RGBA(r, g, b, alpha));
                check_sdl_err(target.draw_point(Point::new(x as i32, y as i32)))?;
            }
        }
        Ok(())
    })?;

    texture.set_alpha_mod(config.alpha_mod);
    log::debug!("glow texture {size}x{size}, alpha mod {}", config.alpha_mod);
    Ok(texture)
}

/// Destination rectangle of a `size x size` sprite centered on `center`.
pub fn glow_rect(center: Vec2, size: f32) -> FRect {
    let half = size * 0.5;
    FRect::new(center.x - half, center.y - half, size, size)
}
