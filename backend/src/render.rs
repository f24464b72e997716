use std::ptr;

use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::render::{BlendMode, Canvas, RenderTarget, Texture, TextureCreator};
use sdl2::sys;

use crate::error::BackendError;
use crate::math::Vec2;

/// Turns the `Result<(), String>` of an SDL draw call into a backend error.
pub fn check_sdl_err(result: Result<(), String>) -> Result<(), BackendError> {
    result.map_err(BackendError::Render)
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColoredVertex {
    pub pos: Vec2,
    pub color: Color,
}

impl ColoredVertex {
    pub fn new(pos: Vec2, color: Color) -> Self {
        Self { pos, color }
    }

    fn to_sdl(self) -> sys::SDL_Vertex {
        sys::SDL_Vertex {
            position: sys::SDL_FPoint {
                x: self.pos.x,
                y: self.pos.y,
            },
            color: sys::SDL_Color {
                r: self.color.r,
                g: self.color.g,
                b: self.color.b,
                a: self.color.a,
            },
            // untextured, so uv stays at the origin
            tex_coord: sys::SDL_FPoint { x: 0.0, y: 0.0 },
        }
    }
}

/// Rasterizes one filled triangle, interpolating the vertex colors.
pub fn render_triangle<T: RenderTarget>(
    canvas: &mut Canvas<T>,
    vertices: &[ColoredVertex; 3],
) -> Result<(), BackendError> {
    let raw = vertices.map(ColoredVertex::to_sdl);
    let ret = unsafe {
        sys::SDL_RenderGeometry(
            canvas.raw(),
            ptr::null_mut(),
            raw.as_ptr(),
            raw.len() as i32,
            ptr::null(),
            0,
        )
    };
    if ret != 0 {
        return Err(BackendError::Render(sdl2::get_error()));
    }
    Ok(())
}

/// Allocates an RGBA8888 texture usable as a render target.
pub fn create_render_target<T>(
    creator: &TextureCreator<T>,
    width: u32,
    height: u32,
    blend_mode: BlendMode,
) -> Result<Texture, BackendError> {
    let mut texture = creator
        .create_texture_target(PixelFormatEnum::RGBA8888, width, height)
        .map_err(|e| BackendError::Texture(format!("{width}x{height} target: {e}")))?;
    texture.set_blend_mode(blend_mode);
    Ok(texture)
}

/// Draws into `texture` with `draw`, then restores the default target.
///
/// The first error raised by `draw` is returned once the target is restored.
pub fn draw_into_texture<T, F>(
    canvas: &mut Canvas<T>,
    texture: &mut Texture,
    draw: F,
) -> Result<(), BackendError>
where
    T: RenderTarget,
    F: FnOnce(&mut Canvas<T>) -> Result<(), BackendError>,
{
    let mut outcome = Ok(());
    canvas
        .with_texture_canvas(texture, |target| outcome = draw(target))
        .map_err(|e| BackendError::Texture(e.to_string()))?;
    outcome
}
