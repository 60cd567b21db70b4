//! Per-pixel shaders
//!
//! A shader is a small program the rasterizer runs once for every pixel a triangle covers.
//! It receives the pixel's coordinate plus a [`ShaderContext`](struct.ShaderContext.html)
//! giving access to the framebuffer, the state of the shader slot it was installed into
//! and the frame clock. The rasterizer never writes pixels itself, so a shader
//! that does not write anything draws nothing.
//!
//! Any `FnMut(&mut ShaderContext<B>, Coordinate)` closure is a shader:
//!
//! ```
//! use bluebird::{Context, Config, Triangle};
//! use bluebird::color::named;
//!
//! let mut context = Context::new(&Config::default());
//!
//! context.select_shader(1);
//! context.set_shader_fn(|ctx, coord| ctx.put_pixel(coord, named::violet()));
//!
//! context.fill_triangle(Triangle::from_points((-0.5f32, 0.5), (0.5, 0.5), (-0.5, -0.5)));
//! ```

use crate::color::RGBAu8Color;
use crate::geometry::{Coordinate, Dimensions, HasDimensions};
use crate::pixels::PixelWrite;
use crate::time::FrameClock;

pub mod registry;

pub use self::registry::{ShaderRegistry, MAX_SHADERS};

/// Configuration stored alongside each shader slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShaderState {
    /// The colors at each corner of a triangle.
    ///
    /// `colors[0]` maps to `v1`, `colors[1]` to `v2` and `colors[2]` to `v3`.
    pub colors: [RGBAu8Color; 3],
    /// Requests that per-pixel colors be blended from `colors`.
    ///
    /// The rasterizer does not act on this flag. Shaders may read it.
    pub use_color_coords: bool,
}

impl ShaderState {
    pub fn new(colors: [RGBAu8Color; 3], use_color_coords: bool) -> ShaderState {
        ShaderState { colors, use_color_coords }
    }
}

impl Default for ShaderState {
    fn default() -> ShaderState {
        let black = crate::color::transparent();

        ShaderState { colors: [black, black, black], use_color_coords: false }
    }
}

/// Everything a shader can see while shading a pixel.
pub struct ShaderContext<'a, B: 'a> {
    /// Framebuffer being rendered into
    pub target: &'a mut B,
    /// State of the active shader slot
    pub state: &'a ShaderState,
    /// Frame timing
    pub clock: &'a FrameClock,
}

impl<'a, B: 'a> ShaderContext<'a, B> where B: PixelWrite {
    /// Write `color` at `coord` in the target framebuffer
    #[inline]
    pub fn put_pixel(&mut self, coord: Coordinate, color: RGBAu8Color) {
        self.target.put_pixel(coord, color)
    }

    /// Dimensions of the target framebuffer
    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.target.dimensions()
    }
}

/// Pixel coloring capability installed into a shader slot.
pub trait Shader<B> {
    /// Shade the pixel at `coord`.
    fn shade(&mut self, ctx: &mut ShaderContext<B>, coord: Coordinate);
}

impl<B, F> Shader<B> for F where F: FnMut(&mut ShaderContext<B>, Coordinate) {
    #[inline]
    fn shade(&mut self, ctx: &mut ShaderContext<B>, coord: Coordinate) {
        (*self)(ctx, coord)
    }
}

/// Shader that writes a single fixed color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatShader(pub RGBAu8Color);

impl<B> Shader<B> for FlatShader where B: PixelWrite {
    #[inline]
    fn shade(&mut self, ctx: &mut ShaderContext<B>, coord: Coordinate) {
        ctx.put_pixel(coord, self.0)
    }
}

/// Shader that writes the first corner color of its slot's `ShaderState`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateColorShader;

impl<B> Shader<B> for StateColorShader where B: PixelWrite {
    #[inline]
    fn shade(&mut self, ctx: &mut ShaderContext<B>, coord: Coordinate) {
        let color = ctx.state.colors[0];
        ctx.put_pixel(coord, color)
    }
}
