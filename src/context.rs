//! Rendering context
//!
//! A `Context` bundles everything one canvas needs to draw: the framebuffer, the shader slots,
//! the draw mode and the frame clock. It is passed around explicitly, there is no global instance.

use crate::color::RGBAu8Color;
use crate::config::Config;
use crate::framebuffer::{Framebuffer, RenderBuffer};
use crate::geometry::{Coordinate, Dimensions, HasDimensions, Triangle};
use crate::numeric::FloatScalar;
use crate::raster::{DrawMode, rasterize_triangle};
use crate::shader::{Shader, ShaderContext, ShaderRegistry, ShaderState};
use crate::time::FrameClock;

pub struct Context<B = RenderBuffer> {
    framebuffer: B,
    shaders: ShaderRegistry<B>,
    draw_mode: DrawMode,
    clock: FrameClock,
    clear_color: RGBAu8Color,
}

impl Context<RenderBuffer> {
    /// Create a context with a `RenderBuffer` sized and cleared as configured
    pub fn new(config: &Config) -> Context<RenderBuffer> {
        let framebuffer = RenderBuffer::with_color(config.dimensions(), config.clear_color());

        let mut context = Context::with_framebuffer(framebuffer);

        context.draw_mode = config.draw_mode;
        context.clear_color = config.clear_color();
        context
    }
}

impl<B> Context<B> where B: Framebuffer {
    /// Create a context drawing into `framebuffer`, in fill mode with every shader slot empty
    pub fn with_framebuffer(framebuffer: B) -> Context<B> {
        Context {
            framebuffer,
            shaders: ShaderRegistry::new(),
            draw_mode: DrawMode::Fill,
            clock: FrameClock::new(),
            clear_color: crate::color::rgb(0, 0, 0),
        }
    }

    /// Returns a reference to the framebuffer
    #[inline]
    pub fn framebuffer(&self) -> &B { &self.framebuffer }
    /// Returns a mutable reference to the framebuffer
    #[inline]
    pub fn framebuffer_mut(&mut self) -> &mut B { &mut self.framebuffer }

    /// Consume the context, returning the framebuffer
    pub fn into_framebuffer(self) -> B { self.framebuffer }

    #[inline]
    pub fn draw_mode(&self) -> DrawMode { self.draw_mode }

    #[inline]
    pub fn set_draw_mode(&mut self, mode: DrawMode) {
        self.draw_mode = mode;
    }

    /// Returns a reference to the shader slots
    #[inline]
    pub fn shaders(&self) -> &ShaderRegistry<B> { &self.shaders }
    /// Returns a mutable reference to the shader slots
    #[inline]
    pub fn shaders_mut(&mut self) -> &mut ShaderRegistry<B> { &mut self.shaders }

    /// Select the active shader slot. Out of range indices are ignored.
    #[inline]
    pub fn select_shader(&mut self, index: usize) {
        self.shaders.select(index)
    }

    /// Index of the active shader slot
    #[inline]
    pub fn active_shader_index(&self) -> usize {
        self.shaders.active_index()
    }

    /// Install a shader into the active slot
    #[inline]
    pub fn set_shader<S>(&mut self, shader: S) where S: Shader<B> + 'static {
        self.shaders.set_shader(shader)
    }

    /// Install a closure shader into the active slot
    #[inline]
    pub fn set_shader_fn<F>(&mut self, shader: F) where F: FnMut(&mut ShaderContext<B>, Coordinate) + 'static {
        self.shaders.set_shader_fn(shader)
    }

    /// Store `state` in the active slot
    #[inline]
    pub fn set_shader_state(&mut self, state: ShaderState) {
        self.shaders.set_state(state)
    }

    /// State of the active slot
    #[inline]
    pub fn shader_state(&self) -> &ShaderState {
        self.shaders.state()
    }

    #[inline]
    pub fn clock(&self) -> &FrameClock { &self.clock }

    #[inline]
    pub fn clock_mut(&mut self) -> &mut FrameClock { &mut self.clock }

    /// Update the frame clock with the current time in milliseconds
    #[inline]
    pub fn update_time(&mut self, now: u32) {
        self.clock.update(now)
    }

    #[inline]
    pub fn clear_color(&self) -> RGBAu8Color { self.clear_color }

    #[inline]
    pub fn set_clear_color(&mut self, color: RGBAu8Color) {
        self.clear_color = color;
    }

    /// Clear the framebuffer to the clear color
    pub fn clear(&mut self) {
        let color = self.clear_color;
        self.framebuffer.clear(color)
    }

    /// Resize the canvas. Framebuffer contents are discarded.
    pub fn resize(&mut self, dimensions: Dimensions) {
        self.framebuffer.resize(dimensions)
    }

    /// Draw `triangle`, given in normalized device coordinates, with the active shader slot.
    ///
    /// The active shader runs once for every covered pixel, in row-major order.
    /// See [`rasterize_triangle`](../raster/triangle/fn.rasterize_triangle.html) for the coverage rules.
    ///
    /// Nothing is drawn in `DrawMode::Line`, or when the active slot has no shader.
    /// Returns the number of times the shader was run.
    pub fn fill_triangle<N>(&mut self, triangle: Triangle<N>) -> usize where N: FloatScalar {
        if self.draw_mode != DrawMode::Fill {
            return 0;
        }

        let Context { ref mut framebuffer, ref mut shaders, ref clock, .. } = *self;

        let dimensions = framebuffer.dimensions();
        let active = shaders.active_index();

        let (shader, state) = match shaders.active_mut() {
            (Some(shader), state) => (shader, state),
            (None, _) => {
                debug!("No shader installed in slot {}, skipping triangle", active);
                return 0;
            }
        };

        let mut ctx = ShaderContext { target: framebuffer, state, clock };

        rasterize_triangle(triangle, dimensions, |coord| shader.shade(&mut ctx, coord))
    }
}

impl<B> HasDimensions for Context<B> where B: Framebuffer {
    #[inline]
    fn dimensions(&self) -> Dimensions { self.framebuffer.dimensions() }
}
