//! Minimal software triangle rasterizer in Rust
//!
//! ### Example:
//!
//! ```
//! use bluebird::{Context, Config, Triangle};
//! use bluebird::shader::FlatShader;
//! use bluebird::color::named;
//!
//! let mut context = Context::new(&Config { width: 64, height: 64, ..Config::default() });
//!
//! context.select_shader(0);
//! context.set_shader(FlatShader(named::violet()));
//!
//! let covered = context.fill_triangle(Triangle::from_points((0.5f32, 0.5), (0.5, -0.5), (-0.5, -0.5)));
//!
//! assert!(covered > 0);
//! ```
//!
//! ### Features:
//!
//! * Edge-function triangle rasterization over a full canvas, in fixed row-major order.
//! * Triangles in normalized device coordinates, mapped onto the canvas at draw time.
//! * Ten shader slots, each holding a user-defined per-pixel shader and its own state.
//! * A persistent RGBA framebuffer as the pixel sink, or any other `Framebuffer` implementation.
//! * Frame timing for animated shaders and frame pacing.
//! * RON configuration files.
//! * Built-in compatibility with the `image` crate, using the `image_compat` cargo feature.
//!
//! ### Known Limitations
//!
//! #### Winding
//!
//! Only triangles that are clockwise on screen are filled. Triangles with the
//! opposite winding are silently skipped rather than flipped.
//!
//! #### Sampling
//!
//! Pixels are sampled at their lower-left corner, not their center, which biases coverage
//! by half a pixel. Existing scenes depend on this, so it is kept.
//!
//! #### Unfinished draw modes
//!
//! `DrawMode::Line` is accepted but draws nothing, and `ShaderState::use_color_coords`
//! is stored for shaders to read but never acted upon by the rasterizer.

extern crate num_traits;
extern crate nalgebra;
extern crate ron;
extern crate serde;
extern crate thiserror;
#[macro_use]
extern crate log;

#[cfg(feature = "image_compat")]
extern crate image;

pub mod error;
pub mod numeric;
pub mod geometry;
pub mod color;
pub mod pixels;
pub mod framebuffer;
pub mod shader;
pub mod raster;
pub mod time;
pub mod config;
pub mod context;

#[cfg(feature = "image_compat")]
pub mod image_compat;

pub use error::{RenderError, RenderResult};
pub use geometry::{Coordinate, Dimensions, HasDimensions, Triangle, FaceWinding};
pub use color::RGBAu8Color;
pub use framebuffer::{Framebuffer, RenderBuffer, NullFramebuffer};
pub use shader::{Shader, ShaderContext, ShaderState, ShaderRegistry, MAX_SHADERS};
pub use raster::{DrawMode, rasterize_triangle};
pub use time::FrameClock;
pub use config::Config;
pub use context::Context;
