//! Renders the two stock triangles with two shader slots and writes the last frame to a PNG.
//!
//! ```text
//! cargo run --example triangles --features image_compat -- [config.ron] [output.png]
//! ```

use std::env;
use std::thread;
use std::time::{Duration, Instant};

use bluebird::color::{self, named};
use bluebird::{Config, Context, Coordinate, RenderBuffer, RenderResult, ShaderContext, Triangle};

/// Pulses the red channel over time
fn pulse(ctx: &mut ShaderContext<RenderBuffer>, coord: Coordinate) {
    let red = (ctx.clock.seconds().cos().max(0.0) * 255.0) as u8;

    ctx.put_pixel(coord, color::rgb(red, 0, 0));
}

fn violet(ctx: &mut ShaderContext<RenderBuffer>, coord: Coordinate) {
    ctx.put_pixel(coord, named::violet());
}

fn main() -> RenderResult<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let config = match args.iter().find(|arg| arg.ends_with(".ron")) {
        Some(path) => Config::load(path)?,
        None => Config { width: 320, height: 180, ..Config::default() },
    };

    let output = args.iter()
                     .find(|arg| !arg.ends_with(".ron"))
                     .cloned()
                     .unwrap_or_else(|| "triangles.png".to_owned());

    let mut context = Context::new(&config);

    context.select_shader(0);
    context.set_shader_fn(pulse);
    context.select_shader(1);
    context.set_shader_fn(violet);

    let tri1 = Triangle::from_points((0.5f32, 0.5), (0.5, -0.5), (-0.5, -0.5));
    let tri2 = Triangle::from_points((-0.5f32, 0.5), (0.5, 0.5), (-0.5, -0.5));

    let epoch = Instant::now();
    let mut frames = 0;

    while frames < 30 {
        context.clock_mut().update_since(epoch);

        if !context.clock().should_draw(config.frame_interval) {
            thread::sleep(Duration::from_millis(1));
            continue;
        }

        if let Some(fps) = context.clock().fps() {
            println!("Frame {} - FPS: {:.3}", frames, fps);
        }

        context.clock_mut().mark_frame();
        context.clear();

        context.select_shader(0);
        context.fill_triangle(tri1);
        context.select_shader(1);
        context.fill_triangle(tri2);

        frames += 1;
    }

    context.framebuffer().save(&output)?;

    println!("Saved {}", output);

    Ok(())
}
