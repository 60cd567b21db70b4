//! Conversion of framebuffers into `image` buffers, enabled by the `image_compat` feature.
//!
//! Pixel row zero is the bottom of the canvas, so rows are written in reverse
//! to give the top-down layout image files expect.

use std::path::Path;

use crate::color;
use crate::error::RenderResult;
use crate::framebuffer::RenderBuffer;
use crate::geometry::HasDimensions;

pub trait ImageFramebuffer<P, C> where P: image::Pixel {
    fn copy_to_image(&self) -> Option<image::ImageBuffer<P, C>>;
}

impl ImageFramebuffer<image::Rgba<u8>, Vec<u8>> for RenderBuffer {
    fn copy_to_image(&self) -> Option<image::RgbaImage> {
        let dimensions = self.dimensions();

        image::RgbaImage::from_raw(dimensions.width, dimensions.height, top_down_bytes(self))
    }
}

impl RenderBuffer {
    /// Save the framebuffer as an image file, with the format chosen from the file extension.
    ///
    /// The last row of the framebuffer becomes the top row of the image.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> RenderResult<()> {
        let dimensions = self.dimensions();

        image::save_buffer(path, &top_down_bytes(self), dimensions.width, dimensions.height,
                           image::ExtendedColorType::Rgba8)?;

        Ok(())
    }
}

fn top_down_bytes(buffer: &RenderBuffer) -> Vec<u8> {
    let width = buffer.dimensions().width as usize;
    let pixels = buffer.pixels();

    let mut bytes = Vec::with_capacity(pixels.len() * 4);

    if width == 0 {
        return bytes;
    }

    for row in pixels.chunks(width).rev() {
        for pixel in row {
            bytes.extend_from_slice(&color::to_bytes(*pixel));
        }
    }

    bytes
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::color::{named, rgb};
    use crate::geometry::{Coordinate, Dimensions, Triangle};
    use crate::pixels::PixelWrite;
    use crate::raster::rasterize_triangle;

    #[test]
    fn test_copy_to_image() {
        let mut buffer = RenderBuffer::with_dimensions(Dimensions::new(3, 2));

        buffer.put_pixel(Coordinate::new(2, 1), rgb(10, 20, 30));

        let img = buffer.copy_to_image().unwrap();

        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(2, 0), &image::Rgba([10, 20, 30, 255]));
        assert_eq!(img.get_pixel(2, 1), &image::Rgba([0, 0, 0, 0]));
        assert_eq!(img.get_pixel(0, 0), &image::Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_upper_triangle_lands_in_top_rows() {
        let dimensions = Dimensions::new(4, 4);
        let mut buffer = RenderBuffer::with_dimensions(dimensions);

        let upper = Triangle::from_points((1.0f32, 1.0), (1.0, 0.0), (-1.0, 0.0));

        let count = rasterize_triangle(upper, dimensions, |coord| buffer.put_pixel(coord, named::white()));

        assert_eq!(count, 6);

        let img = buffer.copy_to_image().unwrap();
        let white = image::Rgba([255, 255, 255, 255]);

        for (x, y, pixel) in img.enumerate_pixels() {
            let filled = match y {
                0 => x >= 2,
                1 => true,
                _ => false,
            };

            assert_eq!(*pixel == white, filled, "image pixel ({}, {})", x, y);
        }
    }

    #[test]
    fn test_empty_buffer_exports_no_bytes() {
        let buffer = RenderBuffer::with_dimensions(Dimensions::new(0, 5));

        assert!(top_down_bytes(&buffer).is_empty());
    }
}
