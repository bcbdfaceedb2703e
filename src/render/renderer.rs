//! Owned render targets.
//!
//! Provides the [`Renderer`] struct which owns the colour and depth buffers
//! for one window and hands out borrowed views to the rasterisers.

use std::path::Path;

use super::depth::DepthBuffer;
use super::framebuffer::FrameBuffer;
use crate::colour::Colour;

pub struct Renderer {
    color_buffer: Vec<u32>,
    depth_buffer: DepthBuffer,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![Colour::BLACK.pack(); size],
            depth_buffer: DepthBuffer::new(width, height),
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let size = (width * height) as usize;
        self.color_buffer = vec![Colour::BLACK.pack(); size];
        self.depth_buffer.resize(width, height);
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    /// Clear the depth buffer to prepare for a new frame.
    #[inline]
    pub fn clear_depth(&mut self) {
        self.depth_buffer.clear();
    }

    /// Get a mutable FrameBuffer view into the colour buffer.
    pub fn framebuffer(&mut self) -> FrameBuffer<'_> {
        FrameBuffer::new(&mut self.color_buffer, self.width, self.height)
    }

    /// Borrow the colour view and the depth buffer together for depth-tested
    /// drawing.
    pub fn targets(&mut self) -> (FrameBuffer<'_>, &mut DepthBuffer) {
        (
            FrameBuffer::new(&mut self.color_buffer, self.width, self.height),
            &mut self.depth_buffer,
        )
    }

    pub fn depth_buffer(&self) -> &DepthBuffer {
        &self.depth_buffer
    }

    pub fn pixels(&self) -> &[u32] {
        &self.color_buffer
    }

    /// Get the packed colour at (x, y), or None if out of bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    /// Returns the colour buffer as bytes (ARGB8888, native endian).
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and u8 has alignment 1, so viewing the
        // buffer's storage as len * 4 bytes is valid for the borrow's lifetime.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    /// Copy the colour buffer into an RGB image.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            let colour = Colour::from_packed(self.color_buffer[(y * self.width + x) as usize]);
            image::Rgb([colour.r, colour.g, colour.b])
        })
    }

    /// Save the current frame. The format follows the file extension
    /// (`.ppm`, `.bmp`, `.png`, ...).
    pub fn save_image<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        self.to_rgb_image().save(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_share_dimensions() {
        let mut renderer = Renderer::new(8, 4);
        let (fb, depth) = renderer.targets();
        assert_eq!((fb.width(), fb.height()), (8, 4));
        assert_eq!((depth.width(), depth.height()), (8, 4));
    }

    #[test]
    fn rgb_export_drops_alpha() {
        let mut renderer = Renderer::new(2, 1);
        renderer.framebuffer().set_pixel(1, 0, Colour::new(10, 20, 30).pack());
        let image = renderer.to_rgb_image();
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0]);
        assert_eq!(image.get_pixel(1, 0).0, [10, 20, 30]);
    }

    #[test]
    fn saves_ppm_and_bmp() {
        let mut renderer = Renderer::new(3, 2);
        renderer.clear(Colour::RED.pack());
        let dir = std::env::temp_dir();
        let ppm = dir.join("rasterbox_renderer_test.ppm");
        let bmp = dir.join("rasterbox_renderer_test.bmp");
        renderer.save_image(&ppm).unwrap();
        renderer.save_image(&bmp).unwrap();

        let reloaded = image::open(&ppm).unwrap().to_rgb8();
        assert_eq!(reloaded.dimensions(), (3, 2));
        assert_eq!(reloaded.get_pixel(2, 1).0, [255, 0, 0]);
        assert!(std::fs::metadata(&bmp).unwrap().len() > 0);

        let _ = std::fs::remove_file(ppm);
        let _ = std::fs::remove_file(bmp);
    }

    #[test]
    fn resize_resets_buffers() {
        let mut renderer = Renderer::new(2, 2);
        renderer.resize(5, 3);
        assert_eq!(renderer.pixels().len(), 15);
        assert_eq!(renderer.depth_buffer().width(), 5);
        assert_eq!(renderer.pixel(4, 2), Some(Colour::BLACK.pack()));
        assert_eq!(renderer.pixel(5, 0), None);
    }
}
