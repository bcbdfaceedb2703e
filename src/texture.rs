use std::path::Path;

use crate::colour::Colour;
use crate::error::LoadError;
use crate::math::vec2::Vec2;

/// A 2D grid of packed ARGB texels, addressed by integer (x, y).
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    data: Vec<u32>, // The pixel data of the texture in ARGB format.
    width: u32,     // The width of the texture in pixels.
    height: u32,    // The height of the texture in pixels.
}

impl Texture {
    /// Load a texture from an image file (PPM, PNG, BMP, ...).
    ///
    /// Alpha is forced to opaque regardless of the source image.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let img = image::open(path)?.to_rgb8();
        let (width, height) = img.dimensions();

        let data: Vec<u32> = img
            .pixels()
            .map(|p| {
                let [r, g, b] = p.0;
                Colour::new(r, g, b).pack()
            })
            .collect();

        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Build a texture from packed texels in row-major order.
    ///
    /// Returns `None` when the grid is empty or `data` does not hold exactly
    /// `width * height` texels.
    pub fn from_pixels(width: u32, height: u32, data: Vec<u32>) -> Option<Self> {
        if width == 0 || height == 0 || data.len() != (width * height) as usize {
            return None;
        }
        Some(Self {
            data,
            width,
            height,
        })
    }

    /// Texel at integer coordinates, clamped to the nearest edge texel when
    /// out of range.
    #[inline]
    pub fn texel(&self, x: i32, y: i32) -> u32 {
        if self.data.is_empty() {
            return Colour::BLACK.pack();
        }
        let x = x.clamp(0, self.width as i32 - 1) as u32;
        let y = y.clamp(0, self.height as i32 - 1) as u32;
        self.data[(y * self.width + x) as usize]
    }

    /// Nearest-sample lookup of a texel-space coordinate: both components are
    /// floored, no filtering.
    #[inline]
    pub fn sample(&self, coord: Vec2) -> u32 {
        self.texel(coord.x.floor() as i32, coord.y.floor() as i32)
    }

    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
}
