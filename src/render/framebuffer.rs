//! Frame buffer abstraction for 2D pixel access.
//!
//! Provides a safe view into a packed colour buffer with bounds-checked
//! access. Every write that lands outside the buffer is dropped, which is
//! what keeps off-screen projections and out-of-range spans from crashing.

/// A view into a packed ARGB colour buffer.
///
/// Wraps a 1D slice with width/height metadata to enable safe 2D pixel access.
/// This is a borrowed view, not an owning type - it's meant to be created
/// temporarily when you need to pass the buffer + dimensions together.
pub struct FrameBuffer<'a> {
    color_buffer: &'a mut [u32],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    /// Create a new FrameBuffer view from a buffer slice and dimensions.
    pub fn new(color_buffer: &'a mut [u32], width: u32, height: u32) -> Self {
        debug_assert_eq!(
            color_buffer.len(),
            (width * height) as usize,
            "Color buffer size doesn't match dimensions"
        );
        Self {
            color_buffer,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some((y as u32 * self.width + x as u32) as usize)
        } else {
            None
        }
    }

    /// Write a packed colour at (x, y). Out-of-bounds writes are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if let Some(idx) = self.index(x, y) {
            self.color_buffer[idx] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|idx| self.color_buffer[idx])
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }
}
