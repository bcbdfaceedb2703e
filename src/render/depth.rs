//! Per-pixel depth storage for hidden surface removal.

/// Depth value meaning "nothing drawn yet".
///
/// Depths are `-1 / z` in camera space, which is positive for everything in
/// front of the camera, so zero reads as infinitely far.
pub const FAR: f32 = 0.0;

/// A per-pixel depth grid sized to the framebuffer.
///
/// Larger values are nearer the camera. Reset to [`FAR`] at the start of every
/// frame; only the storage is reused between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthBuffer {
    depths: Vec<f32>,
    width: u32,
    height: u32,
}

impl DepthBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            depths: vec![FAR; (width * height) as usize],
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

    /// Reset every cell to [`FAR`].
    #[inline]
    pub fn clear(&mut self) {
        self.depths.fill(FAR);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.depths = vec![FAR; (width * height) as usize];
        self.width = width;
        self.height = height;
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some((y as u32 * self.width + x as u32) as usize)
        } else {
            None
        }
    }

    /// Stored depth at (x, y), or None if out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<f32> {
        self.index(x, y).map(|idx| self.depths[idx])
    }

    /// Depth test: stores `depth` and returns true only if it is strictly
    /// nearer than what is already there. Ties and out-of-bounds cells fail.
    #[inline]
    pub fn test_and_set(&mut self, x: i32, y: i32, depth: f32) -> bool {
        match self.index(x, y) {
            Some(idx) if depth > self.depths[idx] => {
                self.depths[idx] = depth;
                true
            }
            _ => false,
        }
    }
}
