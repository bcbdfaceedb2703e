//! RGB colours and the packed ARGB8888 pixel format.
//!
//! Every pixel written to the framebuffer is a `u32` laid out as
//! `(255 << 24) | (r << 16) | (g << 8) | b`, alpha always opaque.

/// An 8-bit-per-channel RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Colour = Colour::new(0, 0, 0);
    pub const WHITE: Colour = Colour::new(255, 255, 255);
    pub const RED: Colour = Colour::new(255, 0, 0);
    pub const GREEN: Colour = Colour::new(0, 255, 0);
    pub const BLUE: Colour = Colour::new(0, 0, 255);
    pub const YELLOW: Colour = Colour::new(255, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Converts `[0, 1]` float channels to `[0, 255]` by rounding.
    /// Values outside the unit range saturate.
    pub fn from_unit_rgb(r: f32, g: f32, b: f32) -> Self {
        let channel = |v: f32| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::new(channel(r), channel(g), channel(b))
    }

    /// Packs into ARGB8888 with opaque alpha.
    #[inline]
    pub const fn pack(self) -> u32 {
        (255 << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Unpacks an ARGB8888 value, discarding alpha.
    #[inline]
    pub const fn from_packed(packed: u32) -> Self {
        Self::new((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
    }
}

/// Packs float channels already in `[0, 255]`, truncating toward zero.
///
/// Gradient demos produce channels as floats; truncation matches an
/// integer cast of each channel.
#[inline]
pub fn pack_channels(r: f32, g: f32, b: f32) -> u32 {
    let channel = |v: f32| v.clamp(0.0, 255.0) as u8;
    Colour::new(channel(r), channel(g), channel(b)).pack()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_matches_argb_layout() {
        assert_eq!(Colour::new(0x12, 0x34, 0x56).pack(), 0xFF12_3456);
        assert_eq!(Colour::BLACK.pack(), 0xFF00_0000);
        assert_eq!(Colour::WHITE.pack(), 0xFFFF_FFFF);
    }

    #[test]
    fn unpack_discards_alpha() {
        let colour = Colour::new(200, 100, 50);
        assert_eq!(Colour::from_packed(colour.pack()), colour);
        assert_eq!(Colour::from_packed(0x00C8_6432), colour);
    }

    #[test]
    fn unit_channels_round() {
        assert_eq!(Colour::from_unit_rgb(1.0, 0.5, 0.0), Colour::new(255, 128, 0));
        assert_eq!(Colour::from_unit_rgb(0.2, 0.2, 0.2), Colour::new(51, 51, 51));
        assert_eq!(Colour::from_unit_rgb(2.0, -1.0, 0.0), Colour::new(255, 0, 0));
    }

    #[test]
    fn float_channels_truncate() {
        assert_eq!(pack_channels(255.9, 0.5, 300.0), 0xFFFF_00FF);
    }
}
