use crate::colour::Colour;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// A point in screen space (origin top-left, y down).
///
/// `depth` is `-1 / z` in camera space, so larger values are nearer the
/// camera. Only depth-tested drawing reads it. `texture` is a texel-space
/// coordinate and is only read by textured fills.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    pub depth: f32,
    pub texture: Option<Vec2>,
}

impl ScreenPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            depth: 0.0,
            texture: None,
        }
    }

    pub const fn with_depth(x: f32, y: f32, depth: f32) -> Self {
        Self {
            x,
            y,
            depth,
            texture: None,
        }
    }

    /// Returns a copy carrying the given texel coordinate.
    pub fn textured(mut self, u: f32, v: f32) -> Self {
        self.texture = Some(Vec2::new(u, v));
        self
    }

    /// The screen-plane position, ignoring depth.
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.depth.is_finite()
    }
}

// A triangle ready for rasterization in screen space.
// Vertex order is as authored; fills re-order by y internally.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenTriangle {
    pub points: [ScreenPoint; 3],
}

impl ScreenTriangle {
    pub const fn new(v0: ScreenPoint, v1: ScreenPoint, v2: ScreenPoint) -> Self {
        Self {
            points: [v0, v1, v2],
        }
    }

    pub fn is_finite(&self) -> bool {
        self.points.iter().all(ScreenPoint::is_finite)
    }
}

/// A model-space triangle with a single flat colour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelTriangle {
    pub vertices: [Vec3; 3],
    pub colour: Colour,
}

impl ModelTriangle {
    pub const fn new(v0: Vec3, v1: Vec3, v2: Vec3, colour: Colour) -> Self {
        Self {
            vertices: [v0, v1, v2],
            colour,
        }
    }
}
