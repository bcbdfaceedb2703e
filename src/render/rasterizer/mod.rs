//! Triangle rasterization.
//!
//! Every fill shares one decomposition: sort the vertices by y, find the
//! split point on the long edge at the middle vertex's height, then walk the
//! upper (flat-bottom) and lower (flat-top) halves one scanline at a time.
//!
//! ```text
//!        v0                   v0
//!        /\                   /\
//!       /  \                 /  \
//!      /    \       =>      /----\<- split at v1.y
//!     /      \             v1   split
//!    /________\             \    /
//!   v1        v2             \  /
//!                             \/
//!                             v2
//! ```
//!
//! - [`scanline`]: flat-colour fills, with or without depth testing
//! - [`textured`]: nearest-sample texture-mapped fills

mod scanline;
mod textured;

pub use scanline::{fill_triangle, fill_triangle_with_depth};
pub use textured::fill_textured_triangle;

use std::fmt;

use super::framebuffer::FrameBuffer;
use super::line::draw_line;
use crate::colour::Colour;
use crate::interpolate::point_at_proportion;
use crate::triangle::{ScreenPoint, ScreenTriangle};

/// Why a triangle was not rasterised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// All three vertices share one y coordinate.
    ZeroHeight,
    /// A vertex is NaN or infinite, typically from projecting a point on the
    /// camera's depth plane.
    NonFiniteVertex,
    /// A textured fill was given a vertex without a texture coordinate.
    MissingTextureCoordinate,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::ZeroHeight => write!(f, "zero height"),
            SkipReason::NonFiniteVertex => write!(f, "non-finite vertex"),
            SkipReason::MissingTextureCoordinate => write!(f, "missing texture coordinate"),
        }
    }
}

/// Outcome of a fill call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Drawn,
    Skipped(SkipReason),
}

impl Fill {
    pub fn is_drawn(&self) -> bool {
        matches!(self, Fill::Drawn)
    }
}

impl From<Result<(), SkipReason>> for Fill {
    fn from(result: Result<(), SkipReason>) -> Self {
        match result {
            Ok(()) => Fill::Drawn,
            Err(reason) => Fill::Skipped(reason),
        }
    }
}

/// A triangle sorted top to bottom, plus the point on the long edge
/// (`top -> bottom`) level with `middle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitTriangle {
    pub top: ScreenPoint,
    pub middle: ScreenPoint,
    pub bottom: ScreenPoint,
    pub split: ScreenPoint,
}

/// Returns the three points ordered by ascending y.
///
/// Compare-and-swap on (v1, v0), (v2, v0), (v2, v1); equal y keeps authored
/// order.
pub fn sort_by_y(points: [ScreenPoint; 3]) -> [ScreenPoint; 3] {
    let [mut v0, mut v1, mut v2] = points;
    if v1.y < v0.y {
        std::mem::swap(&mut v0, &mut v1);
    }
    if v2.y < v0.y {
        std::mem::swap(&mut v0, &mut v2);
    }
    if v2.y < v1.y {
        std::mem::swap(&mut v1, &mut v2);
    }
    [v0, v1, v2]
}

impl SplitTriangle {
    /// Sorts the triangle and computes its split point.
    ///
    /// Depth and texture coordinate of the split point are interpolated along
    /// the long edge at `(middle.y - top.y) / (bottom.y - top.y)`.
    pub fn new(triangle: &ScreenTriangle) -> Result<Self, SkipReason> {
        if !triangle.is_finite() {
            return Err(SkipReason::NonFiniteVertex);
        }

        let [top, middle, bottom] = sort_by_y(triangle.points);
        let height = bottom.y - top.y;
        if height <= f32::EPSILON {
            return Err(SkipReason::ZeroHeight);
        }

        let proportion = (middle.y - top.y) / height;
        let mut split = point_at_proportion(&top, &bottom, proportion);
        split.y = middle.y;

        Ok(Self {
            top,
            middle,
            bottom,
            split,
        })
    }

    /// Calls `span(left, right)` for every integer scanline the triangle
    /// covers within rows `0..rows`, with `left.x <= right.x`. Both endpoints
    /// carry depth and texture coordinates interpolated along their edges.
    pub fn for_each_span(&self, rows: u32, mut span: impl FnMut(ScreenPoint, ScreenPoint)) {
        scan_half(
            (self.top, self.middle),
            (self.top, self.split),
            rows,
            &mut span,
        );
        scan_half(
            (self.middle, self.bottom),
            (self.split, self.bottom),
            rows,
            &mut span,
        );
    }
}

/// Walks one flat-topped or flat-bottomed half. Both edges span the same y
/// range, so one proportion serves both. A half with no height is skipped;
/// the other half covers its row. Rows outside `0..rows` are never visited.
fn scan_half(
    edge_a: (ScreenPoint, ScreenPoint),
    edge_b: (ScreenPoint, ScreenPoint),
    rows: u32,
    span: &mut impl FnMut(ScreenPoint, ScreenPoint),
) {
    let (a_start, a_end) = edge_a;
    let (b_start, b_end) = edge_b;
    let height = a_end.y - a_start.y;
    if height <= f32::EPSILON {
        return;
    }

    let y_start = (a_start.y.ceil() as i32).max(0);
    let y_end = (a_end.y.floor() as i32).min(rows as i32 - 1);

    for y in y_start..=y_end {
        let t = (y as f32 - a_start.y) / height;
        let mut left = point_at_proportion(&a_start, &a_end, t);
        let mut right = point_at_proportion(&b_start, &b_end, t);
        left.y = y as f32;
        right.y = y as f32;
        if left.x > right.x {
            std::mem::swap(&mut left, &mut right);
        }
        span(left, right);
    }
}

/// Draws the three edges of a triangle without filling it.
pub fn draw_stroked_triangle(buffer: &mut FrameBuffer, triangle: &ScreenTriangle, colour: Colour) {
    let [v0, v1, v2] = &triangle.points;
    draw_line(buffer, v0, v1, colour);
    draw_line(buffer, v1, v2, colour);
    draw_line(buffer, v0, v2, colour);
}
