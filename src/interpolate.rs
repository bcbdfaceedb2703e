//! Linear interpolation helpers shared by the rasteriser and the demos.

use crate::math::vec3::Vec3;
use crate::triangle::ScreenPoint;

/// Returns exactly `count` evenly spaced values from `from` to `to`.
///
/// Returns `None` when `count < 2`, since there is no step size that places
/// both endpoints.
pub fn interpolate_scalars(from: f32, to: f32, count: usize) -> Option<Vec<f32>> {
    if count < 2 {
        return None;
    }
    let step = (to - from) / (count - 1) as f32;
    Some((0..count).map(|i| from + step * i as f32).collect())
}

/// Component-wise [`interpolate_scalars`] over 3-vectors.
pub fn interpolate_vectors(from: Vec3, to: Vec3, count: usize) -> Option<Vec<Vec3>> {
    if count < 2 {
        return None;
    }
    let step = (to - from) / (count - 1) as f32;
    Some((0..count).map(|i| from + step * i as f32).collect())
}

/// Blends `start + t * (end - start)` for position, depth and, when both
/// endpoints carry one, the texture coordinate.
pub fn point_at_proportion(start: &ScreenPoint, end: &ScreenPoint, t: f32) -> ScreenPoint {
    let texture = match (start.texture, end.texture) {
        (Some(a), Some(b)) => Some(a.lerp(b, t)),
        _ => None,
    };
    ScreenPoint {
        x: start.x + t * (end.x - start.x),
        y: start.y + t * (end.y - start.y),
        depth: start.depth + t * (end.depth - start.depth),
        texture,
    }
}

/// Ratio of `|point - start|` to `|end - start|` in the screen plane.
///
/// This is a distance ratio, not a projection: it only equals the segment
/// parameter when `point` lies on the segment. Returns `None` for a
/// zero-length segment.
pub fn proportion_along_segment(
    start: &ScreenPoint,
    end: &ScreenPoint,
    point: &ScreenPoint,
) -> Option<f32> {
    let length = (end.position() - start.position()).magnitude();
    if length <= f32::EPSILON {
        return None;
    }
    Some((point.position() - start.position()).magnitude() / length)
}
