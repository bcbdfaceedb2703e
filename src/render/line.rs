//! DDA line drawing.
//!
//! Both variants step a parameter `i` from `0` to `steps` inclusive, where
//! `steps = ceil(max(|dx|, |dy|))`, and round each sample to the nearest
//! pixel. The depth-aware variant also steps depth linearly in screen space
//! and only writes pixels that pass the depth test.

use super::depth::DepthBuffer;
use super::framebuffer::FrameBuffer;
use crate::colour::Colour;
use crate::triangle::ScreenPoint;

/// Visits every sample of the line from `from` to `to` that can land on a
/// `width` x `height` target, as `(pixel_x, pixel_y, depth)`.
///
/// A zero-length line yields exactly the starting sample. Lines with a
/// non-finite endpoint yield nothing. Samples keep their unclipped
/// positions; only the range of `i` is narrowed.
#[inline]
fn for_each_sample(
    from: &ScreenPoint,
    to: &ScreenPoint,
    width: u32,
    height: u32,
    mut plot: impl FnMut(i32, i32, f32),
) {
    if !from.is_finite() || !to.is_finite() {
        return;
    }

    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let d_depth = to.depth - from.depth;

    let steps = dx.abs().max(dy.abs()).ceil();
    if steps == 0.0 {
        plot(from.x.round() as i32, from.y.round() as i32, from.depth);
        return;
    }

    let Some((first, last)) = visible_steps(from, dx, dy, steps, width, height) else {
        return;
    };

    let x_step = dx / steps;
    let y_step = dy / steps;
    let depth_step = d_depth / steps;

    for i in first..=last {
        let i = i as f32;
        plot(
            (from.x + x_step * i).round() as i32,
            (from.y + y_step * i).round() as i32,
            from.depth + depth_step * i,
        );
    }
}

/// Range of step indices whose samples can round onto the target, widened
/// by one step each side. `None` when the line misses the target entirely.
fn visible_steps(
    from: &ScreenPoint,
    dx: f32,
    dy: f32,
    steps: f32,
    width: u32,
    height: u32,
) -> Option<(u32, u32)> {
    let mut t_min = 0.0_f32;
    let mut t_max = 1.0_f32;

    for (start, delta, size) in [(from.x, dx, width), (from.y, dy, height)] {
        let (low, high) = (-1.0, size as f32);
        if delta == 0.0 {
            if start < low || start > high {
                return None;
            }
            continue;
        }
        let a = (low - start) / delta;
        let b = (high - start) / delta;
        t_min = t_min.max(a.min(b));
        t_max = t_max.min(a.max(b));
    }

    if t_min > t_max {
        return None;
    }
    let first = ((t_min * steps).floor() - 1.0).max(0.0);
    let last = ((t_max * steps).ceil() + 1.0).min(steps);
    Some((first as u32, last as u32))
}

/// Draws a line that always overwrites.
pub fn draw_line(buffer: &mut FrameBuffer, from: &ScreenPoint, to: &ScreenPoint, colour: Colour) {
    let packed = colour.pack();
    let (width, height) = (buffer.width(), buffer.height());
    for_each_sample(from, to, width, height, |x, y, _| buffer.set_pixel(x, y, packed));
}

/// Draws a line, writing each pixel only where its interpolated depth is
/// strictly nearer than the stored depth. Passing pixels update the buffer,
/// so a later sample on the same pixel can still win if it is nearer.
pub fn draw_depth_line(
    buffer: &mut FrameBuffer,
    depth_buffer: &mut DepthBuffer,
    from: &ScreenPoint,
    to: &ScreenPoint,
    colour: Colour,
) {
    let packed = colour.pack();
    let (width, height) = (buffer.width(), buffer.height());
    for_each_sample(from, to, width, height, |x, y, depth| {
        if depth_buffer.test_and_set(x, y, depth) {
            buffer.set_pixel(x, y, packed);
        }
    });
}
