//! Flat-colour scanline fills.
//!
//! Each scanline span is handed to the line rasteriser, so the depth-tested
//! variant resolves occlusion per pixel exactly as a depth-tested line does.

use super::{Fill, SplitTriangle};
use crate::colour::Colour;
use crate::render::depth::DepthBuffer;
use crate::render::framebuffer::FrameBuffer;
use crate::render::line::{draw_depth_line, draw_line};
use crate::triangle::ScreenTriangle;

/// Fills a triangle with a solid colour, overwriting whatever is there.
pub fn fill_triangle(buffer: &mut FrameBuffer, triangle: &ScreenTriangle, colour: Colour) -> Fill {
    SplitTriangle::new(triangle)
        .map(|split| {
            let rows = buffer.height();
            split.for_each_span(rows, |left, right| draw_line(buffer, &left, &right, colour));
        })
        .into()
}

/// Fills a triangle with a solid colour, writing only pixels strictly nearer
/// than the depth buffer and recording their depth.
pub fn fill_triangle_with_depth(
    buffer: &mut FrameBuffer,
    depth_buffer: &mut DepthBuffer,
    triangle: &ScreenTriangle,
    colour: Colour,
) -> Fill {
    SplitTriangle::new(triangle)
        .map(|split| {
            let rows = buffer.height();
            split.for_each_span(rows, |left, right| {
                draw_depth_line(buffer, depth_buffer, &left, &right, colour)
            });
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::rasterizer::SkipReason;
    use crate::triangle::ScreenPoint;

    const W: u32 = 32;
    const H: u32 = 32;

    fn covered(pixels: &[u32]) -> Vec<(i32, i32)> {
        pixels
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p != 0)
            .map(|(i, _)| ((i as u32 % W) as i32, (i as u32 / W) as i32))
            .collect()
    }

    fn flat(a: (f32, f32), b: (f32, f32), c: (f32, f32), depth: f32) -> ScreenTriangle {
        ScreenTriangle::new(
            ScreenPoint::with_depth(a.0, a.1, depth),
            ScreenPoint::with_depth(b.0, b.1, depth),
            ScreenPoint::with_depth(c.0, c.1, depth),
        )
    }

    #[test]
    fn coverage_approximates_area_within_bounds() {
        let mut pixels = vec![0u32; (W * H) as usize];
        let mut fb = FrameBuffer::new(&mut pixels, W, H);
        let fill = fill_triangle(
            &mut fb,
            &flat((0.0, 0.0), (10.0, 0.0), (5.0, 10.0), 0.0),
            Colour::GREEN,
        );
        assert_eq!(fill, Fill::Drawn);

        let pixels = covered(&pixels);
        // Analytic area is 50; inclusive pixel-centre sampling adds the edges.
        assert!(pixels.len() >= 45 && pixels.len() <= 80, "{}", pixels.len());
        assert!(pixels
            .iter()
            .all(|&(x, y)| (0..=10).contains(&x) && (0..=10).contains(&y)));
        assert!(pixels.contains(&(5, 5)));
        assert!(pixels.contains(&(5, 10)));
    }

    #[test]
    fn general_triangle_fills_both_halves() {
        let mut pixels = vec![0u32; (W * H) as usize];
        let mut fb = FrameBuffer::new(&mut pixels, W, H);
        fill_triangle(
            &mut fb,
            &flat((4.0, 2.0), (26.0, 12.0), (10.0, 28.0), 0.0),
            Colour::RED,
        );
        assert_eq!(fb.get_pixel(12, 10), Some(Colour::RED.pack()));
        assert_eq!(fb.get_pixel(12, 20), Some(Colour::RED.pack()));
        assert_eq!(fb.get_pixel(25, 25), Some(0));
        assert_eq!(fb.get_pixel(2, 2), Some(0));
    }

    #[test]
    fn flat_top_triangle_has_no_gaps() {
        let mut pixels = vec![0u32; (W * H) as usize];
        let mut fb = FrameBuffer::new(&mut pixels, W, H);
        fill_triangle(
            &mut fb,
            &flat((2.0, 4.0), (20.0, 4.0), (11.0, 20.0), 0.0),
            Colour::BLUE,
        );
        for y in 4..=20 {
            assert_eq!(fb.get_pixel(11, y), Some(Colour::BLUE.pack()), "row {y}");
        }
    }

    #[test]
    fn degenerate_triangle_is_reported() {
        let mut pixels = vec![0u32; (W * H) as usize];
        let mut fb = FrameBuffer::new(&mut pixels, W, H);
        let fill = fill_triangle(
            &mut fb,
            &flat((1.0, 6.0), (9.0, 6.0), (20.0, 6.0), 0.0),
            Colour::RED,
        );
        assert_eq!(fill, Fill::Skipped(SkipReason::ZeroHeight));
        assert!(covered(&pixels).is_empty());
    }

    #[test]
    fn offscreen_parts_are_clipped() {
        let mut pixels = vec![0u32; (W * H) as usize];
        let mut fb = FrameBuffer::new(&mut pixels, W, H);
        let fill = fill_triangle(
            &mut fb,
            &flat((-40.0, -10.0), (70.0, 5.0), (10.0, 90.0), 0.0),
            Colour::WHITE,
        );
        assert!(fill.is_drawn());
        assert_eq!(fb.get_pixel(15, 15), Some(Colour::WHITE.pack()));
    }

    #[test]
    fn redrawing_at_equal_depth_changes_nothing() {
        let mut pixels = vec![0u32; (W * H) as usize];
        let mut depth = DepthBuffer::new(W, H);
        let triangle = flat((3.0, 3.0), (25.0, 9.0), (8.0, 27.0), 0.5);

        let mut fb = FrameBuffer::new(&mut pixels, W, H);
        fill_triangle_with_depth(&mut fb, &mut depth, &triangle, Colour::RED);
        let pixels_after_first = pixels.clone();
        let depth_after_first = depth.clone();

        let mut fb = FrameBuffer::new(&mut pixels, W, H);
        fill_triangle_with_depth(&mut fb, &mut depth, &triangle, Colour::BLUE);

        assert_eq!(pixels, pixels_after_first);
        assert_eq!(depth, depth_after_first);
    }

    #[test]
    fn nearer_triangle_wins_in_either_order() {
        let near = flat((2.0, 2.0), (20.0, 4.0), (6.0, 20.0), 0.5);
        let far = flat((8.0, 6.0), (30.0, 10.0), (12.0, 30.0), 0.25);
        let overlap = (10, 10);

        let near_first = [(&near, Colour::RED), (&far, Colour::BLUE)];
        let far_first = [(&far, Colour::BLUE), (&near, Colour::RED)];

        for order in [near_first, far_first] {
            let mut pixels = vec![0u32; (W * H) as usize];
            let mut depth = DepthBuffer::new(W, H);
            let mut fb = FrameBuffer::new(&mut pixels, W, H);
            for (triangle, colour) in order {
                fill_triangle_with_depth(&mut fb, &mut depth, triangle, colour);
            }
            assert_eq!(fb.get_pixel(overlap.0, overlap.1), Some(Colour::RED.pack()));
            assert_eq!(depth.get(overlap.0, overlap.1), Some(0.5));
            // Outside the near triangle the far one still shows
            assert_eq!(fb.get_pixel(20, 20), Some(Colour::BLUE.pack()));
        }
    }

    #[test]
    fn depth_is_interpolated_across_the_face() {
        let mut pixels = vec![0u32; (W * H) as usize];
        let mut depth = DepthBuffer::new(W, H);
        let mut fb = FrameBuffer::new(&mut pixels, W, H);
        let triangle = ScreenTriangle::new(
            ScreenPoint::with_depth(0.0, 0.0, 1.0),
            ScreenPoint::with_depth(20.0, 0.0, 1.0),
            ScreenPoint::with_depth(0.0, 20.0, 0.5),
        );
        fill_triangle_with_depth(&mut fb, &mut depth, &triangle, Colour::WHITE);
        let top = depth.get(2, 0).unwrap();
        let lower = depth.get(2, 10).unwrap();
        assert!(top > lower);
        assert!((lower - 0.75).abs() < 0.05);
    }
}
