//! Texture-mapped scanline fills.
//!
//! Each vertex carries a texel-space coordinate, so the fill is an affine map
//! from the source triangle in the texture to the destination triangle on
//! screen. Coordinates are interpolated down both edges, then across each
//! span, and the texel is picked by flooring (nearest sample, clamped to the
//! texture's edge).

use super::{Fill, SkipReason, SplitTriangle};
use crate::render::framebuffer::FrameBuffer;
use crate::texture::Texture;
use crate::triangle::ScreenTriangle;

/// Fills a triangle by sampling `texture`. Every vertex must carry a texture
/// coordinate.
pub fn fill_textured_triangle(
    buffer: &mut FrameBuffer,
    triangle: &ScreenTriangle,
    texture: &Texture,
) -> Fill {
    if triangle.points.iter().any(|p| p.texture.is_none()) {
        return Fill::Skipped(SkipReason::MissingTextureCoordinate);
    }

    SplitTriangle::new(triangle)
        .map(|split| {
            let (columns, rows) = (buffer.width() as i32, buffer.height());
            split.for_each_span(rows, |left, right| {
                let (Some(tex_left), Some(tex_right)) = (left.texture, right.texture) else {
                    return;
                };

                let y = left.y as i32;
                let width = right.x - left.x;
                let x_start = (left.x.ceil() as i32).max(0);
                let x_end = (right.x.floor() as i32).min(columns - 1);

                for x in x_start..=x_end {
                    let t = if width <= f32::EPSILON {
                        0.0
                    } else {
                        (x as f32 - left.x) / width
                    };
                    buffer.set_pixel(x, y, texture.sample(tex_left.lerp(tex_right, t)));
                }
            });
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::Colour;
    use crate::triangle::ScreenPoint;

    /// 8x8 texture whose texel at (x, y) packs red = x * 10, green = y * 10.
    fn gradient_texture() -> Texture {
        let data = (0..8)
            .flat_map(|y| (0..8).map(move |x| Colour::new(x * 10, y * 10, 0).pack()))
            .collect();
        Texture::from_pixels(8, 8, data).unwrap()
    }

    #[test]
    fn identity_mapping_copies_texels() {
        let texture = gradient_texture();
        let mut pixels = vec![0u32; 16 * 16];
        let mut fb = FrameBuffer::new(&mut pixels, 16, 16);
        let triangle = ScreenTriangle::new(
            ScreenPoint::new(0.0, 0.0).textured(0.5, 0.5),
            ScreenPoint::new(7.0, 0.0).textured(7.5, 0.5),
            ScreenPoint::new(0.0, 7.0).textured(0.5, 7.5),
        );
        assert_eq!(fill_textured_triangle(&mut fb, &triangle, &texture), Fill::Drawn);

        assert_eq!(fb.get_pixel(0, 0), Some(Colour::new(0, 0, 0).pack()));
        assert_eq!(fb.get_pixel(3, 2), Some(Colour::new(30, 20, 0).pack()));
        assert_eq!(fb.get_pixel(1, 5), Some(Colour::new(10, 50, 0).pack()));
        // Outside the triangle nothing is written
        assert_eq!(fb.get_pixel(6, 6), Some(0));
    }

    #[test]
    fn scaled_mapping_stretches_texture() {
        let texture = gradient_texture();
        let mut pixels = vec![0u32; 16 * 16];
        let mut fb = FrameBuffer::new(&mut pixels, 16, 16);
        // Twice the size of its source triangle in the texture
        let triangle = ScreenTriangle::new(
            ScreenPoint::new(0.0, 0.0).textured(0.5, 0.5),
            ScreenPoint::new(14.0, 0.0).textured(7.5, 0.5),
            ScreenPoint::new(0.0, 14.0).textured(0.5, 7.5),
        );
        fill_textured_triangle(&mut fb, &triangle, &texture);
        assert_eq!(fb.get_pixel(6, 4), Some(Colour::new(30, 20, 0).pack()));
    }

    #[test]
    fn coordinates_past_the_edge_clamp() {
        let texture = gradient_texture();
        let mut pixels = vec![0u32; 16 * 16];
        let mut fb = FrameBuffer::new(&mut pixels, 16, 16);
        let triangle = ScreenTriangle::new(
            ScreenPoint::new(0.0, 0.0).textured(-20.0, -20.0),
            ScreenPoint::new(10.0, 0.0).textured(100.0, -20.0),
            ScreenPoint::new(0.0, 10.0).textured(-20.0, 100.0),
        );
        assert!(fill_textured_triangle(&mut fb, &triangle, &texture).is_drawn());
        assert_eq!(fb.get_pixel(0, 0), Some(Colour::new(0, 0, 0).pack()));
        assert_eq!(fb.get_pixel(10, 0), Some(Colour::new(70, 0, 0).pack()));
    }

    #[test]
    fn huge_spans_only_walk_visible_columns() {
        let green = Colour::GREEN.pack();
        let texture = Texture::from_pixels(1, 1, vec![green]).unwrap();
        let mut pixels = vec![0u32; 16 * 16];
        let mut fb = FrameBuffer::new(&mut pixels, 16, 16);
        let triangle = ScreenTriangle::new(
            ScreenPoint::new(-1.0e7, 0.0).textured(0.0, 0.0),
            ScreenPoint::new(1.0e7, 0.0).textured(0.0, 0.0),
            ScreenPoint::new(0.0, 1.0e7).textured(0.0, 0.0),
        );
        assert!(fill_textured_triangle(&mut fb, &triangle, &texture).is_drawn());
        assert_eq!(fb.get_pixel(0, 0), Some(green));
        assert_eq!(fb.get_pixel(15, 15), Some(green));
    }

    #[test]
    fn missing_texture_coordinate_is_skipped() {
        let texture = gradient_texture();
        let mut pixels = vec![0u32; 16 * 16];
        let mut fb = FrameBuffer::new(&mut pixels, 16, 16);
        let triangle = ScreenTriangle::new(
            ScreenPoint::new(0.0, 0.0).textured(0.0, 0.0),
            ScreenPoint::new(7.0, 0.0),
            ScreenPoint::new(0.0, 7.0).textured(0.0, 7.0),
        );
        assert_eq!(
            fill_textured_triangle(&mut fb, &triangle, &texture),
            Fill::Skipped(SkipReason::MissingTextureCoordinate)
        );
    }
}
