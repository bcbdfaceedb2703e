//! Standalone 2D drawings that exercise the pixel, line and triangle paths
//! without a camera.

use rand::Rng;

use crate::colour::{pack_channels, Colour};
use crate::interpolate::{interpolate_scalars, interpolate_vectors};
use crate::math::vec3::Vec3;
use crate::render::{
    draw_line, draw_stroked_triangle, fill_textured_triangle, fill_triangle, Fill, FrameBuffer,
};
use crate::texture::Texture;
use crate::triangle::{ScreenPoint, ScreenTriangle};

/// Random red channel per pixel, green and blue zero.
pub fn draw_red_noise(buffer: &mut FrameBuffer, rng: &mut impl Rng) {
    for y in 0..buffer.height() as i32 {
        for x in 0..buffer.width() as i32 {
            let red: u8 = rng.gen();
            buffer.set_pixel(x, y, Colour::new(red, 0, 0).pack());
        }
    }
}

/// Horizontal ramp from white on the left to black on the right.
pub fn draw_greyscale(buffer: &mut FrameBuffer) {
    let Some(ramp) = interpolate_scalars(256.0, 0.0, buffer.width() as usize) else {
        return;
    };
    for y in 0..buffer.height() as i32 {
        for (x, &grey) in ramp.iter().enumerate() {
            buffer.set_pixel(x as i32, y, pack_channels(grey, grey, grey));
        }
    }
}

/// Bilinear blend between red (top left), blue (top right), green (bottom
/// right) and yellow (bottom left).
pub fn draw_colour_gradient(buffer: &mut FrameBuffer) {
    let top_left = Vec3::new(255.0, 0.0, 0.0);
    let top_right = Vec3::new(0.0, 0.0, 255.0);
    let bottom_right = Vec3::new(0.0, 255.0, 0.0);
    let bottom_left = Vec3::new(255.0, 255.0, 0.0);

    let width = buffer.width() as usize;
    let height = buffer.height() as usize;
    let (Some(left), Some(right)) = (
        interpolate_vectors(top_left, bottom_left, height),
        interpolate_vectors(top_right, bottom_right, height),
    ) else {
        return;
    };

    for (y, (&start, &end)) in left.iter().zip(&right).enumerate() {
        let Some(row) = interpolate_vectors(start, end, width) else {
            return;
        };
        for (x, colour) in row.iter().enumerate() {
            buffer.set_pixel(x as i32, y as i32, pack_channels(colour.x, colour.y, colour.z));
        }
    }
}

/// Four white lines: two diagonals into the centre, a vertical centre line
/// and a short horizontal across the middle third.
pub fn draw_line_fan(buffer: &mut FrameBuffer) {
    let w = buffer.width() as f32;
    let h = buffer.height() as f32;
    let centre = ScreenPoint::new((w / 2.0).floor(), (h / 2.0).floor());
    let third = (w / 3.0).floor();

    let lines = [
        (ScreenPoint::new(0.0, 0.0), centre),
        (ScreenPoint::new(w - 1.0, 0.0), centre),
        (ScreenPoint::new(centre.x, 0.0), ScreenPoint::new(centre.x, h - 1.0)),
        (ScreenPoint::new(third, centre.y), ScreenPoint::new(2.0 * third, centre.y)),
    ];
    for (from, to) in &lines {
        draw_line(buffer, from, to, Colour::WHITE);
    }
}

pub fn random_colour(rng: &mut impl Rng) -> Colour {
    Colour::new(rng.gen(), rng.gen(), rng.gen())
}

/// A triangle with integer vertices anywhere on a `width` x `height` canvas.
pub fn random_triangle(rng: &mut impl Rng, width: u32, height: u32) -> ScreenTriangle {
    let mut point = || {
        ScreenPoint::new(
            rng.gen_range(0..width.max(1)) as f32,
            rng.gen_range(0..height.max(1)) as f32,
        )
    };
    ScreenTriangle::new(point(), point(), point())
}

pub fn draw_random_stroked_triangle(buffer: &mut FrameBuffer, rng: &mut impl Rng) {
    let triangle = random_triangle(rng, buffer.width(), buffer.height());
    let colour = random_colour(rng);
    draw_stroked_triangle(buffer, &triangle, colour);
}

/// Fills a random triangle with a random colour and outlines it in white.
pub fn draw_random_filled_triangle(buffer: &mut FrameBuffer, rng: &mut impl Rng) -> Fill {
    let triangle = random_triangle(rng, buffer.width(), buffer.height());
    let colour = random_colour(rng);
    let fill = fill_triangle(buffer, &triangle, colour);
    draw_stroked_triangle(buffer, &triangle, Colour::WHITE);
    fill
}

/// The fixed textured triangle, sized for a 320x240 canvas and a texture at
/// least 396x381 texels.
pub fn textured_demo_triangle() -> ScreenTriangle {
    ScreenTriangle::new(
        ScreenPoint::new(160.0, 10.0).textured(195.0, 5.0),
        ScreenPoint::new(300.0, 230.0).textured(395.0, 380.0),
        ScreenPoint::new(10.0, 150.0).textured(65.0, 330.0),
    )
}

pub fn draw_textured_demo(buffer: &mut FrameBuffer, texture: &Texture) -> Fill {
    let triangle = textured_demo_triangle();
    let fill = fill_textured_triangle(buffer, &triangle, texture);
    draw_stroked_triangle(buffer, &triangle, Colour::WHITE);
    fill
}
