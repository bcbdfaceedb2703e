//! Pixel-level drawing: render targets, the line rasteriser and the triangle
//! rasterisers built on top of it.

pub mod depth;
pub mod framebuffer;
pub mod line;
pub mod rasterizer;
pub mod renderer;

pub use depth::DepthBuffer;
pub use framebuffer::FrameBuffer;
pub use line::{draw_depth_line, draw_line};
pub use rasterizer::{
    draw_stroked_triangle, fill_textured_triangle, fill_triangle, fill_triangle_with_depth,
    sort_by_y, Fill, SkipReason, SplitTriangle,
};
pub use renderer::Renderer;
