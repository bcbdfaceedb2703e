//! A small CPU software rasteriser.
//!
//! Lines are drawn with a DDA stepper, triangles are scanline-filled (flat,
//! depth-tested or texture-mapped) and meshes loaded from OBJ files are
//! projected through a pinhole camera. SDL2 is used only for the window,
//! input and presentation. All rendering is done on the CPU.
//!
//! # Quick Start
//!
//! ```ignore
//! use rasterbox::prelude::*;
//!
//! let config = RenderConfig::default();
//! let mut window = Window::new("My App", config.width, config.height)?;
//! let mut engine = Engine::new(&config);
//! engine.load_mesh("cornell-box.obj")?;
//! let stats = engine.render();
//! window.present(engine.frame_buffer())?;
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod colour;
pub mod config;
pub mod demos;
pub mod engine;
pub mod error;
pub mod interpolate;
pub mod material;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod render;
pub mod texture;
pub mod triangle;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use colour::Colour;
pub use engine::{Engine, FrameStats, RenderMode};
pub use error::LoadError;
pub use mesh::Mesh;
pub use projection::Projection;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use rasterbox::prelude::*;
/// ```
pub mod prelude {
    // Camera
    pub use crate::camera::{Camera, CameraCommand, CameraController};

    // Configuration
    pub use crate::config::{RenderConfig, Scene};

    // Engine
    pub use crate::engine::{Engine, FrameStats, RenderMode};

    // Scene data
    pub use crate::colour::Colour;
    pub use crate::error::LoadError;
    pub use crate::material::Palette;
    pub use crate::mesh::Mesh;
    pub use crate::texture::Texture;
    pub use crate::triangle::{ModelTriangle, ScreenPoint, ScreenTriangle};

    // Projection
    pub use crate::projection::Projection;

    // Math
    pub use crate::math::mat3::Mat3;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;

    // Rendering
    pub use crate::render::{DepthBuffer, Fill, FrameBuffer, Renderer, SkipReason};

    // Window & Input
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}
