//! Render settings shared by the engine, the demos and the window loop.

use std::fmt;
use std::str::FromStr;

use crate::colour::Colour;
use crate::math::vec3::Vec3;

pub const DEFAULT_WIDTH: u32 = 320;
pub const DEFAULT_HEIGHT: u32 = 240;
pub const DEFAULT_MODEL_PATH: &str = "cornell-box.obj";
pub const DEFAULT_TEXTURE_PATH: &str = "texture.ppm";

/// Tunable constants for a rendering session.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Distance from the camera to the virtual image plane.
    pub focal_length: f32,
    /// Image-plane units to pixels.
    pub image_plane_scale: f32,
    /// Uniform scale applied to loaded model vertices.
    pub model_scale: f32,
    pub camera_position: Vec3,
    /// Distance moved per translate command.
    pub move_step: f32,
    /// Angle in radians per rotate command.
    pub rotate_step: f32,
    pub background: Colour,
    pub fps: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            focal_length: 2.0,
            image_plane_scale: 160.0,
            model_scale: 0.35,
            camera_position: Vec3::new(0.0, 0.0, 4.0),
            move_step: 0.1,
            rotate_step: 1.0_f32.to_radians(),
            background: Colour::BLACK,
            fps: 60,
        }
    }
}

impl RenderConfig {
    /// Milliseconds per frame at the configured rate.
    pub fn frame_target_time(&self) -> f64 {
        1000.0 / self.fps.max(1) as f64
    }
}

/// What the binary draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scene {
    Noise,
    Greyscale,
    Gradient,
    Lines,
    Stroked,
    Filled,
    Textured,
    Wireframe,
    #[default]
    Model,
}

impl Scene {
    pub const ALL: [Scene; 9] = [
        Scene::Noise,
        Scene::Greyscale,
        Scene::Gradient,
        Scene::Lines,
        Scene::Stroked,
        Scene::Filled,
        Scene::Textured,
        Scene::Wireframe,
        Scene::Model,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scene::Noise => "noise",
            Scene::Greyscale => "greyscale",
            Scene::Gradient => "gradient",
            Scene::Lines => "lines",
            Scene::Stroked => "stroked",
            Scene::Filled => "filled",
            Scene::Textured => "textured",
            Scene::Wireframe => "wireframe",
            Scene::Model => "scene",
        }
    }

    /// Whether the scene renders a loaded mesh through the camera.
    pub fn uses_mesh(self) -> bool {
        matches!(self, Scene::Wireframe | Scene::Model)
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scene {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scene::ALL
            .into_iter()
            .find(|scene| scene.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<&str> = Scene::ALL.iter().map(|scene| scene.name()).collect();
                format!("unknown scene '{s}', expected one of: {}", names.join(" | "))
            })
    }
}
