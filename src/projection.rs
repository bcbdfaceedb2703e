//! Pinhole perspective projection.
//!
//! The [`Projection`] struct is the single source of truth for the projection
//! parameters (focal length, image-plane scale, viewport size). Given a
//! [`Camera`] it maps model-space vertices to screen-space points with depth.

use crate::camera::Camera;
use crate::config::RenderConfig;
use crate::math::vec3::Vec3;
use crate::triangle::{ModelTriangle, ScreenPoint, ScreenTriangle};

/// Pinhole projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Distance from the camera to the image plane.
    focal_length: f32,
    /// Image-plane units to pixels.
    image_plane_scale: f32,
    width: u32,
    height: u32,
}

impl Projection {
    /// Creates a new projection with the given parameters.
    ///
    /// # Arguments
    /// * `focal_length` - Distance from the camera to the image plane
    /// * `image_plane_scale` - Pixels per image-plane unit
    /// * `width`, `height` - Viewport size in pixels
    pub fn new(focal_length: f32, image_plane_scale: f32, width: u32, height: u32) -> Self {
        Self {
            focal_length,
            image_plane_scale,
            width,
            height,
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(
            config.focal_length,
            config.image_plane_scale,
            config.width,
            config.height,
        )
    }

    /// Updates the viewport (typically called on window resize).
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Projects a model-space vertex to screen space.
    ///
    /// `depth` is `-1 / z` in camera space, so nearer points get larger
    /// values. A vertex on the camera's depth plane (`z == 0`) divides by
    /// zero and yields non-finite coordinates; callers must check.
    pub fn project(&self, camera: &Camera, vertex: Vec3) -> ScreenPoint {
        let view = camera.to_camera_space(vertex);
        let scale = self.focal_length * self.image_plane_scale;

        let x = -scale * (view.x / view.z) + self.width as f32 / 2.0;
        let y = scale * (view.y / view.z) + self.height as f32 / 2.0;

        ScreenPoint::with_depth(x, y, -1.0 / view.z)
    }

    /// Projects all three vertices of a model triangle.
    pub fn project_triangle(&self, camera: &Camera, triangle: &ModelTriangle) -> ScreenTriangle {
        let [v0, v1, v2] = triangle.vertices;
        ScreenTriangle::new(
            self.project(camera, v0),
            self.project(camera, v1),
            self.project(camera, v2),
        )
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::from_config(&RenderConfig::default())
    }
}
