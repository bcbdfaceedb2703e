//! Scene rendering.
//!
//! The [`Engine`] owns the render targets, the mesh and the camera. Each
//! call to [`Engine::render`] clears both buffers, projects every mesh
//! triangle through the camera and rasterises it with a shared depth test,
//! so the visible result does not depend on triangle order.

use std::path::Path;

use crate::camera::{Camera, CameraCommand, CameraController};
use crate::colour::Colour;
use crate::config::RenderConfig;
use crate::error::LoadError;
use crate::mesh::Mesh;
use crate::projection::Projection;
use crate::render::{draw_stroked_triangle, fill_triangle_with_depth, Fill, Renderer, SkipReason};

/// How mesh triangles are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Outlines only, no depth test.
    Wireframe,
    /// Flat colour with depth testing.
    #[default]
    Filled,
}

/// What happened to the mesh during one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub drawn: usize,
    /// Mesh index and reason for every triangle that was not rasterised.
    pub skipped: Vec<(usize, SkipReason)>,
}

impl FrameStats {
    fn record(&mut self, index: usize, fill: Fill) {
        match fill {
            Fill::Drawn => self.drawn += 1,
            Fill::Skipped(reason) => self.skipped.push((index, reason)),
        }
    }
}

pub struct Engine {
    renderer: Renderer,
    mesh: Mesh,
    camera: Camera,
    controller: CameraController,
    projection: Projection,
    render_mode: RenderMode,
    background: Colour,
    model_scale: f32,
}

impl Engine {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            renderer: Renderer::new(config.width, config.height),
            mesh: Mesh::default(),
            camera: Camera::new(config.camera_position),
            controller: CameraController {
                move_step: config.move_step,
                rotate_step: config.rotate_step,
            },
            projection: Projection::from_config(config),
            render_mode: RenderMode::default(),
            background: config.background,
            model_scale: config.model_scale,
        }
    }

    /// Replaces the mesh with the contents of an OBJ file, scaled by the
    /// configured model scale.
    pub fn load_mesh<P: AsRef<Path>>(&mut self, path: P) -> Result<(), LoadError> {
        self.mesh = Mesh::from_obj(path, self.model_scale)?;
        Ok(())
    }

    pub fn set_mesh(&mut self, mesh: Mesh) {
        self.mesh = mesh;
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.render_mode = mode;
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn apply_camera_command(&mut self, command: CameraCommand) {
        self.camera.apply(command, &self.controller);
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.renderer.resize(width, height);
        self.projection.set_viewport(width, height);
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Direct access to the render targets, used by the 2D demos.
    pub fn renderer_mut(&mut self) -> &mut Renderer {
        &mut self.renderer
    }

    /// Returns the rendered frame as bytes (ARGB8888 format)
    pub fn frame_buffer(&self) -> &[u8] {
        self.renderer.as_bytes()
    }

    pub fn save_image<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        self.renderer.save_image(path)
    }

    /// Render the current frame
    pub fn render(&mut self) -> FrameStats {
        self.renderer.clear(self.background.pack());
        self.renderer.clear_depth();

        let mut stats = FrameStats::default();
        let (mut buffer, depth_buffer) = self.renderer.targets();

        for (index, triangle) in self.mesh.triangles().iter().enumerate() {
            let projected = self.projection.project_triangle(&self.camera, triangle);

            // A vertex on the camera's depth plane projects to infinity.
            if !projected.is_finite() {
                stats.record(index, Fill::Skipped(SkipReason::NonFiniteVertex));
                continue;
            }

            let fill = match self.render_mode {
                RenderMode::Filled => {
                    fill_triangle_with_depth(&mut buffer, depth_buffer, &projected, triangle.colour)
                }
                RenderMode::Wireframe => {
                    draw_stroked_triangle(&mut buffer, &projected, triangle.colour);
                    Fill::Drawn
                }
            };
            stats.record(index, fill);
        }

        stats
    }
}
