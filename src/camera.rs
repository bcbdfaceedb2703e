//! Pinhole camera state and the commands that move it.
//!
//! # Coordinate System
//!
//! Uses a **right-handed** coordinate system:
//! - X: positive right
//! - Y: positive up
//! - Z: positive toward the viewer, so the camera looks down -Z
//!
//! # Orientation
//!
//! Orientation is a 3x3 matrix whose columns are the camera's basis vectors
//! expressed in world space. A world-space offset `v` becomes camera-space
//! coordinates as the row-vector product `v * orientation`. Rotations are
//! applied by pre-multiplying: `orientation = rotation * orientation`.

use crate::math::mat3::Mat3;
use crate::math::vec3::Vec3;

/// Camera position and orientation.
///
/// Owned by the application and passed to the projector each frame; it is
/// only mutated between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    orientation: Mat3,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl Camera {
    /// Creates a camera at `position` with identity orientation, looking
    /// along -Z.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            orientation: Mat3::identity(),
        }
    }

    /// Returns the camera's world position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn orientation(&self) -> Mat3 {
        self.orientation
    }

    /// Moves the camera by a world-space offset.
    pub fn translate(&mut self, offset: Vec3) {
        self.position = self.position + offset;
    }

    /// Rotates the camera about the X axis (pitch).
    pub fn rotate_x(&mut self, angle: f32) {
        self.orientation = Mat3::rotation_x(angle) * self.orientation;
    }

    /// Rotates the camera about the Y axis (yaw).
    pub fn rotate_y(&mut self, angle: f32) {
        self.orientation = Mat3::rotation_y(angle) * self.orientation;
    }

    /// Expresses a world-space point in camera space.
    #[inline]
    pub fn to_camera_space(&self, point: Vec3) -> Vec3 {
        (point - self.position) * self.orientation
    }

    /// Applies one input command.
    pub fn apply(&mut self, command: CameraCommand, controller: &CameraController) {
        let step = controller.move_step;
        let angle = controller.rotate_step;
        match command {
            CameraCommand::MoveLeft => self.translate(Vec3::new(step, 0.0, 0.0)),
            CameraCommand::MoveRight => self.translate(Vec3::new(-step, 0.0, 0.0)),
            CameraCommand::MoveUp => self.translate(Vec3::new(0.0, -step, 0.0)),
            CameraCommand::MoveDown => self.translate(Vec3::new(0.0, step, 0.0)),
            CameraCommand::MoveIn => self.translate(Vec3::new(0.0, 0.0, -step)),
            CameraCommand::MoveOut => self.translate(Vec3::new(0.0, 0.0, step)),
            CameraCommand::PitchUp => self.rotate_x(angle),
            CameraCommand::PitchDown => self.rotate_x(-angle),
            CameraCommand::YawLeft => self.rotate_y(angle),
            CameraCommand::YawRight => self.rotate_y(-angle),
        }
    }
}

/// A single discrete camera adjustment, produced by input handling.
///
/// The four planar moves name the direction the image travels on screen.
/// The projector mirrors x, so `MoveLeft` steps the camera toward +x and
/// `MoveUp` steps it toward -y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraCommand {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    MoveIn,
    MoveOut,
    PitchUp,
    PitchDown,
    YawLeft,
    YawRight,
}

impl std::fmt::Display for CameraCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CameraCommand::MoveLeft => "LEFT",
            CameraCommand::MoveRight => "RIGHT",
            CameraCommand::MoveUp => "UP",
            CameraCommand::MoveDown => "DOWN",
            CameraCommand::MoveIn => "IN",
            CameraCommand::MoveOut => "OUT",
            CameraCommand::PitchUp => "ROTATE UP X",
            CameraCommand::PitchDown => "ROTATE DOWN X",
            CameraCommand::YawLeft => "ROTATE LEFT Y",
            CameraCommand::YawRight => "ROTATE RIGHT Y",
        };
        write!(f, "{name}")
    }
}

/// Step sizes for camera commands.
#[derive(Debug, Clone)]
pub struct CameraController {
    /// World units per move command.
    pub move_step: f32,
    /// Radians per rotate command.
    pub rotate_step: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self {
            move_step: 0.1,
            rotate_step: 1.0_f32.to_radians(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
