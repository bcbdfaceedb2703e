//! Small fixed-size linear algebra types used by the projector and rasteriser.

pub mod mat3;
pub mod vec2;
pub mod vec3;
