//! Errors raised while loading meshes, materials and textures.

use std::fmt;

/// Failure to turn an asset file into renderable data.
///
/// Parsing failures are fatal; no partially loaded mesh is returned.
#[derive(Debug)]
pub enum LoadError {
    /// The OBJ or MTL file could not be read or parsed.
    Obj(tobj::LoadError),
    /// The texture image could not be read or decoded.
    Image(image::ImageError),
    /// A face group uses a material the palette does not define.
    MissingMaterial { material: String },
    /// A face group has no material assigned.
    UnassignedMaterial { object: String },
    /// A material exists but has no diffuse (`Kd`) colour.
    MissingDiffuse { material: String },
    /// A face references a vertex that was never declared.
    VertexIndexOutOfRange { index: usize, vertex_count: usize },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Obj(e) => write!(f, "failed to parse OBJ/MTL: {e}"),
            LoadError::Image(e) => write!(f, "failed to load texture: {e}"),
            LoadError::MissingMaterial { material } => {
                write!(f, "material '{material}' is not defined in the palette")
            }
            LoadError::UnassignedMaterial { object } => {
                write!(f, "object '{object}' has faces without a material")
            }
            LoadError::MissingDiffuse { material } => {
                write!(f, "material '{material}' has no diffuse colour")
            }
            LoadError::VertexIndexOutOfRange {
                index,
                vertex_count,
            } => write!(
                f,
                "face references vertex {index} but only {vertex_count} vertices exist"
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Obj(e) => Some(e),
            LoadError::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<tobj::LoadError> for LoadError {
    fn from(e: tobj::LoadError) -> Self {
        LoadError::Obj(e)
    }
}

impl From<image::ImageError> for LoadError {
    fn from(e: image::ImageError) -> Self {
        LoadError::Image(e)
    }
}
