//! Triangle meshes with per-face colour.

use std::path::Path;

use crate::colour::Colour;
use crate::error::LoadError;
use crate::material::Palette;
use crate::math::vec3::Vec3;
use crate::triangle::ModelTriangle;

const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(-1.0, -1.0, 1.0),
];

// 1-based, like OBJ face indices
const CUBE_FACES: [[usize; 3]; 12] = [
    // Front
    [1, 2, 3],
    [1, 3, 4],
    // Right
    [4, 3, 5],
    [4, 5, 6],
    // Back
    [6, 5, 7],
    [6, 7, 8],
    // Left
    [8, 7, 2],
    [8, 2, 1],
    // Top
    [2, 7, 5],
    [2, 5, 3],
    // Bottom
    [6, 8, 1],
    [6, 1, 4],
];

/// An ordered list of coloured model-space triangles.
///
/// Built once at startup and read-only while rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    triangles: Vec<ModelTriangle>,
}

impl Mesh {
    pub fn new(triangles: Vec<ModelTriangle>) -> Self {
        Self { triangles }
    }

    /// Load an OBJ file, scaling every vertex by `scale` and colouring each
    /// face from the diffuse colour of its material.
    ///
    /// Polygons are triangulated. Faces without a material, materials the
    /// palette lacks and unreadable files are all fatal.
    pub fn from_obj<P: AsRef<Path>>(path: P, scale: f32) -> Result<Self, LoadError> {
        let options = tobj::LoadOptions {
            triangulate: true,
            ..Default::default()
        };
        let (models, materials) = tobj::load_obj(path.as_ref(), &options)?;
        let materials = materials?;
        let palette = Palette::from_materials(&materials)?;

        let mut triangles = Vec::new();
        for model in &models {
            let mesh = &model.mesh;
            let material = mesh
                .material_id
                .and_then(|id| materials.get(id))
                .ok_or_else(|| LoadError::UnassignedMaterial {
                    object: model.name.clone(),
                })?;
            let colour = palette.colour(&material.name)?;

            triangles.extend(indexed_triangles(
                &mesh.positions,
                &mesh.indices,
                scale,
                colour,
            )?);
        }

        Ok(Self { triangles })
    }

    /// A cube spanning `[-half_extent, half_extent]` on every axis.
    pub fn cube(half_extent: f32, colour: Colour) -> Self {
        let triangles = CUBE_FACES
            .iter()
            .map(|&[a, b, c]| {
                ModelTriangle::new(
                    CUBE_VERTICES[a - 1] * half_extent,
                    CUBE_VERTICES[b - 1] * half_extent,
                    CUBE_VERTICES[c - 1] * half_extent,
                    colour,
                )
            })
            .collect();
        Self { triangles }
    }

    pub fn triangles(&self) -> &[ModelTriangle] {
        &self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

/// Builds triangles from a flat `x y z` position list and a triangulated
/// index list. The loader validates indices itself; this check keeps a bad
/// index from panicking if it ever slips through.
fn indexed_triangles(
    positions: &[f32],
    indices: &[u32],
    scale: f32,
    colour: Colour,
) -> Result<Vec<ModelTriangle>, LoadError> {
    let vertices: Vec<Vec3> = positions
        .chunks_exact(3)
        .map(|p| Vec3::new(p[0], p[1], p[2]) * scale)
        .collect();
    let vertex = |index: u32| {
        vertices
            .get(index as usize)
            .copied()
            .ok_or(LoadError::VertexIndexOutOfRange {
                index: index as usize,
                vertex_count: vertices.len(),
            })
    };

    indices
        .chunks_exact(3)
        .map(|face| {
            Ok(ModelTriangle::new(
                vertex(face[0])?,
                vertex(face[1])?,
                vertex(face[2])?,
                colour,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::path::PathBuf;

    fn write_model(name: &str, obj: &str, mtl: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("rasterbox_mesh_{name}"));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("scene.mtl"), mtl).unwrap();
        let obj_path = dir.join("scene.obj");
        std::fs::write(&obj_path, obj).unwrap();
        obj_path
    }

    const MTL: &str = "newmtl Red\nKd 0.2 0 0\n\nnewmtl White\nKd 1 1 1\n";

    #[test]
    fn loads_scaled_coloured_triangles() {
        let path = write_model(
            "basic",
            "mtllib scene.mtl\n\
             o floor\n\
             v 0 0 0\n\
             v 1 0 0\n\
             v 1 0 1\n\
             v 0 0 1\n\
             usemtl White\n\
             f 1 2 3\n\
             f 1 3 4\n\
             o wall\n\
             v 0 2 0\n\
             usemtl Red\n\
             f 1 2 5\n",
            MTL,
        );

        let mesh = Mesh::from_obj(&path, 0.5).unwrap();
        assert_eq!(mesh.len(), 3);

        let first = mesh.triangles()[0];
        assert_eq!(first.colour, Colour::WHITE);
        assert_relative_eq!(first.vertices[1].x, 0.5);
        assert_relative_eq!(first.vertices[2].z, 0.5);

        let wall = mesh.triangles()[2];
        assert_eq!(wall.colour, Colour::new(51, 0, 0));
        assert_relative_eq!(wall.vertices[2].y, 1.0);
    }

    #[test]
    fn quads_are_triangulated() {
        let path = write_model(
            "quad",
            "mtllib scene.mtl\nv 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nusemtl Red\nf 1 2 3 4\n",
            MTL,
        );
        assert_eq!(Mesh::from_obj(&path, 1.0).unwrap().len(), 2);
    }

    #[test]
    fn faces_without_material_are_rejected() {
        let path = write_model(
            "unassigned",
            "mtllib scene.mtl\nv 0 0 0\nv 1 0 0\nv 1 1 0\nf 1 2 3\n",
            MTL,
        );
        assert!(matches!(
            Mesh::from_obj(&path, 1.0),
            Err(LoadError::UnassignedMaterial { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(matches!(
            Mesh::from_obj("/nonexistent/rasterbox/scene.obj", 1.0),
            Err(LoadError::Obj(_))
        ));
    }

    #[test]
    fn out_of_range_index_is_reported() {
        let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let result = indexed_triangles(&positions, &[0, 1, 3], 1.0, Colour::RED);
        assert!(matches!(
            result,
            Err(LoadError::VertexIndexOutOfRange {
                index: 3,
                vertex_count: 3
            })
        ));
    }

    #[test]
    fn indexed_triangles_are_scaled() {
        let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let triangles = indexed_triangles(&positions, &[2, 1, 0], 3.0, Colour::RED).unwrap();
        assert_eq!(triangles.len(), 1);
        assert_eq!(triangles[0].vertices[0], Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(triangles[0].vertices[1], Vec3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn cube_has_twelve_triangles_within_extent() {
        let cube = Mesh::cube(0.5, Colour::RED);
        assert_eq!(cube.len(), 12);
        for triangle in cube.triangles() {
            for v in triangle.vertices {
                assert_eq!(v.x.abs(), 0.5);
                assert_eq!(v.y.abs(), 0.5);
                assert_eq!(v.z.abs(), 0.5);
            }
        }
    }
}
