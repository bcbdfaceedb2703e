//! Material palettes: material name to flat colour.

use std::collections::HashMap;
use std::path::Path;

use crate::colour::Colour;
use crate::error::LoadError;

/// Colours keyed by material name, built from the diffuse (`Kd`) entries of
/// an MTL file. Consulted while building a mesh, not kept by the renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    colours: HashMap<String, Colour>,
}

impl Palette {
    /// Parse an MTL file.
    pub fn from_mtl<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let (materials, _) = tobj::load_mtl(path.as_ref())?;
        Self::from_materials(&materials)
    }

    /// Build a palette from already-parsed materials. Diffuse channels in
    /// `[0, 1]` are scaled to `[0, 255]` by rounding.
    pub fn from_materials(materials: &[tobj::Material]) -> Result<Self, LoadError> {
        let mut colours = HashMap::with_capacity(materials.len());
        for material in materials {
            let [r, g, b] = material.diffuse.ok_or_else(|| LoadError::MissingDiffuse {
                material: material.name.clone(),
            })?;
            colours.insert(material.name.clone(), Colour::from_unit_rgb(r, g, b));
        }
        Ok(Self { colours })
    }

    pub fn insert(&mut self, name: impl Into<String>, colour: Colour) {
        self.colours.insert(name.into(), colour);
    }

    /// Look up a material, failing if the palette does not define it.
    pub fn colour(&self, name: &str) -> Result<Colour, LoadError> {
        self.colours
            .get(name)
            .copied()
            .ok_or_else(|| LoadError::MissingMaterial {
                material: name.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }
}
