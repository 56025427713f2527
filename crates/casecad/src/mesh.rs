//! Triangle-mesh boundary adapter.
//!
//! Rendering and file export consume the composer's output through this
//! type; nothing in the core reads it back.

use crate::solid::Solid;

/// A triangle mesh with flat vertex and index arrays.
pub struct TriMesh {
    verts: Vec<f32>,
    idxs: Vec<u32>,
}

impl TriMesh {
    /// Tessellate a solid.
    pub fn from_solid(solid: &Solid) -> Self {
        let mesh = solid.to_mesh();
        Self {
            verts: mesh.vertices(),
            idxs: mesh.indices(),
        }
    }

    /// Flat array of vertex positions `[x0, y0, z0, x1, y1, z1, ...]`.
    pub fn vertices(&self) -> &[f32] {
        &self.verts
    }

    /// Flat array of triangle indices `[i0, i1, i2, ...]`.
    pub fn indices(&self) -> &[u32] {
        &self.idxs
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.idxs.len() / 3
    }

    /// True when the mesh has no triangles.
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty() || self.idxs.is_empty()
    }
}
