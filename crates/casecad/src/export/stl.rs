//! Binary STL serialization.
//!
//! Layout: 80-byte header, u32 triangle count, then per triangle a unit
//! normal, three vertices, and a zero attribute count, all little-endian
//! f32/u16.

use std::path::Path;

use crate::anchor::Part;
use crate::error::{CadError, Result};
use crate::mesh::TriMesh;

/// Serialize a part to binary STL bytes.
pub fn to_stl_bytes(part: &Part) -> Result<Vec<u8>> {
    let mesh = TriMesh::from_solid(part.solid());
    if mesh.is_empty() {
        return Err(CadError::EmptyGeometry);
    }

    let verts = mesh.vertices();
    let idxs = mesh.indices();
    let num_triangles = mesh.triangle_count();

    let mut data = Vec::with_capacity(84 + num_triangles * 50);

    // Header: part name, padded/truncated to 80 bytes.
    let mut header = [0u8; 80];
    let name = part.name.as_bytes();
    let n = name.len().min(80);
    header[..n].copy_from_slice(&name[..n]);
    data.extend_from_slice(&header);
    data.extend_from_slice(&(num_triangles as u32).to_le_bytes());

    for tri in idxs.chunks_exact(3) {
        let v = |i: u32| {
            let i = i as usize * 3;
            [verts[i], verts[i + 1], verts[i + 2]]
        };
        let (v0, v1, v2) = (v(tri[0]), v(tri[1]), v(tri[2]));

        // Face normal from the edge cross product.
        let e1 = [v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]];
        let e2 = [v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]];
        let nx = e1[1] * e2[2] - e1[2] * e2[1];
        let ny = e1[2] * e2[0] - e1[0] * e2[2];
        let nz = e1[0] * e2[1] - e1[1] * e2[0];
        let len = (nx * nx + ny * ny + nz * nz).sqrt();
        let (nx, ny, nz) = if len > 1e-12 {
            (nx / len, ny / len, nz / len)
        } else {
            (0.0, 0.0, 1.0)
        };

        data.extend_from_slice(&nx.to_le_bytes());
        data.extend_from_slice(&ny.to_le_bytes());
        data.extend_from_slice(&nz.to_le_bytes());
        for vert in [v0, v1, v2] {
            data.extend_from_slice(&vert[0].to_le_bytes());
            data.extend_from_slice(&vert[1].to_le_bytes());
            data.extend_from_slice(&vert[2].to_le_bytes());
        }
        data.extend_from_slice(&0u16.to_le_bytes());
    }

    Ok(data)
}

/// Write a part to an STL file.
pub fn export_stl(part: &Part, path: impl AsRef<Path>) -> Result<()> {
    let bytes = to_stl_bytes(part)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

impl Part {
    /// Export to binary STL bytes (delegates to [`to_stl_bytes`]).
    pub fn to_stl(&self) -> Result<Vec<u8>> {
        to_stl_bytes(self)
    }

    /// Write STL to file (delegates to [`export_stl`]).
    pub fn write_stl(&self, path: impl AsRef<Path>) -> Result<()> {
        export_stl(self, path)
    }
}
