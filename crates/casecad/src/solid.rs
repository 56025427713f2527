//! Facade over the boolean solid-modeling kernel.
//!
//! All geometry in this crate is produced through [`Solid`], a thin wrapper
//! around the manifold kernel. The wrapper fixes the conventions the
//! generators rely on: primitives are centered on their position (manifold
//! cubes are corner-aligned and cylinders sit on z=0 natively), batch
//! booleans run in the listed order, and subtraction of a tool set happens
//! as union-then-one-subtract so a panel with thirty holes costs two kernel
//! passes instead of thirty.
//!
//! The kernel is treated as correct: no degenerate-input repair happens
//! here. Dimension validation is the responsibility of the generators,
//! before any kernel call.

use manifold_rs::{Manifold, Mesh};
use nalgebra::{Point3, Vector3};

/// Minimum number of circular segments a cylinder can be tessellated with.
pub const MIN_SEGMENTS: u32 = 3;

/// An opaque solid handle.
///
/// Values are immutable: every operation returns a new `Solid` and leaves
/// its inputs untouched, which keeps the generators free of in-place
/// mutation.
pub struct Solid {
    manifold: Manifold,
}

impl Solid {
    /// Create an empty solid (identity for union).
    pub fn empty() -> Self {
        Self {
            manifold: Manifold::empty(),
        }
    }

    /// Create an axis-aligned box of the given extents, centered on `center`.
    pub fn cuboid(size: Vector3<f64>, center: Point3<f64>) -> Self {
        let manifold = Manifold::cube(size.x, size.y, size.z).translate(
            center.x - size.x / 2.0,
            center.y - size.y / 2.0,
            center.z - size.z / 2.0,
        );
        Self { manifold }
    }

    /// Create a cylinder along the Z axis, centered on `center`.
    pub fn cylinder(radius: f64, height: f64, center: Point3<f64>, segments: u32) -> Self {
        let manifold = Manifold::cylinder(radius, radius, height, segments).translate(
            center.x,
            center.y,
            center.z - height / 2.0,
        );
        Self { manifold }
    }

    /// Boolean union (self + other).
    pub fn union(&self, other: &Solid) -> Self {
        Self {
            manifold: self.manifold.union(&other.manifold),
        }
    }

    /// Union a sequence of solids in listed order.
    ///
    /// Order is fixed on purpose: kernel booleans are not exactly
    /// associative under numerical tolerance, and a stable fold keeps
    /// generation deterministic for a given configuration.
    pub fn union_all(solids: impl IntoIterator<Item = Solid>) -> Self {
        solids
            .into_iter()
            .fold(Solid::empty(), |acc, s| acc.union(&s))
    }

    /// Boolean difference (self - other).
    pub fn difference(&self, other: &Solid) -> Self {
        Self {
            manifold: self.manifold.difference(&other.manifold),
        }
    }

    /// Subtract a set of tools in one pass: the tools are unioned first,
    /// then removed with a single difference. No tools means no cut.
    pub fn subtract_all(&self, tools: impl IntoIterator<Item = Solid>) -> Self {
        let mut tools = tools.into_iter();
        let first = match tools.next() {
            Some(t) => t,
            None => return self.difference(&Solid::empty()),
        };
        let combined = tools.fold(first, |acc, t| acc.union(&t));
        self.difference(&combined)
    }

    /// Translate the solid.
    pub fn translate(&self, v: Vector3<f64>) -> Self {
        Self {
            manifold: self.manifold.translate(v.x, v.y, v.z),
        }
    }

    /// Rotate the solid about the origin (angles in degrees, applied as
    /// X, then Y, then Z).
    pub fn rotate(&self, x_deg: f64, y_deg: f64, z_deg: f64) -> Self {
        Self {
            manifold: self.manifold.rotate(x_deg, y_deg, z_deg),
        }
    }

    /// Check if the solid has no geometry.
    pub fn is_empty(&self) -> bool {
        self.manifold.is_empty()
    }

    /// Tessellate into a triangle mesh.
    pub fn to_mesh(&self) -> Mesh {
        self.manifold.to_mesh()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Point3, Vector3};

    #[test]
    fn cuboid_is_not_empty() {
        let s = Solid::cuboid(Vector3::new(10.0, 10.0, 10.0), Point3::origin());
        assert!(!s.is_empty());
    }

    #[test]
    fn subtract_all_with_no_tools_is_identity() {
        let s = Solid::cuboid(Vector3::new(10.0, 10.0, 10.0), Point3::origin());
        let cut = s.subtract_all(std::iter::empty());
        assert!(!cut.is_empty());
    }

    #[test]
    fn through_cylinder_cuts_a_plate() {
        let plate = Solid::cuboid(Vector3::new(20.0, 20.0, 3.0), Point3::origin());
        let hole = Solid::cylinder(2.0, 3.2, Point3::origin(), 32);
        let cut = plate.subtract_all([hole]);
        assert!(!cut.is_empty());
    }

    #[test]
    fn union_all_of_nothing_is_empty() {
        assert!(Solid::union_all(std::iter::empty()).is_empty());
    }
}
