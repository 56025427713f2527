//! Panel generator: rectangular plates with holes, countersinks, cutouts,
//! and rounded edges.
//!
//! A panel is built flat in its own plane and oriented by a normal axis,
//! so case walls drill their holes along the direction they face. Hole
//! coordinates are 2D plane offsets from the panel center; the normal
//! fixes how they map into world axes (see [`Axis::plane_axes`]).
//!
//! Anchors always describe the nominal bounding box of the plate; holes,
//! cutouts, and fillets never alter them. They are alignment references,
//! not feature markers.

use crate::anchor::{rectangular_anchor_set, Part, Point, Vec3};
use crate::error::{CadError, Result};
use crate::primitive::{panel_edge_fillets, Axis, THROUGH_CLEARANCE};
use crate::solid::{Solid, MIN_SEGMENTS};

/// One drilled hole in a panel.
#[derive(Debug, Clone, Copy)]
pub struct HoleSpec {
    /// Offset from the panel center along the first in-plane axis (mm).
    pub x: f64,
    /// Offset from the panel center along the second in-plane axis (mm).
    pub y: f64,
    /// Hole diameter (mm).
    pub diameter: f64,
    /// Optional countersink recessed into the +normal face.
    pub countersink: Option<Countersink>,
}

impl HoleSpec {
    /// A plain through hole.
    pub fn through(x: f64, y: f64, diameter: f64) -> Self {
        Self {
            x,
            y,
            diameter,
            countersink: None,
        }
    }
}

/// Countersink dimensions for a screw head.
#[derive(Debug, Clone, Copy)]
pub struct Countersink {
    /// Countersink diameter (mm); wider than the through hole.
    pub diameter: f64,
    /// Countersink depth (mm); shallower than the panel.
    pub depth: f64,
}

/// Parameters for one rectangular plate.
#[derive(Debug, Clone)]
pub struct PanelSpec {
    /// Name carried onto the produced [`Part`].
    pub name: String,
    /// Extent along the first in-plane axis (mm).
    pub width: f64,
    /// Extent along the second in-plane axis (mm).
    pub height: f64,
    /// Plate thickness (mm).
    pub thickness: f64,
    /// World axis the thickness runs along.
    pub normal: Axis,
    /// Box center.
    pub position: Point,
    /// Edge rounding radius; 0 disables the fillet pass.
    pub corner_radius: f64,
    /// Holes to drill, in order.
    pub holes: Vec<HoleSpec>,
    /// Circular tessellation segments for holes and fillets.
    pub segments: u32,
    cutout: Option<(f64, f64)>,
}

impl PanelSpec {
    /// A solid plate with the given dimensions, centered at the origin
    /// with its thickness along Z.
    pub fn new(name: impl Into<String>, width: f64, height: f64, thickness: f64) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            thickness,
            normal: Axis::Z,
            position: Point::origin(),
            corner_radius: 0.0,
            holes: Vec::new(),
            segments: 32,
            cutout: None,
        }
    }

    /// Add one centered rectangular through-cutout sized as fractions of
    /// the panel's in-plane extents (window panels).
    pub fn with_cutout(mut self, width_fraction: f64, height_fraction: f64) -> Self {
        self.cutout = Some((width_fraction, height_fraction));
        self
    }

    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("panel width", self.width),
            ("panel height", self.height),
            ("panel thickness", self.thickness),
        ] {
            if value <= 0.0 {
                return Err(CadError::InvalidDimension { field, value });
            }
        }
        if self.corner_radius < 0.0 {
            return Err(CadError::InvalidDimension {
                field: "corner radius",
                value: self.corner_radius,
            });
        }
        if self.segments < MIN_SEGMENTS {
            return Err(CadError::InvalidSegments(self.segments));
        }
        for hole in &self.holes {
            if hole.diameter <= 0.0 {
                return Err(CadError::InvalidDimension {
                    field: "hole diameter",
                    value: hole.diameter,
                });
            }
            if let Some(cs) = hole.countersink {
                if cs.diameter <= 0.0 || cs.depth <= 0.0 {
                    return Err(CadError::InvalidDimension {
                        field: "countersink",
                        value: cs.diameter.min(cs.depth),
                    });
                }
            }
        }
        if let Some((fw, fh)) = self.cutout {
            if fw <= 0.0 || fw >= 1.0 || fh <= 0.0 || fh >= 1.0 {
                return Err(CadError::InvalidDimension {
                    field: "cutout fraction",
                    value: fw.min(fh),
                });
            }
        }
        Ok(())
    }

    /// World-space extents of the plate: in-plane dims land on the plane
    /// axes, thickness on the normal.
    fn extents(&self) -> Vec3 {
        let (p, q) = self.normal.plane_axes();
        let mut e = Vec3::zeros();
        p.set(&mut e, self.width);
        q.set(&mut e, self.height);
        self.normal.set(&mut e, self.thickness);
        e
    }

    /// Orient a Z-aligned tool along this panel's normal.
    fn orient(&self, tool: Solid) -> Solid {
        match self.normal {
            Axis::Z => tool,
            Axis::X => tool.rotate(0.0, 90.0, 0.0),
            Axis::Y => tool.rotate(90.0, 0.0, 0.0),
        }
    }

    /// Map a 2D plane offset to a world displacement from the center.
    fn plane_offset(&self, x: f64, y: f64) -> Vec3 {
        let (p, q) = self.normal.plane_axes();
        x * p.unit() + y * q.unit()
    }

    /// Build the plate: base box, one subtractive pass for all holes,
    /// countersinks, and the cutout, then one pass for edge fillets.
    pub fn build(&self) -> Result<Part> {
        self.validate()?;

        let extents = self.extents();
        let base = Solid::cuboid(extents, self.position);

        let mut tools: Vec<Solid> = Vec::new();
        let through_depth = self.thickness + THROUGH_CLEARANCE;
        for hole in &self.holes {
            let center = self.position + self.plane_offset(hole.x, hole.y);
            let drill = Solid::cylinder(
                hole.diameter / 2.0,
                through_depth,
                Point::origin(),
                self.segments,
            );
            tools.push(self.orient(drill).translate(center - Point::origin()));

            if let Some(cs) = hole.countersink {
                let sink = Solid::cylinder(
                    cs.diameter / 2.0,
                    cs.depth,
                    Point::origin(),
                    self.segments,
                );
                let recess = (self.thickness - cs.depth) / 2.0 * self.normal.unit();
                tools.push(
                    self.orient(sink)
                        .translate(center - Point::origin() + recess),
                );
            }
        }

        if let Some((fw, fh)) = self.cutout {
            let (p, q) = self.normal.plane_axes();
            let mut size = Vec3::zeros();
            p.set(&mut size, self.width * fw);
            q.set(&mut size, self.height * fh);
            self.normal.set(&mut size, through_depth);
            tools.push(Solid::cuboid(size, self.position));
        }

        let mut plate = base.subtract_all(tools);

        if let Some(fillets) = panel_edge_fillets(
            self.width,
            self.height,
            self.thickness,
            self.normal,
            self.corner_radius,
            self.position,
            self.segments,
        ) {
            plate = plate.difference(&fillets);
        }

        let anchors = rectangular_anchor_set(extents.x, extents.y, extents.z, self.position);
        Ok(Part::new(self.name.clone(), plate, anchors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_panel_anchors_match_the_canonical_set() {
        let position = Point::new(5.0, -3.0, 1.0);
        let mut spec = PanelSpec::new("p", 120.0, 80.0, 3.0);
        spec.position = position;
        let panel = spec.build().unwrap();

        assert_eq!(
            panel.anchors(),
            &rectangular_anchor_set(120.0, 80.0, 3.0, position)
        );
        assert!(!panel.solid().is_empty());
    }

    #[test]
    fn holes_never_alter_the_anchor_set() {
        let mut spec = PanelSpec::new("p", 120.0, 80.0, 3.0);
        spec.holes = vec![
            HoleSpec::through(-40.0, -20.0, 5.0),
            HoleSpec {
                x: 40.0,
                y: 20.0,
                diameter: 5.0,
                countersink: Some(Countersink {
                    diameter: 9.0,
                    depth: 1.5,
                }),
            },
        ];
        let drilled = spec.clone().build().unwrap();

        spec.holes.clear();
        let plain = spec.build().unwrap();
        assert_eq!(drilled.anchors(), plain.anchors());
    }

    #[test]
    fn cutout_variant_reuses_base_anchors() {
        let windowed = PanelSpec::new("p", 200.0, 100.0, 3.0)
            .with_cutout(0.8, 0.8)
            .build()
            .unwrap();
        assert_eq!(
            windowed.anchors(),
            &rectangular_anchor_set(200.0, 100.0, 3.0, Point::origin())
        );
        assert!(!windowed.solid().is_empty());
    }

    #[test]
    fn oriented_panel_extents_follow_the_normal() {
        let mut spec = PanelSpec::new("wall", 100.0, 50.0, 3.0);
        spec.normal = Axis::Y;
        let wall = spec.build().unwrap();

        // Width spans X, height spans Z, thickness spans Y.
        let top = wall.anchors().get(&"topCenter".into()).unwrap();
        let front = wall.anchors().get(&"frontCenter".into()).unwrap();
        let right = wall.anchors().get(&"rightCenter".into()).unwrap();
        assert_eq!(top.z, 25.0);
        assert_eq!(front.y, 1.5);
        assert_eq!(right.x, 50.0);
    }

    #[test]
    fn degenerate_dimensions_are_rejected() {
        assert!(matches!(
            PanelSpec::new("p", 0.0, 80.0, 3.0).build(),
            Err(CadError::InvalidDimension { field: "panel width", .. })
        ));
        assert!(PanelSpec::new("p", 100.0, -1.0, 3.0).build().is_err());
        assert!(PanelSpec::new("p", 100.0, 80.0, 0.0).build().is_err());

        let mut spec = PanelSpec::new("p", 100.0, 80.0, 3.0);
        spec.corner_radius = -1.0;
        assert!(spec.build().is_err());
    }

    #[test]
    fn rounded_panel_still_builds() {
        let mut spec = PanelSpec::new("p", 100.0, 80.0, 3.0);
        spec.corner_radius = 2.0;
        assert!(!spec.build().unwrap().solid().is_empty());
    }
}
