//! Motherboard sub-assembly: board plate, mounting holes, I/O shield, and
//! standoffs.
//!
//! The board is generated flat: its plane spans X/Y and the mount normal
//! is +Z, with the plate raised by the standoff height above the assembly
//! base position. Mounting-hole offsets come from the form-factor spec,
//! which measures from the board's bottom-left corner; they are mapped
//! into the centered frame here.

use casecad_standards::{FormFactor, MotherboardSpec};

use crate::anchor::{rectangular_anchor_set, AnchorSet, Part, Point, Vec3};
use crate::config::MotherboardConfig;
use crate::error::Result;
use crate::primitive::{HolePattern, THROUGH_CLEARANCE};
use crate::solid::Solid;

/// Standard motherboard screw clearance hole diameter (mm).
pub const MOUNTING_HOLE_DIAMETER: f64 = 3.5;

/// Screw holes are small; 16 segments keeps them round enough.
const MOUNT_HOLE_SEGMENTS: u32 = 16;

/// Standoff footprint edge length (mm).
const STANDOFF_FOOTPRINT: f64 = 6.0;

/// I/O shield slab thickness (mm).
const IO_SHIELD_THICKNESS: f64 = 1.5;

/// Inset of the I/O shield from the board's left edge (mm).
const IO_SHIELD_EDGE_INSET: f64 = 10.0;

/// Map a spec mounting-hole offset (bottom-left origin) into the centered
/// assembly frame, at height `z`.
fn mount_hole_center(spec: &MotherboardSpec, position: Point, offset_index: usize, z: f64) -> Point {
    let offset = spec.mounting_holes[offset_index];
    Point::new(
        position.x - spec.width / 2.0 + offset.x,
        position.y - spec.height / 2.0 + offset.y,
        z,
    )
}

/// Build the motherboard plate for `config` at `position`.
///
/// Fails with `UnknownFormFactor` when the configured key is not
/// registered; nothing is substituted.
pub fn build_motherboard(config: &MotherboardConfig, position: Point) -> Result<Part> {
    let spec = FormFactor::from_key(&config.form_factor)?.spec();
    let standoff = config.standoff_height;

    let plate_center = Point::new(
        position.x,
        position.y,
        position.z + standoff + spec.thickness / 2.0,
    );
    let plate = Solid::cuboid(
        Vec3::new(spec.width, spec.height, spec.thickness),
        plate_center,
    );

    // All mounting holes in one cavity, one subtraction.
    let holes = HolePattern::new(
        (0..spec.mounting_holes.len())
            .map(|i| mount_hole_center(spec, position, i, plate_center.z))
            .collect(),
        MOUNTING_HOLE_DIAMETER,
        spec.thickness + THROUGH_CLEARANCE,
        MOUNT_HOLE_SEGMENTS,
    )
    .build()?;
    let mut board = plate.subtract_all([holes]);

    let board_top = position.z + standoff + spec.thickness;
    let shield_center = Point::new(
        position.x - spec.width / 2.0 + spec.io_shield_width / 2.0 + IO_SHIELD_EDGE_INSET,
        position.y,
        board_top + spec.io_shield_height / 2.0,
    );
    if config.io_shield {
        // An upright slab standing on the board surface; port cutouts are
        // not modeled.
        let shield = Solid::cuboid(
            Vec3::new(spec.io_shield_width, IO_SHIELD_THICKNESS, spec.io_shield_height),
            shield_center,
        );
        board = board.union(&shield);
    }

    let mut anchors = rectangular_anchor_set(spec.width, spec.height, spec.thickness, plate_center);
    // Heuristic component anchors at fixed fractions of the board extents.
    // These are placement aids for aligning other parts, not measured
    // component positions.
    anchors.insert(
        "cpuSocket",
        Point::new(position.x, position.y - spec.height / 4.0, board_top),
    );
    anchors.insert(
        "ramSlots",
        Point::new(position.x + spec.width / 4.0, position.y, board_top),
    );
    anchors.insert(
        "pcieSlots",
        Point::new(position.x, position.y + spec.height / 3.0, board_top),
    );
    anchors.insert("ioShield", shield_center);

    Ok(Part::new("motherboard", board, anchors))
}

/// Build the standoff set for `config` at `position`: one post per
/// mounting hole, all unioned into a single solid.
///
/// Anchors are `standoff_<index>` at each post's top face, indexed in the
/// spec's mounting-hole list order; that order is the cross-reference key
/// other assemblies use.
pub fn build_standoffs(config: &MotherboardConfig, position: Point) -> Result<Part> {
    let spec = FormFactor::from_key(&config.form_factor)?.spec();
    let standoff = config.standoff_height;

    let mut anchors = AnchorSet::new();
    let posts = (0..spec.mounting_holes.len()).map(|i| {
        let top = mount_hole_center(spec, position, i, position.z + standoff);
        anchors.insert(format!("standoff_{i}").as_str(), top);

        let center = Point::new(top.x, top.y, position.z + standoff / 2.0);
        Solid::cuboid(
            Vec3::new(STANDOFF_FOOTPRINT, STANDOFF_FOOTPRINT, standoff),
            center,
        )
    });
    let solid = Solid::union_all(posts);

    Ok(Part::new("standoffs", solid, anchors))
}
