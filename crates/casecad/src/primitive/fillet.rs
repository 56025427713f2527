//! Fillet generator: quarter-round edge tools.
//!
//! A fillet tool is the convex quarter of a cylinder: a cylinder of the
//! target radius with the square wedge volumes removed so only one
//! quadrant of the round remains. The tool is rotated so its axis lies
//! along the target edge and its arc faces into the material, then
//! translated onto the edge. Panels subtract the union of all eight
//! in-plane edge tools in a single pass.

use crate::anchor::{Point, Vec3};
use crate::primitive::{Axis, THROUGH_CLEARANCE};
use crate::solid::Solid;

/// Build the rounding tool for one straight edge.
///
/// `axis` is the edge direction; `bulge` points from the edge line toward
/// the arc of the quarter-round (it does not need to be normalized). The
/// tool is centered on `position` along the edge.
pub fn edge_fillet(
    radius: f64,
    length: f64,
    axis: Axis,
    bulge: Vec3,
    position: Point,
    segments: u32,
) -> Solid {
    // Canonical tool: cylinder along Z, quadrant x <= 0 && y <= 0 kept.
    // The wedge is two square prisms covering the other three quadrants.
    let cyl = Solid::cylinder(radius, length, Point::origin(), segments);
    let clear = length + THROUGH_CLEARANCE;
    let wedge_x = Solid::cuboid(
        Vec3::new(2.0 * radius, 4.0 * radius, clear),
        Point::new(radius, 0.0, 0.0),
    );
    let wedge_y = Solid::cuboid(
        Vec3::new(4.0 * radius, 2.0 * radius, clear),
        Point::new(0.0, radius, 0.0),
    );
    let quarter = cyl.subtract_all([wedge_x, wedge_y]);

    // Swing the cylinder axis onto the edge axis. `arc` tracks where the
    // canonical arc direction (-1,-1,0)/sqrt2 ends up after the swing.
    let (swung, arc) = match axis {
        Axis::Z => (quarter, Vec3::new(-1.0, -1.0, 0.0)),
        Axis::X => (quarter.rotate(0.0, 90.0, 0.0), Vec3::new(0.0, -1.0, 1.0)),
        Axis::Y => (quarter.rotate(90.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, -1.0)),
    };

    // Roll about the edge axis until the arc faces `bulge`.
    let n = axis.unit();
    let roll = arc.cross(&bulge).dot(&n).atan2(arc.dot(&bulge)).to_degrees();
    let mut angles = Vec3::zeros();
    axis.set(&mut angles, roll);

    swung
        .rotate(angles.x, angles.y, angles.z)
        .translate(position - Point::origin())
}

/// The unioned rounding tools for the eight in-plane edges of a plate
/// (four along each in-plane axis), or `None` when `radius <= 0`, a
/// documented short-circuit rather than an error.
pub fn panel_edge_fillets(
    width: f64,
    height: f64,
    thickness: f64,
    normal: Axis,
    radius: f64,
    center: Point,
    segments: u32,
) -> Option<Solid> {
    if radius <= 0.0 {
        return None;
    }

    let (p, q) = normal.plane_axes();
    let half_w = width / 2.0;
    let half_h = height / 2.0;
    let half_t = thickness / 2.0;

    let mut tools = Vec::with_capacity(8);
    for sn in [-1.0, 1.0] {
        for s in [-1.0, 1.0] {
            // Edge along the width axis, offset in (height, normal).
            let offset = s * half_h * q.unit() + sn * half_t * normal.unit();
            let bulge = -(s * q.unit() + sn * normal.unit());
            tools.push(edge_fillet(radius, width, p, bulge, center + offset, segments));

            // Edge along the height axis, offset in (width, normal).
            let offset = s * half_w * p.unit() + sn * half_t * normal.unit();
            let bulge = -(s * p.unit() + sn * normal.unit());
            tools.push(edge_fillet(radius, height, q, bulge, center + offset, segments));
        }
    }

    Some(Solid::union_all(tools))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_or_negative_radius_is_a_no_op() {
        assert!(panel_edge_fillets(100.0, 50.0, 3.0, Axis::Z, 0.0, Point::origin(), 32).is_none());
        assert!(panel_edge_fillets(100.0, 50.0, 3.0, Axis::Z, -2.0, Point::origin(), 32).is_none());
    }

    #[test]
    fn positive_radius_produces_a_tool_set() {
        let tools = panel_edge_fillets(100.0, 50.0, 3.0, Axis::Z, 1.5, Point::origin(), 32);
        assert!(!tools.unwrap().is_empty());
    }

    #[test]
    fn single_edge_tool_is_nonempty() {
        let tool = edge_fillet(
            2.0,
            80.0,
            Axis::X,
            Vec3::new(0.0, -1.0, -1.0),
            Point::new(0.0, 25.0, 1.5),
            32,
        );
        assert!(!tool.is_empty());
    }

    #[test]
    fn filleted_plate_still_has_material() {
        let plate = Solid::cuboid(Vec3::new(100.0, 50.0, 3.0), Point::origin());
        let tools =
            panel_edge_fillets(100.0, 50.0, 3.0, Axis::Z, 1.0, Point::origin(), 16).unwrap();
        assert!(!plate.difference(&tools).is_empty());
    }
}
