//! Hole pattern generator.
//!
//! A hole pattern is a pure cavity: the union of one cylinder per
//! position, extruded along Z. It carries no anchors; callers subtract it
//! from a panel or assembly plate directly. Two standard layouts are
//! derived here: rectangular grids (ventilation) and the four-hole fan
//! mount square.

use nalgebra::Point3;

use crate::anchor::Point;
use crate::error::{CadError, Result};
use crate::solid::{Solid, MIN_SEGMENTS};

/// Standard corner inset for PC fan mounting holes (mm): holes sit 7.5 mm
/// in from each frame edge, never at the edge itself.
pub const FAN_HOLE_INSET: f64 = 7.5;

/// A set of identical cylindrical holes.
#[derive(Debug, Clone)]
pub struct HolePattern {
    /// Hole centers. Listed order is preserved through the union.
    pub positions: Vec<Point>,
    /// Hole diameter (mm).
    pub diameter: f64,
    /// Hole depth (mm); cylinders are centered on their position.
    pub depth: f64,
    /// Circular tessellation segments (≥ 3; 8+ for a visually round hole).
    pub segments: u32,
}

impl HolePattern {
    /// A pattern from explicit hole centers.
    pub fn new(positions: Vec<Point>, diameter: f64, depth: f64, segments: u32) -> Self {
        Self {
            positions,
            diameter,
            depth,
            segments,
        }
    }

    /// A rows x columns grid spaced evenly about `base`.
    pub fn grid(
        rows: u32,
        columns: u32,
        row_spacing: f64,
        column_spacing: f64,
        diameter: f64,
        depth: f64,
        base: Point,
        segments: u32,
    ) -> Self {
        Self::new(
            grid_points(rows, columns, row_spacing, column_spacing, base),
            diameter,
            depth,
            segments,
        )
    }

    /// The standard four-hole fan mount square for a `fan_size` mm fan.
    pub fn fan_mount(fan_size: f64, diameter: f64, depth: f64, base: Point, segments: u32) -> Self {
        Self::new(
            fan_mount_points(fan_size, base).to_vec(),
            diameter,
            depth,
            segments,
        )
    }

    /// Build the cavity solid: one cylinder per position, unioned in
    /// listed order. Rejects degenerate dimensions before touching the
    /// kernel. An empty position list yields the empty solid.
    pub fn build(&self) -> Result<Solid> {
        if self.diameter <= 0.0 {
            return Err(CadError::InvalidDimension {
                field: "hole diameter",
                value: self.diameter,
            });
        }
        if self.depth <= 0.0 {
            return Err(CadError::InvalidDimension {
                field: "hole depth",
                value: self.depth,
            });
        }
        if self.segments < MIN_SEGMENTS {
            return Err(CadError::InvalidSegments(self.segments));
        }

        Ok(Solid::union_all(self.positions.iter().map(|&p| {
            Solid::cylinder(self.diameter / 2.0, self.depth, p, self.segments)
        })))
    }
}

/// Grid hole centers: `rows` x `columns` points spaced evenly about `base`,
/// in the XY plane at `base.z`.
pub fn grid_points(
    rows: u32,
    columns: u32,
    row_spacing: f64,
    column_spacing: f64,
    base: Point,
) -> Vec<Point> {
    let start_x = base.x - f64::from(columns.saturating_sub(1)) * column_spacing / 2.0;
    let start_y = base.y - f64::from(rows.saturating_sub(1)) * row_spacing / 2.0;

    let mut points = Vec::with_capacity((rows * columns) as usize);
    for row in 0..rows {
        for col in 0..columns {
            points.push(Point3::new(
                start_x + f64::from(col) * column_spacing,
                start_y + f64::from(row) * row_spacing,
                base.z,
            ));
        }
    }
    points
}

/// The four fan mounting hole centers for a `fan_size` mm fan, centered on
/// `base`: corners of a square of side `fan_size - 2 * FAN_HOLE_INSET`.
pub fn fan_mount_points(fan_size: f64, base: Point) -> [Point; 4] {
    let half = (fan_size - 2.0 * FAN_HOLE_INSET) / 2.0;
    [
        Point3::new(base.x - half, base.y - half, base.z),
        Point3::new(base.x - half, base.y + half, base.z),
        Point3::new(base.x + half, base.y - half, base.z),
        Point3::new(base.x + half, base.y + half, base.z),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn fan_mount_120mm_is_a_105mm_square() {
        let base = Point::new(10.0, -5.0, 2.0);
        let pts = fan_mount_points(120.0, base);

        for p in &pts {
            assert_relative_eq!((p.x - base.x).abs(), 52.5);
            assert_relative_eq!((p.y - base.y).abs(), 52.5);
            assert_relative_eq!(p.z, base.z);
        }
        // Side length between adjacent corners.
        assert_relative_eq!(pts[1].y - pts[0].y, 105.0);
        assert_relative_eq!(pts[2].x - pts[0].x, 105.0);
    }

    #[test]
    fn grid_is_centered_on_base() {
        let pts = grid_points(3, 4, 10.0, 7.0, Point::origin());
        assert_eq!(pts.len(), 12);

        let cx: f64 = pts.iter().map(|p| p.x).sum::<f64>() / 12.0;
        let cy: f64 = pts.iter().map(|p| p.y).sum::<f64>() / 12.0;
        assert_relative_eq!(cx, 0.0);
        assert_relative_eq!(cy, 0.0);
    }

    #[test]
    fn degenerate_dimensions_are_rejected_before_kernel_calls() {
        let pattern = HolePattern::new(vec![Point::origin()], 0.0, 3.0, 32);
        assert!(matches!(
            pattern.build(),
            Err(CadError::InvalidDimension { field: "hole diameter", .. })
        ));

        let pattern = HolePattern::new(vec![Point::origin()], 3.0, -1.0, 32);
        assert!(pattern.build().is_err());

        let pattern = HolePattern::new(vec![Point::origin()], 3.0, 3.0, 2);
        assert!(matches!(pattern.build(), Err(CadError::InvalidSegments(2))));
    }

    #[test]
    fn empty_position_list_builds_the_empty_solid() {
        let pattern = HolePattern::new(Vec::new(), 3.0, 3.0, 16);
        assert!(pattern.build().unwrap().is_empty());
    }

    #[test]
    fn pattern_solid_is_nonempty() {
        let pattern = HolePattern::fan_mount(120.0, 4.5, 5.0, Point::origin(), 16);
        assert!(!pattern.build().unwrap().is_empty());

        let grid = HolePattern::grid(2, 3, 7.0, 7.0, 5.0, 3.2, Point::origin(), 16);
        assert_eq!(grid.positions.len(), 6);
        assert!(!grid.build().unwrap().is_empty());
    }
}
