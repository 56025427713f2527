//! Named reference points and the alignment algebra over them.
//!
//! Every generated solid carries an [`AnchorSet`]: a map from hierarchical
//! anchor paths to points in the single global millimeter frame. Anchors
//! let independently generated parts be positioned against each other
//! without manual coordinate arithmetic: `align` moves a part so one of
//! its anchors lands exactly on an anchor of another part.
//!
//! The load-bearing invariant: a solid and its anchor set always move
//! together. [`Part`] owns both and is immutable, so there is no API
//! through which the geometry can drift away from its reference points.

use std::collections::BTreeMap;
use std::fmt;

use nalgebra::{Point3, Vector3};

use crate::error::{CadError, Result};
use crate::solid::Solid;

/// A 3D point in the global frame (mm).
pub type Point = Point3<f64>;

/// A 3D displacement (mm).
pub type Vec3 = Vector3<f64>;

// =============================================================================
// Anchor paths
// =============================================================================

/// Hierarchical anchor name: one segment per assembly nesting level.
///
/// A primitive's anchors are single-segment leaves (`center`,
/// `topFrontLeft`). When a sub-assembly is merged into a parent, its whole
/// set is re-scoped under one extra leading segment (`motherboard.center`),
/// so names cannot collide however deep the nesting goes. Paths render and
/// parse as dot-joined segments; segment names are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnchorPath(Vec<String>);

impl AnchorPath {
    /// A single-segment path.
    pub fn leaf(name: impl Into<String>) -> Self {
        Self(vec![name.into()])
    }

    /// The path's segments, outermost scope first.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// This path with one scope segment prepended.
    pub fn scoped(&self, scope: &str) -> Self {
        let mut segments = Vec::with_capacity(self.0.len() + 1);
        segments.push(scope.to_string());
        segments.extend(self.0.iter().cloned());
        Self(segments)
    }
}

impl fmt::Display for AnchorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl From<&str> for AnchorPath {
    fn from(s: &str) -> Self {
        Self(s.split('.').map(str::to_string).collect())
    }
}

// =============================================================================
// Anchor sets
// =============================================================================

/// The full named-point collection for one solid at its current position.
///
/// Backed by an ordered map so iteration (and everything derived from it:
/// JSON export, logging, test output) is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnchorSet {
    points: BTreeMap<AnchorPath, Point>,
}

impl AnchorSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an anchor.
    pub fn insert(&mut self, path: impl Into<AnchorPath>, point: Point) {
        self.points.insert(path.into(), point);
    }

    /// Look up an anchor.
    pub fn get(&self, path: &AnchorPath) -> Option<Point> {
        self.points.get(path).copied()
    }

    /// Number of anchors.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the set has no anchors.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate anchors in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&AnchorPath, &Point)> {
        self.points.iter()
    }

    /// The whole set translated by `v`.
    ///
    /// This is the only way anchors move: all at once, by the same vector.
    pub fn translated(&self, v: Vec3) -> Self {
        Self {
            points: self
                .points
                .iter()
                .map(|(path, p)| (path.clone(), p + v))
                .collect(),
        }
    }

    /// Merge another set under one extra scope segment.
    pub fn merge_scoped(&mut self, other: &AnchorSet, scope: &str) {
        for (path, p) in other.iter() {
            self.points.insert(path.scoped(scope), *p);
        }
    }
}

/// The canonical anchor set for a rectangular-prism solid centered at `base`.
///
/// This function is the single source of truth for box naming: every
/// generator that produces a box-like solid derives its anchors here, which
/// is what keeps `topFrontLeft` meaning the same corner on a side panel, a
/// motherboard plate, and the finished case.
///
/// Axis convention: `width` spans X (`left`/`right`), `height` spans Y
/// (`back`/`front`), `thickness` spans Z (`bottom`/`top`). The set holds 15
/// points: 8 corners, 6 face centers, and `center`.
pub fn rectangular_anchor_set(width: f64, height: f64, thickness: f64, base: Point) -> AnchorSet {
    let hw = width / 2.0;
    let hh = height / 2.0;
    let ht = thickness / 2.0;

    let mut set = AnchorSet::new();
    let mut put = |name: &str, dx: f64, dy: f64, dz: f64| {
        set.insert(name, Point::new(base.x + dx, base.y + dy, base.z + dz));
    };

    // Corners, top surface then bottom surface.
    put("topFrontLeft", -hw, hh, ht);
    put("topFrontRight", hw, hh, ht);
    put("topBackLeft", -hw, -hh, ht);
    put("topBackRight", hw, -hh, ht);
    put("bottomFrontLeft", -hw, hh, -ht);
    put("bottomFrontRight", hw, hh, -ht);
    put("bottomBackLeft", -hw, -hh, -ht);
    put("bottomBackRight", hw, -hh, -ht);

    // Face centers and the geometric center.
    put("center", 0.0, 0.0, 0.0);
    put("topCenter", 0.0, 0.0, ht);
    put("bottomCenter", 0.0, 0.0, -ht);
    put("frontCenter", 0.0, hh, 0.0);
    put("backCenter", 0.0, -hh, 0.0);
    put("leftCenter", -hw, 0.0, 0.0);
    put("rightCenter", hw, 0.0, 0.0);

    set
}

// =============================================================================
// Anchored parts
// =============================================================================

/// A named solid paired with the anchor set describing its current position.
///
/// `Part` is the value every generator returns and every composition step
/// consumes. It is immutable (transforms and booleans produce new values)
/// and its solid and anchors are only ever moved together.
pub struct Part {
    /// Human-readable name (used in error context and export).
    pub name: String,
    solid: Solid,
    anchors: AnchorSet,
}

impl Part {
    /// Pair a solid with its anchor set.
    pub fn new(name: impl Into<String>, solid: Solid, anchors: AnchorSet) -> Self {
        Self {
            name: name.into(),
            solid,
            anchors,
        }
    }

    /// The solid handle.
    pub fn solid(&self) -> &Solid {
        &self.solid
    }

    /// The anchor set.
    pub fn anchors(&self) -> &AnchorSet {
        &self.anchors
    }

    /// Look up one anchor, with error context.
    pub fn anchor(&self, path: &AnchorPath) -> Result<Point> {
        self.anchors.get(path).ok_or_else(|| CadError::AnchorNotFound {
            part: self.name.clone(),
            name: path.to_string(),
        })
    }

    /// Rigidly translate the part: solid and anchors move by the same
    /// vector, atomically.
    pub fn translate(&self, v: Vec3) -> Self {
        Self {
            name: self.name.clone(),
            solid: self.solid.translate(v),
            anchors: self.anchors.translated(v),
        }
    }

    /// Move this part so its `own` anchor coincides exactly with
    /// `target_anchor` on `target`.
    ///
    /// Pure: neither input is modified; failures leave both untouched.
    /// Aligning a part to itself on the same anchor is the identity
    /// translation.
    pub fn align(
        &self,
        own: impl Into<AnchorPath>,
        target: &Part,
        target_anchor: impl Into<AnchorPath>,
    ) -> Result<Self> {
        let from = self.anchor(&own.into())?;
        let to = target.anchor(&target_anchor.into())?;
        Ok(self.translate(to - from))
    }

    /// Boolean union with another part. The result keeps this part's
    /// anchors; merge the other part's set explicitly (and scoped) where
    /// the composition needs them.
    pub fn union(&self, other: &Part) -> Self {
        Self {
            name: self.name.clone(),
            solid: self.solid.union(other.solid()),
            anchors: self.anchors.clone(),
        }
    }

    /// Subtract a tool solid set in one pass. Anchors are untouched:
    /// they describe the nominal bounding box, not the machined result.
    pub fn subtract_all(&self, tools: impl IntoIterator<Item = Solid>) -> Self {
        Self {
            name: self.name.clone(),
            solid: self.solid.subtract_all(tools),
            anchors: self.anchors.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    fn box_part(name: &str, w: f64, h: f64, t: f64, base: Point) -> Part {
        Part::new(
            name,
            Solid::cuboid(Vector3::new(w, h, t), base),
            rectangular_anchor_set(w, h, t, base),
        )
    }

    #[test]
    fn rectangular_set_center_and_extent() {
        let base = Point::new(4.0, -2.0, 9.0);
        let set = rectangular_anchor_set(30.0, 20.0, 3.0, base);
        assert_eq!(set.len(), 15);
        assert_eq!(set.get(&"center".into()), Some(base));

        let top = set.get(&"topCenter".into()).unwrap();
        let bottom = set.get(&"bottomCenter".into()).unwrap();
        assert_relative_eq!(top.z - bottom.z, 3.0);
    }

    #[test]
    fn corners_span_the_box() {
        let set = rectangular_anchor_set(10.0, 20.0, 2.0, Point::origin());
        let tfl = set.get(&"topFrontLeft".into()).unwrap();
        let bbr = set.get(&"bottomBackRight".into()).unwrap();
        assert_relative_eq!(tfl.x, -5.0);
        assert_relative_eq!(tfl.y, 10.0);
        assert_relative_eq!(tfl.z, 1.0);
        assert_relative_eq!(bbr.x, 5.0);
        assert_relative_eq!(bbr.y, -10.0);
        assert_relative_eq!(bbr.z, -1.0);
    }

    #[test]
    fn align_to_self_is_identity() {
        let g = box_part("g", 10.0, 10.0, 2.0, Point::new(3.0, 4.0, 5.0));
        let aligned = g.align("topCenter", &g, "topCenter").unwrap();
        assert_eq!(aligned.anchors(), g.anchors());
    }

    #[test]
    fn align_achieves_exact_coincidence() {
        let a = box_part("a", 10.0, 10.0, 2.0, Point::origin());
        let b = box_part("b", 40.0, 30.0, 6.0, Point::new(100.0, 50.0, -20.0));
        let moved = a.align("bottomCenter", &b, "topCenter").unwrap();
        assert_eq!(
            moved.anchors().get(&"bottomCenter".into()),
            b.anchors().get(&"topCenter".into())
        );
        // The rest of the set moved by the same vector.
        let delta = moved.anchors().get(&"center".into()).unwrap()
            - a.anchors().get(&"center".into()).unwrap();
        let expected = b.anchors().get(&"topCenter".into()).unwrap()
            - a.anchors().get(&"bottomCenter".into()).unwrap();
        assert_relative_eq!(delta.x, expected.x);
        assert_relative_eq!(delta.y, expected.y);
        assert_relative_eq!(delta.z, expected.z);
    }

    #[test]
    fn align_missing_anchor_fails_without_mutation() {
        let a = box_part("a", 10.0, 10.0, 2.0, Point::origin());
        let b = box_part("b", 10.0, 10.0, 2.0, Point::origin());
        let before = a.anchors().clone();

        let err = a.align("noSuchAnchor", &b, "center").unwrap_err();
        match err {
            CadError::AnchorNotFound { part, name } => {
                assert_eq!(part, "a");
                assert_eq!(name, "noSuchAnchor");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(a.anchors(), &before);
        assert!(a.align("center", &b, "alsoMissing").is_err());
    }

    #[test]
    fn scoped_paths_render_dotted() {
        let path = AnchorPath::leaf("cpuSocket").scoped("motherboard");
        assert_eq!(path.to_string(), "motherboard.cpuSocket");
        assert_eq!(AnchorPath::from("motherboard.cpuSocket"), path);
    }

    #[test]
    fn merge_scoped_keeps_sets_apart() {
        let mut outer = rectangular_anchor_set(10.0, 10.0, 10.0, Point::origin());
        let inner = rectangular_anchor_set(4.0, 4.0, 4.0, Point::new(1.0, 1.0, 1.0));
        outer.merge_scoped(&inner, "inner");

        assert_eq!(outer.len(), 30);
        assert_eq!(outer.get(&"center".into()), Some(Point::origin()));
        assert_eq!(
            outer.get(&"inner.center".into()),
            Some(Point::new(1.0, 1.0, 1.0))
        );
    }

    #[test]
    fn boolean_ops_keep_the_receivers_anchors() {
        let a = box_part("a", 20.0, 20.0, 4.0, Point::origin());
        let b = box_part("b", 6.0, 6.0, 10.0, Point::new(5.0, 5.0, 0.0));

        let joined = a.union(&b);
        assert_eq!(joined.anchors(), a.anchors());

        let tool = Solid::cuboid(Vector3::new(6.0, 6.0, 10.0), Point::new(5.0, 5.0, 0.0));
        let cut = a.subtract_all([tool]);
        assert_eq!(cut.anchors(), a.anchors());
        assert!(!cut.solid().is_empty());
    }

    #[test]
    fn translate_moves_solid_and_anchors_together() {
        let g = box_part("g", 10.0, 10.0, 2.0, Point::origin());
        let moved = g.translate(Vector3::new(5.0, 0.0, 0.0));
        assert_eq!(
            moved.anchors().get(&"center".into()),
            Some(Point::new(5.0, 0.0, 0.0))
        );
        assert!(!moved.solid().is_empty());
    }
}
