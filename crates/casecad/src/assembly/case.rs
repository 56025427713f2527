//! Case assembly: six walls plus the optional motherboard stack.
//!
//! Case orientation: width spans X (left/right), depth spans Y
//! (front/back), height spans Z (top/bottom). Each wall is generated by
//! the panel generator with its thickness along the axis it faces, so
//! ventilation grids, windows, and fan mounts drill through the wall in
//! the direction it looks.

use casecad_standards::{FanSize, Material};

use crate::anchor::{rectangular_anchor_set, Part, Point, Vec3};
use crate::config::{CaseConfig, PanelStyle, VentilationConfig};
use crate::error::Result;
use crate::primitive::{fan_mount_points, grid_points, Axis, HoleSpec, PanelSpec};
use crate::solid::Solid;

/// Depth-axis offset of the motherboard position from the case's rear
/// face (mm). An internal design constant, not user-configurable.
pub const MOTHERBOARD_REAR_OFFSET: f64 = 20.0;

/// Window cutout size as a fraction of the face extents.
const WINDOW_FRACTION: f64 = 0.8;

/// A fan bore is this much smaller than the fan frame (mm), leaving a lip
/// clear of the corner mounting holes.
const FAN_BORE_INSET: f64 = 5.0;

/// One wall's parameters before styling.
struct Wall {
    name: &'static str,
    width: f64,
    height: f64,
    normal: Axis,
    offset: Vec3,
    style: PanelStyle,
    fan: Option<String>,
}

/// Apply a face style and optional fan mount to a wall spec, then build.
fn build_wall(
    mut spec: PanelSpec,
    style: PanelStyle,
    fan: Option<&str>,
    vent: &VentilationConfig,
) -> Result<Part> {
    match style {
        PanelStyle::Solid => {}
        PanelStyle::Mesh => {
            spec.holes.extend(vent_holes(spec.width, spec.height, vent));
        }
        PanelStyle::Window => {
            spec = spec.with_cutout(WINDOW_FRACTION, WINDOW_FRACTION);
        }
    }

    if let Some(key) = fan {
        let fan_spec = FanSize::from_key(key)?.spec();
        spec.holes.push(HoleSpec::through(
            0.0,
            0.0,
            fan_spec.size - FAN_BORE_INSET,
        ));
        for p in fan_mount_points(fan_spec.size, Point::origin()) {
            spec.holes.push(HoleSpec::through(
                p.x,
                p.y,
                fan_spec.mounting_hole_diameter,
            ));
        }
    }

    spec.build()
}

/// Ventilation grid holes for a `width` x `height` face, spaced evenly
/// inside the configured margin. Faces too small for a single hole get
/// none.
fn vent_holes(width: f64, height: f64, vent: &VentilationConfig) -> Vec<HoleSpec> {
    let pitch = vent.hole_diameter + vent.hole_spacing;
    let avail_w = width - 2.0 * vent.margin;
    let avail_h = height - 2.0 * vent.margin;
    if avail_w < vent.hole_diameter || avail_h < vent.hole_diameter {
        return Vec::new();
    }

    let columns = ((avail_w / pitch).floor() as u32).max(1);
    let rows = ((avail_h / pitch).floor() as u32).max(1);
    grid_points(rows, columns, pitch, pitch, Point::origin())
        .into_iter()
        .map(|p| HoleSpec::through(p.x, p.y, vent.hole_diameter))
        .collect()
}

/// Generate the full case assembly from a configuration.
///
/// The six wall solids are unioned into one case solid; when a
/// motherboard is configured, the board and standoff sub-assemblies are
/// generated at the fixed internal position, unioned in, and their anchor
/// sets merged under the `motherboard` and `standoffs` scopes.
pub fn build_case(config: &CaseConfig) -> Result<Part> {
    config.validate()?;

    // Material thickness with explicit fallback: an unknown material key
    // is not an error, the configured panel thickness takes over.
    let thickness = Material::from_key(&config.material)
        .map(|m| m.spec().thickness)
        .unwrap_or(config.panel_thickness);

    let position = Point::new(config.position[0], config.position[1], config.position[2]);
    let (w, h, d) = (config.width, config.height, config.depth);
    let styles = &config.panels;
    let fans = &config.fans;

    let walls = [
        Wall {
            name: "frontPanel",
            width: w,
            height: h,
            normal: Axis::Y,
            offset: Vec3::new(0.0, d / 2.0, 0.0),
            style: styles.front,
            fan: fans.front.clone(),
        },
        Wall {
            name: "rearPanel",
            width: w,
            height: h,
            normal: Axis::Y,
            offset: Vec3::new(0.0, -d / 2.0, 0.0),
            style: styles.rear,
            fan: fans.rear.clone(),
        },
        Wall {
            name: "topPanel",
            width: w,
            height: d,
            normal: Axis::Z,
            offset: Vec3::new(0.0, 0.0, h / 2.0),
            style: styles.top,
            fan: fans.top.clone(),
        },
        Wall {
            name: "bottomPanel",
            width: w,
            height: d,
            normal: Axis::Z,
            offset: Vec3::new(0.0, 0.0, -h / 2.0),
            style: styles.bottom,
            fan: None,
        },
        Wall {
            name: "leftPanel",
            width: d,
            height: h,
            normal: Axis::X,
            offset: Vec3::new(-w / 2.0, 0.0, 0.0),
            style: styles.side,
            fan: None,
        },
        Wall {
            name: "rightPanel",
            width: d,
            height: h,
            normal: Axis::X,
            offset: Vec3::new(w / 2.0, 0.0, 0.0),
            style: styles.side,
            fan: None,
        },
    ];

    // Walls are generated and unioned in a fixed order; boolean results
    // under kernel tolerance depend on it.
    let mut shell = Solid::empty();
    for wall in walls {
        let mut spec = PanelSpec::new(wall.name, wall.width, wall.height, thickness);
        spec.normal = wall.normal;
        spec.position = position + wall.offset;
        spec.corner_radius = config.corner_radius;
        spec.segments = config.segments;

        let panel = build_wall(spec, wall.style, wall.fan.as_deref(), &config.ventilation)?;
        shell = shell.union(panel.solid());
    }

    // Case anchors: the canonical box set over (width, height, depth),
    // plus the six wall centers in case orientation. The two frames
    // disagree on which axis "height" spans; both sets are part of the
    // assembly's contract.
    let mut anchors = rectangular_anchor_set(w, h, d, position);
    anchors.insert("frontPanelCenter", position + Vec3::new(0.0, d / 2.0, 0.0));
    anchors.insert("rearPanelCenter", position + Vec3::new(0.0, -d / 2.0, 0.0));
    anchors.insert("topPanelCenter", position + Vec3::new(0.0, 0.0, h / 2.0));
    anchors.insert("bottomPanelCenter", position + Vec3::new(0.0, 0.0, -h / 2.0));
    anchors.insert("leftPanelCenter", position + Vec3::new(-w / 2.0, 0.0, 0.0));
    anchors.insert("rightPanelCenter", position + Vec3::new(w / 2.0, 0.0, 0.0));

    let mut solid = shell;
    if let Some(mb) = &config.motherboard {
        let mb_position = Point::new(
            position.x,
            position.y - d / 2.0 + MOTHERBOARD_REAR_OFFSET,
            position.z - h / 2.0 + thickness,
        );

        let standoffs = crate::assembly::build_standoffs(mb, mb_position)?;
        let board = crate::assembly::build_motherboard(mb, mb_position)?;

        solid = solid.union(standoffs.solid()).union(board.solid());
        anchors.merge_scoped(board.anchors(), "motherboard");
        anchors.merge_scoped(standoffs.anchors(), "standoffs");
    }

    Ok(Part::new("case", solid, anchors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MotherboardConfig;
    use crate::error::CadError;
    use casecad_standards::StandardsError;

    fn quick_config() -> CaseConfig {
        // No fillets: keeps the boolean work in tests small.
        CaseConfig {
            corner_radius: 0.0,
            ..CaseConfig::default()
        }
    }

    #[test]
    fn wall_center_anchors_are_in_case_orientation() {
        let case = build_case(&quick_config()).unwrap();
        assert_eq!(
            case.anchors().get(&"topPanelCenter".into()),
            Some(Point::new(0.0, 0.0, 200.0))
        );
        assert_eq!(
            case.anchors().get(&"frontPanelCenter".into()),
            Some(Point::new(0.0, 175.0, 0.0))
        );
        assert_eq!(
            case.anchors().get(&"leftPanelCenter".into()),
            Some(Point::new(-150.0, 0.0, 0.0))
        );
        assert!(!case.solid().is_empty());
    }

    #[test]
    fn base_position_shifts_every_anchor() {
        let mut config = quick_config();
        config.position = [10.0, 20.0, 30.0];
        let case = build_case(&config).unwrap();
        assert_eq!(
            case.anchors().get(&"topPanelCenter".into()),
            Some(Point::new(10.0, 20.0, 230.0))
        );
        assert_eq!(
            case.anchors().get(&"center".into()),
            Some(Point::new(10.0, 20.0, 30.0))
        );
    }

    #[test]
    fn motherboard_anchors_merge_under_scopes() {
        let mut config = quick_config();
        config.motherboard = Some(MotherboardConfig::default());
        let case = build_case(&config).unwrap();

        assert!(case.anchors().get(&"motherboard.cpuSocket".into()).is_some());
        assert!(case.anchors().get(&"motherboard.center".into()).is_some());
        // microATX has 8 mounting holes.
        for i in 0..8 {
            let path = format!("standoffs.standoff_{i}");
            assert!(case.anchors().get(&path.as_str().into()).is_some());
        }
        assert!(case.anchors().get(&"standoffs.standoff_8".into()).is_none());
    }

    #[test]
    fn motherboard_sits_at_the_fixed_internal_position() {
        let mut config = quick_config();
        config.motherboard = Some(MotherboardConfig::default());
        let case = build_case(&config).unwrap();

        let board_center = case.anchors().get(&"motherboard.center".into()).unwrap();
        // Depth axis: 20mm forward of the rear face at -175.
        assert_eq!(board_center.y, -175.0 + MOTHERBOARD_REAR_OFFSET);
    }

    #[test]
    fn unknown_form_factor_aborts_the_case() {
        let mut config = quick_config();
        config.motherboard = Some(MotherboardConfig {
            form_factor: "XL-ATX".to_string(),
            ..MotherboardConfig::default()
        });
        assert!(matches!(
            build_case(&config).unwrap_err(),
            CadError::Standards(StandardsError::UnknownFormFactor(_))
        ));
    }

    #[test]
    fn unknown_material_falls_back_to_panel_thickness() {
        let mut config = quick_config();
        config.material = "unobtainium".to_string();
        config.panel_thickness = 2.0;
        // Generation succeeds; the fallback thickness is not an error.
        let case = build_case(&config).unwrap();
        assert!(!case.solid().is_empty());
    }

    #[test]
    fn styled_faces_build() {
        // A small case and a coarse vent grid keep the boolean work short.
        let mut config = quick_config();
        config.width = 150.0;
        config.height = 160.0;
        config.depth = 140.0;
        config.segments = 16;
        config.ventilation.hole_diameter = 8.0;
        config.ventilation.hole_spacing = 13.0;
        config.panels.front = PanelStyle::Mesh;
        config.panels.side = PanelStyle::Window;
        config.fans.rear = Some("fan120mm".to_string());
        let case = build_case(&config).unwrap();
        assert!(!case.solid().is_empty());
    }

    #[test]
    fn unknown_fan_key_is_an_error() {
        let mut config = quick_config();
        config.fans.front = Some("fan200mm".to_string());
        assert!(matches!(
            build_case(&config).unwrap_err(),
            CadError::Standards(StandardsError::UnknownFanSize(_))
        ));
    }

    #[test]
    fn vent_grid_skips_faces_smaller_than_one_hole() {
        let vent = VentilationConfig::default();
        assert!(vent_holes(44.0, 44.0, &vent).is_empty());
        assert!(!vent_holes(300.0, 400.0, &vent).is_empty());
    }
}
