//! Case configuration.
//!
//! One [`CaseConfig`] value fully determines one generated assembly:
//! there is no hidden state, and change detection / memoization belongs to
//! the caller. Defaults mirror the project's reference mid-tower
//! dimensions. All numeric fields are millimeters.

use serde::{Deserialize, Serialize};

use crate::error::{CadError, Result};

/// Segment counts below this visibly facet drilled holes, so configuration
/// validation rejects them (generators themselves only require 3).
pub const MIN_CONFIG_SEGMENTS: u32 = 8;

/// Surface treatment for one case face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PanelStyle {
    /// Plain plate.
    #[default]
    Solid,
    /// Plate perforated with a ventilation hole grid.
    Mesh,
    /// Plate with a centered rectangular window cutout.
    Window,
}

/// Per-face panel styles. `side` applies to both the left and right walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PanelStyles {
    /// Front face.
    pub front: PanelStyle,
    /// Top face.
    pub top: PanelStyle,
    /// Left and right faces.
    pub side: PanelStyle,
    /// Rear face (window not supported).
    pub rear: PanelStyle,
    /// Bottom face (window not supported).
    pub bottom: PanelStyle,
}

/// Ventilation grid parameters for mesh-style faces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VentilationConfig {
    /// Diameter of each ventilation hole (mm).
    pub hole_diameter: f64,
    /// Gap between adjacent holes (mm).
    pub hole_spacing: f64,
    /// Unperforated border kept around the grid (mm).
    pub margin: f64,
}

impl Default for VentilationConfig {
    fn default() -> Self {
        Self {
            hole_diameter: 5.0,
            hole_spacing: 2.0,
            margin: 20.0,
        }
    }
}

/// Fan mount drilling per face: a fan-size key from the standards registry
/// (e.g. `"fan120mm"`), or `None` for no mount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FanConfig {
    /// Intake mount on the front face.
    pub front: Option<String>,
    /// Exhaust mount on the rear face.
    pub rear: Option<String>,
    /// Exhaust mount on the top face.
    pub top: Option<String>,
}

/// Motherboard section of the configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotherboardConfig {
    /// Form-factor key from the standards registry (e.g. `"microATX"`).
    pub form_factor: String,
    /// Standoff height between tray and board (mm).
    pub standoff_height: f64,
    /// Whether to attach the I/O shield volume.
    pub io_shield: bool,
}

impl Default for MotherboardConfig {
    fn default() -> Self {
        Self {
            form_factor: "microATX".to_string(),
            standoff_height: 10.0,
            io_shield: true,
        }
    }
}

/// Full configuration for one case generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseConfig {
    /// Case width, left-right (mm).
    pub width: f64,
    /// Case height, vertical (mm).
    pub height: f64,
    /// Case depth, front-back (mm).
    pub depth: f64,
    /// Panel thickness when the material key does not resolve (mm).
    pub panel_thickness: f64,
    /// Edge rounding radius for every panel; 0 disables fillets.
    pub corner_radius: f64,
    /// Material key from the standards registry. An unknown key is not an
    /// error: generation falls back to `panel_thickness`.
    pub material: String,
    /// Base position of the case center.
    pub position: [f64; 3],
    /// Circular tessellation segments for holes and fillets.
    pub segments: u32,
    /// Per-face panel styles.
    pub panels: PanelStyles,
    /// Ventilation grid parameters for mesh faces.
    pub ventilation: VentilationConfig,
    /// Per-face fan mounts.
    pub fans: FanConfig,
    /// Motherboard sub-assembly; `None` generates an empty case.
    pub motherboard: Option<MotherboardConfig>,
}

impl Default for CaseConfig {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 400.0,
            depth: 350.0,
            panel_thickness: 3.0,
            corner_radius: 3.0,
            material: "aluminum3mm".to_string(),
            position: [0.0, 0.0, 0.0],
            segments: 32,
            panels: PanelStyles::default(),
            ventilation: VentilationConfig::default(),
            fans: FanConfig::default(),
            motherboard: None,
        }
    }
}

impl CaseConfig {
    /// Validate the configuration.
    ///
    /// Every dimension is checked here, before any kernel call; the
    /// kernel's failure mode on degenerate input is undefined and must not
    /// become the surfaced error.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("width", self.width),
            ("height", self.height),
            ("depth", self.depth),
            ("panel_thickness", self.panel_thickness),
            ("ventilation.hole_diameter", self.ventilation.hole_diameter),
            ("ventilation.hole_spacing", self.ventilation.hole_spacing),
        ] {
            if value <= 0.0 {
                return Err(CadError::InvalidDimension { field, value });
            }
        }
        if self.corner_radius < 0.0 {
            return Err(CadError::InvalidDimension {
                field: "corner_radius",
                value: self.corner_radius,
            });
        }
        if self.ventilation.margin < 0.0 {
            return Err(CadError::InvalidDimension {
                field: "ventilation.margin",
                value: self.ventilation.margin,
            });
        }
        if self.segments < MIN_CONFIG_SEGMENTS {
            return Err(CadError::InvalidSegments(self.segments));
        }
        if self.panels.rear == PanelStyle::Window || self.panels.bottom == PanelStyle::Window {
            return Err(CadError::InvalidConfig(
                "rear and bottom panels do not take a window".to_string(),
            ));
        }
        if let Some(mb) = &self.motherboard {
            if mb.standoff_height <= 0.0 {
                return Err(CadError::InvalidDimension {
                    field: "motherboard.standoff_height",
                    value: mb.standoff_height,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        CaseConfig::default().validate().unwrap();
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        let mut config = CaseConfig::default();
        config.width = 0.0;
        assert!(matches!(
            config.validate(),
            Err(CadError::InvalidDimension { field: "width", .. })
        ));

        let mut config = CaseConfig::default();
        config.depth = -10.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn coarse_segment_counts_are_rejected() {
        let mut config = CaseConfig::default();
        config.segments = 6;
        assert!(matches!(config.validate(), Err(CadError::InvalidSegments(6))));
    }

    #[test]
    fn rear_window_is_rejected() {
        let mut config = CaseConfig::default();
        config.panels.rear = PanelStyle::Window;
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: CaseConfig = toml::from_str(
            r#"
            width = 220.0
            [panels]
            front = "mesh"
            "#,
        )
        .unwrap();
        assert_eq!(config.width, 220.0);
        assert_eq!(config.height, 400.0);
        assert_eq!(config.panels.front, PanelStyle::Mesh);
        assert_eq!(config.panels.top, PanelStyle::Solid);
    }
}
