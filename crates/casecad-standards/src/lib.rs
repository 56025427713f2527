#![warn(missing_docs)]

//! PC industry dimension standards for the casecad generator.
//!
//! This crate is the read-only registry the generators draw from:
//! motherboard form factors, panel materials, fan sizes, power-supply form
//! factors, and drive bays, each with their standardized dimensions and
//! mounting-hole layouts in millimeters.
//!
//! Every standard is a closed enum keyed by the string names used in
//! configuration files. Lookup by key returns a typed error for unknown
//! keys instead of substituting geometry; the spec tables themselves are
//! `&'static` data and never change at runtime.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by registry lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StandardsError {
    /// No motherboard form factor is registered under this key.
    #[error("unknown motherboard form factor \"{0}\"")]
    UnknownFormFactor(String),

    /// No material is registered under this key.
    #[error("unknown material \"{0}\"")]
    UnknownMaterial(String),

    /// No fan size is registered under this key.
    #[error("unknown fan size \"{0}\"")]
    UnknownFanSize(String),

    /// No power-supply form factor is registered under this key.
    #[error("unknown power supply form factor \"{0}\"")]
    UnknownPsuFormFactor(String),

    /// No drive bay is registered under this key.
    #[error("unknown drive bay \"{0}\"")]
    UnknownDriveBay(String),
}

/// Result type for registry lookups.
pub type Result<T> = std::result::Result<T, StandardsError>;

/// A 2D mounting-hole offset, relative to the spec's bottom-left corner (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoleOffset {
    /// Offset along the spec width axis.
    pub x: f64,
    /// Offset along the spec height axis.
    pub y: f64,
}

const fn hole(x: f64, y: f64) -> HoleOffset {
    HoleOffset { x, y }
}

// =============================================================================
// Motherboard form factors
// =============================================================================

/// Dimensions and mounting layout for one motherboard form factor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MotherboardSpec {
    /// Display name (e.g. "ATX").
    pub name: &'static str,
    /// Board width (mm).
    pub width: f64,
    /// Board height (mm).
    pub height: f64,
    /// PCB thickness (mm).
    pub thickness: f64,
    /// Mounting-hole offsets from the board's bottom-left corner, in the
    /// standard's listed order. The order is load-bearing: standoff anchors
    /// are indexed by position in this list.
    pub mounting_holes: &'static [HoleOffset],
    /// I/O shield cutout width (mm).
    pub io_shield_width: f64,
    /// I/O shield cutout height (mm).
    pub io_shield_height: f64,
}

static ATX: MotherboardSpec = MotherboardSpec {
    name: "ATX",
    width: 305.0,
    height: 244.0,
    thickness: 1.6,
    mounting_holes: &[
        hole(6.35, 6.35),
        hole(6.35, 193.68),
        hole(146.05, 193.68),
        hole(146.05, 6.35),
        hole(226.06, 6.35),
        hole(226.06, 193.68),
        hole(298.45, 193.68),
        hole(298.45, 6.35),
        hole(298.45, 116.84),
    ],
    io_shield_width: 158.75,
    io_shield_height: 44.45,
};

static MICRO_ATX: MotherboardSpec = MotherboardSpec {
    name: "microATX",
    width: 244.0,
    height: 244.0,
    thickness: 1.6,
    mounting_holes: &[
        hole(6.35, 6.35),
        hole(6.35, 193.68),
        hole(146.05, 193.68),
        hole(146.05, 6.35),
        hole(226.06, 6.35),
        hole(226.06, 193.68),
        hole(237.49, 193.68),
        hole(237.49, 6.35),
    ],
    io_shield_width: 158.75,
    io_shield_height: 44.45,
};

static MINI_ITX: MotherboardSpec = MotherboardSpec {
    name: "Mini-ITX",
    width: 170.0,
    height: 170.0,
    thickness: 1.6,
    mounting_holes: &[
        hole(6.35, 6.35),
        hole(6.35, 163.65),
        hole(163.65, 163.65),
        hole(163.65, 6.35),
    ],
    io_shield_width: 158.75,
    io_shield_height: 44.45,
};

/// Motherboard form factor classes supported by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormFactor {
    /// Full-size ATX (305 x 244 mm, 9 mounting holes).
    Atx,
    /// microATX (244 x 244 mm, 8 mounting holes).
    MicroAtx,
    /// Mini-ITX (170 x 170 mm, 4 mounting holes).
    MiniItx,
}

impl FormFactor {
    /// All registered form factors.
    pub const ALL: [FormFactor; 3] = [FormFactor::Atx, FormFactor::MicroAtx, FormFactor::MiniItx];

    /// Resolve a configuration key (e.g. `"microATX"`).
    pub fn from_key(key: &str) -> Result<Self> {
        match key {
            "ATX" => Ok(FormFactor::Atx),
            "microATX" => Ok(FormFactor::MicroAtx),
            "miniITX" => Ok(FormFactor::MiniItx),
            _ => Err(StandardsError::UnknownFormFactor(key.to_string())),
        }
    }

    /// The dimension spec for this form factor.
    pub fn spec(self) -> &'static MotherboardSpec {
        match self {
            FormFactor::Atx => &ATX,
            FormFactor::MicroAtx => &MICRO_ATX,
            FormFactor::MiniItx => &MINI_ITX,
        }
    }
}

// =============================================================================
// Panel materials
// =============================================================================

/// Sheet material for case panels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialSpec {
    /// Display name.
    pub name: &'static str,
    /// Sheet thickness (mm).
    pub thickness: f64,
    /// Display color as a hex string (rendering hint only).
    pub color: &'static str,
    /// Density in g/cm^3.
    pub density: f64,
}

static ALUMINUM_3MM: MaterialSpec = MaterialSpec {
    name: "Aluminum 3mm",
    thickness: 3.0,
    color: "#A9A9A9",
    density: 2.7,
};

static ALUMINUM_5MM: MaterialSpec = MaterialSpec {
    name: "Aluminum 5mm",
    thickness: 5.0,
    color: "#A9A9A9",
    density: 2.7,
};

static ACRYLIC_3MM: MaterialSpec = MaterialSpec {
    name: "Acrylic 3mm",
    thickness: 3.0,
    color: "#B5D3E7",
    density: 1.18,
};

static ACRYLIC_5MM: MaterialSpec = MaterialSpec {
    name: "Acrylic 5mm",
    thickness: 5.0,
    color: "#B5D3E7",
    density: 1.18,
};

/// Registered panel materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    /// 3 mm aluminum sheet.
    Aluminum3mm,
    /// 5 mm aluminum sheet.
    Aluminum5mm,
    /// 3 mm acrylic sheet.
    Acrylic3mm,
    /// 5 mm acrylic sheet.
    Acrylic5mm,
}

impl Material {
    /// All registered materials.
    pub const ALL: [Material; 4] = [
        Material::Aluminum3mm,
        Material::Aluminum5mm,
        Material::Acrylic3mm,
        Material::Acrylic5mm,
    ];

    /// Resolve a configuration key (e.g. `"aluminum3mm"`).
    pub fn from_key(key: &str) -> Result<Self> {
        match key {
            "aluminum3mm" => Ok(Material::Aluminum3mm),
            "aluminum5mm" => Ok(Material::Aluminum5mm),
            "acrylic3mm" => Ok(Material::Acrylic3mm),
            "acrylic5mm" => Ok(Material::Acrylic5mm),
            _ => Err(StandardsError::UnknownMaterial(key.to_string())),
        }
    }

    /// The sheet spec for this material.
    pub fn spec(self) -> &'static MaterialSpec {
        match self {
            Material::Aluminum3mm => &ALUMINUM_3MM,
            Material::Aluminum5mm => &ALUMINUM_5MM,
            Material::Acrylic3mm => &ACRYLIC_3MM,
            Material::Acrylic5mm => &ACRYLIC_5MM,
        }
    }
}

// =============================================================================
// Fans
// =============================================================================

/// Dimensions for one standard fan size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FanSpec {
    /// Display name.
    pub name: &'static str,
    /// Frame edge length (mm).
    pub size: f64,
    /// Frame thickness (mm).
    pub thickness: f64,
    /// Center-to-center distance between mounting holes (mm).
    pub mounting_hole_distance: f64,
    /// Mounting hole diameter (mm).
    pub mounting_hole_diameter: f64,
}

static FAN_40MM: FanSpec = FanSpec {
    name: "40mm",
    size: 40.0,
    thickness: 10.0,
    mounting_hole_distance: 32.0,
    mounting_hole_diameter: 3.0,
};

static FAN_80MM: FanSpec = FanSpec {
    name: "80mm",
    size: 80.0,
    thickness: 25.0,
    mounting_hole_distance: 71.5,
    mounting_hole_diameter: 4.0,
};

static FAN_92MM: FanSpec = FanSpec {
    name: "92mm",
    size: 92.0,
    thickness: 25.0,
    mounting_hole_distance: 82.5,
    mounting_hole_diameter: 4.0,
};

static FAN_120MM: FanSpec = FanSpec {
    name: "120mm",
    size: 120.0,
    thickness: 25.0,
    mounting_hole_distance: 105.0,
    mounting_hole_diameter: 4.5,
};

static FAN_140MM: FanSpec = FanSpec {
    name: "140mm",
    size: 140.0,
    thickness: 25.0,
    mounting_hole_distance: 124.5,
    mounting_hole_diameter: 4.5,
};

/// Registered fan sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FanSize {
    /// 40 mm fan.
    Fan40mm,
    /// 80 mm fan.
    Fan80mm,
    /// 92 mm fan.
    Fan92mm,
    /// 120 mm fan.
    Fan120mm,
    /// 140 mm fan.
    Fan140mm,
}

impl FanSize {
    /// All registered fan sizes.
    pub const ALL: [FanSize; 5] = [
        FanSize::Fan40mm,
        FanSize::Fan80mm,
        FanSize::Fan92mm,
        FanSize::Fan120mm,
        FanSize::Fan140mm,
    ];

    /// Resolve a configuration key (e.g. `"fan120mm"`).
    pub fn from_key(key: &str) -> Result<Self> {
        match key {
            "fan40mm" => Ok(FanSize::Fan40mm),
            "fan80mm" => Ok(FanSize::Fan80mm),
            "fan92mm" => Ok(FanSize::Fan92mm),
            "fan120mm" => Ok(FanSize::Fan120mm),
            "fan140mm" => Ok(FanSize::Fan140mm),
            _ => Err(StandardsError::UnknownFanSize(key.to_string())),
        }
    }

    /// The dimension spec for this fan size.
    pub fn spec(self) -> &'static FanSpec {
        match self {
            FanSize::Fan40mm => &FAN_40MM,
            FanSize::Fan80mm => &FAN_80MM,
            FanSize::Fan92mm => &FAN_92MM,
            FanSize::Fan120mm => &FAN_120MM,
            FanSize::Fan140mm => &FAN_140MM,
        }
    }
}

// =============================================================================
// Power supplies
// =============================================================================

/// Dimensions for one power-supply form factor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PsuSpec {
    /// Display name.
    pub name: &'static str,
    /// Body width (mm).
    pub width: f64,
    /// Body height (mm).
    pub height: f64,
    /// Body length (mm).
    pub length: f64,
    /// Mounting-hole offsets on the rear face, bottom-left origin.
    pub mounting_holes: &'static [HoleOffset],
    /// Intake fan diameter (mm).
    pub fan_diameter: f64,
}

static PSU_ATX: PsuSpec = PsuSpec {
    name: "ATX",
    width: 150.0,
    height: 86.0,
    length: 140.0,
    mounting_holes: &[hole(10.0, 10.0), hole(10.0, 76.0), hole(140.0, 10.0), hole(140.0, 76.0)],
    fan_diameter: 80.0,
};

static PSU_SFX: PsuSpec = PsuSpec {
    name: "SFX",
    width: 125.0,
    height: 63.5,
    length: 100.0,
    mounting_holes: &[
        hole(10.0, 10.0),
        hole(10.0, 53.5),
        hole(115.0, 10.0),
        hole(115.0, 53.5),
    ],
    fan_diameter: 60.0,
};

static PSU_FLEX_ATX: PsuSpec = PsuSpec {
    name: "Flex ATX",
    width: 81.5,
    height: 40.5,
    length: 150.0,
    mounting_holes: &[
        hole(10.0, 10.0),
        hole(10.0, 30.5),
        hole(71.5, 10.0),
        hole(71.5, 30.5),
    ],
    fan_diameter: 40.0,
};

/// Registered power-supply form factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PsuFormFactor {
    /// Full-size ATX supply.
    Atx,
    /// SFX small-form-factor supply.
    Sfx,
    /// Flex ATX supply.
    FlexAtx,
}

impl PsuFormFactor {
    /// All registered PSU form factors.
    pub const ALL: [PsuFormFactor; 3] =
        [PsuFormFactor::Atx, PsuFormFactor::Sfx, PsuFormFactor::FlexAtx];

    /// Resolve a configuration key (e.g. `"SFX"`).
    pub fn from_key(key: &str) -> Result<Self> {
        match key {
            "ATX" => Ok(PsuFormFactor::Atx),
            "SFX" => Ok(PsuFormFactor::Sfx),
            "FlexATX" => Ok(PsuFormFactor::FlexAtx),
            _ => Err(StandardsError::UnknownPsuFormFactor(key.to_string())),
        }
    }

    /// The dimension spec for this PSU form factor.
    pub fn spec(self) -> &'static PsuSpec {
        match self {
            PsuFormFactor::Atx => &PSU_ATX,
            PsuFormFactor::Sfx => &PSU_SFX,
            PsuFormFactor::FlexAtx => &PSU_FLEX_ATX,
        }
    }
}

// =============================================================================
// Storage drives
// =============================================================================

/// Dimensions for one drive bay class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriveSpec {
    /// Display name.
    pub name: &'static str,
    /// Drive width (mm).
    pub width: f64,
    /// Drive height (mm).
    pub height: f64,
    /// Drive length (mm).
    pub length: f64,
}

static HDD_35: DriveSpec = DriveSpec {
    name: "3.5\" HDD",
    width: 101.6,
    height: 26.1,
    length: 147.0,
};

static HDD_25: DriveSpec = DriveSpec {
    name: "2.5\" HDD/SSD",
    width: 69.85,
    height: 9.5,
    length: 100.0,
};

static M2: DriveSpec = DriveSpec {
    name: "M.2 SSD",
    width: 22.0,
    height: 3.5,
    length: 80.0,
};

/// Registered drive bay classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DriveBay {
    /// 3.5 inch hard drive.
    Hdd35,
    /// 2.5 inch hard drive or SSD.
    Hdd25,
    /// M.2 SSD (2280).
    M2,
}

impl DriveBay {
    /// All registered drive bays.
    pub const ALL: [DriveBay; 3] = [DriveBay::Hdd35, DriveBay::Hdd25, DriveBay::M2];

    /// Resolve a configuration key (e.g. `"hdd35inch"`).
    pub fn from_key(key: &str) -> Result<Self> {
        match key {
            "hdd35inch" => Ok(DriveBay::Hdd35),
            "hdd25inch" => Ok(DriveBay::Hdd25),
            "m2" => Ok(DriveBay::M2),
            _ => Err(StandardsError::UnknownDriveBay(key.to_string())),
        }
    }

    /// The dimension spec for this drive bay.
    pub fn spec(self) -> &'static DriveSpec {
        match self {
            DriveBay::Hdd35 => &HDD_35,
            DriveBay::Hdd25 => &HDD_25,
            DriveBay::M2 => &M2,
        }
    }
}

// =============================================================================
// PCI expansion
// =============================================================================

/// PCI Express expansion slot constants (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PciExpansion {
    /// Slot opening width.
    pub slot_width: f64,
    /// Slot opening height.
    pub slot_height: f64,
    /// Center-to-center spacing between adjacent slots.
    pub slot_spacing: f64,
    /// Bracket height.
    pub bracket_height: f64,
    /// Bracket width.
    pub bracket_width: f64,
}

/// The PCI Express slot standard.
pub static PCI_EXPANSION: PciExpansion = PciExpansion {
    slot_width: 15.0,
    slot_height: 11.15,
    slot_spacing: 20.32,
    bracket_height: 120.0,
    bracket_width: 18.42,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atx_dimensions() {
        let spec = FormFactor::from_key("ATX").unwrap().spec();
        assert_eq!(spec.width, 305.0);
        assert_eq!(spec.height, 244.0);
        assert_eq!(spec.mounting_holes.len(), 9);
    }

    #[test]
    fn micro_atx_and_mini_itx_hole_counts() {
        assert_eq!(FormFactor::MicroAtx.spec().mounting_holes.len(), 8);
        assert_eq!(FormFactor::MiniItx.spec().mounting_holes.len(), 4);
    }

    #[test]
    fn unknown_form_factor_is_typed() {
        let err = FormFactor::from_key("XL-ATX").unwrap_err();
        assert_eq!(err, StandardsError::UnknownFormFactor("XL-ATX".to_string()));
    }

    #[test]
    fn material_lookup() {
        assert_eq!(Material::from_key("acrylic5mm").unwrap().spec().thickness, 5.0);
        assert!(Material::from_key("cardboard").is_err());
    }

    #[test]
    fn fan_table_matches_inset_rule_for_120mm() {
        // 120mm fans follow the 7.5mm-per-side corner inset exactly.
        let spec = FanSize::Fan120mm.spec();
        assert_eq!(spec.mounting_hole_distance, spec.size - 15.0);
    }

    #[test]
    fn every_form_factor_key_round_trips() {
        for ff in FormFactor::ALL {
            let key = match ff {
                FormFactor::Atx => "ATX",
                FormFactor::MicroAtx => "microATX",
                FormFactor::MiniItx => "miniITX",
            };
            assert_eq!(FormFactor::from_key(key).unwrap(), ff);
        }
    }
}
