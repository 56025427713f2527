#![warn(missing_docs)]

//! casecad — parametric PC case generation.
//!
//! One [`CaseConfig`] value in, one [`Part`] out: a boolean-composed case
//! solid paired with a named anchor set, ready for meshing and STL
//! export. Anchors let independently generated parts align against each
//! other by name instead of by coordinate arithmetic.
//!
//! Generation is a pure function of its configuration: no shared state,
//! no I/O, safe to call concurrently with independent configs. The boolean
//! kernel is external; this crate drives it through the [`solid`] facade.
//!
//! # Example
//!
//! ```rust,no_run
//! use casecad::{generate_case, CaseConfig, MotherboardConfig};
//!
//! let mut config = CaseConfig::default();
//! config.motherboard = Some(MotherboardConfig::default());
//!
//! let case = generate_case(&config).unwrap();
//! println!("{} anchors", case.anchors().len());
//! case.write_stl("case.stl").unwrap();
//! ```

pub mod anchor;
pub mod assembly;
pub mod config;
pub mod error;
pub mod export;
pub mod mesh;
pub mod primitive;
pub mod solid;

pub use anchor::{rectangular_anchor_set, AnchorPath, AnchorSet, Part, Point, Vec3};
pub use config::{
    CaseConfig, FanConfig, MotherboardConfig, PanelStyle, PanelStyles, VentilationConfig,
};
pub use error::{CadError, Result};
pub use mesh::TriMesh;
pub use primitive::{Axis, Countersink, HolePattern, HoleSpec, PanelSpec};
pub use solid::Solid;

use assembly::build_case;

/// Generate a PC case from a configuration.
///
/// The main entry point: validates the configuration, resolves standards,
/// builds and composes every sub-assembly, and returns the finished part.
pub fn generate_case(config: &CaseConfig) -> Result<Part> {
    build_case(config)
}
