//! Assembly composition.
//!
//! Assemblies nest primitives and sub-assemblies into larger parts: the
//! motherboard tray stack (board plate, mounting holes, standoffs) and the
//! case itself (six walls plus the optional motherboard stack). Each
//! composition step produces one solid and one anchor set, with nested
//! anchor sets merged under a scope segment.

pub mod case;
pub mod motherboard;

pub use case::{build_case, MOTHERBOARD_REAR_OFFSET};
pub use motherboard::{build_motherboard, build_standoffs, MOUNTING_HOLE_DIAMETER};
