//! Export boundary adapters.
//!
//! The core hands finished parts to these adapters; nothing here feeds
//! back into generation.

pub mod stl;

pub use stl::{export_stl, to_stl_bytes};
