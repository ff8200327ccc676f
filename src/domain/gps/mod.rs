// SPDX-License-Identifier: MPL-2.0
//! GPS domain logic.
//!
//! The core of the crate: pure types for raw GPS metadata, the
//! sexagesimal parser, the degree converter, and the normalizer that
//! folds one image's raw tag bundle into signed decimal-degree
//! coordinates. Nothing here performs I/O or holds state.

pub mod dms;
pub mod normalizer;
pub mod types;

// Re-export commonly used items
pub use dms::{parse_dms, to_decimal_degrees};
pub use normalizer::normalize;
pub use types::{DmsComponents, GpsCoordinates, GpsTagValue, Hemisphere, RawGpsBundle};
