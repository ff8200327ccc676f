// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines the abstract interfaces that infrastructure
//! adapters implement. The traits use only domain types, so the batch
//! driver stays independent of the concrete metadata engine.
//!
//! # Available Ports
//!
//! - [`gps`]: raw GPS tag reading

pub mod gps;

// Re-export main types for convenience
pub use gps::{GpsReadError, GpsTagReader};
