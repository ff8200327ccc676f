// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure business logic.
//!
//! Types and functions in this layer have no I/O and no dependency on
//! the metadata engine or the filesystem.
//!
//! - [`gps`]: raw GPS value types and coordinate normalization

pub mod gps;
