// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`, wrapping external dependencies.
//!
//! # Available Adapters
//!
//! - [`exif`]: GPS tag reading via `kamadak-exif` (implements
//!   [`GpsTagReader`])
//!
//! [`GpsTagReader`]: crate::application::port::GpsTagReader

pub mod exif;

// Re-export main types for convenience
pub use exif::ExifGpsReader;
