// SPDX-License-Identifier: MPL-2.0
//! GPS tag reading port definition.
//!
//! The metadata engine is an external collaborator: given a file path it
//! returns the four raw GPS tag values, or fails with a read error. This
//! module defines the trait infrastructure adapters implement, keeping
//! the batch driver independent of the concrete EXIF library.

use crate::domain::gps::RawGpsBundle;
use std::fmt;
use std::path::Path;

// =============================================================================
// GpsReadError
// =============================================================================

/// Errors that can occur while reading GPS tags from a file.
///
/// These are per-file failures: the batch driver logs them and moves on
/// to the next image, never aborting the run.
#[derive(Debug, Clone)]
pub enum GpsReadError {
    /// The file could not be opened or read.
    Io(String),

    /// The metadata engine failed on this file.
    ReadFailed(String),
}

impl fmt::Display for GpsReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpsReadError::Io(msg) => write!(f, "I/O error: {msg}"),
            GpsReadError::ReadFailed(msg) => write!(f, "Failed to read GPS tags: {msg}"),
        }
    }
}

impl std::error::Error for GpsReadError {}

// =============================================================================
// GpsTagReader Trait
// =============================================================================

/// Port for reading raw GPS tags from image files.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the normalizer has no ordering
/// dependency between images, so a parallel driver may share one reader.
///
/// # Example
///
/// ```ignore
/// use geolog::application::port::gps::GpsTagReader;
/// use geolog::domain::gps::normalize;
/// use std::path::Path;
///
/// fn locate(reader: &impl GpsTagReader, path: &Path) {
///     if let Ok(bundle) = reader.read_gps(path) {
///         if let Some(coords) = normalize(&bundle) {
///             println!("{}, {}", coords.latitude(), coords.longitude());
///         }
///     }
/// }
/// ```
pub trait GpsTagReader: Send + Sync {
    /// Reads the four raw GPS tag values from a file.
    ///
    /// A file without GPS tags (or without any metadata block at all) is
    /// not an error: implementations return an empty bundle and leave
    /// the skip decision to the normalizer.
    ///
    /// # Errors
    ///
    /// Returns a [`GpsReadError`] if the file cannot be read.
    fn read_gps(&self, path: &Path) -> Result<RawGpsBundle, GpsReadError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_display() {
        let err = GpsReadError::Io("permission denied".to_string());
        assert!(format!("{err}").contains("permission denied"));

        let err = GpsReadError::ReadFailed("truncated IFD".to_string());
        assert!(format!("{err}").contains("truncated IFD"));
    }

    // Test that the trait is object-safe
    fn _assert_reader_object_safe(_: &dyn GpsTagReader) {}
}
