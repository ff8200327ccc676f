// SPDX-License-Identifier: MPL-2.0
//! Location report records and rendering.
//!
//! One record per successfully located image, rendered as three lines
//! (file name, latitude, longitude) with records separated by a blank
//! line. This layout is the report's de facto file format and is
//! preserved exactly for compatibility with existing consumers.

use crate::domain::gps::GpsCoordinates;
use crate::error::Result;
use std::fs;
use std::path::Path;

// =============================================================================
// LocationRecord
// =============================================================================

/// One image's entry in the report: its file name and the normalized
/// coordinates. Only created when both axes normalized; a partial pair
/// never becomes a record.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRecord {
    file_name: String,
    coordinates: GpsCoordinates,
}

impl LocationRecord {
    /// Creates a record for one located image.
    #[must_use]
    pub fn new(file_name: impl Into<String>, coordinates: GpsCoordinates) -> Self {
        Self {
            file_name: file_name.into(),
            coordinates,
        }
    }

    /// Returns the image file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the normalized coordinates.
    #[must_use]
    pub fn coordinates(&self) -> GpsCoordinates {
        self.coordinates
    }

    /// Renders the record's three-line block, trailing newline included.
    ///
    /// Coordinates render through `f64`'s `Display` (shortest round-trip
    /// form, so `1.5` rather than `1.50000`).
    #[must_use]
    pub fn to_block(&self) -> String {
        format!(
            "{}\n{}\n{}\n",
            self.file_name,
            self.coordinates.latitude(),
            self.coordinates.longitude()
        )
    }
}

// =============================================================================
// LocationReport
// =============================================================================

/// The ordered, append-only collection of location records for one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationReport {
    records: Vec<LocationRecord>,
}

impl LocationReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record. Records keep their insertion order.
    pub fn push(&mut self, record: LocationRecord) {
        self.records.push(record);
    }

    /// Returns the records in report order.
    #[must_use]
    pub fn records(&self) -> &[LocationRecord] {
        &self.records
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Checks if the report has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Renders the full report text: record blocks joined by a single
    /// newline, which reads as blank-line-separated records. An empty
    /// report renders as an empty string.
    #[must_use]
    pub fn render(&self) -> String {
        self.records
            .iter()
            .map(LocationRecord::to_block)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Writes the rendered report to a file.
    ///
    /// The file is written even when the report is empty, so a run over
    /// a directory without any located image leaves an empty report
    /// rather than a stale one.
    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render())?;
        Ok(())
    }
}
