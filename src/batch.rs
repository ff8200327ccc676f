// SPDX-License-Identifier: MPL-2.0
//! Batch driver: scan, read, normalize, collect.
//!
//! Thin plumbing around the normalizer. Files are processed one at a
//! time in the configured order; a per-file read failure is logged to
//! stderr and never aborts the batch, while an unreadable directory is
//! a fatal error for the run.

use crate::application::port::gps::GpsTagReader;
use crate::config::SortOrder;
use crate::directory_scanner::ImageList;
use crate::domain::gps::normalize;
use crate::error::Result;
use crate::report::{LocationRecord, LocationReport};
use std::fmt;
use std::path::Path;

// =============================================================================
// RunSummary
// =============================================================================

/// Counters for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Image files found by the scanner.
    pub scanned: usize,

    /// Files that produced a report record.
    pub recorded: usize,

    /// Files read successfully but without usable GPS data.
    pub skipped: usize,

    /// Files whose metadata could not be read.
    pub failed: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files scanned, {} located, {} without GPS data, {} failed",
            self.scanned, self.recorded, self.skipped, self.failed
        )
    }
}

// =============================================================================
// Batch processing
// =============================================================================

/// Processes every image in a directory into a location report.
///
/// Per file: read the raw GPS tags through `reader`, normalize, and
/// either append a record or skip. Read failures are reported on stderr
/// (suppressed by `quiet`) and counted, not propagated.
///
/// # Errors
///
/// Returns an error only when the directory itself cannot be scanned.
pub fn process_directory(
    directory: &Path,
    reader: &impl GpsTagReader,
    sort_order: SortOrder,
    quiet: bool,
) -> Result<(LocationReport, RunSummary)> {
    let images = ImageList::scan_directory(directory, sort_order)?;

    let mut report = LocationReport::new();
    let mut summary = RunSummary {
        scanned: images.len(),
        ..RunSummary::default()
    };

    for path in images.iter() {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        match reader.read_gps(path) {
            Ok(bundle) => match normalize(&bundle) {
                Some(coordinates) => {
                    report.push(LocationRecord::new(file_name, coordinates));
                    summary.recorded += 1;
                }
                None => summary.skipped += 1,
            },
            Err(err) => {
                if !quiet {
                    eprintln!("Failed to process {file_name}: {err}");
                }
                summary.failed += 1;
            }
        }
    }

    Ok((report, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::gps::GpsReadError;
    use crate::domain::gps::{GpsTagValue, Hemisphere, RawGpsBundle};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    /// Test double keyed by file name: `decimal` and `dms` carry
    /// locations, `empty` has none, `broken` fails to read.
    struct FakeReader;

    impl GpsTagReader for FakeReader {
        fn read_gps(&self, path: &Path) -> std::result::Result<RawGpsBundle, GpsReadError> {
            let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
            match name {
                "decimal.jpg" => Ok(RawGpsBundle {
                    latitude: Some(GpsTagValue::Number(48.8566)),
                    longitude: Some(GpsTagValue::Number(2.3522)),
                    latitude_ref: Some(Hemisphere::South),
                    longitude_ref: None,
                }),
                "dms.jpg" => Ok(RawGpsBundle {
                    latitude: Some(GpsTagValue::Text("40 26 46 N".into())),
                    longitude: Some(GpsTagValue::Text("79 58 56 W".into())),
                    ..RawGpsBundle::default()
                }),
                "broken.jpg" => Err(GpsReadError::ReadFailed("truncated IFD".into())),
                _ => Ok(RawGpsBundle::default()),
            }
        }
    }

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"fake image data").expect("failed to create test file");
        path
    }

    #[test]
    fn batch_collects_records_and_counts_outcomes() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        touch(temp_dir.path(), "decimal.jpg");
        touch(temp_dir.path(), "dms.jpg");
        touch(temp_dir.path(), "empty.jpg");
        touch(temp_dir.path(), "broken.jpg");
        touch(temp_dir.path(), "notes.txt");

        let (report, summary) =
            process_directory(temp_dir.path(), &FakeReader, SortOrder::Alphabetical, true)
                .expect("batch should succeed");

        assert_eq!(summary.scanned, 4);
        assert_eq!(summary.recorded, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn batch_preserves_scan_order_and_exact_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        touch(temp_dir.path(), "dms.jpg");
        touch(temp_dir.path(), "decimal.jpg");

        let (report, _) =
            process_directory(temp_dir.path(), &FakeReader, SortOrder::Alphabetical, true)
                .expect("batch should succeed");

        assert_eq!(
            report.render(),
            "decimal.jpg\n-48.8566\n2.3522\n\ndms.jpg\n40.44611\n-79.98222\n"
        );
    }

    #[test]
    fn read_failure_does_not_abort_the_batch() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        touch(temp_dir.path(), "broken.jpg");
        touch(temp_dir.path(), "dms.jpg");

        let (report, summary) =
            process_directory(temp_dir.path(), &FakeReader, SortOrder::Alphabetical, true)
                .expect("batch should succeed");

        assert_eq!(summary.failed, 1);
        assert_eq!(report.len(), 1);
        assert_eq!(report.records()[0].file_name(), "dms.jpg");
    }

    #[test]
    fn missing_directory_is_fatal() {
        let result = process_directory(
            Path::new("/nonexistent/directory"),
            &FakeReader,
            SortOrder::Alphabetical,
            true,
        );
        assert!(result.is_err());
    }

    #[test]
    fn summary_display_reads_naturally() {
        let summary = RunSummary {
            scanned: 5,
            recorded: 2,
            skipped: 2,
            failed: 1,
        };
        assert_eq!(
            format!("{summary}"),
            "5 files scanned, 2 located, 2 without GPS data, 1 failed"
        );
    }
}
