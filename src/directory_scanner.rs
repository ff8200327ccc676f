// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for finding and sorting image files.
//!
//! This module scans a directory for image formats that can carry EXIF
//! data, filters them, and sorts them according to the configured sort
//! order so the report is reproducible run to run.

use crate::config::SortOrder;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Extensions of image formats the EXIF reader understands.
const IMAGE_EXTENSIONS: [&str; 8] = [
    "jpg", "jpeg", "png", "tif", "tiff", "webp", "heic", "heif",
];

/// An ordered list of image files found in one directory.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageList {
    image_files: Vec<PathBuf>,
}

impl ImageList {
    /// Creates a new empty `ImageList`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans a directory (non-recursively) for supported image files and
    /// sorts them.
    ///
    /// Returns an error if the directory cannot be read.
    pub fn scan_directory(directory: &Path, sort_order: SortOrder) -> Result<Self> {
        let mut image_files = Vec::new();

        for entry in std::fs::read_dir(directory)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && is_supported_image(&path) {
                image_files.push(path);
            }
        }

        sort_image_files(&mut image_files, sort_order);

        Ok(Self { image_files })
    }

    /// Returns the files in processing order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.image_files.iter().map(PathBuf::as_path)
    }

    /// Returns the first image file in the list, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Path> {
        self.image_files.first().map(PathBuf::as_path)
    }

    /// Returns the total number of image files in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.image_files.len()
    }

    /// Checks if the image list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.image_files.is_empty()
    }
}

/// Checks if a file has a supported image extension (case-insensitive).
fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Sorts image file paths according to the specified sort order.
fn sort_image_files(image_files: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            image_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            image_files.sort_by(|a, b| {
                let a_time = a
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                let b_time = b
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                a_time.cmp(&b_time)
            });
        }
        SortOrder::CreatedDate => {
            image_files.sort_by(|a, b| {
                let a_time = a
                    .metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                let b_time = b
                    .metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                a_time.cmp(&b_time)
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_test_file(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake image data")
            .expect("failed to write test file");
        path
    }

    #[test]
    fn scan_directory_finds_all_images() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_file(temp_dir.path(), "a.jpg");
        create_test_file(temp_dir.path(), "b.png");
        create_test_file(temp_dir.path(), "c.tif");
        create_test_file(temp_dir.path(), "not_image.txt");

        let list = ImageList::scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert_eq!(list.len(), 3);
    }

    #[test]
    fn scan_directory_sorts_alphabetically() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img_c = create_test_file(temp_dir.path(), "c.jpg");
        let img_a = create_test_file(temp_dir.path(), "a.jpg");
        let img_b = create_test_file(temp_dir.path(), "b.jpg");

        let list = ImageList::scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("failed to scan directory");

        let files: Vec<&Path> = list.iter().collect();
        assert_eq!(files, vec![img_a.as_path(), img_b.as_path(), img_c.as_path()]);
    }

    #[test]
    fn scan_directory_ignores_subdirectories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_file(temp_dir.path(), "a.jpg");
        let subdir = temp_dir.path().join("nested.jpg");
        fs::create_dir(&subdir).expect("failed to create subdirectory");

        let list = ImageList::scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert_eq!(list.len(), 1);
    }

    #[test]
    fn scan_directory_handles_empty_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let list = ImageList::scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert!(list.is_empty());
        assert_eq!(list.first(), None);
    }

    #[test]
    fn scan_directory_errors_on_missing_directory() {
        let result = ImageList::scan_directory(
            Path::new("/nonexistent/directory"),
            SortOrder::Alphabetical,
        );
        assert!(result.is_err());
    }

    #[test]
    fn is_supported_image_recognizes_exif_capable_extensions() {
        assert!(is_supported_image(Path::new("test.jpg")));
        assert!(is_supported_image(Path::new("test.JPG")));
        assert!(is_supported_image(Path::new("test.jpeg")));
        assert!(is_supported_image(Path::new("test.png")));
        assert!(is_supported_image(Path::new("test.tiff")));
        assert!(is_supported_image(Path::new("test.webp")));
        assert!(is_supported_image(Path::new("test.heic")));
    }

    #[test]
    fn is_supported_image_rejects_other_formats() {
        assert!(!is_supported_image(Path::new("test.txt")));
        assert!(!is_supported_image(Path::new("test.mp4")));
        assert!(!is_supported_image(Path::new("test.gif")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }
}
