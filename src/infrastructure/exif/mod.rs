// SPDX-License-Identifier: MPL-2.0
//! EXIF-backed GPS tag reader.
//!
//! Implements [`GpsTagReader`] with the `kamadak-exif` crate and maps
//! the raw tag values onto [`RawGpsBundle`]:
//!
//! - a degrees/minutes/seconds rational triplet is rendered as a packed
//!   sexagesimal string (`40 deg 26' 46" N`, the letter taken from the
//!   corresponding Ref tag when present), matching what metadata
//!   engines print for these tags;
//! - a single rational, float, or double is a pre-resolved decimal
//!   magnitude;
//! - an ASCII value is passed through as text for the parser to judge;
//! - anything else leaves the axis absent.
//!
//! A file without a readable EXIF block is "no location data", not an
//! error: the adapter returns an empty bundle and only surfaces
//! failures to open the file itself.

use crate::application::port::gps::{GpsReadError, GpsTagReader};
use crate::domain::gps::{GpsTagValue, Hemisphere, RawGpsBundle};
use exif::{Exif, In, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Production [`GpsTagReader`] backed by `kamadak-exif`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExifGpsReader;

impl ExifGpsReader {
    /// Creates a new reader. The reader is stateless and freely shared.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl GpsTagReader for ExifGpsReader {
    fn read_gps(&self, path: &Path) -> Result<RawGpsBundle, GpsReadError> {
        let file = File::open(path).map_err(|e| GpsReadError::Io(e.to_string()))?;
        let mut reader = BufReader::new(file);

        let Ok(exif) = exif::Reader::new().read_from_container(&mut reader) else {
            // Missing or corrupt EXIF block means no location data.
            return Ok(RawGpsBundle::default());
        };

        let latitude_ref = hemisphere_ref(&exif, Tag::GPSLatitudeRef);
        let longitude_ref = hemisphere_ref(&exif, Tag::GPSLongitudeRef);

        Ok(RawGpsBundle {
            latitude: tag_value(&exif, Tag::GPSLatitude, latitude_ref),
            longitude: tag_value(&exif, Tag::GPSLongitude, longitude_ref),
            latitude_ref,
            longitude_ref,
        })
    }
}

/// Reads a hemisphere reference tag (`N`/`S`/`E`/`W` as ASCII).
fn hemisphere_ref(exif: &Exif, tag: Tag) -> Option<Hemisphere> {
    let field = exif.get_field(tag, In::PRIMARY)?;
    match &field.value {
        Value::Ascii(groups) => {
            let first = groups.first()?.first()?;
            Hemisphere::from_letter(char::from(*first))
        }
        _ => None,
    }
}

/// Maps a coordinate tag value onto the bundle's sum type.
fn tag_value(exif: &Exif, tag: Tag, hemisphere: Option<Hemisphere>) -> Option<GpsTagValue> {
    let field = exif.get_field(tag, In::PRIMARY)?;
    match &field.value {
        Value::Rational(rationals) if rationals.len() >= 3 => Some(GpsTagValue::Text(
            render_dms(
                rationals[0].to_f64(),
                rationals[1].to_f64(),
                rationals[2].to_f64(),
                hemisphere,
            ),
        )),
        Value::Rational(rationals) if rationals.len() == 1 => {
            Some(GpsTagValue::Number(rationals[0].to_f64()))
        }
        Value::Float(values) if values.len() == 1 => {
            Some(GpsTagValue::Number(f64::from(values[0])))
        }
        Value::Double(values) if values.len() == 1 => Some(GpsTagValue::Number(values[0])),
        Value::Ascii(groups) => {
            let text = String::from_utf8_lossy(groups.first()?).into_owned();
            Some(GpsTagValue::Text(text))
        }
        _ => None,
    }
}

/// Renders a rational triplet the way metadata engines print it.
///
/// Without a Ref tag there is no hemisphere letter to append; the
/// resulting string will not parse as a sexagesimal angle and the image
/// is skipped, which is what an unreferenced triplet deserves.
fn render_dms(degrees: f64, minutes: f64, seconds: f64, hemisphere: Option<Hemisphere>) -> String {
    match hemisphere {
        Some(h) => format!("{degrees} deg {minutes}' {seconds}\" {}", h.letter()),
        None => format!("{degrees} deg {minutes}' {seconds}\""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gps::parse_dms;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn render_dms_produces_parseable_text() {
        let text = render_dms(40.0, 26.0, 46.0, Some(Hemisphere::North));
        assert_eq!(text, "40 deg 26' 46\" N");

        let dms = parse_dms(&text).expect("rendered text should parse");
        assert_eq!(dms.degrees, 40);
        assert_eq!(dms.minutes, 26);
        assert!((dms.seconds - 46.0).abs() < f64::EPSILON);
        assert_eq!(dms.hemisphere, Hemisphere::North);
    }

    #[test]
    fn render_dms_without_ref_does_not_parse() {
        let text = render_dms(40.0, 26.0, 46.0, None);
        assert!(parse_dms(&text).is_none());
    }

    #[test]
    fn render_dms_keeps_fractional_seconds() {
        let text = render_dms(79.0, 58.0, 56.88, Some(Hemisphere::West));
        let dms = parse_dms(&text).expect("rendered text should parse");
        assert!((dms.seconds - 56.88).abs() < f64::EPSILON);
        assert_eq!(dms.hemisphere, Hemisphere::West);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let reader = ExifGpsReader::new();
        let result = reader.read_gps(Path::new("/nonexistent/image.jpg"));
        assert!(matches!(result, Err(GpsReadError::Io(_))));
    }

    #[test]
    fn file_without_exif_yields_empty_bundle() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("plain.jpg");
        let mut file = File::create(&path).expect("create file");
        file.write_all(b"not actually a jpeg").expect("write");

        let reader = ExifGpsReader::new();
        let bundle = reader.read_gps(&path).expect("read should succeed");
        assert!(bundle.is_empty());
    }
}
