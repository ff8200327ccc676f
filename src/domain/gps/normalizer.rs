// SPDX-License-Identifier: MPL-2.0
//! Coordinate normalization.
//!
//! Folds one image's raw GPS tag bundle into a signed decimal-degree
//! pair, or decides the bundle carries no usable location. Pure logic:
//! no I/O, no state, total over every input shape.

use crate::domain::gps::dms::{parse_dms, to_decimal_degrees};
use crate::domain::gps::{GpsCoordinates, GpsTagValue, Hemisphere, RawGpsBundle};

/// Normalizes a raw GPS bundle into signed decimal-degree coordinates.
///
/// Returns `None` when the bundle is unusable: a value is absent or an
/// empty string, a sexagesimal string fails to parse, or the two axes
/// use mixed representations. An unusable bundle is an expected outcome
/// ("this image has no location"), never an error.
///
/// The two representations treat hemisphere information differently,
/// and the split is deliberate:
/// - numeric magnitudes take their sign from the separate reference
///   tags (`S` negates latitude, `W` negates longitude, anything else
///   is a no-op) and pass the source precision through unrounded;
/// - sexagesimal strings take their sign from the letter embedded in
///   the string, the reference tags are ignored, and the result is
///   rounded to 5 fractional digits by the conversion.
#[must_use]
pub fn normalize(bundle: &RawGpsBundle) -> Option<GpsCoordinates> {
    let lat_raw = bundle.latitude.as_ref().filter(|v| v.is_present())?;
    let lon_raw = bundle.longitude.as_ref().filter(|v| v.is_present())?;

    match (lat_raw, lon_raw) {
        (GpsTagValue::Number(lat), GpsTagValue::Number(lon)) => {
            let latitude = if bundle.latitude_ref == Some(Hemisphere::South) {
                -lat
            } else {
                *lat
            };
            let longitude = if bundle.longitude_ref == Some(Hemisphere::West) {
                -lon
            } else {
                *lon
            };
            Some(GpsCoordinates::new(latitude, longitude))
        }
        (GpsTagValue::Text(lat), GpsTagValue::Text(lon)) => {
            let lat_dms = parse_dms(lat)?;
            let lon_dms = parse_dms(lon)?;
            Some(GpsCoordinates::new(
                to_decimal_degrees(&lat_dms),
                to_decimal_degrees(&lon_dms),
            ))
        }
        _ => None,
    }
}
