// SPDX-License-Identifier: MPL-2.0
//! Sexagesimal (degrees-minutes-seconds) parsing and conversion.
//!
//! Metadata engines render packed GPS strings in many shapes
//! (`40 deg 26' 46.5" N`, `40°26'46"N`, `40:26:46N`); the parser
//! tolerates arbitrary non-digit separators and ignores surrounding text.

use crate::domain::gps::{DmsComponents, Hemisphere};
use regex::Regex;
use std::sync::OnceLock;

/// Pattern for a packed sexagesimal angle: degrees, minutes, a decimal
/// seconds value, and one uppercase hemisphere letter, separated by one
/// or more non-digit characters. Explicit ASCII classes so Unicode
/// digits do not match.
fn dms_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"([0-9]+)[^0-9]+([0-9]+)[^0-9]+([0-9]+(?:\.[0-9]+)?)[^0-9]+([NSEW])")
            .expect("DMS pattern is a valid regex")
    })
}

/// Extracts DMS components from a free-form string.
///
/// The first substring matching the expected pattern wins; anything
/// around it is ignored. Returns `None` when no match is found or a
/// numeric component does not fit its type. A failed parse is an
/// expected outcome (the string carried no usable angle), not an error.
#[must_use]
pub fn parse_dms(input: &str) -> Option<DmsComponents> {
    let caps = dms_pattern().captures(input)?;
    let degrees = caps[1].parse().ok()?;
    let minutes = caps[2].parse().ok()?;
    // The captured text is always digits with at most one dot, so this
    // parse can only fail on overflow to infinity, which f64 absorbs.
    let seconds = caps[3].parse().ok()?;
    let hemisphere = Hemisphere::from_letter(caps[4].chars().next()?)?;

    Some(DmsComponents {
        degrees,
        minutes,
        seconds,
        hemisphere,
    })
}

/// Folds DMS components into a signed decimal-degree value.
///
/// `degrees + minutes/60 + seconds/3600`, negated when the hemisphere is
/// `S` or `W`. The sign comes solely from the hemisphere letter. The
/// result is rounded to exactly 5 fractional digits with `f64::round`
/// (half away from zero). Total function; never fails.
#[must_use]
pub fn to_decimal_degrees(dms: &DmsComponents) -> f64 {
    let magnitude =
        f64::from(dms.degrees) + f64::from(dms.minutes) / 60.0 + dms.seconds / 3600.0;
    let signed = if dms.hemisphere.is_negative() {
        -magnitude
    } else {
        magnitude
    };
    (signed * 100_000.0).round() / 100_000.0
}
