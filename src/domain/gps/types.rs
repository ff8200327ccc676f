// SPDX-License-Identifier: MPL-2.0
//! GPS domain types.
//!
//! Pure value types for raw GPS metadata and normalized coordinates,
//! with no external dependencies.

// =============================================================================
// Hemisphere
// =============================================================================

/// A hemisphere indicator as carried in GPS metadata.
///
/// Constructed only from the uppercase letters `N`, `S`, `E`, `W`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Maps an uppercase hemisphere letter to its variant.
    ///
    /// Lowercase letters are rejected; metadata encodings use uppercase only.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'N' => Some(Hemisphere::North),
            'S' => Some(Hemisphere::South),
            'E' => Some(Hemisphere::East),
            'W' => Some(Hemisphere::West),
            _ => None,
        }
    }

    /// Returns the single-letter form used in metadata encodings.
    #[must_use]
    pub const fn letter(&self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
            Hemisphere::East => 'E',
            Hemisphere::West => 'W',
        }
    }

    /// Returns `true` for the hemispheres that negate a magnitude
    /// (`S` for latitude, `W` for longitude).
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        matches!(self, Hemisphere::South | Hemisphere::West)
    }
}

// =============================================================================
// GpsTagValue
// =============================================================================

/// A raw GPS axis value as read from image metadata.
///
/// Metadata engines deliver a coordinate either as an already-resolved
/// decimal magnitude or as a packed sexagesimal string such as
/// `40 deg 26' 46" N`. The two representations are incompatible and are
/// dispatched once per axis pair by the normalizer.
#[derive(Debug, Clone, PartialEq)]
pub enum GpsTagValue {
    /// Pre-resolved decimal-degree magnitude (sign carried separately
    /// by the hemisphere reference tag).
    Number(f64),

    /// Packed sexagesimal string with an embedded hemisphere letter.
    Text(String),
}

impl GpsTagValue {
    /// Returns `true` when the value carries usable content.
    ///
    /// Any number counts, including zero; an empty string does not.
    #[must_use]
    pub fn is_present(&self) -> bool {
        match self {
            GpsTagValue::Number(_) => true,
            GpsTagValue::Text(s) => !s.is_empty(),
        }
    }
}

// =============================================================================
// RawGpsBundle
// =============================================================================

/// The four raw GPS-related values read from one image, prior to
/// normalization.
///
/// A transient per-image value with no identity beyond the image it
/// describes. The default bundle (all fields absent) means "this image
/// has no location data".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawGpsBundle {
    /// Raw latitude value, if present.
    pub latitude: Option<GpsTagValue>,

    /// Raw longitude value, if present.
    pub longitude: Option<GpsTagValue>,

    /// Separate latitude hemisphere reference tag, if present.
    pub latitude_ref: Option<Hemisphere>,

    /// Separate longitude hemisphere reference tag, if present.
    pub longitude_ref: Option<Hemisphere>,
}

impl RawGpsBundle {
    /// Creates an empty bundle (no location data).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.latitude.is_none()
            && self.longitude.is_none()
            && self.latitude_ref.is_none()
            && self.longitude_ref.is_none()
    }
}

// =============================================================================
// DmsComponents
// =============================================================================

/// A decomposed sexagesimal angle.
///
/// Produced only by parsing a sexagesimal string and consumed only by
/// the decimal-degree conversion. The conventional ranges (minutes 0-59,
/// seconds 0-60) are NOT enforced; out-of-range components simply fold
/// into a larger angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DmsComponents {
    /// Whole degrees (non-negative).
    pub degrees: u32,

    /// Whole minutes (non-negative).
    pub minutes: u32,

    /// Seconds, possibly fractional (non-negative).
    pub seconds: f64,

    /// Hemisphere letter embedded in the source string.
    pub hemisphere: Hemisphere,
}

// =============================================================================
// GpsCoordinates
// =============================================================================

/// A normalized coordinate pair in signed decimal degrees.
///
/// Negative latitude denotes South, negative longitude West. Values are
/// stored exactly as produced by normalization: no clamping and no range
/// validation is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpsCoordinates {
    latitude: f64,
    longitude: f64,
}

impl GpsCoordinates {
    /// Creates a coordinate pair from signed decimal degrees.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns the latitude in signed decimal degrees.
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in signed decimal degrees.
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

// =============================================================================
// Tests
// =============================================================================
