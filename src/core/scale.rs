use crate::core::constants::{EARTH_RADIUS_MILES, EQUATOR_MILES};
use crate::util::error::GeolocError;
use serde::{Deserialize, Serialize};

/// A named band of location accuracy.
///
/// Each band carries a stable integer code (used for storage) and the
/// maximum radius in miles it represents. The set is closed: exactly
/// eleven bands, ordered ascending by radius, with [`Unknown`]
/// (half the equator) as the coarsest.
///
/// [`Unknown`]: AccuracyScale::Unknown
///
/// # Example
///
/// ```
/// use geoloc_rs::AccuracyScale;
///
/// # fn main() -> Result<(), geoloc_rs::GeolocError> {
/// let band = AccuracyScale::with_code(8)?;
/// assert_eq!(band, AccuracyScale::City);
/// assert_eq!(band.max_range_miles(), 10.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum AccuracyScale {
    Unknown,
    Address,
    NearestAddress,
    Block,
    Street,
    ExtendedZip,
    Zip,
    Neighborhood,
    City,
    County,
    State,
}

/// All accuracy bands, ascending by maximum range (finest first).
///
/// `Unknown` sorts last: its range is half the equator.
const ACCURACY_BANDS: [AccuracyScale; 11] = [
    AccuracyScale::Address,
    AccuracyScale::NearestAddress,
    AccuracyScale::Block,
    AccuracyScale::Street,
    AccuracyScale::ExtendedZip,
    AccuracyScale::Zip,
    AccuracyScale::Neighborhood,
    AccuracyScale::City,
    AccuracyScale::County,
    AccuracyScale::State,
    AccuracyScale::Unknown,
];

impl AccuracyScale {
    /// Returns all bands in ascending order of maximum range.
    pub fn values() -> &'static [AccuracyScale; 11] {
        &ACCURACY_BANDS
    }

    /// Looks up the band with the given storage code (0-10).
    pub fn with_code(code: i64) -> Result<Self, GeolocError> {
        match code {
            0 => Ok(AccuracyScale::Unknown),
            1 => Ok(AccuracyScale::Address),
            2 => Ok(AccuracyScale::NearestAddress),
            3 => Ok(AccuracyScale::Block),
            4 => Ok(AccuracyScale::Street),
            5 => Ok(AccuracyScale::ExtendedZip),
            6 => Ok(AccuracyScale::Zip),
            7 => Ok(AccuracyScale::Neighborhood),
            8 => Ok(AccuracyScale::City),
            9 => Ok(AccuracyScale::County),
            10 => Ok(AccuracyScale::State),
            _ => Err(GeolocError::InvalidAccuracyCode(code)),
        }
    }

    /// Looks up a band by its exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        ACCURACY_BANDS.iter().copied().find(|b| b.name() == name)
    }

    /// Stable storage code of this band.
    pub const fn code(self) -> u8 {
        match self {
            AccuracyScale::Unknown => 0,
            AccuracyScale::Address => 1,
            AccuracyScale::NearestAddress => 2,
            AccuracyScale::Block => 3,
            AccuracyScale::Street => 4,
            AccuracyScale::ExtendedZip => 5,
            AccuracyScale::Zip => 6,
            AccuracyScale::Neighborhood => 7,
            AccuracyScale::City => 8,
            AccuracyScale::County => 9,
            AccuracyScale::State => 10,
        }
    }

    /// Human-readable name of this band.
    pub const fn name(self) -> &'static str {
        match self {
            AccuracyScale::Unknown => "Unknown",
            AccuracyScale::Address => "Address",
            AccuracyScale::NearestAddress => "NearestAddress",
            AccuracyScale::Block => "Block",
            AccuracyScale::Street => "Street",
            AccuracyScale::ExtendedZip => "ExtendedZip",
            AccuracyScale::Zip => "Zip",
            AccuracyScale::Neighborhood => "Neighborhood",
            AccuracyScale::City => "City",
            AccuracyScale::County => "County",
            AccuracyScale::State => "State",
        }
    }

    /// Maximum radius in miles this band represents.
    pub fn max_range_miles(self) -> f64 {
        match self {
            AccuracyScale::Unknown => EQUATOR_MILES / 2.0,
            AccuracyScale::Address => 0.005,
            AccuracyScale::NearestAddress => 0.02,
            AccuracyScale::Block => 0.05,
            AccuracyScale::Street => 0.1,
            AccuracyScale::ExtendedZip => 0.3,
            AccuracyScale::Zip => 1.0,
            AccuracyScale::Neighborhood => 2.0,
            AccuracyScale::City => 10.0,
            AccuracyScale::County => 30.0,
            AccuracyScale::State => 100.0,
        }
    }

    /// Maximum radius of this band expressed in Earth radii.
    pub fn range_in_earth_radius_units(self) -> f64 {
        self.max_range_miles() / EARTH_RADIUS_MILES
    }

    /// Converts a distance in Earth radii to miles.
    pub fn miles_from_earth_radius_units(units: f64) -> f64 {
        units * EARTH_RADIUS_MILES
    }

    /// Returns the finest band covering the given radius in miles.
    ///
    /// Scans the bands in ascending order and takes the first whose
    /// maximum range is at least `miles * 0.99`; the 1% tolerance keeps
    /// values sitting exactly on a band boundary from being pushed to
    /// the next band up by floating-point representation error. Falls
    /// back to `Unknown` when the radius exceeds every band.
    pub fn for_range_in_miles(miles: f64) -> Self {
        ACCURACY_BANDS
            .iter()
            .copied()
            .find(|b| b.max_range_miles() >= miles * 0.99)
            .unwrap_or(AccuracyScale::Unknown)
    }

    /// Returns the finest band covering the given radius in Earth radii.
    pub fn for_range_in_earth_radius_units(units: f64) -> Self {
        Self::for_range_in_miles(Self::miles_from_earth_radius_units(units))
    }

    /// Returns the least precise (largest range) of the given bands.
    ///
    /// An empty slice yields `Unknown`.
    pub fn worst(bands: &[AccuracyScale]) -> Self {
        bands
            .iter()
            .copied()
            .max_by(|a, b| a.max_range_miles().total_cmp(&b.max_range_miles()))
            .unwrap_or(AccuracyScale::Unknown)
    }
}

impl std::fmt::Display for AccuracyScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<AccuracyScale> for u8 {
    fn from(band: AccuracyScale) -> u8 {
        band.code()
    }
}

impl TryFrom<u8> for AccuracyScale {
    type Error = GeolocError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        AccuracyScale::with_code(code as i64)
    }
}
