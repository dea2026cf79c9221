use crate::core::scale::AccuracyScale;
use crate::core::spatial::SpatialPoint;
use crate::util::coord::Coordinate;
use crate::util::error::GeolocError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Either no location data, or a fully validated coordinate triple.
/// A partially populated state is not representable.
#[derive(Debug, Clone, Copy, PartialEq)]
enum LocationData {
    Empty,
    Populated {
        lat: f64,
        lon: f64,
        accuracy: AccuracyScale,
    },
}

/// A validated geographic location: latitude, longitude, and an
/// accuracy band, or no data at all.
///
/// A `Geolocation` is immutable once constructed. Every constructor
/// funnels through [`Geolocation::from_values`], so an out-of-range
/// coordinate or unknown accuracy code can never be observed on a
/// built value. A NaN latitude or longitude normalizes to the empty
/// value instead of being stored.
///
/// # Example
///
/// ```
/// use geoloc_rs::{AccuracyScale, Geolocation};
///
/// # fn main() -> Result<(), geoloc_rs::GeolocError> {
/// let loc = Geolocation::new(37.77493, -122.41942, AccuracyScale::City)?;
/// assert_eq!(loc.accuracy(), AccuracyScale::City);
/// println!("{}", loc);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geolocation {
    data: LocationData,
}

impl Geolocation {
    /// The empty location, holding no data.
    pub fn empty() -> Self {
        Self {
            data: LocationData::Empty,
        }
    }

    /// Create a Geolocation from coordinates and an accuracy band.
    pub fn new(lat: f64, lon: f64, accuracy: AccuracyScale) -> Result<Self, GeolocError> {
        Self::from_values(&[lat, lon, accuracy.code() as f64])
    }

    /// Create a Geolocation from a raw numeric triple.
    ///
    /// The accuracy code is truncated to an integer and must resolve
    /// to a known band.
    pub fn from_triple(lat: f64, lon: f64, accuracy_code: f64) -> Result<Self, GeolocError> {
        Self::from_values(&[lat, lon, accuracy_code])
    }

    /// Create a Geolocation from a coordinate pair and an accuracy band.
    ///
    /// # Example
    /// ```
    /// use geoloc_rs::{AccuracyScale, Geolocation};
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), geoloc_rs::GeolocError> {
    /// // From (lat, lon) tuple
    /// let from_tuple = Geolocation::from_coordinate(&(53.481, -2.248), AccuracyScale::Street)?;
    /// // From Point (x is longitude, y is latitude)
    /// let from_point = Geolocation::from_coordinate(&Point::new(-2.248, 53.481), AccuracyScale::Street)?;
    /// assert_eq!(from_tuple, from_point);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_coordinate(
        coord: &impl Coordinate,
        accuracy: AccuracyScale,
    ) -> Result<Self, GeolocError> {
        Self::new(coord.lat(), coord.lon(), accuracy)
    }

    /// The single validating factory behind every constructor.
    ///
    /// Accepts a sequence of length 0 (empty) or exactly 3
    /// (`[latitude, longitude, accuracy_code]`). A NaN latitude or
    /// longitude collapses the value to empty; otherwise the
    /// coordinates are range-checked and the truncated code must name
    /// an accuracy band.
    pub fn from_values(values: &[f64]) -> Result<Self, GeolocError> {
        match *values {
            [] => Ok(Self::empty()),
            [lat, lon, code] => {
                if lat.is_nan() || lon.is_nan() {
                    return Ok(Self::empty());
                }
                if !(-90.0..=90.0).contains(&lat) {
                    return Err(GeolocError::InvalidCoordinate(format!(
                        "latitude {} is outside [-90, 90]",
                        lat
                    )));
                }
                if !(-180.0..=180.0).contains(&lon) {
                    return Err(GeolocError::InvalidCoordinate(format!(
                        "longitude {} is outside [-180, 180]",
                        lon
                    )));
                }
                let accuracy = AccuracyScale::with_code(code.trunc() as i64)?;

                Ok(Self {
                    data: LocationData::Populated { lat, lon, accuracy },
                })
            }
            _ => Err(GeolocError::InvalidArity(values.len())),
        }
    }

    /// Returns the latitude, or NaN when empty.
    pub fn latitude(&self) -> f64 {
        match self.data {
            LocationData::Populated { lat, .. } => lat,
            LocationData::Empty => f64::NAN,
        }
    }

    /// Returns the longitude, or NaN when empty.
    pub fn longitude(&self) -> f64 {
        match self.data {
            LocationData::Populated { lon, .. } => lon,
            LocationData::Empty => f64::NAN,
        }
    }

    /// Returns the accuracy band, or `Unknown` when empty.
    pub fn accuracy(&self) -> AccuracyScale {
        match self.data {
            LocationData::Populated { accuracy, .. } => accuracy,
            LocationData::Empty => AccuracyScale::Unknown,
        }
    }

    /// Returns true when this location holds no data.
    pub fn is_empty(&self) -> bool {
        self.data == LocationData::Empty
    }

    /// Returns true when this location holds a validated triple.
    pub fn is_populated(&self) -> bool {
        !self.is_empty()
    }

    /// The raw numeric sequence: empty, or
    /// `[latitude, longitude, accuracy_code]`.
    pub fn to_vec(&self) -> Vec<f64> {
        match self.data {
            LocationData::Populated { lat, lon, accuracy } => {
                vec![lat, lon, accuracy.code() as f64]
            }
            LocationData::Empty => Vec::new(),
        }
    }

    /// Converts this location to a Cartesian point on the WGS84
    /// ellipsoid, or the fixed origin when empty.
    pub fn to_spatial_point(&self) -> SpatialPoint {
        match self.data {
            LocationData::Populated { lat, lon, .. } => {
                SpatialPoint::from_lat_lon_degrees(lat, lon)
            }
            LocationData::Empty => SpatialPoint::ORIGIN,
        }
    }
}

impl Default for Geolocation {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Display for Geolocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.data {
            LocationData::Populated { lat, lon, accuracy } => {
                write!(f, "Geolocation({:.5}, {:.5}, {})", lat, lon, accuracy.name())
            }
            LocationData::Empty => write!(f, "Geolocation()"),
        }
    }
}

impl Serialize for Geolocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.to_vec())
    }
}

impl<'de> Deserialize<'de> for Geolocation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<f64>::deserialize(deserializer)?;
        Geolocation::from_values(&values).map_err(serde::de::Error::custom)
    }
}
