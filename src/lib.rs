//! # geoloc-rs
//!
//! There are two main entry points.
//!
//! ### 1. `Geolocation` - Validated Location Values
//!
//! ```
//! use geoloc_rs::{AccuracyScale, Geolocation};
//!
//! # fn main() -> Result<(), geoloc_rs::GeolocError> {
//! let loc = Geolocation::new(37.77493, -122.41942, AccuracyScale::City)?;
//! println!("{}", loc);
//! let point = loc.to_spatial_point();
//! # Ok(())
//! # }
//! ```
//!
//! A location is either fully populated or fully empty; there is no
//! partial state. Raw triples decoded from external records go through
//! the same validation:
//!
//! ```
//! use geoloc_rs::{AccuracyScale, Geolocation};
//!
//! # fn main() -> Result<(), geoloc_rs::GeolocError> {
//! let loc = Geolocation::from_values(&[37.77493, -122.41942, 8.0])?;
//! assert_eq!(loc.accuracy(), AccuracyScale::City);
//!
//! let empty = Geolocation::from_values(&[])?;
//! assert!(empty.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `AccuracyScale` - Accuracy Bands and Classification
//!
//! Eleven named bands, ordered by the maximum radius in miles each one
//! represents. A radius classifies to the finest band that covers it:
//!
//! ```
//! use geoloc_rs::AccuracyScale;
//!
//! let band = AccuracyScale::for_range_in_miles(5.0);
//! assert_eq!(band, AccuracyScale::City);
//!
//! let worst = AccuracyScale::worst(&[AccuracyScale::Address, AccuracyScale::Zip]);
//! assert_eq!(worst, AccuracyScale::Zip);
//! ```
//!

pub mod api;
pub mod core;
pub mod util;

pub use api::Geolocation;
pub use core::{
    AccuracyScale, EARTH_RADIUS_MILES, EQUATOR_MILES, FIELD_NAMES, SpatialPoint,
    WGS84_FLATTENING, WGS84_SEMI_MAJOR_AXIS_METERS,
};
pub use util::{Coordinate, GeolocError};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::Point;

    #[test]
    fn test_end_to_end_workflow() -> Result<(), GeolocError> {
        let loc = Geolocation::from_values(&[37.77493, -122.41942, 8.0])?;

        assert!(loc.is_populated());
        assert_eq!(loc.accuracy(), AccuracyScale::City);
        assert_eq!(loc.to_string(), "Geolocation(37.77493, -122.41942, City)");

        let point = loc.to_spatial_point();
        assert_ne!(point, SpatialPoint::ORIGIN);

        let triple = loc.to_vec();
        let restored = Geolocation::from_values(&triple)?;
        assert_eq!(restored, loc);
        Ok(())
    }

    #[test]
    fn test_using_geo_types_point() -> Result<(), GeolocError> {
        let pt = Point::new(-2.248, 53.481);
        let loc = Geolocation::from_coordinate(&pt, AccuracyScale::Block)?;

        assert_eq!(loc.latitude(), 53.481);
        assert_eq!(loc.longitude(), -2.248);
        Ok(())
    }

    #[test]
    fn test_classification_workflow() {
        // a reading accurate to ~3 miles lands in the City band
        let band = AccuracyScale::for_range_in_miles(3.0);
        assert_eq!(band, AccuracyScale::City);

        let units = band.range_in_earth_radius_units();
        assert_eq!(AccuracyScale::for_range_in_earth_radius_units(units), band);
    }

    #[test]
    fn test_worst_accuracy_across_readings() -> Result<(), GeolocError> {
        let a = Geolocation::from_values(&[37.0, -122.0, 1.0])?;
        let b = Geolocation::from_values(&[37.1, -122.1, 8.0])?;
        let c = Geolocation::empty();

        let worst = AccuracyScale::worst(&[a.accuracy(), b.accuracy(), c.accuracy()]);
        assert_eq!(worst, AccuracyScale::Unknown);

        let worst = AccuracyScale::worst(&[a.accuracy(), b.accuracy()]);
        assert_eq!(worst, AccuracyScale::City);
        Ok(())
    }

    #[test]
    fn test_field_names() {
        assert_eq!(FIELD_NAMES, ["latitude", "longitude", "accuracy"]);
    }
}
