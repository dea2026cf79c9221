use crate::core::constants::{WGS84_FLATTENING, WGS84_SEMI_MAJOR_AXIS_METERS};
use serde::{Deserialize, Serialize};

/// A 3-D Cartesian point in meters, Earth-centered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpatialPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl SpatialPoint {
    /// The fixed `(0, 0, 0)` point.
    ///
    /// Used as the zero element for locations with no data, so that
    /// downstream aggregation math never needs a null case.
    pub const ORIGIN: SpatialPoint = SpatialPoint {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Converts geodetic latitude/longitude (degrees) to a Cartesian
    /// point on the WGS84 reference ellipsoid at zero height.
    pub fn from_lat_lon_degrees(lat: f64, lon: f64) -> Self {
        let phi = lat.to_radians();
        let lambda = lon.to_radians();

        // first eccentricity squared: e^2 = f * (2 - f)
        let e2 = WGS84_FLATTENING * (2.0 - WGS84_FLATTENING);
        // prime vertical radius of curvature
        let n = WGS84_SEMI_MAJOR_AXIS_METERS / (1.0 - e2 * phi.sin() * phi.sin()).sqrt();

        SpatialPoint {
            x: n * phi.cos() * lambda.cos(),
            y: n * phi.cos() * lambda.sin(),
            z: n * (1.0 - e2) * phi.sin(),
        }
    }
}
