/// Length of the equator in miles.
pub const EQUATOR_MILES: f64 = 24901.0;

/// Mean radius of the Earth in miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Ordered field names of a populated location record.
pub const FIELD_NAMES: [&str; 3] = ["latitude", "longitude", "accuracy"];

/// WGS84 semi-major axis (equatorial radius) in meters.
pub const WGS84_SEMI_MAJOR_AXIS_METERS: f64 = 6_378_137.0;

/// WGS84 ellipsoid flattening.
pub const WGS84_FLATTENING: f64 = 1.0 / 298.257_223_563;
