pub mod constants;
pub mod scale;
pub mod spatial;

pub use constants::{
    EARTH_RADIUS_MILES, EQUATOR_MILES, FIELD_NAMES, WGS84_FLATTENING,
    WGS84_SEMI_MAJOR_AXIS_METERS,
};
pub use scale::AccuracyScale;
pub use spatial::SpatialPoint;
