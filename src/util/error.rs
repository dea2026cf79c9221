/// Error type for geoloc-rs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum GeolocError {
    /// A location sequence has a length other than 0 or 3.
    InvalidArity(usize),
    /// Latitude or longitude is outside its valid range.
    InvalidCoordinate(String),
    /// The accuracy code does not match any accuracy band.
    InvalidAccuracyCode(i64),
}

impl std::fmt::Display for GeolocError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeolocError::InvalidArity(n) => {
                write!(f, "Invalid location arity: expected 0 or 3 values, got {}", n)
            }
            GeolocError::InvalidCoordinate(msg) => write!(f, "Invalid coordinate: {}", msg),
            GeolocError::InvalidAccuracyCode(c) => write!(f, "Invalid accuracy code: {}", c),
        }
    }
}

impl std::error::Error for GeolocError {}
