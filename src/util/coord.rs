use geo_types::Point;

/// A latitude/longitude pair accepted as constructor input.
///
/// Implemented for `(f64, f64)` tuples (latitude first) and for
/// `geo_types::Point<f64>` (where `x` is longitude and `y` is latitude).
pub trait Coordinate {
    fn lat(&self) -> f64;
    fn lon(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn lat(&self) -> f64 {
        self.0
    }
    fn lon(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn lat(&self) -> f64 {
        self.y()
    }
    fn lon(&self) -> f64 {
        self.x()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_trait_tuple() {
        let tuple = (53.481, -2.248);
        assert_eq!(tuple.lat(), 53.481);
        assert_eq!(tuple.lon(), -2.248);
    }

    #[test]
    fn test_coordinate_trait_point() {
        let point = Point::new(-2.248, 53.481);
        assert_eq!(point.lat(), 53.481);
        assert_eq!(point.lon(), -2.248);
    }
}
