use geo_types::Point;

/// Trait for types that can provide a latitude/longitude pair in degrees.
///
/// Implemented for `(f64, f64)` tuples in `(lat, lng)` order and for
/// `geo_types::Point<f64>` (x = longitude, y = latitude). This allows
/// functions to accept either type.
pub trait Coordinate {
    /// Returns the latitude in degrees.
    fn lat(&self) -> f64;
    /// Returns the longitude in degrees.
    fn lng(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn lat(&self) -> f64 {
        self.0
    }
    fn lng(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn lat(&self) -> f64 {
        self.y()
    }
    fn lng(&self) -> f64 {
        self.x()
    }
}
