/// Error type for geohash32-rs operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeoHashError {
    /// The latitude is outside [-90, 90].
    LatitudeOutOfRange(f64),
    /// The longitude is outside [-180, 180].
    LongitudeOutOfRange(f64),
    /// The requested hash length is below the minimum of 1.
    InvalidPrecision(usize),
}

impl std::fmt::Display for GeoHashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoHashError::LatitudeOutOfRange(lat) => {
                write!(f, "Latitude out of range [-90, 90]: {}", lat)
            }
            GeoHashError::LongitudeOutOfRange(lng) => {
                write!(f, "Longitude out of range [-180, 180]: {}", lng)
            }
            GeoHashError::InvalidPrecision(len) => {
                write!(f, "Invalid precision (hash length must be >= 1): {}", len)
            }
        }
    }
}

impl std::error::Error for GeoHashError {}
