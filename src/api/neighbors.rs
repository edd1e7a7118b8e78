use crate::api::encoder::GeoHashEncoder;
use crate::core::encode::encode_with;
use crate::core::precision::Precision;
use crate::util::coord::Coordinate;

impl GeoHashEncoder {
    /// Returns the hash of the cell containing `coord` followed by the
    /// hashes of the eight surrounding cells, in fixed compass order.
    ///
    /// Candidates are produced by offsetting each axis by one cell width at
    /// the current precision. This is an approximation of cell adjacency: it
    /// does not wrap at the poles or the ±180° meridian, so candidates that
    /// fall out of range are skipped and the result holds between 0 and 9
    /// entries. Near those edges the remaining entries may also not be exact
    /// adjacent cells.
    ///
    /// # Example
    /// ```
    /// use geohash32_rs::GeoHashEncoder;
    ///
    /// let encoder = GeoHashEncoder::new();
    /// let around = encoder.neighbors(&(39.9042, 116.4074));
    /// assert_eq!(around.len(), 9);
    /// ```
    pub fn neighbors<C: Coordinate>(&self, coord: &C) -> Vec<String> {
        let precision = self.snapshot();

        neighbor_candidates(&precision, coord.lat(), coord.lng())
            .iter()
            .filter_map(|candidate| encode_with(&precision, candidate).ok())
            .collect()
    }
}

/// Center plus the eight compass offsets in fixed order: center, then
/// lower-latitude row (west, center, east longitude), east, upper-latitude
/// row (east, center, west), west.
fn neighbor_candidates(precision: &Precision, lat: f64, lng: f64) -> [(f64, f64); 9] {
    let lower_lat = lat - precision.half_step_lat;
    let upper_lat = lat + precision.half_step_lat;
    let lower_lng = lng - precision.half_step_lng;
    let upper_lng = lng + precision.half_step_lng;

    [
        (lat, lng),
        (lower_lat, lower_lng),
        (lower_lat, lng),
        (lower_lat, upper_lng),
        (lat, upper_lng),
        (upper_lat, upper_lng),
        (upper_lat, lng),
        (upper_lat, lower_lng),
        (lat, lower_lng),
    ]
}
