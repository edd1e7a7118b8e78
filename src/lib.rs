//! # geohash32-rs
//!
//! Geohash encoding for latitude/longitude coordinates: per-axis bisection,
//! bit interleaving, and base-32 grouping, with configurable precision and an
//! approximate neighbour lookup.
//!
//! There are currently three main entry points.
//!
//! ### 1. `GeoHashEncoder` - Encoding Coordinates
//!
//! ```
//! use geohash32_rs::GeoHashEncoder;
//!
//! # fn main() -> Result<(), geohash32_rs::GeoHashError> {
//! let encoder = GeoHashEncoder::new();
//! let hash = encoder.encode(&(39.9042, 116.4074))?;
//! assert_eq!(hash, "wx4g0bm6");
//! # Ok(())
//! # }
//! ```
//!
//! `geo_types` points work too (x = longitude, y = latitude):
//!
//! ```
//! use geohash32_rs::GeoHashEncoder;
//! use geo_types::point;
//!
//! # fn main() -> Result<(), geohash32_rs::GeoHashError> {
//! let encoder = GeoHashEncoder::new();
//! let pt = point! { x: 116.4074, y: 39.9042 };
//! assert_eq!(encoder.encode(&pt)?, "wx4g0bm6");
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `neighbors` - Surrounding Cells
//!
//! ```
//! use geohash32_rs::GeoHashEncoder;
//!
//! let encoder = GeoHashEncoder::new();
//! let around = encoder.neighbors(&(39.9042, 116.4074));
//! assert_eq!(around.len(), 9);
//! assert_eq!(around[0], "wx4g0bm6");
//! ```
//!
//! ### 3. Choosing Precision by Accuracy
//!
//! Hash length trades output size against positional accuracy; the
//! `AVERAGE_ERROR_KM` table gives the approximate average error for lengths
//! 1-8:
//!
//! ```
//! use geohash32_rs::{GeoHashEncoder, average_error_km};
//!
//! # fn main() -> Result<(), geohash32_rs::GeoHashError> {
//! assert_eq!(average_error_km(6), Some(0.61));
//! let encoder = GeoHashEncoder::with_precision(6)?;
//! assert_eq!(encoder.encode(&(39.9042, 116.4074))?, "wx4g0b");
//! # Ok(())
//! # }
//! ```
//!

pub mod api;
pub mod core;
pub mod util;

pub use crate::api::GeoHashEncoder;
pub use crate::core::{
    AVERAGE_ERROR_KM, BASE32_ALPHABET, BASE32_BITS, DEFAULT_HASH_LENGTH, LAT_EXTENT, LNG_EXTENT,
    Precision, average_error_km, encode_with,
};
pub use crate::util::{Coordinate, GeoHashError};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_end_to_end_workflow() -> Result<(), GeoHashError> {
        let encoder = GeoHashEncoder::new();
        assert_eq!(encoder.precision(), 8);

        let hash = encoder.encode(&(39.9042, 116.4074))?;
        assert_eq!(hash, "wx4g0bm6");

        let around = encoder.neighbors(&(39.9042, 116.4074));
        assert_eq!(around.len(), 9);
        assert_eq!(around[0], hash);
        assert!(around.iter().all(|h| h.len() == 8));
        Ok(())
    }

    #[test]
    fn test_using_geo_types_macros() -> Result<(), GeoHashError> {
        let encoder = GeoHashEncoder::new();

        let pt = point! { x: 10.40744, y: 57.64911 };
        assert_eq!(encoder.encode(&pt)?, "u4pruydq");
        Ok(())
    }

    #[test]
    fn test_precision_workflow() -> Result<(), GeoHashError> {
        let encoder = GeoHashEncoder::with_precision(5)?;
        assert_eq!(encoder.encode(&(42.605, -5.603))?, "ezs42");

        encoder.set_precision(3)?;
        assert_eq!(encoder.encode(&(42.605, -5.603))?, "ezs");

        assert!(encoder.set_precision(0).is_err());
        assert_eq!(encoder.precision(), 3);
        Ok(())
    }

    #[test]
    fn test_stateless_encode_with() -> Result<(), GeoHashError> {
        let precision = Precision::new(8)?;

        let hash = encode_with(&precision, &(39.9042, 116.4074))?;
        assert_eq!(hash, GeoHashEncoder::new().encode(&(39.9042, 116.4074))?);
        Ok(())
    }

    #[test]
    fn test_out_of_range_rejected() {
        let encoder = GeoHashEncoder::new();

        assert_eq!(
            encoder.encode(&(91.0, 0.0)),
            Err(GeoHashError::LatitudeOutOfRange(91.0))
        );
        assert_eq!(
            encoder.encode(&(0.0, 181.0)),
            Err(GeoHashError::LongitudeOutOfRange(181.0))
        );
    }

    #[test]
    fn test_shared_encoder_precision_swap_is_atomic() {
        let encoder = Arc::new(GeoHashEncoder::new());

        let writer = {
            let encoder = Arc::clone(&encoder);
            thread::spawn(move || {
                for i in 0..500 {
                    let length = if i % 2 == 0 { 4 } else { 8 };
                    encoder.set_precision(length).expect("valid length");
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let encoder = Arc::clone(&encoder);
                thread::spawn(move || {
                    for _ in 0..500 {
                        let hash = encoder.encode(&(39.9042, 116.4074)).expect("valid input");
                        // A mixed configuration would produce some other length.
                        assert!(hash.len() == 4 || hash.len() == 8);
                    }
                })
            })
            .collect();

        writer.join().expect("writer thread");
        for reader in readers {
            reader.join().expect("reader thread");
        }
    }
}
