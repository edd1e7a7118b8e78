use crate::core::constants::{BASE32_BITS, DEFAULT_HASH_LENGTH, LAT_EXTENT, LNG_EXTENT};
use crate::util::error::GeoHashError;
use serde::{Deserialize, Serialize};

/// Derived encoding parameters for a target hash length.
///
/// All fields are computed together by [`Precision::new`], so a value of this
/// type always satisfies `lat_bits + lng_bits == hash_length * 5`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Precision {
    /// Output length in base-32 characters.
    pub hash_length: usize,
    /// Number of bisection rounds for the latitude axis.
    pub lat_bits: u32,
    /// Number of bisection rounds for the longitude axis.
    pub lng_bits: u32,
    /// Width in degrees of one latitude cell at `lat_bits` depth; used as the
    /// neighbour offset.
    pub half_step_lat: f64,
    /// Width in degrees of one longitude cell at `lng_bits` depth.
    pub half_step_lng: f64,
}

impl Precision {
    /// Derives the full parameter set for `hash_length` output characters.
    ///
    /// Fails for a length of 0. Odd lengths give the spare bit of the 5-bit
    /// character budget to longitude; keeping that tie-break is what makes
    /// the output bit-compatible with other geohash encoders.
    pub fn new(hash_length: usize) -> Result<Self, GeoHashError> {
        if hash_length < 1 {
            return Err(GeoHashError::InvalidPrecision(hash_length));
        }

        let lat_bits = (hash_length * BASE32_BITS / 2) as u32;
        let lng_bits = if hash_length % 2 == 0 {
            lat_bits
        } else {
            lat_bits + 1
        };

        let half_step_lat = (LAT_EXTENT[1] - LAT_EXTENT[0]) / 2f64.powi(lat_bits as i32);
        let half_step_lng = (LNG_EXTENT[1] - LNG_EXTENT[0]) / 2f64.powi(lng_bits as i32);

        Ok(Self {
            hash_length,
            lat_bits,
            lng_bits,
            half_step_lat,
            half_step_lng,
        })
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::new(DEFAULT_HASH_LENGTH).expect("default hash length is valid")
    }
}
