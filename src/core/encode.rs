use crate::core::constants::{BASE32_ALPHABET, BASE32_BITS, LAT_EXTENT, LNG_EXTENT};
use crate::core::precision::Precision;
use crate::util::coord::Coordinate;
use crate::util::error::GeoHashError;

/// Bisects `value` over `[min, max]` for `bits` rounds, emitting one bit per
/// round, most significant first. A `1` keeps the upper half.
fn bisect(value: f64, mut min: f64, mut max: f64, bits: u32) -> Vec<bool> {
    let mut result = Vec::with_capacity(bits as usize);
    for _ in 0..bits {
        let mid = (min + max) / 2.0;
        if value >= mid {
            result.push(true);
            min = mid;
        } else {
            result.push(false);
            max = mid;
        }
    }
    result
}

fn latitude_bits(lat: f64, bits: u32) -> Result<Vec<bool>, GeoHashError> {
    if !(LAT_EXTENT[0]..=LAT_EXTENT[1]).contains(&lat) {
        return Err(GeoHashError::LatitudeOutOfRange(lat));
    }
    Ok(bisect(lat, LAT_EXTENT[0], LAT_EXTENT[1], bits))
}

fn longitude_bits(lng: f64, bits: u32) -> Result<Vec<bool>, GeoHashError> {
    if !(LNG_EXTENT[0]..=LNG_EXTENT[1]).contains(&lng) {
        return Err(GeoHashError::LongitudeOutOfRange(lng));
    }
    Ok(bisect(lng, LNG_EXTENT[0], LNG_EXTENT[1], bits))
}

/// Merges the axis sequences: longitude bits take the even positions,
/// latitude bits the odd ones, each in original order.
fn interleave(lat: &[bool], lng: &[bool]) -> Vec<bool> {
    let mut merged = vec![false; lat.len() + lng.len()];
    for (i, &bit) in lng.iter().enumerate() {
        merged[i * 2] = bit;
    }
    for (i, &bit) in lat.iter().enumerate() {
        merged[i * 2 + 1] = bit;
    }
    merged
}

/// Packs the merged sequence into base-32 characters, five bits per symbol,
/// most significant bit first. A trailing group of fewer than five bits
/// contributes no character.
fn to_base32(bits: &[bool]) -> String {
    let mut out = String::with_capacity(bits.len() / BASE32_BITS);
    for group in bits.chunks_exact(BASE32_BITS) {
        let index = group
            .iter()
            .fold(0usize, |acc, &bit| (acc << 1) | bit as usize);
        out.push(BASE32_ALPHABET[index] as char);
    }
    out
}

/// Encodes a coordinate as a geohash string at the given precision.
///
/// Fails when either axis is out of range; never returns a partial hash.
/// The result length equals `precision.hash_length`.
pub fn encode_with<C: Coordinate>(
    precision: &Precision,
    coord: &C,
) -> Result<String, GeoHashError> {
    let lat = latitude_bits(coord.lat(), precision.lat_bits)?;
    let lng = longitude_bits(coord.lng(), precision.lng_bits)?;

    Ok(to_base32(&interleave(&lat, &lng)))
}
