/// Latitude extent [min, max]
pub const LAT_EXTENT: [f64; 2] = [-90.0, 90.0];

/// Longitude extent [min, max]
pub const LNG_EXTENT: [f64; 2] = [-180.0, 180.0];

/// Bits per base-32 output character
pub const BASE32_BITS: usize = 5;

/// Standard geohash alphabet: digits plus lowercase letters excluding a, i, l, o
pub const BASE32_ALPHABET: [u8; 32] = *b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Default output length in characters
pub const DEFAULT_HASH_LENGTH: usize = 8;

/// Approximate average positional error in kilometres for hash lengths 1-8
pub const AVERAGE_ERROR_KM: [f64; 8] = [2500.0, 630.0, 78.0, 20.0, 2.4, 0.61, 0.076, 0.019];

/// Looks up the approximate average positional error for a hash length.
///
/// Returns `None` for lengths outside the tabled range 1-8.
pub fn average_error_km(hash_length: usize) -> Option<f64> {
    if hash_length == 0 {
        return None;
    }
    AVERAGE_ERROR_KM.get(hash_length - 1).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_excludes_ambiguous_letters() {
        assert_eq!(BASE32_ALPHABET.len(), 32);
        for c in [b'a', b'i', b'l', b'o'] {
            assert!(!BASE32_ALPHABET.contains(&c));
        }
    }

    #[test]
    fn test_average_error_lookup() {
        assert_eq!(average_error_km(1), Some(2500.0));
        assert_eq!(average_error_km(5), Some(2.4));
        assert_eq!(average_error_km(8), Some(0.019));
        assert_eq!(average_error_km(0), None);
        assert_eq!(average_error_km(9), None);
    }
}
