pub mod constants;
pub mod encode;
pub mod precision;

pub use constants::{
    AVERAGE_ERROR_KM, BASE32_ALPHABET, BASE32_BITS, DEFAULT_HASH_LENGTH, LAT_EXTENT, LNG_EXTENT,
    average_error_km,
};
pub use encode::encode_with;
pub use precision::Precision;
