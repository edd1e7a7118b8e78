use std::sync::{PoisonError, RwLock};

use crate::core::encode::encode_with;
use crate::core::precision::Precision;
use crate::util::coord::Coordinate;
use crate::util::error::GeoHashError;

/// Geohash encoder with instance-held precision.
///
/// Each encoder carries its own [`Precision`], so separate instances never
/// affect one another. A single instance may also be shared across threads:
/// the configuration is replaced as a whole under a write lock, and readers
/// take a copy, so no caller ever observes a mix of old and new derived
/// values.
#[derive(Debug)]
pub struct GeoHashEncoder {
    precision: RwLock<Precision>,
}

impl GeoHashEncoder {
    /// Creates an encoder at the default precision of 8 characters.
    pub fn new() -> Self {
        Self {
            precision: RwLock::new(Precision::default()),
        }
    }

    /// Creates an encoder producing `hash_length` characters per hash.
    ///
    /// # Example
    /// ```
    /// use geohash32_rs::GeoHashEncoder;
    ///
    /// # fn main() -> Result<(), geohash32_rs::GeoHashError> {
    /// let encoder = GeoHashEncoder::with_precision(5)?;
    /// assert_eq!(encoder.encode(&(42.605, -5.603))?, "ezs42");
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_precision(hash_length: usize) -> Result<Self, GeoHashError> {
        Ok(Self {
            precision: RwLock::new(Precision::new(hash_length)?),
        })
    }

    /// Returns the current hash length.
    pub fn precision(&self) -> usize {
        self.snapshot().hash_length
    }

    /// Replaces the precision with a freshly derived configuration.
    ///
    /// Fails for a zero length and leaves the previous configuration fully
    /// intact.
    pub fn set_precision(&self, hash_length: usize) -> Result<(), GeoHashError> {
        let next = Precision::new(hash_length)?;
        let mut guard = self
            .precision
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = next;
        Ok(())
    }

    /// Encodes a coordinate as a geohash string of the current precision.
    ///
    /// # Example
    /// ```
    /// use geohash32_rs::GeoHashEncoder;
    ///
    /// # fn main() -> Result<(), geohash32_rs::GeoHashError> {
    /// let encoder = GeoHashEncoder::new();
    /// let hash = encoder.encode(&(39.9042, 116.4074))?;
    /// assert_eq!(hash.len(), 8);
    /// # Ok(())
    /// # }
    /// ```
    pub fn encode<C: Coordinate>(&self, coord: &C) -> Result<String, GeoHashError> {
        encode_with(&self.snapshot(), coord)
    }

    pub(crate) fn snapshot(&self) -> Precision {
        *self
            .precision
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for GeoHashEncoder {
    fn default() -> Self {
        Self::new()
    }
}
