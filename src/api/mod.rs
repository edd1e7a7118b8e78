pub mod encoder;
mod neighbors;

pub use encoder::GeoHashEncoder;
