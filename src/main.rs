use geohash32_rs::{GeoHashEncoder, GeoHashError, average_error_km};

fn main() -> Result<(), GeoHashError> {
    let lat = 53.48082746395233;
    let lng = -2.2479699500757597;

    let encoder = GeoHashEncoder::new();
    let hash = encoder.encode(&(lat, lng))?;

    println!("Geohash: {}", hash);
    println!("Precision: {} characters", encoder.precision());
    if let Some(error_km) = average_error_km(encoder.precision()) {
        println!("Average error: {} km", error_km);
    }

    for neighbour in encoder.neighbors(&(lat, lng)) {
        println!("Around: {}", neighbour);
    }

    Ok(())
}
