use geoloc_rs::{AccuracyScale, GeolocError, Geolocation};

fn main() -> Result<(), GeolocError> {
    let lat = 53.48082746395233;
    let lon = -2.2479699500757597;

    let loc = Geolocation::new(lat, lon, AccuracyScale::City)?;

    println!("Location: {}", loc);
    println!("Accuracy: {} (code {})", loc.accuracy(), loc.accuracy().code());
    println!("Max range: {} miles", loc.accuracy().max_range_miles());

    let point = loc.to_spatial_point();
    println!("Cartesian: ({:.1}, {:.1}, {:.1})", point.x, point.y, point.z);

    let band = AccuracyScale::for_range_in_miles(0.04);
    println!("A 0.04 mile radius classifies as: {}", band);

    Ok(())
}
