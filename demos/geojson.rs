use great_circle::{GeoPoint, GreatCircle, MultiPolygon, Options};
use serde_json::json;
use std::env;

/// Converts a corrected shape to a GeoJSON Feature
fn shape_to_geojson_feature(center: GeoPoint, radius: f64, shape: &MultiPolygon) -> serde_json::Value {
    // Each part becomes one polygon with a single closed outer ring
    let polygons: Vec<_> = shape
        .to_lon_lat_rings()
        .into_iter()
        .map(|ring| vec![ring])
        .collect();

    json!({
        "type": "Feature",
        "geometry": {
            "type": "MultiPolygon",
            "coordinates": polygons
        },
        "properties": {
            "center": [center.lon, center.lat],
            "radius_meters": radius,
            "parts": shape.len()
        }
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 4 || args.len() > 5 {
        eprintln!("Usage: {} <lat> <lon> <radius-km> [--legacy]", args[0]);
        std::process::exit(1);
    }

    let center = GeoPoint::new(args[1].parse()?, args[2].parse()?);
    let radius = args[3].parse::<f64>()? * 1000.0;
    let options = match args.get(4).map(String::as_str) {
        Some("--legacy") => Options::legacy(),
        Some(other) => return Err(format!("unknown flag: {other}").into()),
        None => Options::default(),
    };

    let circle = GreatCircle::new(center, radius, options)?;
    for warning in circle.warnings() {
        eprintln!("warning: {warning:?}");
    }

    let feature = shape_to_geojson_feature(circle.center(), circle.radius(), circle.shape());
    println!("{}", serde_json::to_string_pretty(&feature)?);

    Ok(())
}
