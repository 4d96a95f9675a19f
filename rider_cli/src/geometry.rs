use trip_geometry::{GeoPoint, decode_polyline, encode_polyline};

pub fn decode(polyline: &str) -> anyhow::Result<()> {
    let points = decode_polyline(polyline);
    println!("{}", serde_json::to_string_pretty(&points)?);

    Ok(())
}

pub fn encode(points: &[GeoPoint]) {
    println!("{}", encode_polyline(points));
}
