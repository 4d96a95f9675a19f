use map_providers::map_provider::Waypoint;
use trip_geometry::GeoPoint;

/// Parses `lat,lng` in decimal degrees.
pub fn parse_point(input: &str) -> Result<GeoPoint, String> {
    let (lat, lng) = input
        .split_once(',')
        .ok_or_else(|| format!("Expected `lat,lng`, got `{input}`"))?;

    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("Invalid latitude `{}`", lat.trim()))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .map_err(|_| format!("Invalid longitude `{}`", lng.trim()))?;

    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return Err(format!("Coordinate `{input}` is out of range"));
    }

    Ok(GeoPoint::new(lat, lng))
}

/// A coordinate when the input parses as one, an address otherwise.
pub fn parse_waypoint(input: &str) -> Result<Waypoint, String> {
    if input.trim().is_empty() {
        return Err(String::from("Empty location"));
    }

    Ok(parse_point(input)
        .map(Waypoint::Point)
        .unwrap_or_else(|_| Waypoint::Address(input.to_string())))
}

pub fn parse_non_negative(input: &str) -> Result<f64, String> {
    let value: f64 = input
        .parse()
        .map_err(|_| format!("Invalid number `{input}`"))?;

    if !value.is_finite() || value < 0.0 {
        return Err(format!("Expected a non-negative number, got `{input}`"));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("12.97, 77.59"), Ok(GeoPoint::new(12.97, 77.59)));
        assert_eq!(parse_point("-33.8,151.2"), Ok(GeoPoint::new(-33.8, 151.2)));
        assert!(parse_point("12.97").is_err());
        assert!(parse_point("north,east").is_err());
        assert!(parse_point("91,0").is_err());
    }

    #[test]
    fn test_parse_waypoint() {
        assert_eq!(
            parse_waypoint("12.97,77.59"),
            Ok(Waypoint::Point(GeoPoint::new(12.97, 77.59)))
        );
        assert_eq!(
            parse_waypoint("MG Road, Bengaluru"),
            Ok(Waypoint::Address(String::from("MG Road, Bengaluru")))
        );
        assert!(parse_waypoint("  ").is_err());
    }

    #[test]
    fn test_parse_non_negative() {
        assert_eq!(parse_non_negative("12.5"), Ok(12.5));
        assert_eq!(parse_non_negative("0"), Ok(0.0));
        assert!(parse_non_negative("-1").is_err());
        assert!(parse_non_negative("NaN").is_err());
        assert!(parse_non_negative("ten").is_err());
    }
}
