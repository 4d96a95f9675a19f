use std::fmt::Display;

use geo::{Distance, Haversine};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A WGS84 coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn lat(&self) -> f64 {
        self.latitude
    }

    pub fn lng(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to `other`, in kilometers.
    pub fn haversine_distance_km(&self, other: &GeoPoint) -> f64 {
        let haversine = Haversine;
        haversine.distance(geo::Point::from(self), geo::Point::from(other)) / 1000.0
    }
}

impl Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

impl From<&GeoPoint> for geo_types::Point<f64> {
    fn from(point: &GeoPoint) -> Self {
        geo_types::Point::new(point.longitude, point.latitude)
    }
}

impl From<&GeoPoint> for geo_types::Coord<f64> {
    fn from(point: &GeoPoint) -> Self {
        geo_types::Coord {
            x: point.longitude,
            y: point.latitude,
        }
    }
}

impl From<geo_types::Point<f64>> for GeoPoint {
    fn from(point: geo_types::Point<f64>) -> Self {
        GeoPoint::new(point.y(), point.x())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_six_decimals() {
        let point = GeoPoint::new(12.9715987, 77.5945627);
        assert_eq!(point.to_string(), "12.971599, 77.594563");
    }

    #[test]
    fn test_point_conversion_swaps_axes() {
        let point = GeoPoint::new(48.8566, 2.3522);
        let geo_point: geo_types::Point = (&point).into();

        assert_eq!(geo_point.x(), 2.3522);
        assert_eq!(geo_point.y(), 48.8566);
        assert_eq!(GeoPoint::from(geo_point), point);
    }

    #[test]
    fn test_haversine_distance() {
        // Bengaluru to Mysuru, roughly 128 km as the crow flies
        let bengaluru = GeoPoint::new(12.9716, 77.5946);
        let mysuru = GeoPoint::new(12.2958, 76.6394);

        let distance = bengaluru.haversine_distance_km(&mysuru);
        assert!((distance - 128.0).abs() < 1.5, "distance was {distance}");
        assert_eq!(bengaluru.haversine_distance_km(&bengaluru), 0.0);
    }
}
