use std::{
    fmt::Display,
    hash::{Hash, Hasher},
};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use trip_geometry::{GeoPoint, RouteSummary, geometry::GeoBounds};

use crate::error::MapProviderError;

/// Where a route starts or ends.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Waypoint {
    Address(String),
    Point(GeoPoint),
}

impl Display for Waypoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Waypoint::Address(address) => write!(f, "{}", address),
            Waypoint::Point(point) => write!(f, "{},{}", point.latitude, point.longitude),
        }
    }
}

impl Hash for Waypoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Waypoint::Address(address) => {
                state.write_u8(0);
                address.hash(state);
            }
            Waypoint::Point(point) => {
                state.write_u8(1);
                state.write_u64(point.latitude.to_bits());
                state.write_u64(point.longitude.to_bits());
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct Place {
    pub id: String,
    /// Short label, the first segment of the formatted address unless the
    /// provider names the place.
    pub name: String,
    pub address: String,
    pub point: GeoPoint,
    pub place_id: Option<String>,
}

impl Place {
    pub fn name_from_address(address: &str) -> String {
        address.split(',').next().unwrap_or_default().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct PlacePrediction {
    pub place_id: String,
    pub description: String,
    pub main_text: Option<String>,
    pub secondary_text: Option<String>,
}

/// First leg of the first route between two waypoints.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct RouteData {
    pub distance_text: String,
    pub duration_text: String,
    pub distance_meters: f64,
    pub duration_seconds: f64,
    pub encoded_polyline: String,
    pub bounds: Option<GeoBounds>,
}

impl RouteData {
    pub fn summary(&self) -> RouteSummary {
        RouteSummary {
            distance_meters: self.distance_meters,
            duration_seconds: self.duration_seconds,
            encoded_polyline: self.encoded_polyline.clone(),
        }
    }
}

/// Geocoding, directions and place search. "No result" is `Ok(None)` or an
/// empty list, errors are reserved for transport and provider failures.
pub trait MapProvider: Send + Sync {
    fn geocode(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<Option<Place>, MapProviderError>> + Send;

    fn reverse_geocode(
        &self,
        point: GeoPoint,
    ) -> impl Future<Output = Result<Option<Place>, MapProviderError>> + Send;

    fn autocomplete(
        &self,
        input: &str,
    ) -> impl Future<Output = Result<Vec<PlacePrediction>, MapProviderError>> + Send;

    fn place_details(
        &self,
        place_id: &str,
    ) -> impl Future<Output = Result<Option<Place>, MapProviderError>> + Send;

    fn route(
        &self,
        origin: &Waypoint,
        destination: &Waypoint,
    ) -> impl Future<Output = Result<Option<RouteData>, MapProviderError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_address() {
        assert_eq!(
            Place::name_from_address("MG Road, Bengaluru, Karnataka, India"),
            "MG Road"
        );
        assert_eq!(Place::name_from_address("Nowhere"), "Nowhere");
        assert_eq!(Place::name_from_address(""), "");
    }

    #[test]
    fn test_waypoint_display() {
        assert_eq!(
            Waypoint::Point(GeoPoint::new(12.5, 77.25)).to_string(),
            "12.5,77.25"
        );
        assert_eq!(
            Waypoint::Address(String::from("Indiranagar")).to_string(),
            "Indiranagar"
        );
    }
}
