use parking_lot::RwLock;
use serde::{Deserialize, de::DeserializeOwned};
use tracing::debug;
use trip_geometry::{GeoPoint, geometry::GeoBounds};
use uuid::Uuid;

use crate::{
    error::MapProviderError,
    map_provider::{MapProvider, Place, PlacePrediction, RouteData, Waypoint},
};

pub const GOOGLE_MAPS_API_URL: &str = "https://maps.googleapis.com/maps/api";
pub const GOOGLE_MAPS_API_KEY_ENV_VAR: &str = "GOOGLE_MAPS_API_KEY";

const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";
const STATUS_NOT_FOUND: &str = "NOT_FOUND";

const AUTOCOMPLETE_TYPES: &str = "geocode|establishment";
const PLACE_DETAILS_FIELDS: &str = "name,formatted_address,geometry,place_id";

#[derive(Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl From<LatLng> for GeoPoint {
    fn from(value: LatLng) -> Self {
        GeoPoint::new(value.lat, value.lng)
    }
}

#[derive(Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Deserialize)]
struct GeocodeResult {
    place_id: String,
    formatted_address: String,
    geometry: Geometry,
}

#[derive(Deserialize)]
struct GeocodeResponse {
    status: String,
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Deserialize)]
struct TextValue {
    text: String,
    value: f64,
}

#[derive(Deserialize)]
struct DirectionsLeg {
    distance: Option<TextValue>,
    duration: Option<TextValue>,
}

#[derive(Deserialize)]
struct OverviewPolyline {
    points: String,
}

#[derive(Deserialize)]
struct Bounds {
    northeast: LatLng,
    southwest: LatLng,
}

#[derive(Deserialize)]
struct DirectionsRoute {
    overview_polyline: OverviewPolyline,
    bounds: Option<Bounds>,
    #[serde(default)]
    legs: Vec<DirectionsLeg>,
}

#[derive(Deserialize)]
struct DirectionsResponse {
    status: String,
    error_message: Option<String>,
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
}

#[derive(Deserialize)]
struct StructuredFormatting {
    main_text: String,
    secondary_text: Option<String>,
}

#[derive(Deserialize)]
struct Prediction {
    place_id: String,
    description: String,
    structured_formatting: Option<StructuredFormatting>,
}

#[derive(Deserialize)]
struct AutocompleteResponse {
    status: String,
    error_message: Option<String>,
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Deserialize)]
struct PlaceDetailsResult {
    place_id: Option<String>,
    name: Option<String>,
    formatted_address: Option<String>,
    geometry: Option<Geometry>,
}

#[derive(Deserialize)]
struct PlaceDetailsResponse {
    status: String,
    error_message: Option<String>,
    result: Option<PlaceDetailsResult>,
}

/// `Ok(true)` when the response carries results, `Ok(false)` when the
/// provider found nothing.
fn check_status(status: &str, error_message: Option<String>) -> Result<bool, MapProviderError> {
    match status {
        STATUS_OK => Ok(true),
        STATUS_ZERO_RESULTS | STATUS_NOT_FOUND => Ok(false),
        other => Err(MapProviderError::Status {
            status: other.to_string(),
            message: error_message.unwrap_or_default(),
        }),
    }
}

fn place_from_geocode(response: GeocodeResponse) -> Result<Option<Place>, MapProviderError> {
    if !check_status(&response.status, response.error_message)? {
        return Ok(None);
    }

    Ok(response.results.into_iter().next().map(|result| Place {
        id: result.place_id.clone(),
        name: Place::name_from_address(&result.formatted_address),
        address: result.formatted_address,
        point: result.geometry.location.into(),
        place_id: Some(result.place_id),
    }))
}

fn route_from_directions(
    response: DirectionsResponse,
) -> Result<Option<RouteData>, MapProviderError> {
    if !check_status(&response.status, response.error_message)? {
        return Ok(None);
    }

    let Some(route) = response.routes.into_iter().next() else {
        return Ok(None);
    };

    let leg = route.legs.into_iter().next();
    let (distance, duration) = leg
        .map(|leg| (leg.distance, leg.duration))
        .unwrap_or((None, None));

    Ok(Some(RouteData {
        distance_text: distance.as_ref().map(|d| d.text.clone()).unwrap_or_default(),
        duration_text: duration.as_ref().map(|d| d.text.clone()).unwrap_or_default(),
        distance_meters: distance.map(|d| d.value).unwrap_or(0.0),
        duration_seconds: duration.map(|d| d.value).unwrap_or(0.0),
        encoded_polyline: route.overview_polyline.points,
        bounds: route.bounds.map(|bounds| GeoBounds {
            south_west: bounds.southwest.into(),
            north_east: bounds.northeast.into(),
        }),
    }))
}

fn predictions_from_autocomplete(
    response: AutocompleteResponse,
) -> Result<Vec<PlacePrediction>, MapProviderError> {
    if !check_status(&response.status, response.error_message)? {
        return Ok(Vec::new());
    }

    Ok(response
        .predictions
        .into_iter()
        .map(|prediction| {
            let (main_text, secondary_text) = match prediction.structured_formatting {
                Some(formatting) => (Some(formatting.main_text), formatting.secondary_text),
                None => (None, None),
            };

            PlacePrediction {
                place_id: prediction.place_id,
                description: prediction.description,
                main_text,
                secondary_text,
            }
        })
        .collect())
}

fn place_from_details(
    response: PlaceDetailsResponse,
    requested_place_id: &str,
) -> Result<Option<Place>, MapProviderError> {
    if !check_status(&response.status, response.error_message)? {
        return Ok(None);
    }

    let Some(result) = response.result else {
        return Ok(None);
    };
    let Some(geometry) = result.geometry else {
        return Ok(None);
    };

    let address = result.formatted_address.unwrap_or_default();
    let name = result
        .name
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| Place::name_from_address(&address));

    Ok(Some(Place {
        id: result
            .place_id
            .clone()
            .unwrap_or_else(|| requested_place_id.to_string()),
        name,
        address,
        point: geometry.location.into(),
        place_id: result.place_id,
    }))
}

pub struct GoogleMapsClientParams {
    pub api_key: String,
    pub base_url: String,
}

impl GoogleMapsClientParams {
    pub fn from_env() -> Result<Self, MapProviderError> {
        let api_key = std::env::var(GOOGLE_MAPS_API_KEY_ENV_VAR)
            .map_err(|_| MapProviderError::MissingEnv(GOOGLE_MAPS_API_KEY_ENV_VAR))?;

        Ok(Self {
            api_key,
            base_url: GOOGLE_MAPS_API_URL.to_string(),
        })
    }
}

/// Google Maps web services client.
///
/// Autocomplete and place details requests share a session token so that a
/// search followed by a selection is billed as one session. Call
/// [`GoogleMapsClient::reset_session_token`] once a place has been picked.
pub struct GoogleMapsClient {
    params: GoogleMapsClientParams,
    client: reqwest::Client,
    session_token: RwLock<Uuid>,
}

impl GoogleMapsClient {
    pub fn new(params: GoogleMapsClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
            session_token: RwLock::new(Uuid::new_v4()),
        }
    }

    pub fn from_env() -> Result<Self, MapProviderError> {
        Ok(Self::new(GoogleMapsClientParams::from_env()?))
    }

    pub fn session_token(&self) -> Uuid {
        *self.session_token.read()
    }

    pub fn reset_session_token(&self) {
        *self.session_token.write() = Uuid::new_v4();
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        service: &str,
        query: &[(&str, String)],
    ) -> Result<T, MapProviderError> {
        let url = format!("{}/{}/json", self.params.base_url, service);
        debug!("GoogleMaps: GET {}", url);

        let response = self
            .client
            .get(url)
            .query(query)
            .query(&[("key", &self.params.api_key)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(MapProviderError::Api { status, message });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl MapProvider for GoogleMapsClient {
    async fn geocode(&self, address: &str) -> Result<Option<Place>, MapProviderError> {
        let response: GeocodeResponse = self
            .get_json("geocode", &[("address", address.to_string())])
            .await?;

        place_from_geocode(response)
    }

    async fn reverse_geocode(&self, point: GeoPoint) -> Result<Option<Place>, MapProviderError> {
        let response: GeocodeResponse = self
            .get_json(
                "geocode",
                &[(
                    "latlng",
                    format!("{},{}", point.latitude, point.longitude),
                )],
            )
            .await?;

        // Keep the queried coordinate rather than the snapped address location
        Ok(place_from_geocode(response)?.map(|place| Place { point, ..place }))
    }

    async fn autocomplete(&self, input: &str) -> Result<Vec<PlacePrediction>, MapProviderError> {
        let session_token = self.session_token().to_string();
        let response: AutocompleteResponse = self
            .get_json(
                "place/autocomplete",
                &[
                    ("input", input.to_string()),
                    ("types", AUTOCOMPLETE_TYPES.to_string()),
                    ("sessiontoken", session_token),
                ],
            )
            .await?;

        predictions_from_autocomplete(response)
    }

    async fn place_details(&self, place_id: &str) -> Result<Option<Place>, MapProviderError> {
        let session_token = self.session_token().to_string();
        let response: PlaceDetailsResponse = self
            .get_json(
                "place/details",
                &[
                    ("place_id", place_id.to_string()),
                    ("fields", PLACE_DETAILS_FIELDS.to_string()),
                    ("sessiontoken", session_token),
                ],
            )
            .await?;

        place_from_details(response, place_id)
    }

    async fn route(
        &self,
        origin: &Waypoint,
        destination: &Waypoint,
    ) -> Result<Option<RouteData>, MapProviderError> {
        let response: DirectionsResponse = self
            .get_json(
                "directions",
                &[
                    ("origin", origin.to_string()),
                    ("destination", destination.to_string()),
                    ("mode", String::from("driving")),
                    ("alternatives", String::from("false")),
                ],
            )
            .await?;

        route_from_directions(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geocode_response() {
        let response: GeocodeResponse = serde_json::from_str(
            r#"{
                "status": "OK",
                "results": [{
                    "place_id": "ChIJbU60yXAWrjsR4E9-UejD3_g",
                    "formatted_address": "Bengaluru, Karnataka, India",
                    "geometry": { "location": { "lat": 12.9715987, "lng": 77.5945627 } },
                    "types": ["locality", "political"]
                }]
            }"#,
        )
        .unwrap();

        let place = place_from_geocode(response).unwrap().unwrap();
        assert_eq!(place.id, "ChIJbU60yXAWrjsR4E9-UejD3_g");
        assert_eq!(place.name, "Bengaluru");
        assert_eq!(place.address, "Bengaluru, Karnataka, India");
        assert_eq!(place.point, GeoPoint::new(12.9715987, 77.5945627));
        assert_eq!(place.place_id.as_deref(), Some("ChIJbU60yXAWrjsR4E9-UejD3_g"));
    }

    #[test]
    fn test_zero_results_is_not_an_error() {
        let response: GeocodeResponse =
            serde_json::from_str(r#"{ "status": "ZERO_RESULTS", "results": [] }"#).unwrap();
        assert_eq!(place_from_geocode(response).unwrap(), None);

        let response: AutocompleteResponse =
            serde_json::from_str(r#"{ "status": "ZERO_RESULTS" }"#).unwrap();
        assert!(predictions_from_autocomplete(response).unwrap().is_empty());
    }

    #[test]
    fn test_denied_request_is_an_error() {
        let response: GeocodeResponse = serde_json::from_str(
            r#"{ "status": "REQUEST_DENIED", "error_message": "The provided API key is invalid." }"#,
        )
        .unwrap();

        match place_from_geocode(response) {
            Err(MapProviderError::Status { status, message }) => {
                assert_eq!(status, "REQUEST_DENIED");
                assert_eq!(message, "The provided API key is invalid.");
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_directions_response() {
        let response: DirectionsResponse = serde_json::from_str(
            r#"{
                "status": "OK",
                "routes": [{
                    "overview_polyline": { "points": "_p~iF~ps|U_ulLnnqC_mqNvxq`@" },
                    "bounds": {
                        "northeast": { "lat": 43.252, "lng": -120.2 },
                        "southwest": { "lat": 38.5, "lng": -126.453 }
                    },
                    "legs": [{
                        "distance": { "text": "12.4 km", "value": 12400 },
                        "duration": { "text": "26 mins", "value": 1530 }
                    }]
                }]
            }"#,
        )
        .unwrap();

        let route = route_from_directions(response).unwrap().unwrap();
        assert_eq!(route.distance_text, "12.4 km");
        assert_eq!(route.duration_text, "26 mins");
        assert_eq!(route.distance_meters, 12400.0);
        assert_eq!(route.duration_seconds, 1530.0);
        assert_eq!(route.encoded_polyline, "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
        assert_eq!(
            route.bounds.unwrap().south_west,
            GeoPoint::new(38.5, -126.453)
        );
    }

    #[test]
    fn test_directions_without_legs_defaults_to_zero() {
        let response: DirectionsResponse = serde_json::from_str(
            r#"{ "status": "OK", "routes": [{ "overview_polyline": { "points": "" } }] }"#,
        )
        .unwrap();

        let route = route_from_directions(response).unwrap().unwrap();
        assert_eq!(route.distance_text, "");
        assert_eq!(route.distance_meters, 0.0);
        assert_eq!(route.duration_seconds, 0.0);
        assert_eq!(route.bounds, None);
    }

    #[test]
    fn test_autocomplete_response() {
        let response: AutocompleteResponse = serde_json::from_str(
            r#"{
                "status": "OK",
                "predictions": [
                    {
                        "description": "Koramangala, Bengaluru, Karnataka, India",
                        "place_id": "abc",
                        "structured_formatting": {
                            "main_text": "Koramangala",
                            "secondary_text": "Bengaluru, Karnataka, India"
                        }
                    },
                    { "description": "Kormangala Club", "place_id": "def" }
                ]
            }"#,
        )
        .unwrap();

        let predictions = predictions_from_autocomplete(response).unwrap();
        assert_eq!(predictions.len(), 2);
        assert_eq!(predictions[0].main_text.as_deref(), Some("Koramangala"));
        assert_eq!(predictions[1].place_id, "def");
        assert_eq!(predictions[1].main_text, None);
    }

    #[test]
    fn test_place_details_response() {
        let response: PlaceDetailsResponse = serde_json::from_str(
            r#"{
                "status": "OK",
                "result": {
                    "formatted_address": "Cubbon Park, Bengaluru, Karnataka",
                    "geometry": { "location": { "lat": 12.9763, "lng": 77.5929 } }
                }
            }"#,
        )
        .unwrap();

        let place = place_from_details(response, "requested").unwrap().unwrap();
        assert_eq!(place.id, "requested");
        assert_eq!(place.name, "Cubbon Park");
        assert_eq!(place.place_id, None);
    }

    #[test]
    fn test_place_details_without_geometry() {
        let response: PlaceDetailsResponse = serde_json::from_str(
            r#"{ "status": "OK", "result": { "name": "Somewhere" } }"#,
        )
        .unwrap();

        assert_eq!(place_from_details(response, "id").unwrap(), None);
    }

    #[test]
    fn test_reset_session_token() {
        let client = GoogleMapsClient::new(GoogleMapsClientParams {
            api_key: String::from("test"),
            base_url: GOOGLE_MAPS_API_URL.to_string(),
        });

        let first = client.session_token();
        assert_eq!(first, client.session_token());

        client.reset_session_token();
        assert_ne!(first, client.session_token());
    }
}
