use jiff::Zoned;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    geometry::{GeoBounds, path_length_km},
    geopoint::GeoPoint,
    polyline::decode_polyline,
    pricing::{fare_schedule::FareSchedule, ride_estimate::RideClassEstimate},
};

/// What a directions provider reports for a single origin/destination leg.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct RouteSummary {
    pub distance_meters: f64,
    pub duration_seconds: f64,
    pub encoded_polyline: String,
}

/// A decoded route together with the priced ride classes for it.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct TripPreview {
    pub path: Vec<GeoPoint>,
    pub bounds: Option<GeoBounds>,
    pub distance_km: f64,
    /// Whole minutes, as used for pricing.
    pub duration_minutes: f64,
    /// Length of the decoded path, for comparison with the provider distance.
    pub path_length_km: f64,
    pub estimates: Vec<RideClassEstimate>,
}

impl TripPreview {
    pub fn from_route(summary: &RouteSummary, schedule: &FareSchedule, now: &Zoned) -> Self {
        let path = decode_polyline(&summary.encoded_polyline);
        let distance_km = summary.distance_meters / 1000.0;
        let duration_minutes = (summary.duration_seconds / 60.0).round();

        let estimates = schedule.estimate_ride_classes(distance_km, duration_minutes, now);

        TripPreview {
            bounds: GeoBounds::from_points(&path),
            path_length_km: path_length_km(&path),
            path,
            distance_km,
            duration_minutes,
            estimates,
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::{civil, tz::TimeZone};

    use super::*;

    #[test]
    fn test_preview_from_route() {
        let now = civil::date(2025, 1, 5)
            .at(18, 30, 0, 0)
            .to_zoned(TimeZone::UTC)
            .unwrap();

        let summary = RouteSummary {
            distance_meters: 12_400.0,
            duration_seconds: 1_530.0,
            encoded_polyline: String::from("_p~iF~ps|U_ulLnnqC_mqNvxq`@"),
        };

        let preview = TripPreview::from_route(&summary, &FareSchedule::default(), &now);

        assert_eq!(preview.path.len(), 3);
        assert_eq!(preview.distance_km, 12.4);
        // 25.5 minutes rounds up
        assert_eq!(preview.duration_minutes, 26.0);
        // 50 + 12.4 * 12 + 26 * 2 = 250.8
        assert_eq!(preview.estimates[0].price, 251);
        assert_eq!(preview.estimates[0].estimated_arrival, "6:33 PM");
        assert!(preview.bounds.is_some());
        assert!(preview.path_length_km > 0.0);
    }

    #[test]
    fn test_preview_without_geometry() {
        let now = civil::date(2025, 1, 5)
            .at(7, 0, 0, 0)
            .to_zoned(TimeZone::UTC)
            .unwrap();

        let summary = RouteSummary {
            distance_meters: 0.0,
            duration_seconds: 0.0,
            encoded_polyline: String::new(),
        };

        let preview = TripPreview::from_route(&summary, &FareSchedule::default(), &now);

        assert!(preview.path.is_empty());
        assert_eq!(preview.bounds, None);
        assert_eq!(preview.path_length_km, 0.0);
        assert_eq!(preview.estimates[0].price, 50);
    }
}
