use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::geopoint::GeoPoint;

/// Length of a path following its points in order, in kilometers.
pub fn path_length_km(path: &[GeoPoint]) -> f64 {
    path.windows(2)
        .map(|pair| pair[0].haversine_distance_km(&pair[1]))
        .sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct GeoBounds {
    pub south_west: GeoPoint,
    pub north_east: GeoPoint,
}

impl GeoBounds {
    /// Smallest box containing every point, `None` for an empty path.
    ///
    /// Paths crossing the antimeridian get a box spanning the long way round.
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        let first = points.first()?;

        let bounds = points.iter().skip(1).fold(
            GeoBounds {
                south_west: *first,
                north_east: *first,
            },
            |mut bounds, point| {
                bounds.south_west.latitude = bounds.south_west.latitude.min(point.latitude);
                bounds.south_west.longitude = bounds.south_west.longitude.min(point.longitude);
                bounds.north_east.latitude = bounds.north_east.latitude.max(point.latitude);
                bounds.north_east.longitude = bounds.north_east.longitude.max(point.longitude);
                bounds
            },
        );

        Some(bounds)
    }

    pub fn contains(&self, point: &GeoPoint) -> bool {
        (self.south_west.latitude..=self.north_east.latitude).contains(&point.latitude)
            && (self.south_west.longitude..=self.north_east.longitude).contains(&point.longitude)
    }
}
