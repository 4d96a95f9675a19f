pub mod geometry;
pub mod geopoint;
pub mod polyline;
pub mod pricing;
pub mod trip_preview;

pub use geopoint::GeoPoint;
pub use polyline::{decode_polyline, encode_polyline};
pub use pricing::{
    fare_schedule::FareSchedule,
    ride_class::RideClass,
    ride_estimate::{RideClassEstimate, estimate_ride_classes},
};
pub use trip_preview::{RouteSummary, TripPreview};
