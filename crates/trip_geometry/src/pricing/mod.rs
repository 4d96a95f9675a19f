pub mod fare_schedule;
pub mod ride_class;
pub mod ride_estimate;
