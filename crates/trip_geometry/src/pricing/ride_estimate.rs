use jiff::{SignedDuration, Zoned};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::pricing::{fare_schedule::FareSchedule, ride_class::RideClass};

const ETA_FORMAT: &str = "%-I:%M %p";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct RideClassEstimate {
    pub class_id: RideClass,
    pub display_name: String,
    pub seat_capacity: String,
    /// Pickup time as a 12-hour clock, e.g. `3:07 PM`.
    pub estimated_arrival: String,
    /// Whole currency units.
    pub price: i64,
    pub currency_symbol: String,
}

/// Estimates every ride class with the default fare schedule.
pub fn estimate_ride_classes(
    distance_km: f64,
    duration_minutes: f64,
    now: &Zoned,
) -> Vec<RideClassEstimate> {
    FareSchedule::default().estimate_ride_classes(distance_km, duration_minutes, now)
}

impl FareSchedule {
    /// Prices every ride class for a trip, in [`RideClass::ALL`] order.
    ///
    /// Inputs are not validated. Negative values flow through the formula and
    /// a non-finite fare prices at the nearest representable integer, or 0 for
    /// NaN. The arrival time only depends on `now` and the class dispatch
    /// delay, never on `duration_minutes`.
    pub fn estimate_ride_classes(
        &self,
        distance_km: f64,
        duration_minutes: f64,
        now: &Zoned,
    ) -> Vec<RideClassEstimate> {
        let base_price = self.base_price(distance_km, duration_minutes);

        RideClass::ALL
            .iter()
            .map(|class| RideClassEstimate {
                class_id: *class,
                display_name: class.display_name().to_string(),
                seat_capacity: class.seat_capacity().to_string(),
                estimated_arrival: format_eta(now, class.dispatch_delay_minutes()),
                price: round_half_up(base_price * class.price_multiplier()),
                currency_symbol: self.currency_symbol.clone(),
            })
            .collect()
    }
}

fn format_eta(now: &Zoned, delay_minutes: i64) -> String {
    now.saturating_add(SignedDuration::from_mins(delay_minutes))
        .strftime(ETA_FORMAT)
        .to_string()
}

/// Rounds to the nearest integer, halves towards positive infinity.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
