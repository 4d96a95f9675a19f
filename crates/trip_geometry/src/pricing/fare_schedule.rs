use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Tariff shared by every ride class before the class multiplier.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct FareSchedule {
    pub base_fare: f64,
    pub per_km_rate: f64,
    pub per_minute_rate: f64,
    pub currency_symbol: String,
}

impl Default for FareSchedule {
    fn default() -> Self {
        Self {
            base_fare: 50.0,
            per_km_rate: 12.0,
            per_minute_rate: 2.0,
            currency_symbol: String::from("₹"),
        }
    }
}

impl FareSchedule {
    /// Fare before the class multiplier and before rounding.
    pub fn base_price(&self, distance_km: f64, duration_minutes: f64) -> f64 {
        self.base_fare + distance_km * self.per_km_rate + duration_minutes * self.per_minute_rate
    }
}
