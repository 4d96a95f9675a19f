use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RideClass {
    Economy,
    Comfort,
    Premium,
    Suv,
}

impl RideClass {
    /// Every class, cheapest first. Estimates are always listed in this order.
    pub const ALL: [RideClass; 4] = [
        RideClass::Economy,
        RideClass::Comfort,
        RideClass::Premium,
        RideClass::Suv,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            RideClass::Economy => "economy",
            RideClass::Comfort => "comfort",
            RideClass::Premium => "premium",
            RideClass::Suv => "suv",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RideClass::Economy => "Economy",
            RideClass::Comfort => "Comfort",
            RideClass::Premium => "Premium",
            RideClass::Suv => "SUV",
        }
    }

    pub fn seat_capacity(&self) -> &'static str {
        match self {
            RideClass::Economy | RideClass::Comfort | RideClass::Premium => "4 seats",
            RideClass::Suv => "6 seats",
        }
    }

    pub fn price_multiplier(&self) -> f64 {
        match self {
            RideClass::Economy => 1.0,
            RideClass::Comfort => 1.3,
            RideClass::Premium => 1.8,
            RideClass::Suv => 2.2,
        }
    }

    /// Assumed delay before a vehicle of this class reaches the rider.
    pub fn dispatch_delay_minutes(&self) -> i64 {
        match self {
            RideClass::Economy => 3,
            RideClass::Comfort => 5,
            RideClass::Premium => 7,
            RideClass::Suv => 8,
        }
    }
}

impl Display for RideClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}
