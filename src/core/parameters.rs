use bon::Builder;
use serde::Serialize;

use crate::{
    core::month::Season,
    quantity::{energy::MegawattHours, price::MegawattHourPrice},
};

pub const DEFAULT_TARGET_YEAR: i32 = 2025;

/// Hours of increased consumption.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PeakWindow {
    /// Inclusive hour of day.
    pub start_hour: u32,

    /// Exclusive hour of day.
    pub end_hour: u32,
}

impl PeakWindow {
    pub const fn contains(self, hour: u32) -> bool {
        self.start_hour <= hour && hour < self.end_hour
    }

    pub const fn is_empty(self) -> bool {
        self.start_hour >= self.end_hour
    }
}

impl Default for PeakWindow {
    fn default() -> Self {
        Self { start_hour: 8, end_hour: 16 }
    }
}

/// Inputs of a single aggregation run.
#[must_use]
#[derive(Copy, Clone, Debug, Builder, Serialize)]
pub struct Parameters {
    /// Added to every fixing price.
    #[builder(default = MegawattHourPrice::from(160.0))]
    pub surcharge: MegawattHourPrice,

    #[builder(default = MegawattHours::from(600.0))]
    pub annual_consumption: MegawattHours,

    /// Customer's current flat price.
    #[builder(default = MegawattHourPrice::from(700.0))]
    pub current_price: MegawattHourPrice,

    /// Weight of the samples inside the peak window, other hours weigh `1.0`.
    #[builder(default = 2.0)]
    pub peak_weight: f64,

    #[builder(default = DEFAULT_TARGET_YEAR)]
    pub target_year: i32,

    #[builder(default)]
    pub peak_window: PeakWindow,

    #[builder(default)]
    pub season: Season,
}

impl Parameters {
    pub const fn weight_of(&self, hour: u32) -> f64 {
        if self.peak_window.contains(hour) { self.peak_weight } else { 1.0 }
    }

    pub fn monthly_consumption(&self) -> MegawattHours {
        self.annual_consumption.monthly_share()
    }
}
