use chrono::{Datelike, NaiveDate, Timelike};

use crate::{
    core::{PriceSample, Series},
    quantity::price::MegawattHourPrice,
};

pub const DEMO_YEAR: i32 = 2024;

/// Synthetic hourly prices for every hour of [`DEMO_YEAR`].
///
/// The price is `430 + (hour % 6) * 7 + month`.
#[must_use]
pub fn demo_series() -> Series {
    NaiveDate::from_ymd_opt(DEMO_YEAR, 1, 1)
        .into_iter()
        .flat_map(|first_day| first_day.iter_days())
        .take_while(|date| date.year() == DEMO_YEAR)
        .flat_map(|date| (0..24).filter_map(move |hour| date.and_hms_opt(hour, 0, 0)))
        .map(|timestamp| {
            let price = 430 + (timestamp.hour() % 6) * 7 + timestamp.month();
            PriceSample::new(timestamp, MegawattHourPrice::from(f64::from(price)))
        })
        .collect()
}
