use chrono::{NaiveDateTime, Timelike};

use crate::{core::month::Month, quantity::price::MegawattHourPrice};

/// A single fixing price observation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Constructor)]
pub struct PriceSample {
    pub timestamp: NaiveDateTime,
    pub price: MegawattHourPrice,
}

impl PriceSample {
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    pub fn month(&self) -> Month {
        Month::of(&self.timestamp)
    }
}

/// Price history, ordered as it was read.
pub type Series = Vec<PriceSample>;
