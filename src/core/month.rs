use std::fmt::{Debug, Display, Formatter};

use chrono::Datelike;
use serde::Serialize;

/// Calendar month of a specific year.
///
/// Orders chronologically: first by year, then by month.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Month {
    pub year: i32,

    /// 1-based month number.
    pub month: u32,
}

impl Month {
    pub fn of(date: &impl Datelike) -> Self {
        Self { year: date.year(), month: date.month() }
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Debug for Month {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

/// Range of months within a year considered by the analysis.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Season {
    /// Inclusive.
    pub first_month: u32,

    /// Inclusive.
    pub last_month: u32,
}

impl Season {
    /// April through September.
    pub const SUMMER: Self = Self { first_month: 4, last_month: 9 };

    pub const fn contains(self, month: u32) -> bool {
        self.first_month <= month && month <= self.last_month
    }
}

impl Default for Season {
    fn default() -> Self {
        Self::SUMMER
    }
}
