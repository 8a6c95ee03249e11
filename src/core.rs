pub mod aggregate;
pub mod inspection;
pub mod month;
pub mod parameters;
pub mod sample;
pub mod summary;

pub use self::{
    aggregate::{MonthlyResult, aggregate_monthly},
    inspection::{MonthlyPriceStatistics, inspect_monthly},
    parameters::{DEFAULT_TARGET_YEAR, Parameters, PeakWindow},
    sample::{PriceSample, Series},
    summary::Summary,
};
