use std::collections::BTreeMap;

use itertools::Itertools;
use serde::Serialize;
use serde_with::{DisplayFromStr, serde_as};

use crate::{
    core::{month::Month, parameters::Parameters, sample::PriceSample},
    error::{EmptyReason, FlixError},
    prelude::*,
    quantity::{cost::Cost, energy::MegawattHours, price::MegawattHourPrice},
};

#[must_use]
#[serde_as]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct MonthlyResult {
    #[serde_as(as = "DisplayFromStr")]
    pub month: Month,

    /// Number of samples the average is built from.
    pub n_samples: usize,

    /// FLIX price: fixing price plus surcharge, weighted by the consumption profile.
    pub weighted_average_price: MegawattHourPrice,

    pub monthly_consumption: MegawattHours,
    pub flix_cost: Cost,
    pub current_cost: Cost,

    /// Positive when FLIX is cheaper than the current price.
    pub savings: Cost,
}

#[derive(Copy, Clone, Default)]
struct WeightedMean {
    weighted_sum: MegawattHourPrice,
    total_weight: f64,
    n_samples: usize,
}

impl WeightedMean {
    fn push(&mut self, price: MegawattHourPrice, weight: f64) {
        self.weighted_sum += price * weight;
        self.total_weight += weight;
        self.n_samples += 1;
    }

    fn mean(self) -> Option<MegawattHourPrice> {
        (self.total_weight > 0.0).then(|| self.weighted_sum / self.total_weight)
    }
}

/// Compute the weighted monthly FLIX prices and the resulting costs.
///
/// Only the samples of [`Parameters::target_year`] within [`Parameters::season`] are considered.
/// The result is ordered chronologically and is empty if the target year has no samples
/// inside the season.
#[instrument(skip_all, fields(n_samples = series.len(), target_year = parameters.target_year))]
pub fn aggregate_monthly(
    series: &[PriceSample],
    parameters: &Parameters,
) -> Result<Vec<MonthlyResult>, FlixError> {
    let in_year = series
        .iter()
        .filter(|sample| sample.month().year == parameters.target_year)
        .collect_vec();
    if in_year.is_empty() {
        return Err(FlixError::EmptyDataset(EmptyReason::NoSamplesInYear(parameters.target_year)));
    }

    let mut groups = BTreeMap::<Month, WeightedMean>::new();
    for sample in in_year {
        let month = sample.month();
        if !parameters.season.contains(month.month) {
            continue;
        }
        let adjusted_price = sample.price + parameters.surcharge;
        groups.entry(month).or_default().push(adjusted_price, parameters.weight_of(sample.hour()));
    }

    let monthly_consumption = parameters.monthly_consumption();
    let current_cost = parameters.current_price * monthly_consumption;
    let results = groups
        .into_iter()
        .filter_map(|(month, accumulator)| {
            let Some(weighted_average_price) = accumulator.mean() else {
                warn!(%month, "zero total weight, skipping the month");
                return None;
            };
            let flix_cost = weighted_average_price * monthly_consumption;
            Some(MonthlyResult {
                month,
                n_samples: accumulator.n_samples,
                weighted_average_price,
                monthly_consumption,
                flix_cost,
                current_cost,
                savings: current_cost - flix_cost,
            })
        })
        .collect_vec();
    debug!(n_months = results.len(), "aggregated");
    Ok(results)
}
