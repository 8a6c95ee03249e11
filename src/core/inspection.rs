use itertools::{Itertools, MinMaxResult};

use crate::{
    core::{month::Month, sample::PriceSample},
    quantity::price::MegawattHourPrice,
};

/// Raw fixing price statistics of a single month.
#[must_use]
#[derive(Copy, Clone, Debug)]
pub struct MonthlyPriceStatistics {
    pub month: Month,
    pub n_samples: usize,
    pub min: MegawattHourPrice,
    pub mean: MegawattHourPrice,
    pub max: MegawattHourPrice,
}

/// Summarize the raw series month by month, regardless of the target year and season.
pub fn inspect_monthly(series: &[PriceSample]) -> Vec<MonthlyPriceStatistics> {
    series
        .iter()
        .into_group_map_by(|sample| sample.month())
        .into_iter()
        .sorted_unstable_by_key(|(month, _)| *month)
        .filter_map(|(month, samples)| {
            let (min, max) = match samples.iter().map(|sample| sample.price).minmax() {
                MinMaxResult::NoElements => return None,
                MinMaxResult::OneElement(price) => (price, price),
                MinMaxResult::MinMax(min, max) => (min, max),
            };
            #[expect(clippy::cast_precision_loss)]
            let mean = samples.iter().map(|sample| sample.price).sum::<MegawattHourPrice>()
                / samples.len() as f64;
            Some(MonthlyPriceStatistics { month, n_samples: samples.len(), min, mean, max })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_inspect_monthly() {
        let at = |month, hour| {
            NaiveDate::from_ymd_opt(2024, month, 1).unwrap().and_hms_opt(hour, 0, 0).unwrap()
        };
        let series = vec![
            PriceSample::new(at(12, 0), MegawattHourPrice::from(10.0)),
            PriceSample::new(at(1, 0), MegawattHourPrice::from(300.0)),
            PriceSample::new(at(1, 1), MegawattHourPrice::from(100.0)),
            PriceSample::new(at(1, 2), MegawattHourPrice::from(200.0)),
        ];

        let statistics = inspect_monthly(&series);

        assert_eq!(statistics.len(), 2);
        let january = statistics[0];
        assert_eq!(january.month, Month { year: 2024, month: 1 });
        assert_eq!(january.n_samples, 3);
        assert_abs_diff_eq!(january.min.0, 100.0);
        assert_abs_diff_eq!(january.mean.0, 200.0);
        assert_abs_diff_eq!(january.max.0, 300.0);
        let december = statistics[1];
        assert_eq!(december.n_samples, 1);
        assert_abs_diff_eq!(december.min.0, 10.0);
        assert_abs_diff_eq!(december.max.0, 10.0);
    }
}
