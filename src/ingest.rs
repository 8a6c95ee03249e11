mod columns;
mod delimiter;
mod demo;
mod price;
mod timestamp;

use std::io::Read;

use csv::{ReaderBuilder, Trim};
use itertools::Itertools;

pub use self::demo::DEMO_YEAR;
use self::{
    columns::Columns,
    delimiter::sniff_delimiter,
    demo::demo_series,
    price::parse_price,
    timestamp::parse_timestamp,
};
use crate::{
    core::{PriceSample, Series},
    error::{EmptyReason, FlixError},
    prelude::*,
};

/// What was read from a price file and how.
#[must_use]
#[derive(Clone, Debug)]
pub struct IngestReport {
    pub delimiter: char,
    pub timestamp_column: String,
    pub price_column: String,

    /// Number of data rows in the file.
    pub n_rows: usize,

    /// Rows dropped because of an unparsable timestamp.
    pub n_dropped: usize,
}

#[must_use]
pub struct Ingested {
    pub series: Series,

    /// `None` for the demo series.
    pub report: Option<IngestReport>,
}

impl Ingested {
    pub fn demo() -> Self {
        let series = demo_series();
        info!(n_samples = series.len(), year = DEMO_YEAR, "using the demo prices");
        Self { series, report: None }
    }
}

/// Read the price history from a delimited text file.
///
/// Rows with unparsable timestamps are dropped, an invalid price fails the whole file.
/// An empty price cell is only accepted on a row which gets dropped anyway.
#[instrument(skip_all)]
pub fn read_series(mut reader: impl Read) -> Result<Ingested, FlixError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let Some(header_line) = text.lines().find(|line| !line.trim().is_empty()) else {
        return Err(FlixError::EmptyDataset(EmptyReason::NoRows));
    };
    let delimiter = sniff_delimiter(header_line);

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());
    let columns = Columns::identify(reader.headers()?)?;
    let n_columns = columns.names.len();
    debug!(
        delimiter = %char::from(delimiter),
        timestamp = columns.timestamp_name(),
        price = columns.price_name(),
        "identified the columns",
    );

    let mut series = Series::new();
    let mut n_rows = 0;
    for record in reader.records() {
        let record = record?;
        n_rows += 1;
        let line = record.position().map_or(0, csv::Position::line);
        if record.len() > n_columns {
            return Err(FlixError::ExtraFields {
                line,
                n_fields: record.len(),
                n_columns,
                row: record.iter().join(&char::from(delimiter).to_string()),
            });
        }

        let price_cell = record.get(columns.price).unwrap_or_default();
        let price = if price_cell.is_empty() {
            None
        } else {
            let Some(price) = parse_price(price_cell) else {
                return Err(FlixError::InvalidPrice { line, value: price_cell.to_string() });
            };
            Some(price)
        };
        match (record.get(columns.timestamp).and_then(parse_timestamp), price) {
            (Some(timestamp), Some(price)) => series.push(PriceSample::new(timestamp, price)),
            (Some(_), None) => {
                return Err(FlixError::InvalidPrice { line, value: String::new() });
            }
            (None, _) => debug!(line, "dropping the row with an unparsable timestamp"),
        }
    }

    if n_rows == 0 {
        return Err(FlixError::EmptyDataset(EmptyReason::NoRows));
    }
    if series.is_empty() {
        return Err(FlixError::EmptyDataset(EmptyReason::NoValidTimestamps));
    }

    let report = IngestReport {
        delimiter: char::from(delimiter),
        timestamp_column: columns.timestamp_name().to_string(),
        price_column: columns.price_name().to_string(),
        n_rows,
        n_dropped: n_rows - series.len(),
    };
    info!(n_rows, n_samples = series.len(), n_dropped = report.n_dropped, "read the prices");
    Ok(Ingested { series, report: Some(report) })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{
        core::{Parameters, aggregate_monthly},
        quantity::price::MegawattHourPrice,
    };

    #[test]
    fn test_semicolon_and_decimal_comma() -> Result {
        let ingested = read_series("Date;Fixing I Price\n31.01.2025 08:00;123,45\n".as_bytes())?;

        assert_eq!(ingested.series.len(), 1);
        let sample = ingested.series[0];
        assert_eq!(
            sample.timestamp,
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap().and_hms_opt(8, 0, 0).unwrap()
        );
        assert_eq!(sample.price, MegawattHourPrice::from(123.45));

        let report = ingested.report.unwrap();
        assert_eq!(report.delimiter, ';');
        assert_eq!(report.timestamp_column, "date");
        assert_eq!(report.price_column, "fixing i price");
        Ok(())
    }

    #[test]
    fn test_comma_delimited_with_bom() -> Result {
        const CSV: &str = "\u{feff}DateTime , Fixing_I_Price,Volume\n\
            2025-04-01T00:00,410.5,100\n\
            2025-04-01T01:00,399,100\n";
        let ingested = read_series(CSV.as_bytes())?;
        assert_eq!(ingested.series.len(), 2);
        assert_eq!(ingested.series[1].price, MegawattHourPrice::from(399.0));
        Ok(())
    }

    #[test]
    fn test_mixed_timestamps_and_dropped_rows() -> Result {
        const CSV: &str = "data;fixing_i_price\n\
            31/01/2024 08:00;100\n\
            2024-01-31T09:00;200\n\
            not a date;300\n\
            ;400\n";
        let ingested = read_series(CSV.as_bytes())?;

        let prices = ingested.series.iter().map(|sample| sample.price.0).collect::<Vec<_>>();
        assert_eq!(prices, [100.0, 200.0]);
        let report = ingested.report.unwrap();
        assert_eq!(report.n_rows, 4);
        assert_eq!(report.n_dropped, 2);
        Ok(())
    }

    #[test]
    fn test_duplicates_are_kept() -> Result {
        const CSV: &str = "date;fixing\n01.05.2025 10:00;1\n01.05.2025 10:00;2\n";
        assert_eq!(read_series(CSV.as_bytes())?.series.len(), 2);
        Ok(())
    }

    #[test]
    fn test_invalid_price() {
        const CSV: &str = "date;fixing_i_price\n01.05.2025 10:00;1,5\n01.05.2025 11:00;abc\n";
        match read_series(CSV.as_bytes()) {
            Err(FlixError::InvalidPrice { line, value }) => {
                assert_eq!(line, 3);
                assert_eq!(value, "abc");
            }
            Err(error) => panic!("unexpected error: {error}"),
            Ok(_) => panic!("the price must be rejected"),
        }
    }

    #[test]
    fn test_footer_row_is_dropped() -> Result {
        const CSV: &str = "date;fixing\n01.05.2025 10:00;100\nŹródło: TGE;\n";
        let ingested = read_series(CSV.as_bytes())?;
        assert_eq!(ingested.series.len(), 1);
        let report = ingested.report.unwrap();
        assert_eq!(report.n_rows, 2);
        assert_eq!(report.n_dropped, 1);
        Ok(())
    }

    #[test]
    fn test_empty_price_with_valid_timestamp() {
        const CSV: &str = "date;fixing\n01.05.2025 10:00;\n";
        match read_series(CSV.as_bytes()) {
            Err(FlixError::InvalidPrice { line, value }) => {
                assert_eq!(line, 2);
                assert_eq!(value, "");
            }
            Err(error) => panic!("unexpected error: {error}"),
            Ok(_) => panic!("the empty price must be rejected"),
        }
    }

    #[test]
    fn test_unquoted_decimal_comma_is_rejected() {
        const CSV: &str = "date,fixing\n01.05.2025 10:00,123,45\n";
        match read_series(CSV.as_bytes()) {
            Err(FlixError::ExtraFields { line, n_fields, n_columns, row }) => {
                assert_eq!(line, 2);
                assert_eq!(n_fields, 3);
                assert_eq!(n_columns, 2);
                assert_eq!(row, "01.05.2025 10:00,123,45");
            }
            Err(error) => panic!("unexpected error: {error}"),
            Ok(_) => panic!("the row must not be truncated"),
        }
    }

    #[test]
    fn test_missing_price_cell() {
        const CSV: &str = "date;fixing_i_price\n01.05.2025 10:00\n";
        assert!(matches!(read_series(CSV.as_bytes()), Err(FlixError::InvalidPrice { .. })));
    }

    #[test]
    fn test_missing_column() {
        const CSV: &str = "timestamp;price\n01.05.2025 10:00;1\n";
        match read_series(CSV.as_bytes()) {
            Err(FlixError::MissingColumn { columns }) => assert_eq!(columns, ["timestamp", "price"]),
            Err(error) => panic!("unexpected error: {error}"),
            Ok(_) => panic!("the columns must not be identified"),
        }
    }

    #[test]
    fn test_empty_file() {
        assert!(matches!(
            read_series("".as_bytes()),
            Err(FlixError::EmptyDataset(EmptyReason::NoRows))
        ));
        assert!(matches!(
            read_series("date;fixing\n".as_bytes()),
            Err(FlixError::EmptyDataset(EmptyReason::NoRows))
        ));
    }

    #[test]
    fn test_no_valid_timestamps() {
        const CSV: &str = "date;fixing\nyesterday;1\n";
        assert!(matches!(
            read_series(CSV.as_bytes()),
            Err(FlixError::EmptyDataset(EmptyReason::NoValidTimestamps))
        ));
    }

    #[test]
    fn test_previous_year_only() -> Result {
        const CSV: &str = "date;fixing\n01.05.2024 10:00;100\n01.06.2024 10:00;100\n";
        let ingested = read_series(CSV.as_bytes())?;
        let result = aggregate_monthly(&ingested.series, &Parameters::builder().build());
        assert!(matches!(
            result,
            Err(FlixError::EmptyDataset(EmptyReason::NoSamplesInYear(2025)))
        ));
        Ok(())
    }
}
