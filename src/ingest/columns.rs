use csv::StringRecord;

use crate::error::FlixError;

const TIMESTAMP_NAMES: [&str; 3] = ["data", "date", "datetime"];
const PRICE_NAMES: [&str; 2] = ["fixing_i_price", "fixing i price"];
const PRICE_MARKER: &str = "fixing";

/// Trim, lower-case and strip byte-order marks.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.replace('\u{feff}', "").trim().to_lowercase()
}

/// Positions of the columns used by the calculation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Columns {
    pub timestamp: usize,
    pub price: usize,

    /// Normalized names of all the columns.
    pub names: Vec<String>,
}

impl Columns {
    /// Locate the timestamp and fixing price columns in the header.
    ///
    /// Exact price column names take precedence over the substring match.
    pub fn identify(header: &StringRecord) -> Result<Self, FlixError> {
        let names: Vec<String> = header.iter().map(normalize_name).collect();
        let find = |matches: fn(&str) -> bool| names.iter().position(|name| matches(name));

        let timestamp = find(|name| TIMESTAMP_NAMES.contains(&name));
        let price = find(|name| PRICE_NAMES.contains(&name))
            .or_else(|| find(|name| name.contains(PRICE_MARKER)));

        match (timestamp, price) {
            (Some(timestamp), Some(price)) => Ok(Self { timestamp, price, names }),
            _ => Err(FlixError::MissingColumn { columns: names }),
        }
    }

    pub fn timestamp_name(&self) -> &str {
        &self.names[self.timestamp]
    }

    pub fn price_name(&self) -> &str {
        &self.names[self.price]
    }
}
