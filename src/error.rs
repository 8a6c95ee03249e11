use thiserror::Error;

/// Terminal failure of a single calculation request.
#[derive(Debug, Error)]
pub enum FlixError {
    #[error(
        "timestamp or fixing price column not found, available columns: [{}]",
        .columns.join(", ")
    )]
    MissingColumn { columns: Vec<String> },

    #[error("invalid fixing price `{value}` on line {line}")]
    InvalidPrice { line: u64, value: String },

    #[error("line {line} has {n_fields} fields but the header has {n_columns}: `{row}`")]
    ExtraFields { line: u64, n_fields: usize, n_columns: usize, row: String },

    #[error("empty dataset: {0}")]
    EmptyDataset(EmptyReason),

    #[error("malformed CSV input")]
    Csv(#[from] csv::Error),

    #[error("failed to read the input")]
    Io(#[from] std::io::Error),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum EmptyReason {
    #[error("the file contains no data rows")]
    NoRows,

    #[error("none of the rows has a valid timestamp")]
    NoValidTimestamps,

    #[error("there are no samples for year {0}")]
    NoSamplesInYear(i32),
}
