use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{MonthlyPriceStatistics, MonthlyResult},
    ingest::IngestReport,
    quantity::{cost::Cost, price::MegawattHourPrice},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

pub fn build_monthly_table(months: &[MonthlyResult], current_price: MegawattHourPrice) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Month",
        "Samples",
        "FLIX price",
        "Current price",
        "Consumption",
        "FLIX cost",
        "Current cost",
        "Savings",
    ]);
    for month in months {
        table.add_row(vec![
            Cell::new(month.month),
            Cell::new(month.n_samples)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(month.weighted_average_price).set_alignment(CellAlignment::Right).fg(
                if month.weighted_average_price <= current_price {
                    Color::Green
                } else {
                    Color::Red
                },
            ),
            Cell::new(current_price)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(month.monthly_consumption).set_alignment(CellAlignment::Right),
            Cell::new(month.flix_cost).set_alignment(CellAlignment::Right),
            Cell::new(month.current_cost).set_alignment(CellAlignment::Right),
            Cell::new(month.savings)
                .set_alignment(CellAlignment::Right)
                .fg(if month.savings >= Cost::ZERO { Color::Green } else { Color::Red }),
        ]);
    }
    table
}

pub fn build_price_statistics_table(statistics: &[MonthlyPriceStatistics]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Month", "Samples", "Min", "Mean", "Max"]);
    for month in statistics {
        table.add_row(vec![
            Cell::new(month.month),
            Cell::new(month.n_samples).set_alignment(CellAlignment::Right),
            Cell::new(month.min).set_alignment(CellAlignment::Right).fg(Color::Green),
            Cell::new(month.mean).set_alignment(CellAlignment::Right),
            Cell::new(month.max).set_alignment(CellAlignment::Right).fg(Color::Red),
        ]);
    }
    table
}

pub fn build_ingest_report_table(report: &IngestReport) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Delimiter", "Timestamp column", "Price column", "Rows", "Dropped"]);
    table.add_row(vec![
        Cell::new(format!("{:?}", report.delimiter)),
        Cell::new(&report.timestamp_column),
        Cell::new(&report.price_column),
        Cell::new(report.n_rows).set_alignment(CellAlignment::Right),
        Cell::new(report.n_dropped).set_alignment(CellAlignment::Right).fg(
            if report.n_dropped == 0 { Color::Reset } else { Color::DarkYellow },
        ),
    ]);
    table
}
