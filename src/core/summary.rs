use std::fmt::{Display, Formatter};

use comfy_table::{Cell, CellAlignment, Color, Table, modifiers, presets};
use serde::Serialize;

use crate::{
    core::aggregate::MonthlyResult,
    quantity::{cost::Cost, price::MegawattHourPrice},
};

/// Headline figures over the analysed months.
#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
pub struct Summary {
    /// Mean of the monthly weighted FLIX prices.
    pub average_price: MegawattHourPrice,

    /// Mean monthly FLIX cost.
    pub average_flix_cost: Cost,

    pub total_savings: Cost,
}

impl Summary {
    pub fn from_months(months: &[MonthlyResult]) -> Option<Self> {
        if months.is_empty() {
            return None;
        }
        #[expect(clippy::cast_precision_loss)]
        let n_months = months.len() as f64;
        Some(Self {
            average_price: months
                .iter()
                .map(|month| month.weighted_average_price)
                .sum::<MegawattHourPrice>()
                / n_months,
            average_flix_cost: months.iter().map(|month| month.flix_cost).sum::<Cost>() / n_months,
            total_savings: months.iter().map(|month| month.savings).sum(),
        })
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL_CONDENSED)
            .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
            .enforce_styling()
            .set_header(vec!["Average FLIX price", "Average FLIX cost", "Total savings"])
            .add_row(vec![
                Cell::new(self.average_price).set_alignment(CellAlignment::Right),
                Cell::new(self.average_flix_cost).set_alignment(CellAlignment::Right),
                Cell::new(self.total_savings).set_alignment(CellAlignment::Right).fg(
                    if self.total_savings >= Cost::ZERO { Color::Green } else { Color::Red },
                ),
            ]);
        write!(f, "{table}")
    }
}
