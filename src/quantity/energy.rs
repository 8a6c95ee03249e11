use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

pub type MegawattHours = Quantity<f64, 1, 0>;

impl MegawattHours {
    /// Evenly spread yearly consumption over a single month.
    pub fn monthly_share(self) -> Self {
        self / 12.0
    }
}

impl Display for MegawattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} MWh", self.0)
    }
}

impl Debug for MegawattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}MWh", self.0)
    }
}
