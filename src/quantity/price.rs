use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::quantity::{Quantity, cost::Cost, energy::MegawattHours};

/// Currency per megawatt-hour.
pub type MegawattHourPrice = Quantity<f64, -1, 1>;

impl Display for MegawattHourPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} zł/MWh", self.0)
    }
}

impl Debug for MegawattHourPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}zł/MWh", self.0)
    }
}

impl Mul<MegawattHours> for MegawattHourPrice {
    type Output = Cost;

    fn mul(self, rhs: MegawattHours) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}
