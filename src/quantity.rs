pub mod cost;
pub mod energy;
pub mod price;

use std::{
    cmp::Ordering,
    ops::{Div, Mul},
};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

#[derive(
    Clone,
    Copy,
    Deserialize,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
#[serde(transparent)]
pub struct Quantity<T, const ENERGY: isize, const COST: isize>(pub T);

impl<const ENERGY: isize, const COST: isize> Quantity<f64, ENERGY, COST> {
    pub const ZERO: Self = Self(0.0);
}

impl<const ENERGY: isize, const COST: isize> Default for Quantity<f64, ENERGY, COST> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const ENERGY: isize, const COST: isize> PartialEq for Quantity<f64, ENERGY, COST> {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.0).eq(&OrderedFloat(other.0))
    }
}

impl<const ENERGY: isize, const COST: isize> Eq for Quantity<f64, ENERGY, COST> {}

impl<const ENERGY: isize, const COST: isize> PartialOrd for Quantity<f64, ENERGY, COST> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const ENERGY: isize, const COST: isize> Ord for Quantity<f64, ENERGY, COST> {
    fn cmp(&self, other: &Self) -> Ordering {
        OrderedFloat(self.0).cmp(&OrderedFloat(other.0))
    }
}

impl<T, const ENERGY: isize, const COST: isize> Mul<T> for Quantity<T, ENERGY, COST>
where
    T: Mul<T>,
{
    type Output = Quantity<T::Output, ENERGY, COST>;

    fn mul(self, rhs: T) -> Self::Output {
        Quantity(self.0 * rhs)
    }
}

impl<T, const ENERGY: isize, const COST: isize> Div<T> for Quantity<T, ENERGY, COST>
where
    T: Div<T>,
{
    type Output = Quantity<T::Output, ENERGY, COST>;

    fn div(self, rhs: T) -> Self::Output {
        Quantity(self.0 / rhs)
    }
}
