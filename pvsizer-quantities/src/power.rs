use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::{Quantity, energy::KilowattHours, time::Hours};

pub type Kilowatts = Quantity<1, 0, 0>;

impl Kilowatts {
    pub const fn from_watts(watts: Watts) -> Self {
        Self::new(watts.0.0 / 1000.0)
    }
}

impl Display for Kilowatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} kW", self.0)
    }
}

impl Debug for Kilowatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}kW", self.0)
    }
}

impl Mul<Hours> for Kilowatts {
    type Output = KilowattHours;

    fn mul(self, rhs: Hours) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}

/// Nameplate load power, as the installer enters it.
#[derive(
    Clone,
    Copy,
    Default,
    Deserialize,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Sum,
)]
#[from(i32, f64, OrderedFloat<f64>)]
#[must_use]
pub struct Watts(pub OrderedFloat<f64>);

impl Watts {
    pub const ZERO: Self = Self(OrderedFloat(0.0));

    pub const fn new(value: f64) -> Self {
        Self(OrderedFloat(value))
    }

    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0.0 > 0.0
    }
}

impl From<Watts> for Kilowatts {
    fn from(watts: Watts) -> Self {
        Self::from_watts(watts)
    }
}

impl Mul<f64> for Watts {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Display for Watts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} W", self.0)
    }
}

impl Debug for Watts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}W", self.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn watts_to_kilowatts_ok() {
        assert_abs_diff_eq!(Kilowatts::from(Watts::from(1500)).get(), 1.5);
    }

    #[test]
    fn energy_ok() {
        let energy = Kilowatts::from(1.2) * Hours::from(4.0);
        assert_abs_diff_eq!(energy.get(), 4.8);
    }

    #[test]
    fn display_ok() {
        assert_eq!(Kilowatts::from(7.5).to_string(), "7.5 kW");
        assert_eq!(Watts::from(3500).to_string(), "3500 W");
    }
}
