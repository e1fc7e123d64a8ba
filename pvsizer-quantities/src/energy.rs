use std::{
    fmt::{Debug, Display, Formatter},
    ops::{Div, Mul},
};

use crate::{Quantity, cost::Cost, power::Kilowatts, rate::KilowattHourRate, time::Hours};

pub type KilowattHours = Quantity<1, 1, 0>;

impl Display for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} kWh", self.0)
    }
}

impl Debug for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}kWh", self.0)
    }
}

impl Div<Hours> for KilowattHours {
    type Output = Kilowatts;

    fn div(self, rhs: Hours) -> Self::Output {
        Quantity(self.0 / rhs.0)
    }
}

impl Mul<KilowattHourRate> for KilowattHours {
    type Output = Cost;

    fn mul(self, rhs: KilowattHourRate) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn cost_ok() {
        let cost = KilowattHours::from(800) * KilowattHourRate::from(0.85);
        assert_abs_diff_eq!(cost.get(), 680.0);
    }

    #[test]
    fn power_ok() {
        let power = KilowattHours::from(26.4) / Hours::from(3.52);
        assert_abs_diff_eq!(power.get(), 7.5, epsilon = 1e-9);
    }
}
