//! Priority loads and the electrical configuration of the installation.

use std::fmt::{Display, Formatter};

use enumset::{EnumSet, EnumSetType};
use pvsizer_quantities::power::Watts;
use serde::{Deserialize, Serialize};

/// Voltage class of a priority load.
#[derive(Debug, Serialize, Deserialize, EnumSetType)]
pub enum VoltageClass {
    /// 127 V single-phase.
    Low,

    /// 220 V single-phase.
    Mid,

    /// 380 V three-phase.
    High,
}

/// Loads that must stay powered from the battery bank, one figure per voltage class.
#[must_use]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize, bon::Builder)]
#[serde(default)]
pub struct PriorityLoads {
    #[builder(default)]
    pub low: Watts,

    #[builder(default)]
    pub mid: Watts,

    #[builder(default)]
    pub high: Watts,
}

impl PriorityLoads {
    pub const ZERO: Self = Self { low: Watts::ZERO, mid: Watts::ZERO, high: Watts::ZERO };

    pub const fn get(&self, class: VoltageClass) -> Watts {
        match class {
            VoltageClass::Low => self.low,
            VoltageClass::Mid => self.mid,
            VoltageClass::High => self.high,
        }
    }

    pub fn total(&self) -> Watts {
        self.low + self.mid + self.high
    }

    /// Voltage classes with a non-zero load.
    #[must_use]
    pub fn populated(&self) -> EnumSet<VoltageClass> {
        EnumSet::all().iter().filter(|class| self.get(*class).is_positive()).collect()
    }

    /// Whether the installer has entered any load at all.
    #[must_use]
    pub fn is_set(&self) -> bool {
        !self.populated().is_empty()
    }
}

/// Declared nominal AC configuration of the installation.
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum SystemVoltage {
    #[serde(rename = "127V")]
    #[value(name = "127")]
    Single127,

    #[default]
    #[serde(rename = "220V")]
    #[value(name = "220")]
    Single220,

    #[serde(rename = "220V-three-phase")]
    #[value(name = "220-three-phase")]
    Three220,

    #[serde(rename = "380V")]
    #[value(name = "380")]
    Three380,
}

impl Display for SystemVoltage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single127 => write!(f, "127 V (single-phase)"),
            Self::Single220 => write!(f, "220 V (single/split-phase)"),
            Self::Three220 => write!(f, "220 V (three-phase)"),
            Self::Three380 => write!(f, "380 V (three-phase)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_ok() {
        let loads = PriorityLoads::builder().low(500.into()).mid(1000.into()).build();
        assert_eq!(loads.total(), Watts::from(1500));
    }

    #[test]
    fn populated_ok() {
        let loads = PriorityLoads::builder().mid(1000.into()).high(2000.into()).build();
        assert_eq!(loads.populated(), VoltageClass::Mid | VoltageClass::High);
        assert!(loads.is_set());
    }

    #[test]
    fn zero_is_not_set() {
        assert!(!PriorityLoads::ZERO.is_set());
        assert!(PriorityLoads::ZERO.populated().is_empty());
    }
}
