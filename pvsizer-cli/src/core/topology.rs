use std::fmt::{Display, Formatter};

use enumset::EnumSet;
use serde::Serialize;

use crate::core::loads::{SystemVoltage, VoltageClass};

/// Suggested inverter topology for the storage branch.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InverterTopology {
    NoPriorityLoad,
    ThreePhase380,
    ThreePhase220,
    SplitPhase,
    SinglePhase220,
    SinglePhase127,
    Unspecified,
}

impl InverterTopology {
    /// Pick the topology from the populated voltage classes and the declared system voltage.
    ///
    /// A declared three-phase supply wins over the load mix.
    pub fn suggest(populated: EnumSet<VoltageClass>, system_voltage: SystemVoltage) -> Self {
        if populated.is_empty() {
            return Self::NoPriorityLoad;
        }
        match system_voltage {
            SystemVoltage::Three380 => return Self::ThreePhase380,
            SystemVoltage::Three220 => return Self::ThreePhase220,
            SystemVoltage::Single127 | SystemVoltage::Single220 => {}
        }
        let has_low = populated.contains(VoltageClass::Low);
        let has_mid = populated.contains(VoltageClass::Mid);
        match (has_low, has_mid) {
            (true, true) => Self::SplitPhase,
            (false, true) => Self::SinglePhase220,
            (true, false) => Self::SinglePhase127,
            (false, false) => Self::Unspecified,
        }
    }
}

impl Display for InverterTopology {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPriorityLoad => write!(f, "No priority load defined"),
            Self::ThreePhase380 => write!(f, "Three-phase 380 V"),
            Self::ThreePhase220 => write!(f, "Three-phase 220 V"),
            Self::SplitPhase => write!(f, "Split-phase"),
            Self::SinglePhase220 => write!(f, "Single-phase 220 V"),
            Self::SinglePhase127 => write!(f, "Single-phase 127 V"),
            Self::Unspecified => write!(f, "Unspecified, verify voltages"),
        }
    }
}
