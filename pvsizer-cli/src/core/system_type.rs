use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SystemType {
    /// Grid-connected array without storage, focused on bill savings.
    #[value(alias = "ong")]
    GridTied,

    /// Grid-connected array with a battery bank for backup.
    #[value(alias = "hib")]
    Hybrid,

    /// Autonomous installation without any grid connection.
    #[value(alias = "off")]
    OffGrid,
}

impl SystemType {
    /// Whether the system has a battery bank to size.
    pub const fn has_storage(self) -> bool {
        matches!(self, Self::Hybrid | Self::OffGrid)
    }

    /// Whether the system is connected to the grid and therefore compensates the bill.
    pub const fn is_grid_connected(self) -> bool {
        matches!(self, Self::GridTied | Self::Hybrid)
    }

    /// Short code used in document names.
    pub const fn code(self) -> &'static str {
        match self {
            Self::GridTied => "ONG",
            Self::Hybrid => "HIB",
            Self::OffGrid => "OFF",
        }
    }
}

impl Display for SystemType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GridTied => write!(f, "Grid-tied"),
            Self::Hybrid => write!(f, "Hybrid"),
            Self::OffGrid => write!(f, "Off-grid"),
        }
    }
}
