use std::fmt::{Display, Formatter};

use pvsizer_quantities::{energy::KilowattHours, rate::KilowattHourRate, time::Hours};
use serde::{Deserialize, Serialize};

use crate::core::{
    loads::{PriorityLoads, SystemVoltage},
    system_type::SystemType,
};

/// Everything the installer tells about the project.
///
/// The builder defaults every magnitude to zero, while [`Default`] yields the pre-filled form
/// the installer starts from.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, bon::Builder)]
#[serde(default)]
pub struct ProjectDescription {
    /// [`None`] until the installer picks the topology.
    pub system_type: Option<SystemType>,

    /// Average monthly consumption, drives grid-tied and hybrid array sizing.
    #[builder(default)]
    pub monthly_consumption: KilowattHours,

    /// Measured monthly consumption, used by off-grid sizing in absence of priority loads.
    #[builder(default)]
    pub measured_monthly_consumption: KilowattHours,

    /// Desired autonomy of the battery bank.
    #[builder(default)]
    pub backup_hours: Hours,

    #[builder(default)]
    pub priority_loads: PriorityLoads,

    /// Share of the priority loads that run at the same time, `(0, 1]`.
    #[builder(default = 1.0)]
    pub simultaneity_factor: f64,

    #[builder(default)]
    pub system_voltage: SystemVoltage,

    /// Two-letter state code.
    #[builder(into, default)]
    pub region: String,

    /// City name.
    #[builder(into, default)]
    pub locality: String,

    #[builder(default)]
    pub energy_unit_cost: KilowattHourRate,

    /// Vehicle, boat or stand: space for the array is likely insufficient.
    #[builder(default)]
    pub is_mobile_application: bool,

    #[builder(default)]
    pub tariff_group: TariffGroup,

    /// The system must not inject energy into the grid.
    #[builder(default)]
    pub zero_grid: bool,

    #[builder(into, default)]
    pub distributor: String,

    #[builder(into, default)]
    pub integrator: String,

    #[builder(into, default)]
    pub client: String,
}

impl Default for ProjectDescription {
    fn default() -> Self {
        Self {
            system_type: None,
            monthly_consumption: KilowattHours::from(800),
            measured_monthly_consumption: KilowattHours::ZERO,
            backup_hours: Hours::from(4),
            priority_loads: PriorityLoads::builder().low(1500.into()).mid(3500.into()).build(),
            simultaneity_factor: 0.8,
            system_voltage: SystemVoltage::Single220,
            region: "SP".to_string(),
            locality: "São Paulo".to_string(),
            energy_unit_cost: KilowattHourRate::from(0.85),
            is_mobile_application: false,
            tariff_group: TariffGroup::B,
            zero_grid: false,
            distributor: "Enel SP".to_string(),
            integrator: "Solar Tech Integration".to_string(),
            client: "Default Client".to_string(),
        }
    }
}

/// Regulatory tariff group of the consumer unit.
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum TariffGroup {
    /// Low voltage.
    #[default]
    B,

    /// High voltage.
    A,
}

impl Display for TariffGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::B => write!(f, "Group B (low voltage)"),
            Self::A => write!(f, "Group A (high voltage)"),
        }
    }
}
