use pvsizer_quantities::{
    cost::Cost,
    energy::KilowattHours,
    power::{Kilowatts, Watts},
    round_to,
    time::Hours,
};
use serde::Serialize;

use crate::core::{
    loads::PriorityLoads,
    sizing::{BATTERY_MODULE_CAPACITY, DAYS_PER_MONTH, MODULE_POWER},
    system_type::SystemType,
    topology::InverterTopology,
};

/// What drives the storage sizing.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadBasis {
    /// Explicit per-voltage-class priority loads.
    #[default]
    PriorityLoads,

    /// Measured monthly consumption, off-grid only.
    MeasuredConsumption,
}

#[must_use]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Storage {
    pub battery_energy: KilowattHours,
    pub n_battery_modules: u32,

    /// Storage-branch inverter power.
    pub inverter_power: Kilowatts,

    /// [`None`] when there is no storage.
    pub topology: Option<InverterTopology>,
}

#[must_use]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Generation {
    /// Peak power of the array.
    pub array_power: Kilowatts,

    pub n_modules: u32,

    /// Suggested grid-tied inverter power.
    pub grid_inverter_power: Kilowatts,

    pub daily_production: KilowattHours,
    pub daily_consumption: KilowattHours,

    /// Irradiance the array is sized with.
    pub irradiance: Hours,
}

#[must_use]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct LoadSummary {
    /// Loads as used by the engine, zeroed when sizing from the measured consumption.
    pub loads: PriorityLoads,

    pub total: Watts,

    /// Simultaneous load.
    pub effective: Kilowatts,
}

/// Outcome of a single sizing run.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SizingResult {
    pub system_type: Option<SystemType>,
    pub basis: LoadBasis,
    pub storage: Storage,
    pub generation: Generation,
    pub load: LoadSummary,
    pub monthly_savings: Cost,
    pub net_compensation_factor: f64,
}

impl SizingResult {
    pub fn empty(irradiance: Hours) -> Self {
        Self {
            system_type: None,
            basis: LoadBasis::default(),
            storage: Storage::default(),
            generation: Generation { irradiance, ..Generation::default() },
            load: LoadSummary::default(),
            monthly_savings: Cost::ZERO,
            net_compensation_factor: crate::core::sizing::NET_COMPENSATION_FACTOR,
        }
    }

    pub fn monthly_production(&self) -> KilowattHours {
        self.generation.daily_production * DAYS_PER_MONTH
    }

    pub fn annual_savings(&self) -> Cost {
        self.monthly_savings * 12.0
    }

    /// Rounded view for display and export.
    pub fn report(&self) -> SizingReport {
        SizingReport {
            system_type: self.system_type,
            basis: self.basis,
            battery_energy_kwh: self.storage.battery_energy.round_to(1),
            n_battery_modules: self.storage.n_battery_modules,
            battery_module_capacity_kwh: BATTERY_MODULE_CAPACITY.get(),
            storage_inverter_power_kw: self.storage.inverter_power.round_to(1),
            inverter_topology: self.storage.topology.map(|topology| topology.to_string()),
            array_power_kwp: self.generation.array_power.round_to(2),
            n_modules: self.generation.n_modules,
            module_power_wp: MODULE_POWER.0.0,
            grid_inverter_power_kw: self.generation.grid_inverter_power.round_to(1),
            daily_production_kwh: self.generation.daily_production.round_to(1),
            monthly_production_kwh: self.monthly_production().round_to(0),
            daily_consumption_kwh: self.generation.daily_consumption.round_to(1),
            irradiance_hours: self.generation.irradiance.round_to(2),
            effective_load_kw: self.load.effective.round_to(1),
            loads_w: LoadsReport {
                low: round_to(self.load.loads.low.0.0, 0),
                mid: round_to(self.load.loads.mid.0.0, 0),
                high: round_to(self.load.loads.high.0.0, 0),
            },
            total_load_w: round_to(self.load.total.0.0, 0),
            monthly_savings: self.monthly_savings.round_to(2),
            annual_savings: self.annual_savings().round_to(2),
            net_compensation_factor: self.net_compensation_factor,
        }
    }
}

/// [`SizingResult`] rounded to the reporting precision of each field.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SizingReport {
    pub system_type: Option<SystemType>,
    pub basis: LoadBasis,
    pub battery_energy_kwh: f64,
    pub n_battery_modules: u32,
    pub battery_module_capacity_kwh: f64,
    pub storage_inverter_power_kw: f64,
    pub inverter_topology: Option<String>,
    pub array_power_kwp: f64,
    pub n_modules: u32,
    pub module_power_wp: f64,
    pub grid_inverter_power_kw: f64,
    pub daily_production_kwh: f64,
    pub monthly_production_kwh: f64,
    pub daily_consumption_kwh: f64,
    pub irradiance_hours: f64,
    pub effective_load_kw: f64,
    pub loads_w: LoadsReport,
    pub total_load_w: f64,
    pub monthly_savings: f64,
    pub annual_savings: f64,
    pub net_compensation_factor: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoadsReport {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
}
