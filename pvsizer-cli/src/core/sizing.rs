//! Dimensioning engine.
//!
//! Pure sizing heuristics, no simulation: every call derives a fresh [`SizingResult`] from the
//! project description, the regional irradiance and the inverter catalog. Numeric edge cases
//! degrade to zeros instead of failing, input validation is the caller's responsibility.

use pvsizer_quantities::{
    cost::Cost,
    energy::KilowattHours,
    power::{Kilowatts, Watts},
    time::Hours,
};

use crate::{
    catalog::InverterCatalog,
    core::{
        loads::PriorityLoads,
        project::ProjectDescription,
        result::{Generation, LoadBasis, LoadSummary, SizingResult, Storage},
        system_type::SystemType,
        topology::InverterTopology,
    },
    lookup::LookupProvider,
    prelude::*,
};

/// Usable fraction of the battery nameplate capacity.
pub const DEPTH_OF_DISCHARGE: f64 = 0.8;

/// Nameplate capacity of a single battery module.
pub const BATTERY_MODULE_CAPACITY: KilowattHours = KilowattHours::new(5.0);

/// System losses of the PV array.
pub const PERFORMANCE_FACTOR: f64 = 0.8;

/// Nameplate power of a single PV module.
pub const MODULE_POWER: Watts = Watts::new(640.0);

/// Share of the energy credited back under net metering.
pub const NET_COMPENSATION_FACTOR: f64 = 0.85;

/// Maximum ratio of the array peak power to the inverter nameplate power.
pub const OVERLOAD_RATIO: f64 = 1.5;

pub const DAYS_PER_MONTH: f64 = 30.0;

/// Storage inverter floor when no priority load is defined.
pub const MIN_STORAGE_INVERTER_POWER: Kilowatts = Kilowatts::new(3.5);

/// Share of one usable battery cycle the off-grid array replenishes daily on top of the
/// consumption.
pub const REPLENISHMENT_SHARE: f64 = 0.5;

/// Engine bound to its external collaborators.
pub struct Engine<'a, L> {
    lookup: &'a L,
    catalog: &'a InverterCatalog,
}

impl<'a, L: LookupProvider> Engine<'a, L> {
    pub const fn new(lookup: &'a L, catalog: &'a InverterCatalog) -> Self {
        Self { lookup, catalog }
    }

    /// Size the project at its region's irradiance.
    #[instrument(skip_all, fields(system_type = ?project.system_type, region = %project.region))]
    pub fn size(&self, project: &ProjectDescription) -> SizingResult {
        let irradiance = self.lookup.irradiance(&project.region);
        let result = size(project, irradiance, self.catalog);
        debug!(
            array_power = ?result.generation.array_power,
            battery_energy = ?result.storage.battery_energy,
            "sized",
        );
        result
    }
}

/// Size the project.
pub fn size(
    project: &ProjectDescription,
    irradiance: Hours,
    catalog: &InverterCatalog,
) -> SizingResult {
    let Some(system_type) = project.system_type else {
        return SizingResult::empty(irradiance);
    };
    let basis = LoadBasis::resolve(system_type, project);
    let loads = match basis {
        LoadBasis::PriorityLoads => project.priority_loads,
        LoadBasis::MeasuredConsumption => PriorityLoads::ZERO,
    };

    let (load, mut storage) = if system_type.has_storage() {
        let load = LoadSummary::new(loads, project.simultaneity_factor);
        let battery_energy = match basis {
            LoadBasis::PriorityLoads => load.effective * project.backup_hours / DEPTH_OF_DISCHARGE,
            LoadBasis::MeasuredConsumption => {
                project.measured_monthly_consumption / DAYS_PER_MONTH / DEPTH_OF_DISCHARGE
            }
        };
        let storage = Storage {
            battery_energy,
            n_battery_modules: n_battery_modules(battery_energy),
            inverter_power: Kilowatts::ZERO,
            topology: Some(InverterTopology::suggest(loads.populated(), project.system_voltage)),
        };
        (load, storage)
    } else {
        (LoadSummary::echo(loads), Storage::default())
    };

    let (daily_energy_to_cover, daily_consumption) = match (system_type, basis) {
        (SystemType::GridTied | SystemType::Hybrid, _) => {
            let daily = project.monthly_consumption / DAYS_PER_MONTH;
            (daily, daily)
        }
        (SystemType::OffGrid, LoadBasis::PriorityLoads) => {
            let daily = load.effective * Hours::ONE_DAY;
            (daily, daily)
        }
        (SystemType::OffGrid, LoadBasis::MeasuredConsumption) => {
            let daily = project.measured_monthly_consumption / DAYS_PER_MONTH;
            let replenishment = storage.battery_energy * DEPTH_OF_DISCHARGE * REPLENISHMENT_SHARE;
            (daily + replenishment, daily)
        }
    };
    let generation = Generation::new(daily_energy_to_cover, daily_consumption, irradiance, catalog);

    if system_type.has_storage() {
        let floor = if load.effective.is_positive() {
            load.effective
        } else {
            MIN_STORAGE_INVERTER_POWER
        };
        storage.inverter_power =
            catalog.for_storage(floor, generation.array_power / OVERLOAD_RATIO);
    }

    let monthly_savings = if system_type.is_grid_connected() {
        project.monthly_consumption * project.energy_unit_cost * NET_COMPENSATION_FACTOR
    } else {
        Cost::ZERO
    };

    SizingResult {
        system_type: Some(system_type),
        basis,
        storage,
        generation,
        load,
        monthly_savings,
        net_compensation_factor: NET_COMPENSATION_FACTOR,
    }
}

impl LoadBasis {
    /// Off-grid projects with a measured consumption and no priority loads are sized from the
    /// former.
    fn resolve(system_type: SystemType, project: &ProjectDescription) -> Self {
        if system_type == SystemType::OffGrid
            && project.measured_monthly_consumption.is_positive()
            && !project.priority_loads.is_set()
        {
            Self::MeasuredConsumption
        } else {
            Self::PriorityLoads
        }
    }
}

impl LoadSummary {
    fn new(loads: PriorityLoads, simultaneity_factor: f64) -> Self {
        let total = loads.total();
        Self { loads, total, effective: Kilowatts::from(total * simultaneity_factor) }
    }

    /// Loads are only echoed when there is no storage to size.
    const fn echo(loads: PriorityLoads) -> Self {
        Self { loads, total: Watts::ZERO, effective: Kilowatts::ZERO }
    }
}

impl Generation {
    fn new(
        daily_energy_to_cover: KilowattHours,
        daily_consumption: KilowattHours,
        irradiance: Hours,
        catalog: &InverterCatalog,
    ) -> Self {
        let array_power = if irradiance.is_positive() {
            daily_energy_to_cover / irradiance / PERFORMANCE_FACTOR
        } else {
            Kilowatts::ZERO
        };
        Self {
            array_power,
            n_modules: n_modules(array_power),
            grid_inverter_power: catalog.nearest(array_power / OVERLOAD_RATIO),
            daily_production: array_power * irradiance * PERFORMANCE_FACTOR,
            daily_consumption,
            irradiance,
        }
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn n_battery_modules(battery_energy: KilowattHours) -> u32 {
    (battery_energy / BATTERY_MODULE_CAPACITY).ceil().max(0.0) as u32
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn n_modules(array_power: Kilowatts) -> u32 {
    (array_power / Kilowatts::from(MODULE_POWER)).ceil().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use pvsizer_quantities::rate::KilowattHourRate;

    use super::*;
    use crate::{core::loads::SystemVoltage, lookup::StaticLookup};

    fn grid_tied(monthly_consumption: f64) -> ProjectDescription {
        ProjectDescription::builder()
            .system_type(SystemType::GridTied)
            .monthly_consumption(monthly_consumption.into())
            .energy_unit_cost(KilowattHourRate::from(0.85))
            .region("SP")
            .build()
    }

    fn hybrid() -> ProjectDescription {
        ProjectDescription::builder()
            .system_type(SystemType::Hybrid)
            .monthly_consumption(800.into())
            .priority_loads(PriorityLoads::builder().low(500.into()).mid(1000.into()).build())
            .simultaneity_factor(0.8)
            .backup_hours(4.into())
            .energy_unit_cost(KilowattHourRate::from(0.85))
            .region("SP")
            .build()
    }

    fn size_default(project: &ProjectDescription) -> SizingResult {
        Engine::new(&StaticLookup, &InverterCatalog::default()).size(project)
    }

    #[test]
    fn grid_tied_scenario() {
        let result = size_default(&grid_tied(800.0));
        assert_abs_diff_eq!(result.generation.irradiance.get(), 4.4);
        assert_abs_diff_eq!(
            result.generation.array_power.get(),
            (800.0 / 30.0) / (4.4 * 0.8),
            epsilon = 1e-12
        );
        assert_eq!(result.generation.n_modules, 12);
        assert_abs_diff_eq!(result.monthly_savings.get(), 800.0 * 0.85 * 0.85, epsilon = 1e-9);
        // 7.58 kWp / 1.5 = 5.05 kW:
        assert_eq!(result.generation.grid_inverter_power, Kilowatts::from(5.0));
        assert_eq!(result.storage, Storage::default());
        assert_eq!(result.load.total, Watts::ZERO);

        let report = result.report();
        assert_abs_diff_eq!(report.array_power_kwp, 7.58);
        assert_abs_diff_eq!(report.monthly_savings, 578.0);
    }

    #[test]
    fn hybrid_scenario() {
        let result = size_default(&hybrid());
        assert_eq!(result.basis, LoadBasis::PriorityLoads);
        assert_eq!(result.load.total, Watts::from(1500));
        assert_abs_diff_eq!(result.load.effective.get(), 1.2, epsilon = 1e-12);
        assert_abs_diff_eq!(result.storage.battery_energy.get(), 6.0, epsilon = 1e-12);
        assert_eq!(result.storage.n_battery_modules, 2);
        assert_eq!(result.storage.topology, Some(InverterTopology::SplitPhase));
        // Array is 7.58 kWp, the target 5.05 kW is above the 1.2 kW load floor:
        assert_eq!(result.storage.inverter_power, Kilowatts::from(5.0));
        assert_abs_diff_eq!(result.monthly_savings.get(), 800.0 * 0.85 * 0.85, epsilon = 1e-9);
    }

    #[test]
    fn battery_energy_formula() {
        for (watts, hours) in [(100.0, 1.0), (2500.0, 3.5), (12_345.0, 24.0)] {
            let project = ProjectDescription::builder()
                .system_type(SystemType::Hybrid)
                .priority_loads(PriorityLoads::builder().mid(watts.into()).build())
                .backup_hours(hours.into())
                .build();
            let result = size(&project, Hours::from(4.5), &InverterCatalog::default());
            let effective = result.load.effective;
            assert_abs_diff_eq!(
                result.storage.battery_energy.get(),
                effective.get() * hours / 0.8,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn idempotent() {
        let project = hybrid();
        assert_eq!(size_default(&project), size_default(&project));
    }

    #[test]
    fn monotonic_in_monthly_consumption() {
        let mut previous = size_default(&grid_tied(100.0));
        for consumption in (2..=40).map(|step| f64::from(step) * 100.0) {
            let next = size_default(&grid_tied(consumption));
            assert!(next.generation.array_power > previous.generation.array_power);
            assert!(next.generation.n_modules > previous.generation.n_modules);
            previous = next;
        }
    }

    #[test]
    fn snapping_returns_catalog_values() {
        let catalog = InverterCatalog::default();
        for consumption in (1..=100).map(|step| f64::from(step) * 137.0) {
            let mut project = hybrid();
            project.monthly_consumption = consumption.into();
            let result = size(&project, Hours::from(4.4), &catalog);
            assert!(catalog.ratings().contains(&result.generation.grid_inverter_power));
            assert!(catalog.ratings().contains(&result.storage.inverter_power));
        }
    }

    #[test]
    fn off_grid_fallback() {
        let project = ProjectDescription::builder()
            .system_type(SystemType::OffGrid)
            .measured_monthly_consumption(300.into())
            .backup_hours(24.into())
            .simultaneity_factor(0.8)
            .build();
        let result = size(&project, Hours::from(4.5), &InverterCatalog::default());
        assert_eq!(result.basis, LoadBasis::MeasuredConsumption);
        assert_eq!(result.load.total, Watts::ZERO);
        assert_eq!(result.load.effective, Kilowatts::ZERO);

        // (300 / 30) / 0.8, not the load-driven formula:
        assert_abs_diff_eq!(result.storage.battery_energy.get(), 12.5, epsilon = 1e-12);
        assert_eq!(result.storage.n_battery_modules, 3);
        assert_eq!(result.storage.topology, Some(InverterTopology::NoPriorityLoad));

        // 10 kWh + 0.5 × 12.5 kWh × 0.8 = 15 kWh per day:
        assert_abs_diff_eq!(result.generation.daily_consumption.get(), 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            result.generation.array_power.get(),
            15.0 / (4.5 * 0.8),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(result.generation.daily_production.get(), 15.0, epsilon = 1e-12);
        assert_eq!(result.monthly_savings, Cost::ZERO);

        // Floor falls back to 3.5 kW, the target 4.17 / 1.5 = 2.78 kW is below it:
        assert_eq!(result.storage.inverter_power, Kilowatts::from(3.5));
    }

    #[test]
    fn off_grid_priority_loads_win_over_measured_consumption() {
        let project = ProjectDescription::builder()
            .system_type(SystemType::OffGrid)
            .measured_monthly_consumption(300.into())
            .priority_loads(PriorityLoads::builder().high(2000.into()).build())
            .system_voltage(SystemVoltage::Three380)
            .simultaneity_factor(0.5)
            .backup_hours(10.into())
            .build();
        let result = size(&project, Hours::from(5.0), &InverterCatalog::default());
        assert_eq!(result.basis, LoadBasis::PriorityLoads);
        assert_abs_diff_eq!(result.load.effective.get(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.storage.battery_energy.get(), 12.5, epsilon = 1e-12);
        assert_abs_diff_eq!(result.generation.daily_consumption.get(), 24.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.generation.array_power.get(), 6.0, epsilon = 1e-12);
        assert_eq!(result.storage.topology, Some(InverterTopology::ThreePhase380));
        // Target 4 kW, nearest catalog rating at or above the 1 kW floor:
        assert_eq!(result.storage.inverter_power, Kilowatts::from(4.0));
    }

    #[test]
    fn off_grid_all_zero_does_not_fail() {
        let project = ProjectDescription::builder().system_type(SystemType::OffGrid).build();
        let result = size(&project, Hours::from(4.5), &InverterCatalog::default());
        assert_eq!(result.basis, LoadBasis::PriorityLoads);
        assert_eq!(result.load.total, Watts::ZERO);
        assert_eq!(result.storage.battery_energy, KilowattHours::ZERO);
        assert_eq!(result.storage.n_battery_modules, 0);
        assert_eq!(result.generation.array_power, Kilowatts::ZERO);
        assert_eq!(result.generation.n_modules, 0);
        assert_eq!(result.generation.daily_production, KilowattHours::ZERO);
        assert_eq!(result.monthly_savings, Cost::ZERO);
        assert_eq!(result.storage.inverter_power, MIN_STORAGE_INVERTER_POWER);
    }

    #[test]
    fn full_simultaneity_does_not_attenuate() {
        let mut project = hybrid();
        project.simultaneity_factor = 1.0;
        let result = size_default(&project);
        assert_eq!(result.load.effective, Kilowatts::from(result.load.total));
        assert_abs_diff_eq!(result.load.effective.get(), 1.5);
    }

    #[test]
    fn unset_system_type_is_empty() {
        let project = ProjectDescription::default();
        let result = size(&project, Hours::from(4.4), &InverterCatalog::default());
        assert_eq!(result, SizingResult::empty(Hours::from(4.4)));
    }

    #[test]
    fn zero_irradiance_degrades_to_zero() {
        let result = size(&grid_tied(800.0), Hours::ZERO, &InverterCatalog::default());
        assert_eq!(result.generation.array_power, Kilowatts::ZERO);
        assert_eq!(result.generation.n_modules, 0);
    }
}
