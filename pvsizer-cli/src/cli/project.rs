//! Project description arguments.

use std::{fs, path::PathBuf};

use clap::{Parser, ValueEnum};
use pvsizer_quantities::{
    energy::KilowattHours,
    power::Watts,
    rate::KilowattHourRate,
    time::Hours,
};
use serde::Deserialize;

use crate::{
    catalog::InverterCatalog,
    core::{
        loads::SystemVoltage,
        project::{ProjectDescription, TariffGroup},
        system_type::SystemType,
    },
    lookup::LookupProvider,
    prelude::*,
    wizard::Wizard,
};

/// Contents of the TOML project file.
#[derive(Deserialize)]
struct ProjectFile {
    /// Custom inverter ratings, the built-in catalog is used when absent.
    #[serde(default)]
    catalog: Option<InverterCatalog>,

    #[serde(flatten)]
    project: ProjectDescription,
}

#[derive(Copy, Clone, Default, ValueEnum)]
pub enum Format {
    #[default]
    Table,
    Json,
}

#[must_use]
#[derive(Parser)]
pub struct ProjectArgs {
    /// TOML project file, explicit flags take precedence over its fields.
    #[clap(long = "project-file", env = "PVSIZER_PROJECT_FILE")]
    pub project_file: Option<PathBuf>,

    /// System topology, selecting it applies the topology presets.
    #[clap(long = "system-type", env = "PVSIZER_SYSTEM_TYPE")]
    pub system_type: Option<SystemType>,

    /// Average monthly consumption in kilowatt-hours.
    #[clap(long = "monthly-consumption-kwh", env = "PVSIZER_MONTHLY_CONSUMPTION_KWH")]
    pub monthly_consumption: Option<KilowattHours>,

    /// Measured monthly consumption in kilowatt-hours, off-grid only.
    #[clap(
        long = "measured-monthly-consumption-kwh",
        env = "PVSIZER_MEASURED_MONTHLY_CONSUMPTION_KWH"
    )]
    pub measured_monthly_consumption: Option<KilowattHours>,

    /// Desired battery autonomy in hours.
    #[clap(long = "backup-hours", env = "PVSIZER_BACKUP_HOURS")]
    pub backup_hours: Option<Hours>,

    /// Priority loads at 127 V.
    #[clap(long = "low-voltage-load-watts", env = "PVSIZER_LOW_VOLTAGE_LOAD_WATTS")]
    pub low_voltage_load: Option<Watts>,

    /// Priority loads at 220 V.
    #[clap(long = "mid-voltage-load-watts", env = "PVSIZER_MID_VOLTAGE_LOAD_WATTS")]
    pub mid_voltage_load: Option<Watts>,

    /// Priority loads at 380 V.
    #[clap(long = "high-voltage-load-watts", env = "PVSIZER_HIGH_VOLTAGE_LOAD_WATTS")]
    pub high_voltage_load: Option<Watts>,

    /// Share of the priority loads running at the same time.
    #[clap(long = "simultaneity-factor", env = "PVSIZER_SIMULTANEITY_FACTOR")]
    pub simultaneity_factor: Option<f64>,

    #[clap(long = "system-voltage", env = "PVSIZER_SYSTEM_VOLTAGE")]
    pub system_voltage: Option<SystemVoltage>,

    /// Two-letter state code, refreshes the distributor and the unit cost.
    #[clap(long, env = "PVSIZER_REGION")]
    pub region: Option<String>,

    /// City name, refreshes the distributor and the unit cost.
    #[clap(long, env = "PVSIZER_LOCALITY")]
    pub locality: Option<String>,

    /// Energy unit cost, overrides the tariff lookup.
    #[clap(long = "energy-unit-cost", env = "PVSIZER_ENERGY_UNIT_COST")]
    pub energy_unit_cost: Option<KilowattHourRate>,

    #[clap(long = "tariff-group", env = "PVSIZER_TARIFF_GROUP")]
    pub tariff_group: Option<TariffGroup>,

    /// Vehicle, boat or stand installation.
    #[clap(long, env = "PVSIZER_MOBILE")]
    pub mobile: bool,

    /// The system must not inject energy into the grid.
    #[clap(long = "zero-grid", env = "PVSIZER_ZERO_GRID")]
    pub zero_grid: bool,

    #[clap(long, env = "PVSIZER_DISTRIBUTOR")]
    pub distributor: Option<String>,

    #[clap(long, env = "PVSIZER_INTEGRATOR")]
    pub integrator: Option<String>,

    #[clap(long, env = "PVSIZER_CLIENT")]
    pub client: Option<String>,
}

impl ProjectArgs {
    /// Read the project file, if any.
    #[instrument(skip_all)]
    fn read_file(&self) -> Result<(ProjectDescription, Option<InverterCatalog>)> {
        let Some(path) = &self.project_file else {
            return Ok((ProjectDescription::default(), None));
        };
        info!(path = %path.display(), "reading the project file…");
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let file: ProjectFile = toml::from_str(&contents)
            .with_context(|| format!("failed to parse `{}`", path.display()))?;
        Ok((file.project, file.catalog))
    }

    /// Build the project and walk it through the wizard.
    ///
    /// Returns the validated wizard and the custom catalog, if the project file has one.
    pub fn into_wizard(
        self,
        lookup: &impl LookupProvider,
    ) -> Result<(Wizard, Option<InverterCatalog>)> {
        let (project, catalog) = self.read_file()?;
        let mut wizard = Wizard::new(project);

        if let Some(system_type) = self.system_type {
            wizard = wizard.select_system(system_type);
        }
        match (self.region, self.locality) {
            (Some(region), Some(locality)) => {
                wizard = wizard.with_location(region, locality, lookup);
            }
            (Some(region), None) => {
                wizard = wizard.with_region(region, lookup);
            }
            (None, Some(locality)) => {
                let region = wizard.project().region.clone();
                wizard = wizard.with_location(region, locality, lookup);
            }
            (None, None) => {}
        }
        wizard = wizard.edit(|project| {
            if let Some(monthly_consumption) = self.monthly_consumption {
                project.monthly_consumption = monthly_consumption;
            }
            if let Some(measured_monthly_consumption) = self.measured_monthly_consumption {
                project.measured_monthly_consumption = measured_monthly_consumption;
            }
            if let Some(backup_hours) = self.backup_hours {
                project.backup_hours = backup_hours;
            }
            if let Some(load) = self.low_voltage_load {
                project.priority_loads.low = load;
            }
            if let Some(load) = self.mid_voltage_load {
                project.priority_loads.mid = load;
            }
            if let Some(load) = self.high_voltage_load {
                project.priority_loads.high = load;
            }
            if let Some(simultaneity_factor) = self.simultaneity_factor {
                project.simultaneity_factor = simultaneity_factor;
            }
            if let Some(system_voltage) = self.system_voltage {
                project.system_voltage = system_voltage;
            }
            if let Some(energy_unit_cost) = self.energy_unit_cost {
                project.energy_unit_cost = energy_unit_cost;
            }
            if let Some(tariff_group) = self.tariff_group {
                project.tariff_group = tariff_group;
            }
            project.is_mobile_application |= self.mobile;
            project.zero_grid |= self.zero_grid;
            if let Some(distributor) = self.distributor {
                project.distributor = distributor;
            }
            if let Some(integrator) = self.integrator {
                project.integrator = integrator;
            }
            if let Some(client) = self.client {
                project.client = client;
            }
        });

        let wizard = Wizard::complete(wizard.project().clone())?;
        if wizard.project().is_mobile_application {
            warn!(
                "mobile application: there is likely not enough room to charge the batteries from \
                 the array, consider charging from the grid (dock station) or from an alternator",
            );
        }
        Ok((wizard, catalog))
    }
}
