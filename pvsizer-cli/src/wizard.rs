//! Guided input flow.
//!
//! Every transition takes the current state by reference and returns either the advanced state
//! or a [`ValidationError`], so a step is never partially applied.

mod error;

use std::fmt::{Display, Formatter};

pub use self::error::ValidationError;
use crate::{
    core::{project::ProjectDescription, system_type::SystemType},
    lookup::LookupProvider,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum Step {
    SystemSelection,
    ProjectData,
    PriorityLoads,
    GridConnection,
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SystemSelection => write!(f, "1 (system)"),
            Self::ProjectData => write!(f, "2 (project data)"),
            Self::PriorityLoads => write!(f, "3 (priority loads)"),
            Self::GridConnection => write!(f, "4 (grid connection)"),
        }
    }
}

#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct Wizard {
    step: Step,
    project: ProjectDescription,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(ProjectDescription::default())
    }
}

impl Wizard {
    pub const fn new(project: ProjectDescription) -> Self {
        Self { step: Step::SystemSelection, project }
    }

    /// Walk through all the steps, stopping at the first validation error.
    pub fn complete(project: ProjectDescription) -> Result<Self, ValidationError> {
        let mut wizard = Self::new(project);
        while wizard.step != Step::GridConnection {
            wizard = wizard.next()?;
        }
        Ok(wizard)
    }

    pub const fn step(&self) -> Step {
        self.step
    }

    pub const fn project(&self) -> &ProjectDescription {
        &self.project
    }

    /// Pick the topology and apply its presets.
    pub fn select_system(&self, system_type: SystemType) -> Self {
        self.edit(|project| {
            project.system_type = Some(system_type);
            project.zero_grid = false;
            match system_type {
                SystemType::GridTied => {
                    project.measured_monthly_consumption = 0.into();
                    project.backup_hours = 4.into();
                }
                SystemType::OffGrid => {
                    project.backup_hours = 24.into();
                }
                SystemType::Hybrid => {}
            }
        })
    }

    /// Change the location and refresh the distributor and unit cost from the tariff tables.
    pub fn with_location(
        &self,
        region: impl Into<String>,
        locality: impl Into<String>,
        lookup: &impl LookupProvider,
    ) -> Self {
        let region = region.into();
        let locality = locality.into();
        let tariff = lookup.tariff(&region, &locality);
        self.edit(|project| {
            project.region = region;
            project.locality = locality;
            project.distributor = tariff.distributor.into_owned();
            project.energy_unit_cost = tariff.unit_price;
        })
    }

    /// Change the region and reset the locality to the region's first known one.
    ///
    /// The locality is left blank for regions without known localities.
    pub fn with_region(&self, region: impl Into<String>, lookup: &impl LookupProvider) -> Self {
        let region = region.into();
        let locality = lookup.localities(&region).first().copied().unwrap_or_default();
        self.with_location(region, locality, lookup)
    }

    /// Apply an arbitrary edit without changing the step.
    pub fn edit(&self, f: impl FnOnce(&mut ProjectDescription)) -> Self {
        let mut project = self.project.clone();
        f(&mut project);
        Self { step: self.step, project }
    }

    /// Validate the current step and advance.
    pub fn next(&self) -> Result<Self, ValidationError> {
        let next_step = match self.step {
            Step::SystemSelection => {
                self.project.system_type.ok_or(ValidationError::MissingSystemType)?;
                Step::ProjectData
            }
            Step::ProjectData => {
                self.validate_project_data()?;
                if self.project.system_type == Some(SystemType::GridTied) {
                    Step::GridConnection
                } else {
                    Step::PriorityLoads
                }
            }
            Step::PriorityLoads => {
                if self.project.system_type.is_some_and(SystemType::has_storage) {
                    self.validate_priority_loads()?;
                }
                Step::GridConnection
            }
            Step::GridConnection => Step::GridConnection,
        };
        Ok(Self { step: next_step, project: self.project.clone() })
    }

    pub fn back(&self) -> Self {
        let previous_step = match (self.step, self.project.system_type) {
            (Step::GridConnection, Some(SystemType::GridTied)) | (Step::PriorityLoads, _) => {
                Step::ProjectData
            }
            (Step::GridConnection, _) => Step::PriorityLoads,
            (Step::ProjectData | Step::SystemSelection, _) => Step::SystemSelection,
        };
        Self { step: previous_step, project: self.project.clone() }
    }

    /// The project, if it has passed all the steps.
    pub const fn ready(&self) -> Result<&ProjectDescription, ValidationError> {
        match self.step {
            Step::GridConnection => Ok(&self.project),
            step => Err(ValidationError::NotReady(step)),
        }
    }

    fn validate_project_data(&self) -> Result<(), ValidationError> {
        let project = &self.project;
        if [&project.integrator, &project.client, &project.locality, &project.region]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(ValidationError::MissingIdentification);
        }
        match project.system_type {
            Some(SystemType::GridTied | SystemType::Hybrid)
                if !project.monthly_consumption.is_positive() =>
            {
                Err(ValidationError::NonPositiveConsumption)
            }
            Some(SystemType::OffGrid)
                if !project.measured_monthly_consumption.is_positive()
                    && !project.priority_loads.total().is_positive() =>
            {
                Err(ValidationError::MissingOffGridDemand)
            }
            _ => Ok(()),
        }
    }

    fn validate_priority_loads(&self) -> Result<(), ValidationError> {
        let project = &self.project;
        if !(project.simultaneity_factor > 0.0 && project.simultaneity_factor <= 1.0) {
            return Err(ValidationError::InvalidSimultaneityFactor);
        }
        if !project.backup_hours.is_positive() {
            return Err(ValidationError::NonPositiveBackupHours);
        }
        let total_load = project.priority_loads.total();
        let uses_measured_consumption = project.system_type == Some(SystemType::OffGrid)
            && project.measured_monthly_consumption.is_positive()
            && !total_load.is_positive();
        if !total_load.is_positive() && !uses_measured_consumption {
            return Err(ValidationError::NoPriorityLoad);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pvsizer_quantities::{energy::KilowattHours, time::Hours};

    use super::*;
    use crate::{core::loads::PriorityLoads, lookup::StaticLookup};

    #[test]
    fn system_type_is_required() {
        assert_eq!(Wizard::default().next(), Err(ValidationError::MissingSystemType));
    }

    #[test]
    fn grid_tied_skips_priority_loads() -> Result<(), ValidationError> {
        let wizard = Wizard::default().select_system(SystemType::GridTied).next()?.next()?;
        assert_eq!(wizard.step(), Step::GridConnection);
        assert_eq!(wizard.back().step(), Step::ProjectData);
        Ok(())
    }

    #[test]
    fn hybrid_walks_all_steps() -> Result<(), ValidationError> {
        let wizard = Wizard::default().select_system(SystemType::Hybrid).next()?.next()?;
        assert_eq!(wizard.step(), Step::PriorityLoads);
        let wizard = wizard.next()?;
        assert_eq!(wizard.step(), Step::GridConnection);
        assert_eq!(wizard.back().step(), Step::PriorityLoads);
        assert_eq!(wizard.next()?.step(), Step::GridConnection);
        Ok(())
    }

    #[test]
    fn back_stops_at_first_step() {
        assert_eq!(Wizard::default().back().step(), Step::SystemSelection);
    }

    #[test]
    fn presets_applied() {
        let wizard = Wizard::default().edit(|project| {
            project.measured_monthly_consumption = 120.into();
            project.zero_grid = true;
        });
        let grid_tied = wizard.select_system(SystemType::GridTied);
        assert_eq!(grid_tied.project().measured_monthly_consumption, KilowattHours::ZERO);
        assert_eq!(grid_tied.project().backup_hours, Hours::from(4));
        assert!(!grid_tied.project().zero_grid);
        let off_grid = wizard.select_system(SystemType::OffGrid);
        assert_eq!(off_grid.project().backup_hours, Hours::from(24));
    }

    #[test]
    fn failed_step_is_not_applied() {
        let wizard = Wizard::default()
            .select_system(SystemType::GridTied)
            .edit(|project| project.monthly_consumption = KilowattHours::ZERO);
        let wizard = wizard.next().unwrap();
        assert_eq!(wizard.next(), Err(ValidationError::NonPositiveConsumption));
        assert_eq!(wizard.step(), Step::ProjectData);
    }

    #[test]
    fn identification_required() {
        let wizard = Wizard::default()
            .select_system(SystemType::Hybrid)
            .edit(|project| project.client = "  ".to_string());
        assert_eq!(wizard.next().unwrap().next(), Err(ValidationError::MissingIdentification));
    }

    #[test]
    fn off_grid_needs_some_demand() {
        let project = ProjectDescription::builder()
            .system_type(SystemType::OffGrid)
            .integrator("Integrator")
            .client("Client")
            .region("MG")
            .locality("Ubá")
            .backup_hours(24.into())
            .build();
        assert_eq!(Wizard::complete(project.clone()), Err(ValidationError::MissingOffGridDemand));

        let measured = ProjectDescription { measured_monthly_consumption: 300.into(), ..project };
        assert_eq!(
            Wizard::complete(measured).map(|wizard| wizard.step()),
            Ok(Step::GridConnection),
        );
    }

    #[test]
    fn priority_loads_validated() {
        let base = Wizard::default().select_system(SystemType::Hybrid);
        let invalid_factor = base.edit(|project| project.simultaneity_factor = 1.2);
        assert_eq!(
            Wizard::complete(invalid_factor.project().clone()),
            Err(ValidationError::InvalidSimultaneityFactor),
        );
        let no_backup = base.edit(|project| project.backup_hours = Hours::ZERO);
        assert_eq!(
            Wizard::complete(no_backup.project().clone()),
            Err(ValidationError::NonPositiveBackupHours),
        );
        let no_loads = base.edit(|project| project.priority_loads = PriorityLoads::ZERO);
        assert_eq!(
            Wizard::complete(no_loads.project().clone()),
            Err(ValidationError::NoPriorityLoad),
        );
    }

    #[test]
    fn ready_only_at_last_step() -> Result<(), ValidationError> {
        let wizard = Wizard::default().select_system(SystemType::GridTied);
        assert_eq!(wizard.ready(), Err(ValidationError::NotReady(Step::SystemSelection)));
        let wizard = Wizard::complete(wizard.project().clone())?;
        assert!(wizard.ready().is_ok());
        Ok(())
    }

    #[test]
    fn region_change_resets_locality() {
        let wizard = Wizard::default().with_region("RJ", &StaticLookup);
        assert_eq!(wizard.project().region, "RJ");
        assert_eq!(wizard.project().locality, "Duque de Caxias");
        assert_eq!(wizard.project().distributor, "Light");

        let wizard = wizard.with_region("AC", &StaticLookup);
        assert_eq!(wizard.project().locality, "");
    }

    #[test]
    fn location_refreshes_tariff() {
        let wizard = Wizard::default().with_location("RJ", "Nova Friburgo", &StaticLookup);
        assert_eq!(wizard.project().distributor, "Energisa Nova Friburgo");
        assert_eq!(wizard.project().energy_unit_cost, 1.02.into());
        assert_eq!(wizard.project().region, "RJ");
    }
}
