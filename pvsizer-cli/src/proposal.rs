//! Commercial proposal as a Markdown document.

use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

use crate::{
    api::narrative::Narrative,
    core::{project::ProjectDescription, result::SizingResult, system_type::SystemType},
};

#[must_use]
pub struct Proposal<'a> {
    project: &'a ProjectDescription,
    result: &'a SizingResult,
    narrative: Option<&'a Narrative>,
    date: NaiveDate,
}

impl<'a> Proposal<'a> {
    pub const fn new(
        project: &'a ProjectDescription,
        result: &'a SizingResult,
        narrative: Option<&'a Narrative>,
        date: NaiveDate,
    ) -> Self {
        Self { project, result, narrative, date }
    }

    /// `proposal_<client>_<type>.md` with whitespace runs replaced by underscores.
    #[must_use]
    pub fn file_name(&self) -> String {
        let client = self.project.client.split_whitespace().collect::<Vec<_>>().join("_");
        let system_type = self.project.system_type.map_or("unset", SystemType::code);
        format!("proposal_{client}_{system_type}.md")
    }

    fn write_header(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let project = self.project;
        writeln!(f, "# Technical proposal")?;
        writeln!(f)?;
        writeln!(f, "Feasibility study of an energy and smart storage solution.")?;
        writeln!(f)?;
        writeln!(f, "| | |")?;
        writeln!(f, "|---|---|")?;
        writeln!(f, "| **Client** | {} |", project.client)?;
        writeln!(f, "| **Location** | {}, {} |", project.locality, project.region)?;
        writeln!(f, "| **Integrator** | {} |", project.integrator)?;
        writeln!(f, "| **Distributor** | {} |", project.distributor)?;
        writeln!(f, "| **Tariff group** | {} |", project.tariff_group)?;
        writeln!(f, "| **Date** | {} |", self.date)?;
        writeln!(f)
    }

    fn write_summary(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "## Executive summary")?;
        writeln!(f)?;
        match self.narrative {
            Some(narrative) => writeln!(f, "{}", narrative.text.trim())?,
            None => writeln!(f, "_The proposal text has not been generated._")?,
        }
        writeln!(f)
    }

    fn write_specifications(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let report = self.result.report();
        let has_storage = self.result.system_type.is_some_and(SystemType::has_storage);

        writeln!(f, "## System specifications")?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Solar power:** {:.2} kWp, {} × {:.0} Wp modules",
            report.array_power_kwp, report.n_modules, report.module_power_wp,
        )?;
        if has_storage {
            writeln!(
                f,
                "- **Inverter:** {:.1} kW, {}",
                report.storage_inverter_power_kw,
                report.inverter_topology.as_deref().unwrap_or("advanced technology"),
            )?;
            writeln!(
                f,
                "- **Storage:** {:.1} kWh, {} × {:.1} kWh modules, {} estimated autonomy",
                report.battery_energy_kwh,
                report.n_battery_modules,
                report.battery_module_capacity_kwh,
                self.project.backup_hours,
            )?;
        } else {
            writeln!(f, "- **Inverter:** {:.1} kW", report.grid_inverter_power_kw)?;
            writeln!(f, "- **Storage:** N/A, grid-tied connection")?;
        }
        writeln!(f, "- **Connection:** {}", self.project.system_voltage)?;
        writeln!(
            f,
            "- **Total load:** {:.0} W (127 V: {:.0} W, 220 V: {:.0} W, 380 V: {:.0} W)",
            report.total_load_w, report.loads_w.low, report.loads_w.mid, report.loads_w.high,
        )?;
        writeln!(
            f,
            "- **Estimated production:** {:.1} kWh per day, {:.0} kWh per month",
            report.daily_production_kwh, report.monthly_production_kwh,
        )?;
        writeln!(f, "- **Irradiance:** {:.2} h of full sun per day", report.irradiance_hours)?;
        writeln!(f)
    }

    fn write_financials(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if !self.result.system_type.is_some_and(SystemType::is_grid_connected) {
            return Ok(());
        }
        let report = self.result.report();
        writeln!(f, "## Financial analysis")?;
        writeln!(f)?;
        writeln!(f, "- **Projected savings:** R$ {:.2} per month", report.monthly_savings)?;
        writeln!(f, "- **Annual savings:** R$ {:.2}", report.annual_savings)?;
        writeln!(
            f,
            "- Estimated with the local tariff of {} and {:.0}% net compensation.",
            self.project.energy_unit_cost,
            report.net_compensation_factor * 100.0,
        )?;
        writeln!(f, "- **Energy security:** protection against tariff increases and blackouts.")?;
        if self.result.system_type == Some(SystemType::Hybrid) {
            writeln!(f, "- **Power quality:** stable voltage for sensitive equipment.")?;
        }
        writeln!(f)
    }

    fn write_caveats(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.project.zero_grid {
            writeln!(f, "## Zero-grid technology")?;
            writeln!(f)?;
            writeln!(
                f,
                "The inverter limits the export so that no energy is injected into the \
                 distributor grid. The generation follows the instantaneous consumption and the \
                 surplus charges the batteries.",
            )?;
            writeln!(f)?;
        }
        if self.project.is_mobile_application {
            writeln!(
                f,
                "> **Attention, space restriction:** this sizing requires a more detailed study, \
                 there is most likely not enough room to charge the batteries from the array. \
                 Consider charging the batteries from the grid (dock station) or from an \
                 alternator.",
            )?;
            writeln!(f)?;
        }
        writeln!(
            f,
            "> **Engineering note:** the values are technical estimates based on the input data \
             and the average irradiance of the region. The actual performance may vary \
             with the weather, shading and usage profile.",
        )?;
        writeln!(f)
    }

    fn write_sources(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Some(narrative) = self.narrative.filter(|narrative| !narrative.sources.is_empty())
        else {
            return Ok(());
        };
        writeln!(f, "## Sources")?;
        writeln!(f)?;
        for source in &narrative.sources {
            writeln!(f, "- [{}]({})", source.title, source.uri)?;
        }
        Ok(())
    }
}

impl Display for Proposal<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.write_header(f)?;
        self.write_summary(f)?;
        self.write_specifications(f)?;
        self.write_financials(f)?;
        self.write_caveats(f)?;
        self.write_sources(f)
    }
}
