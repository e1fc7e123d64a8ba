use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use enumset::EnumSet;
use pvsizer_quantities::power::Watts;

use crate::{
    catalog::InverterCatalog,
    core::{
        loads::VoltageClass,
        project::ProjectDescription,
        result::{LoadBasis, SizingResult},
        system_type::SystemType,
    },
    lookup::{LookupProvider, StaticLookup},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn right(content: impl ToString) -> Cell {
    Cell::new(content).set_alignment(CellAlignment::Right)
}

pub fn build_sizing_table(project: &ProjectDescription, result: &SizingResult) -> Table {
    let report = result.report();
    let mut table = new_table();
    table.set_header(vec!["", "Parameter", "Value"]);

    let section = |name: &str| Cell::new(name).add_attribute(Attribute::Bold);

    if let Some(topology) = report.inverter_topology.as_deref() {
        table.add_row(vec![
            section("Storage"),
            Cell::new("Battery bank"),
            right(format!("{:.1} kWh", report.battery_energy_kwh)).fg(Color::Cyan),
        ]);
        table.add_row(vec![
            Cell::new(""),
            Cell::new("Battery modules"),
            right(format!(
                "{} × {:.1} kWh",
                report.n_battery_modules, report.battery_module_capacity_kwh
            )),
        ]);
        table.add_row(vec![
            Cell::new(""),
            Cell::new("Storage inverter"),
            right(format!("{:.1} kW", report.storage_inverter_power_kw)).fg(Color::Cyan),
        ]);
        table.add_row(vec![Cell::new(""), Cell::new("Topology"), right(topology)]);
        table.add_row(vec![
            Cell::new(""),
            Cell::new("Effective load"),
            right(format!("{:.1} kW", report.effective_load_kw)),
        ]);
        table.add_row(vec![
            Cell::new(""),
            Cell::new("Sized from"),
            right(match result.basis {
                LoadBasis::PriorityLoads => "priority loads",
                LoadBasis::MeasuredConsumption => "measured consumption",
            })
            .add_attribute(Attribute::Dim),
        ]);
    }

    table.add_row(vec![
        section("Generation"),
        Cell::new("Array power"),
        right(format!("{:.2} kWp", report.array_power_kwp)).fg(Color::Cyan),
    ]);
    table.add_row(vec![
        Cell::new(""),
        Cell::new("Modules"),
        right(format!("{} × {:.0} Wp", report.n_modules, report.module_power_wp)),
    ]);
    table.add_row(vec![
        Cell::new(""),
        Cell::new("Grid-tied inverter"),
        right(format!("{:.1} kW", report.grid_inverter_power_kw)),
    ]);
    table.add_row(vec![
        Cell::new(""),
        Cell::new("Daily production"),
        right(format!("{:.1} kWh", report.daily_production_kwh)),
    ]);
    table.add_row(vec![
        Cell::new(""),
        Cell::new("Monthly production"),
        right(format!("{:.0} kWh", report.monthly_production_kwh)),
    ]);
    table.add_row(vec![
        Cell::new(""),
        Cell::new("Daily consumption"),
        right(format!("{:.1} kWh", report.daily_consumption_kwh)),
    ]);
    table.add_row(vec![
        Cell::new(""),
        Cell::new("Irradiance"),
        right(format!("{:.2} h", report.irradiance_hours)).add_attribute(Attribute::Dim),
    ]);

    if result.system_type.is_some_and(SystemType::is_grid_connected) {
        table.add_row(vec![
            section("Savings"),
            Cell::new("Monthly"),
            right(format!("R$ {:.2}", report.monthly_savings)).fg(Color::Green),
        ]);
        table.add_row(vec![
            Cell::new(""),
            Cell::new("Annual"),
            right(format!("R$ {:.2}", report.annual_savings)).fg(Color::Green),
        ]);
        table.add_row(vec![
            Cell::new(""),
            Cell::new("Unit cost"),
            right(project.energy_unit_cost).add_attribute(Attribute::Dim),
        ]);
    }
    table
}

/// Priority loads per voltage class, as used by the engine.
pub fn build_loads_table(result: &SizingResult) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Class", "Load", "Share"]);
    let total = result.load.total;
    for class in EnumSet::<VoltageClass>::all() {
        let load = result.load.loads.get(class);
        let share = if total.is_positive() { load.0.0 / total.0.0 } else { 0.0 };
        table.add_row(vec![
            Cell::new(match class {
                VoltageClass::Low => "127 V",
                VoltageClass::Mid => "220 V",
                VoltageClass::High => "380 V",
            }),
            right(load).fg(if load == Watts::ZERO { Color::DarkGrey } else { Color::Reset }),
            right(format!("{:.1}%", share * 100.0)).add_attribute(Attribute::Dim),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        right(total).add_attribute(Attribute::Bold),
        right(""),
    ]);
    table
}

/// Region defaults, or the locality overrides when the region is given.
pub fn build_lookup_table(lookup: StaticLookup, region: Option<&str>) -> Table {
    let mut table = new_table();
    match region {
        None => {
            table.set_header(vec!["Code", "Region", "Distributor", "Unit cost", "Irradiance"]);
            for (code, name) in lookup.regions() {
                let tariff = lookup.tariff(code, "");
                table.add_row(vec![
                    Cell::new(code).add_attribute(Attribute::Bold),
                    Cell::new(name),
                    Cell::new(tariff.distributor),
                    right(tariff.unit_price),
                    right(lookup.irradiance(code)).add_attribute(Attribute::Dim),
                ]);
            }
        }
        Some(region) => {
            table.set_header(vec!["Locality", "Distributor", "Unit cost"]);
            let default = lookup.tariff(region, "");
            table.add_row(vec![
                Cell::new("(default)").add_attribute(Attribute::Dim),
                Cell::new(&default.distributor),
                right(default.unit_price),
            ]);
            for locality in lookup.localities(region) {
                let tariff = lookup.tariff(region, locality);
                let is_override = tariff != default;
                table.add_row(vec![
                    Cell::new(locality),
                    Cell::new(tariff.distributor).fg(if is_override {
                        Color::Cyan
                    } else {
                        Color::Reset
                    }),
                    right(tariff.unit_price),
                ]);
            }
        }
    }
    table
}

pub fn build_catalog_table(catalog: &InverterCatalog) -> Table {
    let mut table = new_table();
    table.set_header(vec!["#", "Rating"]);
    for (index, rating) in catalog.ratings().iter().enumerate() {
        table.add_row(vec![
            right(index + 1).add_attribute(Attribute::Dim),
            right(rating),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sizing::size;

    #[test]
    fn sizing_table_grid_tied_ok() {
        let project =
            ProjectDescription { system_type: Some(SystemType::GridTied), ..Default::default() };
        let result = size(&project, 4.4.into(), &InverterCatalog::default());
        let rendered = build_sizing_table(&project, &result).to_string();
        assert!(rendered.contains("7.58 kWp"));
        assert!(rendered.contains("R$ 578.00"));
        assert!(!rendered.contains("Battery bank"));
    }

    #[test]
    fn sizing_table_off_grid_ok() {
        let project =
            ProjectDescription { system_type: Some(SystemType::OffGrid), ..Default::default() };
        let result = size(&project, 4.4.into(), &InverterCatalog::default());
        let rendered = build_sizing_table(&project, &result).to_string();
        assert!(rendered.contains("Battery bank"));
        assert!(rendered.contains("Split-phase"));
        assert!(!rendered.contains("R$"));
    }

    #[test]
    fn lookup_table_ok() {
        let rendered = build_lookup_table(StaticLookup, None).to_string();
        assert!(rendered.contains("CPFL Paulista"));
        let rendered = build_lookup_table(StaticLookup, Some("SP")).to_string();
        assert!(rendered.contains("Guarulhos"));
        assert!(rendered.contains("EDP SP"));
    }
}
