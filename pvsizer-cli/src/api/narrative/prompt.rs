use std::fmt::Write;

use pvsizer_quantities::power::Kilowatts;
use serde::Serialize;

use crate::core::{
    project::ProjectDescription,
    result::SizingResult,
    system_type::SystemType,
};

/// System instruction and user query for a single proposal.
pub struct Prompt {
    pub system_instruction: String,
    pub user_query: String,
}

impl Prompt {
    pub fn new(project: &ProjectDescription, result: &SizingResult) -> Self {
        Self {
            system_instruction: Self::system_instruction(project, result),
            user_query: Self::user_query(project, result),
        }
    }

    pub fn into_request(self) -> Request {
        Request {
            system_instruction: Content {
                role: None,
                parts: vec![Part { text: self.system_instruction }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: self.user_query }],
            }],
            tools: vec![Tool { google_search: GoogleSearch {} }],
        }
    }

    fn system_definition(system_type: Option<SystemType>) -> &'static str {
        match system_type {
            Some(SystemType::GridTied) => "a pure grid-tied system",
            Some(SystemType::Hybrid) => "a smart hybrid system (solar and battery storage)",
            Some(SystemType::OffGrid) | None => {
                "an autonomous off-grid system with high availability"
            }
        }
    }

    fn system_instruction(project: &ProjectDescription, result: &SizingResult) -> String {
        let mut instruction = format!(
            "You are a senior sales engineer and energy consultant specialised in battery energy storage systems. \
             Write the executive body of a premium commercial proposal for the end client {client}, \
             who must be convinced both financially and technically. \
             Keep the tone professional, persuasive and confident, and focus on benefits rather than features.\n\n\
             Use clean Markdown without large headings, highlight with bold text, and follow exactly this structure:\n\n\
             1. **Executive summary:** congratulate the client on the innovation and summarise the solution, {definition} in {locality}.\n\
             2. **Why batteries:** list three strong arguments for the battery solution \
             (blackout protection, energy independence, protection of sensitive equipment, better return than diesel), \
             and mention that lithium storage is silent and maintenance-free compared to generators.\n\
             3. **Return on investment:** mention the estimated savings of {savings} per month, \
             the property appreciation and the protection against tariff increases in {region}.\n\
             4. **Technical opinion:** validate the {inverter} inverter and the {n_modules} modules.\n",
            client = project.client,
            definition = Self::system_definition(project.system_type),
            locality = project.locality,
            savings = result.monthly_savings,
            region = project.region,
            inverter = Self::inverter_power(result),
            n_modules = result.generation.n_modules,
        );
        if project.zero_grid {
            instruction.push_str(
                "   The system is zero-grid: emphasise the legal safety of never injecting energy into the grid.\n",
            );
        }
        if project.system_type == Some(SystemType::Hybrid) {
            instruction.push_str(
                "   The system is hybrid: emphasise peak shaving, savings during the peak tariff hours.\n",
            );
        }
        instruction.push_str(
            "\nDo not add proposal headers, dates or placeholders. Only write the body of the proposal.",
        );
        instruction
    }

    fn user_query(project: &ProjectDescription, result: &SizingResult) -> String {
        let mut query = String::new();
        let _ = writeln!(
            query,
            "Project data for the client: {}. Integrator: {}. Location: {}, {}.",
            project.client, project.integrator, project.locality, project.region,
        );
        let _ = writeln!(
            query,
            "System: {}. Consumption: {}.",
            project.system_type.map_or("unset", SystemType::code),
            project.monthly_consumption,
        );
        let _ = writeln!(
            query,
            "Array power: {:.2} kWp. Battery: {}.",
            result.generation.array_power.get(),
            result.storage.battery_energy,
        );
        let _ = writeln!(query, "Inverter: {}.", Self::inverter_power(result));
        let _ = writeln!(query, "Local energy cost: {}.", project.energy_unit_cost);
        query
    }

    /// The inverter the proposal is built around.
    fn inverter_power(result: &SizingResult) -> Kilowatts {
        if result.system_type.is_some_and(SystemType::has_storage) {
            result.storage.inverter_power
        } else {
            result.generation.grid_inverter_power
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    system_instruction: Content,
    contents: Vec<Content>,
    tools: Vec<Tool>,
}

#[derive(Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,

    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Serialize)]
struct GoogleSearch {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog::InverterCatalog,
        core::sizing::size,
        prelude::*,
    };

    fn hybrid() -> (ProjectDescription, SizingResult) {
        let project = ProjectDescription {
            system_type: Some(SystemType::Hybrid),
            zero_grid: true,
            client: "Maria".to_string(),
            ..Default::default()
        };
        let result = size(&project, 4.4.into(), &InverterCatalog::default());
        (project, result)
    }

    #[test]
    fn system_instruction_ok() {
        let (project, result) = hybrid();
        let prompt = Prompt::new(&project, &result);
        assert!(prompt.system_instruction.contains("end client Maria"));
        assert!(prompt.system_instruction.contains("smart hybrid system"));
        assert!(prompt.system_instruction.contains("zero-grid"));
        assert!(prompt.system_instruction.contains("peak shaving"));
        let savings = format!("{} per month", result.monthly_savings);
        assert!(prompt.system_instruction.contains(&savings));
    }

    #[test]
    fn grid_tied_has_no_storage_emphasis() {
        let project =
            ProjectDescription { system_type: Some(SystemType::GridTied), ..Default::default() };
        let result = size(&project, 4.4.into(), &InverterCatalog::default());
        let prompt = Prompt::new(&project, &result);
        assert!(prompt.system_instruction.contains("pure grid-tied system"));
        assert!(!prompt.system_instruction.contains("peak shaving"));
        assert!(prompt.user_query.contains("System: ONG."));
        assert!(prompt.user_query.contains("Inverter: 5.0 kW."));
    }

    #[test]
    fn request_serializes() -> Result {
        let (project, result) = hybrid();
        let request = serde_json::to_value(Prompt::new(&project, &result).into_request())?;
        assert!(request["systemInstruction"]["role"].is_null());
        assert_eq!(request["contents"][0]["role"], "user");
        let user_query = request["contents"][0]["parts"][0]["text"].as_str();
        assert!(user_query.is_some_and(|text| text.contains("Maria")));
        assert_eq!(request["tools"][0]["googleSearch"], serde_json::json!({}));
        Ok(())
    }
}
