use clap::Parser;

use crate::{
    cli::project::{Format, ProjectArgs},
    core::sizing::Engine,
    lookup::StaticLookup,
    prelude::*,
    session::Session,
    tables::{build_loads_table, build_sizing_table},
};

#[derive(Parser)]
pub struct SizeArgs {
    #[clap(flatten)]
    project: ProjectArgs,

    #[clap(long, env = "PVSIZER_FORMAT", value_enum, default_value_t)]
    format: Format,
}

impl SizeArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let format = self.format;
        let (wizard, catalog) = self.project.into_wizard(&StaticLookup)?;
        let catalog = catalog.unwrap_or_default();
        let mut session = Session::new(Engine::new(&StaticLookup, &catalog), wizard);
        let result = *session.calculate()?;
        match format {
            Format::Table => {
                println!("{}", build_sizing_table(session.wizard().project(), &result));
                if result.storage.topology.is_some() {
                    println!("{}", build_loads_table(&result));
                }
            }
            Format::Json => {
                println!("{}", serde_json::to_string_pretty(&result.report())?);
            }
        }
        Ok(())
    }
}
