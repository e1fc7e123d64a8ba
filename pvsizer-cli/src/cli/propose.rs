use std::{fs, path::PathBuf};

use chrono::Local;
use clap::Parser;

use crate::{
    cli::{narrative::NarrativeArgs, project::ProjectArgs},
    core::sizing::Engine,
    lookup::StaticLookup,
    prelude::*,
    proposal::Proposal,
    session::{Completion, Session},
    tables::build_sizing_table,
};

#[derive(Parser)]
pub struct ProposeArgs {
    #[clap(flatten)]
    project: ProjectArgs,

    #[clap(flatten)]
    narrative: NarrativeArgs,

    /// Directory to write the proposal document to.
    #[clap(long = "output-dir", env = "PVSIZER_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,
}

impl ProposeArgs {
    #[instrument(skip_all)]
    pub async fn run(self) -> Result {
        let api = self.narrative.api()?;
        let (wizard, catalog) = self.project.into_wizard(&StaticLookup)?;
        let catalog = catalog.unwrap_or_default();
        let mut session = Session::new(Engine::new(&StaticLookup, &catalog), wizard);
        session.calculate()?;

        if let Some(api) = api {
            let (ticket, project, sizing) = session.begin_narrative()?;
            let outcome = api.generate(&project, &sizing).await;
            match session.complete_narrative(ticket, outcome) {
                Completion::Applied => {}
                Completion::Failed | Completion::Stale => {
                    warn!(
                        error = session.error().unwrap_or_default(),
                        "writing the proposal without the narrative",
                    );
                }
            }
        } else {
            warn!("no narrative API key, writing the proposal without the narrative");
        }

        let project = session.wizard().project();
        let sizing = session.sizing().context("the sizing has been invalidated")?;
        println!("{}", build_sizing_table(project, sizing));

        let proposal =
            Proposal::new(project, sizing, session.narrative(), Local::now().date_naive());
        let path = self.output_dir.join(proposal.file_name());
        fs::write(&path, proposal.to_string())
            .with_context(|| format!("failed to write `{}`", path.display()))?;
        info!(path = %path.display(), "written the proposal");
        Ok(())
    }
}
