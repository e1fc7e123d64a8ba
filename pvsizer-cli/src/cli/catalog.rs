use std::{fs, path::PathBuf};

use clap::Parser;
use pvsizer_quantities::power::Kilowatts;
use serde::Deserialize;

use crate::{catalog::InverterCatalog, prelude::*, tables::build_catalog_table};

#[derive(Parser)]
pub struct CatalogArgs {
    /// TOML project file with a custom `catalog` array.
    #[clap(long = "project-file", env = "PVSIZER_PROJECT_FILE")]
    project_file: Option<PathBuf>,

    /// Snap the power to the nearest rating.
    #[clap(long = "nearest-kw")]
    nearest: Option<Kilowatts>,
}

impl CatalogArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        #[derive(Deserialize)]
        struct CatalogFile {
            catalog: Option<InverterCatalog>,
        }

        let catalog = match &self.project_file {
            Some(path) => {
                let contents = fs::read_to_string(path)
                    .with_context(|| format!("failed to read `{}`", path.display()))?;
                toml::from_str::<CatalogFile>(&contents)
                    .with_context(|| format!("failed to parse `{}`", path.display()))?
                    .catalog
                    .unwrap_or_default()
            }
            None => InverterCatalog::default(),
        };
        match self.nearest {
            Some(target) => {
                let rating = catalog.nearest(target);
                info!(%target, %rating, "snapped");
                println!("{rating}");
            }
            None => {
                println!("{}", build_catalog_table(&catalog));
            }
        }
        Ok(())
    }
}
