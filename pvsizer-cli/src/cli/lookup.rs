use clap::Parser;
use pvsizer_quantities::{rate::KilowattHourRate, time::Hours};
use serde::Serialize;

use crate::{
    cli::project::Format,
    lookup::{LookupProvider, StaticLookup},
    prelude::*,
    tables::build_lookup_table,
};

#[derive(Parser)]
pub struct LookupArgs {
    /// Two-letter state code, lists the region's localities when set.
    #[clap(long, env = "PVSIZER_REGION")]
    region: Option<String>,

    /// Resolve the tariff of a single locality.
    #[clap(long, env = "PVSIZER_LOCALITY", requires = "region")]
    locality: Option<String>,

    #[clap(long, env = "PVSIZER_FORMAT", value_enum, default_value_t)]
    format: Format,
}

#[derive(Serialize)]
struct Resolved<'a> {
    region: &'a str,
    locality: &'a str,
    distributor: &'a str,
    unit_price: KilowattHourRate,
    irradiance: Hours,
}

impl LookupArgs {
    #[instrument(skip_all, fields(region = ?self.region, locality = ?self.locality))]
    pub fn run(self) -> Result {
        let lookup = StaticLookup;
        match (self.region.as_deref(), self.locality.as_deref(), self.format) {
            (Some(region), Some(locality), format) => {
                let tariff = lookup.tariff(region, locality);
                let irradiance = lookup.irradiance(region);
                match format {
                    Format::Table => {
                        println!(
                            "{}: {}, {}",
                            tariff.distributor, tariff.unit_price, irradiance,
                        );
                    }
                    Format::Json => {
                        let resolved = Resolved {
                            region,
                            locality,
                            distributor: &tariff.distributor,
                            unit_price: tariff.unit_price,
                            irradiance,
                        };
                        println!("{}", serde_json::to_string_pretty(&resolved)?);
                    }
                }
            }
            (region, _, Format::Table) => {
                println!("{}", build_lookup_table(lookup, region));
            }
            (Some(region), None, Format::Json) => {
                println!("{}", serde_json::to_string_pretty(&lookup.localities(region))?);
            }
            (None, _, Format::Json) => {
                let regions = lookup.regions().collect::<Vec<_>>();
                println!("{}", serde_json::to_string_pretty(&regions)?);
            }
        }
        Ok(())
    }
}
