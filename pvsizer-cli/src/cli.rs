mod catalog;
mod lookup;
mod narrative;
mod project;
mod propose;
mod size;

use clap::{Parser, Subcommand};

use crate::cli::{
    catalog::CatalogArgs,
    lookup::LookupArgs,
    propose::ProposeArgs,
    size::SizeArgs,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// Log debug messages.
    #[clap(long, short, global = true, env = "PVSIZER_VERBOSE")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate the project and print the sizing.
    #[clap(name = "size")]
    Size(Box<SizeArgs>),

    /// Size the project and write the commercial proposal, optionally with the generated narrative.
    #[clap(name = "propose")]
    Propose(Box<ProposeArgs>),

    /// Show the tariff and irradiance tables.
    #[clap(name = "lookup")]
    Lookup(LookupArgs),

    /// Show the inverter catalog.
    #[clap(name = "catalog")]
    Catalog(CatalogArgs),
}
