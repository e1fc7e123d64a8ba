#![allow(clippy::doc_markdown)]
#![doc = include_str!("../../README.md")]

mod api;
mod catalog;
mod cli;
mod core;
mod lookup;
mod prelude;
mod proposal;
mod session;
mod tables;
mod wizard;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command},
    prelude::*,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .without_time()
        .compact()
        .init();
    info!(version = crate_version!(), "starting…");

    match args.command {
        Command::Size(args) => args.run()?,
        Command::Propose(args) => args.run().await?,
        Command::Lookup(args) => args.run()?,
        Command::Catalog(args) => args.run()?,
    }

    info!("done!");
    Ok(())
}
