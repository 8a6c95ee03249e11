#![allow(clippy::doc_markdown)]

mod cli;
mod core;
mod error;
mod ingest;
mod prelude;
mod quantity;
mod report;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, calculate, inspect},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_writer(std::io::stderr).without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    match args.command {
        Command::Calculate(calculate_args) => calculate(&args.source, &calculate_args)?,
        Command::Inspect => inspect(&args.source)?,
    }

    info!("done!");
    Ok(())
}
