mod calculate;
mod inspect;

use std::{fs::File, io::BufReader, path::PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

pub use self::{calculate::calculate, inspect::inspect};
use crate::{
    core::{DEFAULT_TARGET_YEAR, Parameters, PeakWindow},
    ingest::{DEMO_YEAR, Ingested, read_series},
    prelude::*,
    quantity::{energy::MegawattHours, price::MegawattHourPrice},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    pub source: SourceArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: estimate the monthly FLIX prices and costs against the current price.
    #[clap(name = "calculate")]
    Calculate(Box<CalculateArgs>),

    /// Show what has been read from the price file, month by month.
    #[clap(name = "inspect")]
    Inspect,
}

#[derive(Parser)]
pub struct SourceArgs {
    /// Historical fixing prices, CSV with any common delimiter. Demo prices are used if omitted.
    #[clap(long = "file", env = "FLIX_FILE", global = true)]
    pub file: Option<PathBuf>,
}

impl SourceArgs {
    pub const fn is_demo(&self) -> bool {
        self.file.is_none()
    }

    pub fn load(&self) -> Result<Ingested> {
        let Some(path) = &self.file else {
            return Ok(Ingested::demo());
        };
        let file =
            File::open(path).with_context(|| format!("failed to open `{}`", path.display()))?;
        read_series(BufReader::new(file))
            .with_context(|| format!("failed to read the prices from `{}`", path.display()))
    }
}

#[derive(Parser)]
pub struct CalculateArgs {
    #[clap(flatten)]
    pub pricing: PricingArgs,

    /// Analysed year, defaults to 2025 or to the demo year when no file is given.
    #[clap(long = "year", env = "FLIX_YEAR")]
    pub year: Option<i32>,

    #[clap(long = "format", env = "FLIX_FORMAT", default_value = "table")]
    pub format: OutputFormat,

    /// Also save the report as TOML.
    #[clap(long = "output-file", env = "FLIX_OUTPUT_FILE")]
    pub output_file: Option<PathBuf>,
}

impl CalculateArgs {
    #[must_use]
    pub fn target_year(&self, source: &SourceArgs) -> i32 {
        self.year.unwrap_or(if source.is_demo() { DEMO_YEAR } else { DEFAULT_TARGET_YEAR })
    }
}

#[derive(Copy, Clone, Parser)]
pub struct PricingArgs {
    /// Add-on to the fixing price («składnik dodatkowy»).
    #[clap(long = "surcharge", default_value = "160", env = "FLIX_SURCHARGE")]
    pub surcharge: MegawattHourPrice,

    /// Yearly consumption in megawatt-hours.
    #[clap(long = "annual-consumption", default_value = "600", env = "FLIX_ANNUAL_CONSUMPTION")]
    pub annual_consumption: MegawattHours,

    /// Current flat price per megawatt-hour.
    #[clap(long = "current-price", default_value = "700", env = "FLIX_CURRENT_PRICE")]
    pub current_price: MegawattHourPrice,

    /// First hour of the increased consumption.
    #[clap(
        long = "peak-start-hour",
        default_value = "8",
        env = "FLIX_PEAK_START_HOUR",
        value_parser = clap::value_parser!(u32).range(0..=23),
    )]
    pub peak_start_hour: u32,

    /// End of the increased consumption, exclusive.
    #[clap(
        long = "peak-end-hour",
        default_value = "16",
        env = "FLIX_PEAK_END_HOUR",
        value_parser = clap::value_parser!(u32).range(1..=24),
    )]
    pub peak_end_hour: u32,

    /// Weight of the increased consumption hours.
    #[clap(long = "peak-weight", default_value = "2.0", env = "FLIX_PEAK_WEIGHT")]
    pub peak_weight: f64,
}

impl PricingArgs {
    pub fn try_into_parameters(self, target_year: i32) -> Result<Parameters> {
        for (name, value) in [
            ("surcharge", self.surcharge.0),
            ("annual consumption", self.annual_consumption.0),
            ("current price", self.current_price.0),
            ("peak weight", self.peak_weight),
        ] {
            ensure!(value.is_finite(), "{name} must be a finite number, got {value}");
        }
        ensure!(self.peak_weight > 0.0, "peak weight must be positive, got {}", self.peak_weight);
        let peak_window =
            PeakWindow { start_hour: self.peak_start_hour, end_hour: self.peak_end_hour };
        if peak_window.is_empty() {
            warn!(?peak_window, "the peak window is empty, all hours weigh the same");
        }
        Ok(Parameters::builder()
            .surcharge(self.surcharge)
            .annual_consumption(self.annual_consumption)
            .current_price(self.current_price)
            .peak_window(peak_window)
            .peak_weight(self.peak_weight)
            .target_year(target_year)
            .build())
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables.
    Table,

    /// Pretty-printed JSON report.
    Json,
}
