use crate::{
    cli::{CalculateArgs, OutputFormat, SourceArgs},
    core::aggregate_monthly,
    prelude::*,
    report::Report,
    tables::build_monthly_table,
};

#[instrument(skip_all)]
pub fn calculate(source: &SourceArgs, args: &CalculateArgs) -> Result {
    let ingested = source.load()?;
    let parameters = args.pricing.try_into_parameters(args.target_year(source))?;
    info!(?parameters, "calculating…");

    let months = aggregate_monthly(&ingested.series, &parameters)?;
    if months.is_empty() {
        warn!(
            year = parameters.target_year,
            "no samples within the season, nothing to compare",
        );
    }

    let report = Report::new(&parameters, &months);
    match args.format {
        OutputFormat::Table => {
            println!("{}", build_monthly_table(&months, parameters.current_price));
            if let Some(summary) = &report.summary {
                println!("{summary}");
            }
        }
        OutputFormat::Json => {
            println!("{}", report.to_json()?);
        }
    }
    if let Some(output_file) = &args.output_file {
        report.write_toml(output_file)?;
    }

    Ok(())
}
