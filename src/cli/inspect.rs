use crate::{
    cli::SourceArgs,
    core::inspect_monthly,
    prelude::*,
    tables::{build_ingest_report_table, build_price_statistics_table},
};

#[instrument(skip_all)]
pub fn inspect(source: &SourceArgs) -> Result {
    let ingested = source.load()?;
    if let Some(report) = &ingested.report {
        println!("{}", build_ingest_report_table(report));
    }
    println!("{}", build_price_statistics_table(&inspect_monthly(&ingested.series)));
    Ok(())
}
