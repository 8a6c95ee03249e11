use std::{fs, path::Path};

use serde::Serialize;

use crate::{
    core::{MonthlyResult, Parameters, Summary},
    prelude::*,
};

/// Everything needed to reproduce or chart a calculation.
#[must_use]
#[derive(Serialize)]
pub struct Report<'a> {
    pub parameters: &'a Parameters,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,

    pub months: &'a [MonthlyResult],
}

impl<'a> Report<'a> {
    pub fn new(parameters: &'a Parameters, months: &'a [MonthlyResult]) -> Self {
        Self { parameters, summary: Summary::from_months(months), months }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize the report to JSON")
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize the report to TOML")
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn write_toml(&self, path: &Path) -> Result {
        fs::write(path, self.to_toml()?)
            .with_context(|| format!("failed to write `{}`", path.display()))?;
        info!("saved the report");
        Ok(())
    }
}
