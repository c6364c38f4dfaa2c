//! Schema command: print the JSON Schema of the statistics record.

use clap::Args;
use tracing::instrument;

use textstat_core::TextStats;

/// Arguments for the `schema` subcommand.
#[derive(Args, Debug, Default)]
pub struct SchemaArgs {}

/// Print the JSON Schema for the `en`-labelled JSON report.
#[instrument(name = "cmd_schema", skip_all)]
pub fn cmd_schema(_args: SchemaArgs) -> anyhow::Result<()> {
    let schema = schemars::schema_for!(TextStats);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
