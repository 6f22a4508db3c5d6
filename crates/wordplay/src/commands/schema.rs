//! Schema command: JSON Schema of the `analyze --json` report.

use clap::Args;
use tracing::{debug, instrument};

use wordplay_core::analysis::FullAnalysisReport;

/// Arguments for the `schema` subcommand.
#[derive(Args, Debug, Default)]
pub struct SchemaArgs {}

/// Print the JSON Schema for [`FullAnalysisReport`].
#[instrument(name = "cmd_schema", skip_all)]
pub fn cmd_schema(_args: SchemaArgs) -> anyhow::Result<()> {
    debug!("executing schema command");
    let schema = schemars::schema_for!(FullAnalysisReport);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_names_report_fields() {
        let schema = serde_json::to_value(schemars::schema_for!(FullAnalysisReport)).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        assert!(properties.contains_key("word_count"));
        assert!(properties.contains_key("appearances_by_letter"));
    }
}
