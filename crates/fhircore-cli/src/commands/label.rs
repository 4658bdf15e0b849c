use anyhow::Result;
use serde_json::json;

use fhircore_core::as_label;

use crate::cli::OutputFormat;

pub fn label(link_id: &str, format: OutputFormat) -> Result<()> {
    let label = as_label(link_id);
    match format {
        OutputFormat::Json => {
            let value = json!({ "linkId": link_id, "label": label });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Table => println!("{label}"),
    }
    Ok(())
}
