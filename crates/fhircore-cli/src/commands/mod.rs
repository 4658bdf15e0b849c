pub mod config;
pub mod find;
pub mod inspect;
pub mod label;

use anyhow::{Context, Result};
use fhircore_core::Questionnaire;
use std::path::Path;
use tracing::debug;

/// Read and parse a Questionnaire JSON file
pub async fn read_questionnaire(path: &Path) -> Result<Questionnaire> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let questionnaire = Questionnaire::from_json_str(&contents)
        .with_context(|| format!("Invalid Questionnaire in {}", path.display()))?;
    debug!(path = %path.display(), id = ?questionnaire.id, "Loaded questionnaire");
    Ok(questionnaire)
}
