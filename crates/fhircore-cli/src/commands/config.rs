use anyhow::{Context, Result};
use std::path::Path;

use fhircore_config::{AppConfiguration, ConfigurationRegistry};

use crate::cli::OutputFormat;
use crate::output::{print_heading, print_report, print_success, print_table};

/// Load the application configuration in `path` through a registry
pub async fn load(path: &Path, app_id: Option<&str>) -> Result<AppConfiguration> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let parsed = AppConfiguration::from_file_contents(path, &contents)
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;

    let app_id = app_id.unwrap_or(&parsed.app_id).to_string();
    let registry = ConfigurationRegistry::builder()
        .with_static(vec![parsed])
        .build();

    Ok(registry.load_app_configurations(&app_id).await?)
}

pub async fn show(path: &Path, app_id: Option<&str>, format: OutputFormat) -> Result<()> {
    let config = load(path, app_id).await?;

    if format == OutputFormat::Json {
        return print_report(&config, &[], Vec::new(), format);
    }

    print_success(&format!("Loaded application '{}'", config.app_id));
    let view = &config.register_view;
    print_heading("Title", &view.app_title);
    print_heading("Languages", &config.languages.join(", "));
    print_table(
        &["Setting", "Value"],
        vec![
            vec!["Registration form".into(), view.registration_form.clone()],
            vec!["Search bar".into(), view.show_search_bar.to_string()],
            vec!["Filter".into(), view.show_filter.to_string()],
            vec!["Scan QR code".into(), view.show_scan_qr_code.to_string()],
            vec!["New client button".into(), view.show_new_client_button.to_string()],
            vec!["Switch languages".into(), view.switch_languages.to_string()],
        ],
    );

    let options = config
        .navigation
        .iter()
        .flat_map(|n| &n.navigation_options)
        .map(|o| vec![o.id.clone(), o.title.clone(), o.icon.clone()])
        .collect();
    print_table(&["Option", "Title", "Icon"], options);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_single_app_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        std::io::Write::write_all(&mut file, br#"{"appId":"quest","registerView":{"appTitle":"Quest"}}"#)
            .unwrap();

        let config = load(file.path(), None).await.unwrap();
        assert_eq!(config.register_view.app_title, "Quest");
    }

    #[tokio::test]
    async fn test_load_wrong_app_id() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        std::io::Write::write_all(&mut file, b"appId = \"quest\"\n").unwrap();

        let err = load(file.path(), Some("anc")).await.unwrap_err();
        assert!(err.to_string().contains("anc"));
    }
}
