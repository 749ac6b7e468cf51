//! CLI configuration and fixture loading

use std::path::Path;

use rolefolio_types::LensConfig;
use serde::de::DeserializeOwned;

use crate::error::{CliError, CliResult};

/// Load the engine configuration from a TOML file, or defaults without one.
pub fn load_config(path: Option<&Path>) -> CliResult<LensConfig> {
    let Some(path) = path else {
        return Ok(LensConfig::default());
    };

    let contents = std::fs::read_to_string(path)?;
    let config: LensConfig =
        toml::from_str(&contents).map_err(|e| CliError::Config(e.to_string()))?;
    config
        .validate()
        .map_err(|e| CliError::Config(e.to_string()))?;
    tracing::debug!(path = %path.display(), "Loaded configuration");
    Ok(config)
}

/// Read a JSON or YAML fixture, chosen by file extension.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    let contents = std::fs::read_to_string(path)?;
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    if is_yaml {
        Ok(serde_yaml::from_str(&contents)?)
    } else {
        Ok(serde_json::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_path_gives_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.metadata.description_max_chars, 160);
        assert!(config.tracking.enabled);
    }

    #[test]
    fn partial_toml_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[site]\nbase_url = \"https://people.example\"\n\n[tracking]\nenabled = false"
        )
        .unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.site.base_url, "https://people.example");
        assert_eq!(config.site.login_path, "/login");
        assert!(!config.tracking.enabled);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[metadata]\ndescription_max_chars = 0").unwrap();

        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn yaml_fixtures_are_detected_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "basic_info:\n  display_name: Ada").unwrap();

        let store: rolefolio_types::ProfileStore = load_document(file.path()).unwrap();
        assert_eq!(store.basic_info.display_name.as_deref(), Some("Ada"));
    }
}
