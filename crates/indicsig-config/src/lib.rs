//! Configuration management.
//!
//! Sources are layered, later ones winning:
//! 1. built-in defaults
//! 2. an optional TOML file
//! 3. `INDICSIG__SECTION__KEY` environment variables
//! 4. `INDICSIG_API_URL` for the ingestion endpoint

mod settings;

pub use settings::{
    AppConfig, AppSettings, DispatchSettings, IndicatorSettings, LoggingConfig,
    DEFAULT_ENDPOINT_URL, DEFAULT_SOURCE_TAG, DEFAULT_TIMEOUT_SECS,
};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;
use thiserror::Error;

/// Prefix for sectioned environment overrides.
pub const ENV_PREFIX: &str = "INDICSIG";

/// Dedicated endpoint override.
pub const API_URL_ENV: &str = "INDICSIG_API_URL";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Load configuration from file and environment.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, SettingsError> {
    load_with_endpoint(path, std::env::var(API_URL_ENV).ok())
}

/// Same as [`load_config`] with the endpoint override passed in.
pub fn load_with_endpoint(
    path: Option<&Path>,
    endpoint_override: Option<String>,
) -> Result<AppConfig, SettingsError> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(File::from(path).required(true));
    }

    let config = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .set_override_option(
            "dispatch.endpoint_url",
            endpoint_override.filter(|url| !url.trim().is_empty()),
        )?
        .build()?;

    let app: AppConfig = config.try_deserialize()?;
    app.validate().map_err(SettingsError::Invalid)?;
    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn toml_file(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_file() {
        let config = load_with_endpoint(None, None).unwrap();
        assert_eq!(config.dispatch.endpoint_url, DEFAULT_ENDPOINT_URL);
        assert_eq!(config.indicators, IndicatorSettings::default());
    }

    #[test]
    fn test_file_values() {
        let file = toml_file(
            r#"
[logging]
level = "debug"
format = "json"

[dispatch]
endpoint_url = "http://localhost:3000/api/signals"
timeout_secs = 4

[indicators.wavetrend]
channel_length = 9
zero_division = "nan"
"#,
        );

        let config = load_with_endpoint(Some(file.path()), None).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.is_json());
        assert_eq!(config.dispatch.endpoint_url, "http://localhost:3000/api/signals");
        assert_eq!(config.dispatch.timeout_secs, 4);
        assert_eq!(config.indicators.wavetrend.channel_length, 9);
        assert_eq!(config.indicators.wavetrend.average_length, 21);
        assert_eq!(
            config.indicators.wavetrend.zero_division,
            indicsig_indicators::ZeroDivisionPolicy::Nan
        );
    }

    #[test]
    fn test_endpoint_override_wins() {
        let file = toml_file("[dispatch]\nendpoint_url = \"http://from-file/api\"\n");
        let config = load_with_endpoint(
            Some(file.path()),
            Some("http://from-env/api/signals".to_string()),
        )
        .unwrap();
        assert_eq!(config.dispatch.endpoint_url, "http://from-env/api/signals");
    }

    #[test]
    fn test_blank_override_ignored() {
        let config = load_with_endpoint(None, Some("  ".to_string())).unwrap();
        assert_eq!(config.dispatch.endpoint_url, DEFAULT_ENDPOINT_URL);
    }

    #[test]
    fn test_missing_file() {
        let err = load_with_endpoint(Some(Path::new("/nonexistent/indicsig.toml")), None);
        assert!(matches!(err, Err(SettingsError::Load(_))));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let file = toml_file("[indicators.vw_macd]\nfast_period = 0\n");
        let err = load_with_endpoint(Some(file.path()), None).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)), "got {err:?}");
    }
}
