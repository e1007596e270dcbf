//! Configuration structures.

use indicsig_core::IndicatorError;
use indicsig_indicators::{BollingerConfig, MacdDemaConfig, VwMacdConfig, WaveTrendConfig};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Production ingestion endpoint.
pub const DEFAULT_ENDPOINT_URL: &str = "https://indic-3m.vercel.app/api/signals";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SOURCE_TAG: &str = "indicsigs_desktop";

/// Main application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub dispatch: DispatchSettings,
    #[serde(default)]
    pub indicators: IndicatorSettings,
}

impl AppConfig {
    /// Check values serde cannot: positive periods, non-empty endpoint.
    pub fn validate(&self) -> Result<(), String> {
        self.dispatch.validate()?;
        self.indicators.validate().map_err(|e| e.to_string())
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// General app settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "indicsig".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
    /// Directory for a daily-rolling log file
    pub file: Option<String>,
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Ingestion endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchSettings {
    pub endpoint_url: String,
    pub timeout_secs: u64,
    /// Stamped into `metadata.source` of every parsed signal
    pub source_tag: String,
}

impl DispatchSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn validate(&self) -> Result<(), String> {
        if self.endpoint_url.trim().is_empty() {
            return Err("dispatch.endpoint_url must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("dispatch.timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            source_tag: DEFAULT_SOURCE_TAG.to_string(),
        }
    }
}

/// Per-indicator parameters; defaults come from the indicator crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IndicatorSettings {
    pub wavetrend: WaveTrendConfig,
    pub macd_dema: MacdDemaConfig,
    pub vw_macd: VwMacdConfig,
    pub bollinger: BollingerConfig,
}

impl IndicatorSettings {
    pub fn validate(&self) -> Result<(), IndicatorError> {
        self.wavetrend.validate()?;
        self.macd_dema.validate()?;
        self.vw_macd.validate()?;
        self.bollinger.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.dispatch.endpoint_url, DEFAULT_ENDPOINT_URL);
        assert_eq!(config.dispatch.timeout(), Duration::from_secs(10));
        assert_eq!(config.dispatch.source_tag, "indicsigs_desktop");
        assert_eq!(config.indicators.vw_macd.fast_period, 26);
        assert_eq!(config.indicators.vw_macd.slow_period, 12);
        assert!(!config.logging.is_json());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.dispatch.timeout_secs = 0;
        assert!(config.validate().unwrap_err().contains("timeout_secs"));

        let mut config = AppConfig::default();
        config.indicators.macd_dema.signal_period = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = AppConfig::default();
        config.dispatch.endpoint_url = "http://localhost:3000/api/signals".to_string();
        config.logging.file = Some("logs".to_string());

        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("[dispatch]"));
        assert!(rendered.contains("[indicators.wavetrend]"));

        let parsed: AppConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let parsed: AppConfig = toml::from_str(
            "[dispatch]\ntimeout_secs = 3\n\n[indicators.bollinger]\nperiod = 30\n",
        )
        .unwrap();

        assert_eq!(parsed.dispatch.timeout_secs, 3);
        assert_eq!(parsed.dispatch.endpoint_url, DEFAULT_ENDPOINT_URL);
        assert_eq!(parsed.indicators.bollinger.period, 30);
        assert_eq!(parsed.indicators.bollinger.std_dev_multiplier, 2.0);
        assert_eq!(parsed.app, AppSettings::default());
    }
}
