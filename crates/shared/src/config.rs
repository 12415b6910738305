//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Snapshot data configuration.
    pub data: DataConfig,
    /// Reporting configuration.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Snapshot data configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Path to the JSON snapshot file holding expenses and categories.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,
}

fn default_snapshot_path() -> String {
    "data/snapshot.json".to_string()
}

/// Reporting configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Currency symbol used when printing amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    "\u{20ac}".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FOCOLARE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply() {
        let config: AppConfig = serde_json::from_str(r#"{"data": {}}"#).unwrap();
        assert_eq!(config.data.snapshot_path, "data/snapshot.json");
        assert_eq!(config.report.currency_symbol, "\u{20ac}");
    }

    #[test]
    fn test_explicit_values_win() {
        let config: AppConfig = serde_json::from_str(
            r#"{"data": {"snapshot_path": "/tmp/x.json"}, "report": {"currency_symbol": "$"}}"#,
        )
        .unwrap();
        assert_eq!(config.data.snapshot_path, "/tmp/x.json");
        assert_eq!(config.report.currency_symbol, "$");
    }
}
