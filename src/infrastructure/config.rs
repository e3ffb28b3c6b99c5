use crate::domain::dashboard::ValidationMode;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};
use serde::Deserialize;

pub const DEFAULT_REGION: &str = "us-west-2";
pub const DEFAULT_DASHBOARD_PREFIX: &str = "Zen_Error_Analysis";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub region: String,
    #[serde(default)]
    pub endpoint: Option<String>,
    pub dashboard_prefix: String,
    pub validation: ValidationMode,
}

impl AppConfig {
    /// Apply command-line values on top of the loaded configuration.
    pub fn with_overrides(
        mut self,
        region: Option<String>,
        endpoint: Option<String>,
        dashboard_prefix: Option<String>,
        strict: bool,
    ) -> Self {
        if let Some(region) = region {
            self.region = region;
        }
        if endpoint.is_some() {
            self.endpoint = endpoint;
        }
        if let Some(prefix) = dashboard_prefix {
            self.dashboard_prefix = prefix;
        }
        if strict {
            self.validation = ValidationMode::Strict;
        }
        self
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default("region", DEFAULT_REGION)?
        .set_default("dashboard_prefix", DEFAULT_DASHBOARD_PREFIX)?
        .set_default("validation", "lenient")
}

pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = defaults()?
        .add_source(config::File::with_name("config/dashboard_split").required(false))
        .add_source(config::Environment::with_prefix("DASHBOARD_SPLIT"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
