use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Test,
    Production,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub api: ApiSettings,
    pub sgtradex: SgtradexSettings,
    pub environment: Environment,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    pub ip: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SgtradexSettings {
    /// Base url of the pilotage API; the client appends `/pilotage/{imo}`.
    pub url: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let environment = std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "development".into())
            .to_lowercase();

        Config::builder()
            .add_source(File::with_name(&format!("config/{environment}")).required(true))
            .add_source(config::Environment::with_prefix("PILOTAGE_API").separator("__"))
            .set_override("environment", environment.as_str())?
            .build()?
            .try_deserialize()
    }
}

impl ApiSettings {
    pub fn listener_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
