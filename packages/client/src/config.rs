use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Backend connection configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend's admin surface.
    /// Default: "http://localhost:3001/admin".
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:3001/admin".into()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ClientConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("base_url", default_base_url())?
            // Load from config/console.toml
            .add_source(File::with_name("config/console").required(false))
            // Override from environment (e.g., JUDGEBOARD__BASE_URL)
            .add_source(Environment::with_prefix("JUDGEBOARD").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
