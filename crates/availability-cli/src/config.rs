//! CLI configuration: dataset location and output formatting.

use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// JSON dataset served through the in-memory record store. Read from STAFF_AVAIL_DATA_PATH.
    #[serde(default)]
    pub data_path: Option<String>,

    /// Pretty-print JSON output. Read from STAFF_AVAIL_PRETTY.
    #[serde(default)]
    pub pretty: Option<bool>,
}

impl AppConfig {
    /// `.env`, then the file named by STAFF_AVAIL_CONFIG (if any), then the environment.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("STAFF_AVAIL_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix("STAFF_AVAIL"));
        c.build()?.try_deserialize()
    }
}
