use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::telemetry::LogFormat;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub catalog: CatalogSettings,
    pub cors: CorsSettings,
    pub auth: StubAccountSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct CatalogSettings {
    /// Location of the JSON document holding the movie array.
    pub path: String,
    /// Prefix prepended to every `poster_path`.
    pub image_base_url: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TelemetrySettings {
    #[serde(default)]
    pub format: LogFormat,
    /// Filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        TelemetrySettings {
            format: LogFormat::default(),
            level: default_log_level(),
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct CorsSettings {
    pub allowed_origins: Vec<String>,
}

/// The single account accepted by the stub login flow.
#[derive(Deserialize, Clone, Debug)]
pub struct StubAccountSettings {
    pub email: String,
    pub password: String,
    pub access_token: String,
    pub refresh_token: String,
    pub user: StubUserSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct StubUserSettings {
    pub id: i64,
    pub name: String,
    pub created_at: String,
    #[serde(default)]
    pub favorite_genres: Vec<String>,
    #[serde(default)]
    pub ott_services: Vec<String>,
}

pub fn get_configuration(filename: &str) -> Result<Settings, config::ConfigError> {
    let mut builder = Config::builder();
    builder = builder
        .add_source(File::new(filename, FileFormat::Json))
        .add_source(
            Environment::with_prefix("MOVIESIR")
                .prefix_separator("_")
                .separator("__"),
        );
    let config = builder.build()?;
    config.try_deserialize()
}
