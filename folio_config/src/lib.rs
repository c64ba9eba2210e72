use std::{
    net::IpAddr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{File, FileFormat};
use folio_models::{email_address::EmailAddress, EnvironmentMode};
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Environment variable holding a colon-separated list of config files to
/// load instead of [`DEFAULT_CONFIG_PATH`].
pub const CONFIG_PATH_ENV_VAR: &str = "FOLIO_CONFIG";

/// Loads the configuration from the paths named by `FOLIO_CONFIG` (or the
/// default config file), with `FOLIO_`-prefixed environment variables layered
/// on top (e.g. `FOLIO_HTTP__PORT=8080`).
pub fn load() -> anyhow::Result<Config> {
    match std::env::var(CONFIG_PATH_ENV_VAR) {
        Ok(paths) => load_paths(&paths.split(':').collect::<Vec<_>>()),
        Err(_) => load_paths(&[DEFAULT_CONFIG_PATH]),
    }
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .add_source(
            config::Environment::with_prefix("FOLIO")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub environment: EnvironmentMode,
    pub http: HttpConfig,
    pub cors: CorsConfig,
    pub storage: StorageConfig,
    pub static_files: Option<StaticFilesConfig>,
    pub contact: ContactConfig,
    pub email: Option<EmailConfig>,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
    pub real_ip: Option<RealIpConfig>,
}

/// Trust a proxy-supplied client address header, but only for requests
/// arriving from `set_from`.
#[derive(Debug, Clone, Deserialize)]
pub struct RealIpConfig {
    pub header: String,
    pub set_from: IpAddr,
}

#[derive(Debug, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct StaticFilesConfig {
    pub root: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    /// Destination address for operator notification emails.
    pub email: EmailAddress,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub smtp_url: String,
    pub from: EmailAddress,
}
