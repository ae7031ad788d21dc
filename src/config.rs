use crate::error::AppError;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_VERSION: &str = "15.24.1";
pub const DEFAULT_LOCALE: &str = "en_US";
pub const DEFAULT_CDN: &str = "https://ddragon.leagueoflegends.com/cdn";

#[derive(Debug, Clone)]
pub struct Config {
    /// Data Dragon patch version, e.g. `15.24.1`
    pub version: String,
    pub locale: String,
    /// Root of a local Data Dragon dump (`<dir>/<version>/data/<locale>/champion.json`)
    pub data_dir: PathBuf,
    pub cdn_url: String,
    /// Optional benchmark JSON replacing the bundled one
    pub benchmarks_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let version = env::var("DDRAGON_VERSION").unwrap_or_else(|_| DEFAULT_VERSION.to_string());
        validate_version(&version)?;

        let locale = env::var("DDRAGON_LOCALE").unwrap_or_else(|_| DEFAULT_LOCALE.to_string());
        if locale.trim().is_empty() {
            return Err(AppError::ConfigError("DDRAGON_LOCALE must not be empty".to_string()));
        }

        let data_dir = env::var("DDRAGON_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        let cdn_url = env::var("DDRAGON_CDN")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_CDN.to_string());
        if !cdn_url.starts_with("http://") && !cdn_url.starts_with("https://") {
            return Err(AppError::ConfigError(format!(
                "DDRAGON_CDN must be an http(s) URL, got {}",
                cdn_url
            )));
        }

        let benchmarks_path = env::var("CHAMP_BENCHMARKS").ok().map(PathBuf::from);

        Ok(Config {
            version,
            locale,
            data_dir,
            cdn_url,
            benchmarks_path,
        })
    }

    pub fn with_version(mut self, version: String) -> Result<Self, AppError> {
        validate_version(&version)?;
        self.version = version;
        Ok(self)
    }
}

pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("champ_ranking")
        .join("datadragon")
}

/// Patch versions are dot-separated numbers (`14.25.1`).
fn validate_version(version: &str) -> Result<(), AppError> {
    let valid = !version.is_empty()
        && version
            .split('.')
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()));

    if valid {
        Ok(())
    } else {
        Err(AppError::ConfigError(format!("invalid Data Dragon version: {}", version)))
    }
}
