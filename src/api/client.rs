use crate::config::Config;
use crate::error::AppError;
use governor::{clock::DefaultClock, state::{InMemoryState, NotKeyed}, Quota, RateLimiter};
use log::{debug, warn};
use std::fs;
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;

use super::endpoints::{champion_json_path, champion_json_url};
use super::models::ChampionData;

const USER_AGENT: &str = "champ_ranking/0.1.0";
const MAX_RETRIES: u32 = 3;

/// Where a dataset came from, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Local(String),
    Remote(String),
}

pub struct DataDragonClient {
    config: Config,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl DataDragonClient {
    pub fn new(config: Config) -> Self {
        // The CDN is static hosting, 5 req/sec is plenty for a single document
        let per_second = NonZeroU32::new(5).unwrap_or(NonZeroU32::MIN);
        let rate_limiter = RateLimiter::direct(Quota::per_second(per_second));
        DataDragonClient {
            config,
            rate_limiter,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Local dump first, CDN second unless `offline`.
    pub fn load_champions(&self, offline: bool) -> Result<(ChampionData, DataSource), AppError> {
        if let Some(found) = self.load_local()? {
            return Ok(found);
        }

        if offline {
            let path = champion_json_path(&self.config.data_dir, &self.config.version, &self.config.locale);
            return Err(AppError::IoError {
                path: path.display().to_string(),
                message: "no local dataset and --offline was given".to_string(),
            });
        }

        self.fetch_remote()
    }

    pub fn load_local(&self) -> Result<Option<(ChampionData, DataSource)>, AppError> {
        let path = champion_json_path(&self.config.data_dir, &self.config.version, &self.config.locale);
        let shown = path.display().to_string();

        match fs::read_to_string(&path) {
            Ok(body) => {
                debug!("Loading champions from {}", shown);
                let data = parse_champion_data(&body)?;
                Ok(Some((data, DataSource::Local(shown))))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No local dataset at {}", shown);
                Ok(None)
            }
            Err(e) => Err(AppError::IoError {
                path: shown,
                message: e.to_string(),
            }),
        }
    }

    pub fn fetch_remote(&self) -> Result<(ChampionData, DataSource), AppError> {
        let url = champion_json_url(&self.config.cdn_url, &self.config.version, &self.config.locale);
        debug!("Fetching champions from {}", url);

        let body = self.execute_request(&url)?;
        let data = parse_champion_data(&body)?;
        Ok((data, DataSource::Remote(url)))
    }

    fn execute_request(&self, url: &str) -> Result<String, AppError> {
        let mut retry_count = 0;

        loop {
            while self.rate_limiter.check().is_err() {
                thread::sleep(Duration::from_millis(50));
            }

            let response = ureq::get(url).set("User-Agent", USER_AGENT).call();

            match response {
                Ok(resp) => {
                    return resp.into_string().map_err(|e| AppError::HttpError(e.to_string()));
                }
                Err(ureq::Error::Status(429, _)) => {
                    if retry_count >= MAX_RETRIES {
                        return Err(AppError::RateLimited);
                    }
                    let wait_ms = 2000 * (retry_count + 1) as u64;
                    warn!("Rate limited by {}, waiting {}ms before retry", url, wait_ms);
                    thread::sleep(Duration::from_millis(wait_ms));
                    retry_count += 1;
                }
                Err(e) => {
                    return Err(AppError::HttpError(e.to_string()));
                }
            }
        }
    }
}

pub fn parse_champion_data(body: &str) -> Result<ChampionData, AppError> {
    serde_json::from_str(body).map_err(|e| AppError::JsonError(format!("Failed to parse champion.json: {}", e)))
}
