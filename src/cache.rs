use crate::api::client::{DataDragonClient, DataSource};
use crate::api::models::{Champion, ChampionData};
use crate::error::AppError;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use std::collections::BTreeMap;
use std::sync::OnceLock;

static CACHE: OnceLock<ChampionCache> = OnceLock::new();
static EMPTY: BTreeMap<String, Champion> = BTreeMap::new();

/// The loaded champion population. Filled once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct ChampionCache {
    pub version: String,
    pub source: DataSource,
    pub loaded_at: DateTime<Utc>,
    pub champions: BTreeMap<String, Champion>,
}

impl ChampionCache {
    pub fn from_data(data: ChampionData, source: DataSource) -> Self {
        ChampionCache {
            version: data.version,
            source,
            loaded_at: Utc::now(),
            champions: data.data,
        }
    }

    /// Process-wide dataset, loaded through `client` on first use.
    pub fn get_or_load(client: &DataDragonClient, offline: bool) -> Result<&'static ChampionCache, AppError> {
        if let Some(cache) = CACHE.get() {
            return Ok(cache);
        }

        let (data, source) = client.load_champions(offline)?;
        if data.data.is_empty() {
            return Err(AppError::EmptyDataset(data.version));
        }

        let loaded = ChampionCache::from_data(data, source);
        debug!(
            "Cached {} champions for version {}",
            loaded.champions.len(),
            loaded.version
        );

        Ok(CACHE.get_or_init(|| loaded))
    }

    /// Like [`get_or_load`](Self::get_or_load) but a failed load is an empty
    /// population rather than an error.
    pub fn population_or_empty(client: &DataDragonClient, offline: bool) -> &'static BTreeMap<String, Champion> {
        match Self::get_or_load(client, offline) {
            Ok(cache) => &cache.champions,
            Err(e) => {
                warn!("Champion dataset unavailable: {}", e);
                &EMPTY
            }
        }
    }

    pub fn len(&self) -> usize {
        self.champions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }

    /// Looks up by id, then case-insensitively by id or display name.
    pub fn champion(&self, query: &str) -> Result<&Champion, AppError> {
        if let Some(champion) = self.champions.get(query) {
            return Ok(champion);
        }

        self.champions
            .values()
            .find(|c| c.id.eq_ignore_ascii_case(query) || c.name.eq_ignore_ascii_case(query))
            .ok_or_else(|| AppError::ChampionNotFound(query.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.champions.contains_key(id)
    }
}
