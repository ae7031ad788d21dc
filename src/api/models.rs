use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Data Dragon champion.json document
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ChampionData {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub format: String,
    pub version: String,
    pub data: BTreeMap<String, Champion>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Champion {
    #[serde(default)]
    pub version: String,
    pub id: String,
    #[serde(default)]
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub blurb: String,
    #[serde(default)]
    pub info: ChampionInfo,
    #[serde(default)]
    pub image: ChampionImage,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub partype: String,
    pub stats: ChampionStats,
}

/// Descriptive 0-10 ratings; never fed into scoring.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChampionInfo {
    pub attack: u8,
    pub defense: u8,
    pub magic: u8,
    pub difficulty: u8,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ChampionImage {
    pub full: String,
    pub sprite: String,
    pub group: String,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

// Base attributes at level 1 and their per-level growth
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq)]
#[serde(default)]
pub struct ChampionStats {
    pub hp: f64,
    pub hpperlevel: f64,
    pub mp: f64,
    pub mpperlevel: f64,
    pub movespeed: f64,
    pub armor: f64,
    pub armorperlevel: f64,
    pub spellblock: f64,
    pub spellblockperlevel: f64,
    pub attackrange: f64,
    pub hpregen: f64,
    pub hpregenperlevel: f64,
    pub mpregen: f64,
    pub mpregenperlevel: f64,
    pub crit: f64,
    pub critperlevel: f64,
    pub attackdamage: f64,
    pub attackdamageperlevel: f64,
    /// Percentage growth, applied multiplicatively
    pub attackspeedperlevel: f64,
    pub attackspeed: f64,
}
