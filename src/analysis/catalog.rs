use super::projection::project_stats_at_level;
use super::rating::{score_dps, score_mobility, score_tankiness};
use super::role::Role;
use crate::api::models::Champion;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Shorter queries match everything.
pub const MIN_QUERY_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKey {
    Hp,
    Armor,
    Spellblock,
    AttackDamage,
    AttackSpeed,
    MoveSpeed,
    EffectiveHp,
    Dps,
}

impl StatKey {
    pub const ALL: [StatKey; 8] = [
        StatKey::Hp,
        StatKey::Armor,
        StatKey::Spellblock,
        StatKey::AttackDamage,
        StatKey::AttackSpeed,
        StatKey::MoveSpeed,
        StatKey::EffectiveHp,
        StatKey::Dps,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatKey::Hp => "hp",
            StatKey::Armor => "armor",
            StatKey::Spellblock => "spellblock",
            StatKey::AttackDamage => "attackdamage",
            StatKey::AttackSpeed => "attackspeed",
            StatKey::MoveSpeed => "movespeed",
            StatKey::EffectiveHp => "effective_hp",
            StatKey::Dps => "dps",
        }
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        StatKey::ALL
            .into_iter()
            .find(|key| key.as_str() == wanted)
            .ok_or_else(|| format!("unknown stat: {}", s))
    }
}

/// Value of `key` at `level`; movement speed has no growth.
pub fn stat_value(champion: &Champion, key: StatKey, level: u32) -> f64 {
    let stats = project_stats_at_level(champion, level);
    match key {
        StatKey::Hp => stats.hp,
        StatKey::Armor => stats.armor,
        StatKey::Spellblock => stats.spellblock,
        StatKey::AttackDamage => stats.attackdamage,
        StatKey::AttackSpeed => stats.attackspeed,
        StatKey::MoveSpeed => champion.stats.movespeed,
        StatKey::EffectiveHp => stats.average_effective_hp(),
        StatKey::Dps => stats.dps,
    }
}

/// Keeps champions carrying the role as a tag (any position), all when `None`.
pub fn filter_by_role<'a>(
    champions: impl IntoIterator<Item = &'a Champion>,
    role: Option<Role>,
) -> Vec<&'a Champion> {
    champions
        .into_iter()
        .filter(|c| match role {
            None => true,
            Some(role) => c.tags.iter().any(|t| t.eq_ignore_ascii_case(role.as_str())),
        })
        .collect()
}

/// Case-insensitive substring match on display name or id.
pub fn search<'a>(champions: &'a BTreeMap<String, Champion>, query: &str) -> Vec<&'a Champion> {
    let query = query.trim().to_lowercase();
    if query.chars().count() < MIN_QUERY_LEN {
        return champions.values().collect();
    }

    champions
        .values()
        .filter(|c| c.name.to_lowercase().contains(&query) || c.id.to_lowercase().contains(&query))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Hp,
    Armor,
    AttackDamage,
    AttackSpeed,
    MoveSpeed,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "hp" => Ok(SortKey::Hp),
            "armor" => Ok(SortKey::Armor),
            "attackdamage" => Ok(SortKey::AttackDamage),
            "attackspeed" => Ok(SortKey::AttackSpeed),
            "movespeed" => Ok(SortKey::MoveSpeed),
            other => Err(format!("unknown sort key: {}", other)),
        }
    }
}

/// Names sort A-Z and stats high-to-low; `reverse` flips either.
pub fn sort_champions(champions: &mut [&Champion], key: SortKey, reverse: bool) {
    champions.sort_by(|a, b| {
        let comparison = match key {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Hp => desc(a.stats.hp, b.stats.hp),
            SortKey::Armor => desc(a.stats.armor, b.stats.armor),
            SortKey::AttackDamage => desc(a.stats.attackdamage, b.stats.attackdamage),
            SortKey::AttackSpeed => desc(a.stats.attackspeed, b.stats.attackspeed),
            SortKey::MoveSpeed => desc(a.stats.movespeed, b.stats.movespeed),
        };

        if reverse {
            comparison.reverse()
        } else {
            comparison
        }
    });
}

fn desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leaderboard {
    Tankiness,
    Dps,
    Mobility,
    Stat(StatKey),
}

impl Leaderboard {
    /// `stat` only matters for the `base_stats` board.
    pub fn parse(board: &str, stat: StatKey) -> Result<Self, String> {
        match board.trim().to_ascii_lowercase().as_str() {
            "tankiness" => Ok(Leaderboard::Tankiness),
            "dps" => Ok(Leaderboard::Dps),
            "mobility" => Ok(Leaderboard::Mobility),
            "base_stats" | "base-stats" | "stat" => Ok(Leaderboard::Stat(stat)),
            other => Err(format!("unknown leaderboard: {}", other)),
        }
    }

    pub fn title(&self) -> String {
        match self {
            Leaderboard::Tankiness => "Tankiness".to_string(),
            Leaderboard::Dps => "DPS".to_string(),
            Leaderboard::Mobility => "Mobility".to_string(),
            Leaderboard::Stat(key) => format!("Base stat: {}", key),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub id: String,
    pub name: String,
    pub score: f64,
}

pub fn leaderboard(
    champions: &BTreeMap<String, Champion>,
    board: Leaderboard,
    level: u32,
) -> Vec<LeaderboardEntry> {
    let mut scored: Vec<(&Champion, f64)> = champions
        .values()
        .map(|c| {
            let score = match board {
                Leaderboard::Tankiness => score_tankiness(c, level),
                Leaderboard::Dps => score_dps(c, level),
                Leaderboard::Mobility => score_mobility(c),
                Leaderboard::Stat(key) => stat_value(c, key, level),
            };
            (c, score)
        })
        .collect();

    scored.sort_by(|a, b| desc(a.1, b.1));

    scored
        .into_iter()
        .enumerate()
        .map(|(idx, (c, score))| LeaderboardEntry {
            rank: idx + 1,
            id: c.id.clone(),
            name: c.name.clone(),
            score,
        })
        .collect()
}
