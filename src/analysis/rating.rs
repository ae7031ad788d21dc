use super::catalog::filter_by_role;
use super::projection::project_stats_at_level;
use super::role::{role_of, Role};
use crate::api::models::Champion;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Movement speed that maps to a mobility score of 50.
const MOBILITY_PIVOT_SPEED: f64 = 325.0;
/// Movement speed delta worth 50 mobility points.
const MOBILITY_SPEED_STEP: f64 = 30.0;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedChampion {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub tankiness: f64,
    pub dps: f64,
    pub mobility: f64,
    pub overall: f64,
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn score_tankiness(champion: &Champion, level: u32) -> f64 {
    let stats = project_stats_at_level(champion, level);
    round_tenth(stats.average_effective_hp() / 60.0)
}

pub fn score_dps(champion: &Champion, level: u32) -> f64 {
    let stats = project_stats_at_level(champion, level);
    round_tenth(stats.dps / 4.0)
}

/// Movement speed does not scale with level.
pub fn score_mobility(champion: &Champion) -> f64 {
    let speed = champion.stats.movespeed;
    round_tenth((speed - MOBILITY_PIVOT_SPEED) / MOBILITY_SPEED_STEP * 50.0 + 50.0)
}

pub fn overall_score(champion: &Champion, level: u32) -> f64 {
    rate(champion, level).overall
}

pub fn rate(champion: &Champion, level: u32) -> RankedChampion {
    let tankiness = score_tankiness(champion, level);
    let dps = score_dps(champion, level);
    let mobility = score_mobility(champion);
    let role = role_of(champion);

    RankedChampion {
        id: champion.id.clone(),
        name: champion.name.clone(),
        role,
        tankiness,
        dps,
        mobility,
        overall: role.weights().combine(tankiness, dps, mobility),
    }
}

/// Overall ranking, best first. `role` keeps champions tagged with it.
pub fn rank_champions(
    champions: &BTreeMap<String, Champion>,
    level: u32,
    role: Option<Role>,
) -> Vec<RankedChampion> {
    let mut ranked: Vec<RankedChampion> = filter_by_role(champions.values(), role)
        .into_iter()
        .map(|c| rate(c, level))
        .collect();

    ranked.sort_by(|a, b| b.overall.partial_cmp(&a.overall).unwrap_or(Ordering::Equal));
    ranked
}
