use super::normalize::{mean_score, normalize, normalize_inverted};
use crate::error::AppError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const BUNDLED_BENCHMARKS: &str = include_str!("../../data/benchmarks.json");

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DpsData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Damage per second over a 10s all-spells window
    pub dps10s: f64,
    /// Sustained damage per second over 20s
    pub dps20s: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TankinessData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub tower_shots_base: f64,
    pub tower_shots_with_abilities: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BurstData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub total_damage: f64,
    /// Fraction of max HP, 0.15 = 15%
    pub max_hp_percent: f64,
    /// Seconds to finish the combo
    pub burst_time: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UtilityData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub shield_total: f64,
    pub shield20s: f64,
    pub heal_total: f64,
    pub heal20s: f64,
    pub cc_total: f64,
    pub cc20s: f64,
    pub buff_gold_efficiency: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MobilityData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub dash_distance: f64,
    pub speed_bonus: f64,
    pub slow_resist_tenacity: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChampionBenchmarkData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dps: Option<DpsData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tankiness: Option<TankinessData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub burst: Option<BurstData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utility: Option<UtilityData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobility: Option<MobilityData>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BenchmarkCategory {
    Dps,
    Tankiness,
    Burst,
    Utility,
    Mobility,
}

impl BenchmarkCategory {
    pub const ALL: [BenchmarkCategory; 5] = [
        BenchmarkCategory::Dps,
        BenchmarkCategory::Tankiness,
        BenchmarkCategory::Burst,
        BenchmarkCategory::Utility,
        BenchmarkCategory::Mobility,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BenchmarkCategory::Dps => "dps",
            BenchmarkCategory::Tankiness => "tankiness",
            BenchmarkCategory::Burst => "burst",
            BenchmarkCategory::Utility => "utility",
            BenchmarkCategory::Mobility => "mobility",
        }
    }
}

impl fmt::Display for BenchmarkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BenchmarkCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BenchmarkCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown benchmark category: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DpsScores {
    pub dps10s: u8,
    pub dps20s: u8,
    pub overall: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TankinessScores {
    pub base: u8,
    pub with_abilities: u8,
    pub overall: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurstScores {
    pub damage: u8,
    pub max_hp: u8,
    /// Inverted: faster combos score higher
    pub speed: u8,
    pub overall: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtilityScores {
    pub shield: u8,
    pub heal: u8,
    pub cc: u8,
    pub buff: u8,
    pub overall: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MobilityScores {
    pub dash: u8,
    pub speed: u8,
    pub tenacity: u8,
    pub overall: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryScores {
    Dps(DpsScores),
    Tankiness(TankinessScores),
    Burst(BurstScores),
    Utility(UtilityScores),
    Mobility(MobilityScores),
}

impl CategoryScores {
    pub fn overall(&self) -> u8 {
        match self {
            CategoryScores::Dps(s) => s.overall,
            CategoryScores::Tankiness(s) => s.overall,
            CategoryScores::Burst(s) => s.overall,
            CategoryScores::Utility(s) => s.overall,
            CategoryScores::Mobility(s) => s.overall,
        }
    }

    /// Named sub-scores in display order, overall excluded.
    pub fn parts(&self) -> Vec<(&'static str, u8)> {
        match self {
            CategoryScores::Dps(s) => vec![("DPS 10s", s.dps10s), ("DPS 20s", s.dps20s)],
            CategoryScores::Tankiness(s) => vec![
                ("Tower shots (base)", s.base),
                ("Tower shots (abilities)", s.with_abilities),
            ],
            CategoryScores::Burst(s) => vec![
                ("Total damage", s.damage),
                ("% max HP", s.max_hp),
                ("Combo speed", s.speed),
            ],
            CategoryScores::Utility(s) => vec![
                ("Shield 20s", s.shield),
                ("Heal 20s", s.heal),
                ("CC 20s", s.cc),
                ("Buff gold efficiency", s.buff),
            ],
            CategoryScores::Mobility(s) => vec![
                ("Dash distance", s.dash),
                ("Speed bonus", s.speed),
                ("Slow resist / tenacity", s.tenacity),
            ],
        }
    }
}

/// One measured value and the score it earned.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricLine {
    pub label: &'static str,
    pub raw: f64,
    /// `None` for display-only values that do not feed the score
    pub score: Option<u8>,
}

/// Everything the detail view shows for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub category: BenchmarkCategory,
    pub description: Option<String>,
    pub metrics: Vec<MetricLine>,
    pub overall: u8,
}

fn line(label: &'static str, raw: f64, score: u8) -> MetricLine {
    MetricLine {
        label,
        raw,
        score: Some(score),
    }
}

fn display_only(label: &'static str, raw: f64) -> MetricLine {
    MetricLine {
        label,
        raw,
        score: None,
    }
}

fn non_empty(description: &Option<String>) -> Option<String> {
    description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}

/// Benchmark records keyed by champion id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BenchmarkSet {
    entries: BTreeMap<String, ChampionBenchmarkData>,
}

impl BenchmarkSet {
    pub fn new(entries: BTreeMap<String, ChampionBenchmarkData>) -> Self {
        BenchmarkSet { entries }
    }

    pub fn from_json(body: &str) -> Result<Self, AppError> {
        serde_json::from_str(body)
            .map_err(|e| AppError::JsonError(format!("Failed to parse benchmarks: {}", e)))
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let body = fs::read_to_string(path).map_err(|e| AppError::IoError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let set = Self::from_json(&body)?;
        debug!("Loaded {} benchmark entries from {}", set.len(), path.display());
        Ok(set)
    }

    /// The dataset shipped with the crate.
    pub fn bundled() -> Result<Self, AppError> {
        Self::from_json(BUNDLED_BENCHMARKS)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, champion_id: &str) -> Option<&ChampionBenchmarkData> {
        self.entries.get(champion_id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// One value per entry; entries without the category contribute 0.
    fn population<T>(
        &self,
        category: fn(&ChampionBenchmarkData) -> Option<&T>,
        field: impl Fn(&T) -> f64,
    ) -> Vec<f64> {
        self.entries
            .values()
            .map(|data| category(data).map(&field).unwrap_or(0.0))
            .collect()
    }

    pub fn dps_scores(&self, champion_id: &str) -> Option<DpsScores> {
        let data = self.get(champion_id)?.dps.as_ref()?;
        let category: fn(&ChampionBenchmarkData) -> Option<&DpsData> = |d| d.dps.as_ref();

        let dps10s = normalize(data.dps10s, &self.population(category, |d| d.dps10s), false);
        let dps20s = normalize(data.dps20s, &self.population(category, |d| d.dps20s), false);

        Some(DpsScores {
            dps10s,
            dps20s,
            overall: mean_score(&[dps10s, dps20s]),
        })
    }

    pub fn tankiness_scores(&self, champion_id: &str) -> Option<TankinessScores> {
        let data = self.get(champion_id)?.tankiness.as_ref()?;
        let category: fn(&ChampionBenchmarkData) -> Option<&TankinessData> = |d| d.tankiness.as_ref();

        let base = normalize(
            data.tower_shots_base,
            &self.population(category, |d| d.tower_shots_base),
            false,
        );
        let with_abilities = normalize(
            data.tower_shots_with_abilities,
            &self.population(category, |d| d.tower_shots_with_abilities),
            false,
        );

        Some(TankinessScores {
            base,
            with_abilities,
            overall: mean_score(&[base, with_abilities]),
        })
    }

    pub fn burst_scores(&self, champion_id: &str) -> Option<BurstScores> {
        let data = self.get(champion_id)?.burst.as_ref()?;
        let category: fn(&ChampionBenchmarkData) -> Option<&BurstData> = |d| d.burst.as_ref();

        let damage = normalize(data.total_damage, &self.population(category, |d| d.total_damage), false);
        let max_hp = normalize(
            data.max_hp_percent,
            &self.population(category, |d| d.max_hp_percent),
            false,
        );
        let speed = normalize_inverted(data.burst_time, &self.population(category, |d| d.burst_time));

        Some(BurstScores {
            damage,
            max_hp,
            speed,
            overall: mean_score(&[damage, max_hp, speed]),
        })
    }

    /// Only the 20s sustained values score; one-shot totals are display-only.
    pub fn utility_scores(&self, champion_id: &str) -> Option<UtilityScores> {
        let data = self.get(champion_id)?.utility.as_ref()?;
        let category: fn(&ChampionBenchmarkData) -> Option<&UtilityData> = |d| d.utility.as_ref();

        let shield = normalize(data.shield20s, &self.population(category, |d| d.shield20s), false);
        let heal = normalize(data.heal20s, &self.population(category, |d| d.heal20s), false);
        let cc = normalize(data.cc20s, &self.population(category, |d| d.cc20s), false);
        let buff = normalize(
            data.buff_gold_efficiency,
            &self.population(category, |d| d.buff_gold_efficiency),
            false,
        );

        Some(UtilityScores {
            shield,
            heal,
            cc,
            buff,
            overall: mean_score(&[shield, heal, cc, buff]),
        })
    }

    pub fn mobility_scores(&self, champion_id: &str) -> Option<MobilityScores> {
        let data = self.get(champion_id)?.mobility.as_ref()?;
        let category: fn(&ChampionBenchmarkData) -> Option<&MobilityData> = |d| d.mobility.as_ref();

        let dash = normalize(data.dash_distance, &self.population(category, |d| d.dash_distance), false);
        let speed = normalize(data.speed_bonus, &self.population(category, |d| d.speed_bonus), false);
        let tenacity = normalize(
            data.slow_resist_tenacity,
            &self.population(category, |d| d.slow_resist_tenacity),
            false,
        );

        Some(MobilityScores {
            dash,
            speed,
            tenacity,
            overall: mean_score(&[dash, speed, tenacity]),
        })
    }

    /// `None` when the champion has no record for the category, which is
    /// not the same as a record scoring 0.
    pub fn score_category(&self, champion_id: &str, category: BenchmarkCategory) -> Option<CategoryScores> {
        match category {
            BenchmarkCategory::Dps => self.dps_scores(champion_id).map(CategoryScores::Dps),
            BenchmarkCategory::Tankiness => self.tankiness_scores(champion_id).map(CategoryScores::Tankiness),
            BenchmarkCategory::Burst => self.burst_scores(champion_id).map(CategoryScores::Burst),
            BenchmarkCategory::Utility => self.utility_scores(champion_id).map(CategoryScores::Utility),
            BenchmarkCategory::Mobility => self.mobility_scores(champion_id).map(CategoryScores::Mobility),
        }
    }

    /// Raw values beside their scores, plus the category description.
    pub fn breakdown(&self, champion_id: &str, category: BenchmarkCategory) -> Option<CategoryBreakdown> {
        let data = self.get(champion_id)?;

        let (description, metrics, overall) = match category {
            BenchmarkCategory::Dps => {
                let d = data.dps.as_ref()?;
                let s = self.dps_scores(champion_id)?;
                (
                    &d.description,
                    vec![line("DPS 10s", d.dps10s, s.dps10s), line("DPS 20s", d.dps20s, s.dps20s)],
                    s.overall,
                )
            }
            BenchmarkCategory::Tankiness => {
                let t = data.tankiness.as_ref()?;
                let s = self.tankiness_scores(champion_id)?;
                (
                    &t.description,
                    vec![
                        line("Tower shots (base)", t.tower_shots_base, s.base),
                        line("Tower shots (abilities)", t.tower_shots_with_abilities, s.with_abilities),
                    ],
                    s.overall,
                )
            }
            BenchmarkCategory::Burst => {
                let b = data.burst.as_ref()?;
                let s = self.burst_scores(champion_id)?;
                (
                    &b.description,
                    vec![
                        line("Total damage", b.total_damage, s.damage),
                        line("% max HP", b.max_hp_percent, s.max_hp),
                        line("Combo time (s)", b.burst_time, s.speed),
                    ],
                    s.overall,
                )
            }
            BenchmarkCategory::Utility => {
                let u = data.utility.as_ref()?;
                let s = self.utility_scores(champion_id)?;
                (
                    &u.description,
                    vec![
                        display_only("Shield (one cast)", u.shield_total),
                        line("Shield 20s", u.shield20s, s.shield),
                        display_only("Heal (one cast)", u.heal_total),
                        line("Heal 20s", u.heal20s, s.heal),
                        display_only("CC (one cast, s)", u.cc_total),
                        line("CC 20s (s)", u.cc20s, s.cc),
                        line("Buff gold efficiency", u.buff_gold_efficiency, s.buff),
                    ],
                    s.overall,
                )
            }
            BenchmarkCategory::Mobility => {
                let m = data.mobility.as_ref()?;
                let s = self.mobility_scores(champion_id)?;
                (
                    &m.description,
                    vec![
                        line("Dash distance", m.dash_distance, s.dash),
                        line("Speed bonus (%)", m.speed_bonus, s.speed),
                        line("Slow resist / tenacity (%)", m.slow_resist_tenacity, s.tenacity),
                    ],
                    s.overall,
                )
            }
        };

        Some(CategoryBreakdown {
            category,
            description: non_empty(description),
            metrics,
            overall,
        })
    }

    /// Champions with a record for `category`, best overall first.
    pub fn ranking(&self, category: BenchmarkCategory) -> Vec<(&str, CategoryScores)> {
        let mut ranked: Vec<(&str, CategoryScores)> = self
            .ids()
            .filter_map(|id| self.score_category(id, category).map(|scores| (id, scores)))
            .collect();

        ranked.sort_by(|a, b| b.1.overall().cmp(&a.1.overall()));
        ranked
    }

    /// Whether any category holds a measured (positive) headline value.
    pub fn has_any_data(&self, champion_id: &str) -> bool {
        let Some(data) = self.get(champion_id) else {
            return false;
        };

        data.dps.as_ref().is_some_and(|d| d.dps10s > 0.0 || d.dps20s > 0.0)
            || data
                .tankiness
                .as_ref()
                .is_some_and(|t| t.tower_shots_base > 0.0 || t.tower_shots_with_abilities > 0.0)
            || data.burst.as_ref().is_some_and(|b| b.total_damage > 0.0)
            || data
                .utility
                .as_ref()
                .is_some_and(|u| u.shield_total > 0.0 || u.heal_total > 0.0 || u.cc_total > 0.0)
            || data
                .mobility
                .as_ref()
                .is_some_and(|m| m.dash_distance > 0.0 || m.speed_bonus > 0.0)
    }

    /// Entries whose id is not in `known`, usually a typo or a renamed champion.
    pub fn unknown_ids<'a>(&'a self, known: impl Fn(&str) -> bool) -> Vec<&'a str> {
        self.ids().filter(|id| !known(id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BenchmarkSet {
        BenchmarkSet::from_json(
            r#"{
                "A": {
                    "dps": { "dps10s": 100, "dps20s": 80 },
                    "burst": { "totalDamage": 1000, "maxHpPercent": 0, "burstTime": 1 }
                },
                "B": {
                    "dps": { "dps10s": 50, "dps20s": 40 },
                    "burst": { "totalDamage": 500, "maxHpPercent": 0.1, "burstTime": 3 },
                    "utility": { "shieldTotal": 100, "shield20s": 300, "cc20s": 2 }
                },
                "C": {
                    "dps": { "dps10s": 0, "dps20s": 0 },
                    "mobility": { "dashDistance": 0, "speedBonus": 0, "slowResistTenacity": 0 }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn dps_scores_average_both_windows() {
        let set = sample();

        assert_eq!(
            set.dps_scores("A"),
            Some(DpsScores { dps10s: 100, dps20s: 100, overall: 100 })
        );
        assert_eq!(set.dps_scores("B"), Some(DpsScores { dps10s: 0, dps20s: 0, overall: 0 }));
        // Record present but empty: zero, not absent
        assert_eq!(set.dps_scores("C"), Some(DpsScores { dps10s: 0, dps20s: 0, overall: 0 }));
    }

    #[test]
    fn burst_speed_is_inverted() {
        let set = sample();
        let a = set.burst_scores("A").unwrap();
        let b = set.burst_scores("B").unwrap();

        assert_eq!(a.speed, 100);
        assert_eq!(b.speed, 0);
        // Only B has a max-hp component: degenerate window scores 100
        assert_eq!(b.max_hp, 100);
        assert_eq!(a.max_hp, 0);
        assert_eq!(a.overall, 67);
        assert_eq!(b.overall, 33);
    }

    #[test]
    fn utility_ignores_one_shot_totals() {
        let set = sample();
        let b = set.utility_scores("B").unwrap();

        assert_eq!(b.shield, 100);
        assert_eq!(b.cc, 100);
        assert_eq!(b.heal, 0);
        assert_eq!(b.buff, 0);
        assert_eq!(b.overall, 50);
    }

    #[test]
    fn missing_category_is_absent() {
        let set = sample();

        assert_eq!(set.score_category("A", BenchmarkCategory::Utility), None);
        assert_eq!(set.score_category("A", BenchmarkCategory::Tankiness), None);
        assert_eq!(set.score_category("Nobody", BenchmarkCategory::Dps), None);
        assert_eq!(
            set.score_category("C", BenchmarkCategory::Mobility).map(|s| s.overall()),
            Some(0)
        );
    }

    #[test]
    fn any_data_needs_a_positive_headline() {
        let set = sample();

        assert!(set.has_any_data("A"));
        assert!(set.has_any_data("B"));
        assert!(!set.has_any_data("C"));
        assert!(!set.has_any_data("Nobody"));
    }

    #[test]
    fn bundled_dataset_has_no_measurements_yet() {
        let set = BenchmarkSet::bundled().unwrap();
        let ids: Vec<&str> = set.ids().collect();

        assert_eq!(ids, vec!["Aatrox", "Ahri", "Akali", "Akshan", "Alistar"]);
        for id in ids {
            assert!(!set.has_any_data(id), "{}", id);
            for category in BenchmarkCategory::ALL {
                assert_eq!(set.score_category(id, category).map(|s| s.overall()), Some(0));
            }
        }
    }

    #[test]
    fn breakdown_pairs_raw_values_with_scores() {
        let set = sample();
        let utility = set.breakdown("B", BenchmarkCategory::Utility).unwrap();

        assert_eq!(utility.overall, 50);
        assert_eq!(utility.description, None);
        assert_eq!(
            utility.metrics[0],
            MetricLine { label: "Shield (one cast)", raw: 100.0, score: None }
        );
        assert_eq!(
            utility.metrics[1],
            MetricLine { label: "Shield 20s", raw: 300.0, score: Some(100) }
        );
        assert_eq!(utility.metrics.iter().filter(|m| m.score.is_none()).count(), 3);

        let burst = set.breakdown("A", BenchmarkCategory::Burst).unwrap();
        assert_eq!(burst.metrics[2].raw, 1.0);
        assert_eq!(burst.metrics[2].score, Some(100));
    }

    #[test]
    fn breakdown_keeps_non_empty_descriptions() {
        let set = BenchmarkSet::from_json(
            r#"{
                "A": { "dps": { "description": "  Q > W > E  ", "dps10s": 10, "dps20s": 5 } },
                "B": { "dps": { "description": "", "dps10s": 20, "dps20s": 8 } }
            }"#,
        )
        .unwrap();

        assert_eq!(
            set.breakdown("A", BenchmarkCategory::Dps).unwrap().description,
            Some("Q > W > E".to_string())
        );
        assert_eq!(set.breakdown("B", BenchmarkCategory::Dps).unwrap().description, None);
        assert_eq!(set.breakdown("A", BenchmarkCategory::Mobility), None);
        assert_eq!(set.breakdown("C", BenchmarkCategory::Dps), None);
    }

    #[test]
    fn parses_categories() {
        assert_eq!("Burst".parse::<BenchmarkCategory>(), Ok(BenchmarkCategory::Burst));
        assert!("speed".parse::<BenchmarkCategory>().is_err());
    }

    #[test]
    fn ranking_skips_champions_without_the_category() {
        let set = sample();
        let ranked = set.ranking(BenchmarkCategory::Burst);

        let ids: Vec<&str> = ranked.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec!["A", "B"]);
    }

    #[test]
    fn reports_unknown_ids() {
        let set = sample();
        assert_eq!(set.unknown_ids(|id| id != "B"), vec!["B"]);
    }
}
