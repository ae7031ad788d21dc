//! A failed or empty dataset load hands the engine an empty population:
//! every ranking comes back empty and nothing panics.

use champ_ranking::analysis::benchmark::{BenchmarkCategory, BenchmarkSet};
use champ_ranking::analysis::catalog::{filter_by_role, leaderboard, search, Leaderboard, StatKey};
use champ_ranking::api::models::Champion;
use champ_ranking::{normalize, rank_champions, Role};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

#[test]
fn rankings_over_empty_population_are_empty() {
    let champions: BTreeMap<String, Champion> = BTreeMap::new();

    assert!(rank_champions(&champions, 18, None).is_empty());
    assert!(rank_champions(&champions, 1, Some(Role::Tank)).is_empty());
}

#[test]
fn leaderboards_over_empty_population_are_empty() {
    let champions: BTreeMap<String, Champion> = BTreeMap::new();

    for board in [
        Leaderboard::Tankiness,
        Leaderboard::Dps,
        Leaderboard::Mobility,
        Leaderboard::Stat(StatKey::EffectiveHp),
    ] {
        assert!(leaderboard(&champions, board, 18).is_empty());
    }
}

#[test]
fn catalog_helpers_over_empty_population_are_empty() {
    let champions: BTreeMap<String, Champion> = BTreeMap::new();

    assert!(search(&champions, "ahri").is_empty());
    assert!(search(&champions, "").is_empty());
    assert!(filter_by_role(champions.values(), Some(Role::Mage)).is_empty());
}

#[test]
fn empty_benchmark_set_scores_nothing() {
    let set = BenchmarkSet::default();

    for category in BenchmarkCategory::ALL {
        assert_eq!(set.score_category("Ahri", category), None);
        assert_eq!(set.breakdown("Ahri", category), None);
        assert!(set.ranking(category).is_empty());
    }
    assert!(!set.has_any_data("Ahri"));
}

#[test]
fn normalize_over_empty_population_is_zero() {
    assert_eq!(normalize(120.0, &[], false), 0);
    assert_eq!(normalize(120.0, &[], true), 0);
}
