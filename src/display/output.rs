use crate::analysis::benchmark::{BenchmarkCategory, BenchmarkSet, CategoryScores};
use crate::analysis::catalog::LeaderboardEntry;
use crate::analysis::projection::{project_stats_at_level, DerivedStats};
use crate::analysis::rating::{rate, RankedChampion};
use crate::analysis::role::role_of;
use crate::api::client::DataSource;
use crate::api::models::Champion;
use crate::cache::ChampionCache;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct RankingRow {
    #[tabled(rename = "#")]
    rank: String,
    champion: String,
    role: String,
    tankiness: String,
    dps: String,
    mobility: String,
    overall: String,
}

#[derive(Tabled)]
struct LeaderboardRow {
    #[tabled(rename = "#")]
    rank: String,
    champion: String,
    score: String,
}

#[derive(Tabled)]
struct ChampionRow {
    id: String,
    name: String,
    tags: String,
    hp: String,
    armor: String,
    #[tabled(rename = "AD")]
    attack_damage: String,
    #[tabled(rename = "AS")]
    attack_speed: String,
    #[tabled(rename = "MS")]
    move_speed: String,
}

#[derive(Tabled)]
struct StatRow {
    stat: String,
    #[tabled(rename = "level 1")]
    base: String,
    #[tabled(rename = "selected level")]
    at_level: String,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "#")]
    rank: String,
    champion: String,
    breakdown: String,
    overall: String,
}

fn header(title: &str) {
    println!("\n{}", title.bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());
}

fn colored_score(score: u8) -> String {
    let text = format!("{}%", score);
    match score {
        70..=100 => text.green().to_string(),
        40..=69 => text.yellow().to_string(),
        _ => text.red().to_string(),
    }
}

pub fn display_dataset_summary(cache: &ChampionCache) {
    let source = match &cache.source {
        DataSource::Local(path) => format!("local file {}", path),
        DataSource::Remote(url) => url.clone(),
    };
    display_success(&format!(
        "Loaded {} champions (patch {}) from {} at {}",
        cache.len(),
        cache.version,
        source,
        cache.loaded_at.format("%H:%M:%S")
    ));
}

pub fn display_rankings(ranked: &[RankedChampion], level: u32, top_n: usize) {
    header(&format!("🏆 Rankings at level {}", level));

    if ranked.is_empty() {
        println!("{}", "No champions match this filter".yellow());
        return;
    }

    let rows: Vec<RankingRow> = ranked
        .iter()
        .take(top_n)
        .enumerate()
        .map(|(idx, r)| RankingRow {
            rank: format!("#{}", idx + 1),
            champion: r.name.clone(),
            role: r.role.to_string(),
            tankiness: format!("{:.0}", r.tankiness),
            dps: format!("{:.0}", r.dps),
            mobility: format!("{:.0}", r.mobility),
            overall: format!("{:.1}", r.overall),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    println!("\n{}", "Interpretation".bold().yellow());
    println!("• Tankiness: average effective HP / 60");
    println!("• DPS: auto-attack damage per second / 4");
    println!("• Mobility: 50 at 325 movement speed, +50 per 30 speed");
    println!("• Overall: weighted by the champion's primary role\n");
}

pub fn display_leaderboard(entries: &[LeaderboardEntry], title: &str, top_n: usize) {
    header(title);

    if entries.is_empty() {
        println!("{}", "No champion data available".yellow());
        return;
    }

    let rows: Vec<LeaderboardRow> = entries
        .iter()
        .take(top_n)
        .map(|e| LeaderboardRow {
            rank: format!("#{}", e.rank),
            champion: e.name.clone(),
            score: format!("{:.1}", e.score),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_champion_list(champions: &[&Champion]) {
    header(&format!("📋 {} champions", champions.len()));

    if champions.is_empty() {
        println!("{}", "No champion found".yellow());
        return;
    }

    let rows: Vec<ChampionRow> = champions
        .iter()
        .map(|c| ChampionRow {
            id: c.id.clone(),
            name: c.name.clone(),
            tags: c.tags.join(", "),
            hp: format!("{:.0}", c.stats.hp),
            armor: format!("{:.0}", c.stats.armor),
            attack_damage: format!("{:.0}", c.stats.attackdamage),
            attack_speed: format!("{:.3}", c.stats.attackspeed),
            move_speed: format!("{:.0}", c.stats.movespeed),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

fn stat_rows(base: &DerivedStats, leveled: &DerivedStats) -> Vec<StatRow> {
    let pairs: [(&str, f64, f64, usize); 11] = [
        ("HP", base.hp, leveled.hp, 0),
        ("Mana", base.mp, leveled.mp, 0),
        ("Armor", base.armor, leveled.armor, 1),
        ("Magic resist", base.spellblock, leveled.spellblock, 1),
        ("Attack damage", base.attackdamage, leveled.attackdamage, 1),
        ("Attack speed", base.attackspeed, leveled.attackspeed, 3),
        ("HP regen", base.hpregen, leveled.hpregen, 1),
        ("Mana regen", base.mpregen, leveled.mpregen, 1),
        ("Effective HP (physical)", base.effective_hp_physical, leveled.effective_hp_physical, 0),
        ("Effective HP (magic)", base.effective_hp_magic, leveled.effective_hp_magic, 0),
        ("DPS", base.dps, leveled.dps, 1),
    ];

    pairs
        .iter()
        .map(|(stat, base, leveled, precision)| StatRow {
            stat: stat.to_string(),
            base: format!("{:.*}", *precision, base),
            at_level: format!("{:.*}", *precision, leveled),
        })
        .collect()
}

pub fn display_champion(champion: &Champion, level: u32, benchmarks: &BenchmarkSet) {
    header(&format!("🧙 {} - {}", champion.name, champion.title));

    let role = role_of(champion);
    println!(
        "{} {}   {} {}",
        "Role:".bold(),
        role,
        "Tags:".bold(),
        champion.tags.join(", ")
    );
    println!(
        "{} attack {}/10, defense {}/10, magic {}/10, difficulty {}/10",
        "Ratings:".bold(),
        champion.info.attack,
        champion.info.defense,
        champion.info.magic,
        champion.info.difficulty
    );
    println!(
        "{} {:.0} movement speed, {:.0} range\n",
        "Base:".bold(),
        champion.stats.movespeed,
        champion.stats.attackrange
    );

    let base = project_stats_at_level(champion, 1);
    let leveled = project_stats_at_level(champion, level);
    let mut table = Table::new(stat_rows(&base, &leveled));
    table.with(Style::rounded());
    println!("{} {}", "Selected level:".bold(), level);
    println!("{}", table);

    let rated = rate(champion, level);
    println!("\n{}", "Scores".bold().yellow());
    println!("• Tankiness: {:.1}", rated.tankiness);
    println!("• DPS: {:.1}", rated.dps);
    println!("• Mobility: {:.1}", rated.mobility);
    println!("• Overall ({}): {:.1}", role, rated.overall);

    display_benchmark_scores(champion, benchmarks);
    println!();
}

fn format_raw(raw: f64) -> String {
    if raw.fract() == 0.0 {
        format!("{:.0}", raw)
    } else {
        format!("{:.2}", raw)
    }
}

fn display_benchmark_scores(champion: &Champion, benchmarks: &BenchmarkSet) {
    println!("\n{}", "Benchmarks".bold().yellow());

    if !benchmarks.has_any_data(&champion.id) {
        println!("{}", "  No benchmark measurements for this champion yet".dimmed());
        return;
    }

    for category in BenchmarkCategory::ALL {
        let label = format!("{}:", category);
        let Some(breakdown) = benchmarks.breakdown(&champion.id, category) else {
            println!("  {} {}", label.bold(), "no data".dimmed());
            continue;
        };

        println!("  {} {}", label.bold(), colored_score(breakdown.overall));
        if let Some(description) = &breakdown.description {
            println!("    {}", description.italic());
        }
        for metric in &breakdown.metrics {
            match metric.score {
                Some(score) => println!(
                    "    - {}: {} ({})",
                    metric.label,
                    format_raw(metric.raw),
                    colored_score(score)
                ),
                None => println!(
                    "    - {}: {} {}",
                    metric.label,
                    format_raw(metric.raw),
                    "(not scored)".dimmed()
                ),
            }
        }
    }
}

pub fn display_category_ranking(
    category: BenchmarkCategory,
    ranked: &[(&str, CategoryScores)],
    name_of: impl Fn(&str) -> String,
) {
    header(&format!("📈 Benchmark: {}", category));

    if ranked.is_empty() {
        println!("{}", "No benchmark data recorded for this category".yellow());
        return;
    }

    let rows: Vec<CategoryRow> = ranked
        .iter()
        .enumerate()
        .map(|(idx, (id, scores))| CategoryRow {
            rank: format!("#{}", idx + 1),
            champion: name_of(id),
            breakdown: scores
                .parts()
                .iter()
                .map(|(name, score)| format!("{} {}%", name, score))
                .collect::<Vec<_>>()
                .join(", "),
            overall: format!("{}%", scores.overall()),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    println!("\n{}", "Interpretation".bold().yellow());
    println!("• Each measurement is scored 0-100% between the lowest and highest recorded value");
    println!("• Champions without a measurement are left out of the comparison\n");
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}
