use anyhow::Context;
use champ_ranking::analysis::benchmark::{BenchmarkCategory, BenchmarkSet};
use champ_ranking::analysis::catalog::{filter_by_role, leaderboard, search, sort_champions, Leaderboard, SortKey, StatKey};
use champ_ranking::analysis::projection::{clamp_level, DEFAULT_LEVEL};
use champ_ranking::analysis::rating::rank_champions;
use champ_ranking::analysis::role::Role;
use champ_ranking::api::client::DataDragonClient;
use champ_ranking::cache::ChampionCache;
use champ_ranking::config::Config;
use champ_ranking::display::output::{
    display_category_ranking, display_champion, display_champion_list, display_dataset_summary,
    display_error, display_info, display_leaderboard, display_rankings,
};
use clap::{ArgAction, Parser, Subcommand};
use indicatif::ProgressBar;
use log::warn;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "Champ Ranking")]
#[command(about = "Compare League of Legends champion stats across levels and benchmarks", long_about = None)]
struct Args {
    /// Data Dragon patch (default: DDRAGON_VERSION or 15.24.1)
    #[arg(long, global = true)]
    patch: Option<String>,

    /// Only use the local Data Dragon directory
    #[arg(long, global = true)]
    offline: bool,

    /// Benchmark JSON file (default: CHAMP_BENCHMARKS or the bundled data)
    #[arg(long, global = true)]
    benchmarks: Option<PathBuf>,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Role-weighted overall ranking
    Rankings {
        /// Only champions tagged with this role
        #[arg(short, long)]
        role: Option<Role>,

        /// Champion level, 1-18
        #[arg(short, long, default_value_t = DEFAULT_LEVEL)]
        level: u32,

        /// Number of champions to display
        #[arg(short, long, default_value = "20")]
        top: usize,
    },

    /// Leaderboard for one score or base stat
    Leaderboard {
        /// tankiness, dps, mobility or base_stats
        #[arg(short, long, default_value = "tankiness")]
        board: String,

        /// Stat used by the base_stats board
        #[arg(short, long, default_value = "hp")]
        stat: StatKey,

        #[arg(short, long, default_value_t = DEFAULT_LEVEL)]
        level: u32,

        #[arg(short, long, default_value = "20")]
        top: usize,
    },

    /// Detail view of a single champion
    Champion {
        /// Champion id or name
        name: String,

        #[arg(short, long, default_value_t = DEFAULT_LEVEL)]
        level: u32,
    },

    /// Champions ranked by a benchmark category
    Benchmark {
        /// dps, tankiness, burst, utility or mobility
        category: BenchmarkCategory,
    },

    /// Browse champions
    List {
        /// Name or id filter (2+ characters)
        #[arg(short, long)]
        query: Option<String>,

        #[arg(short, long)]
        role: Option<Role>,

        /// name, hp, armor, attackdamage, attackspeed or movespeed
        #[arg(short, long, default_value = "name")]
        sort: SortKey,

        /// Reverse the sort order
        #[arg(long)]
        reverse: bool,
    },
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn effective_level(requested: u32) -> u32 {
    let level = clamp_level(requested);
    if level != requested {
        display_info(&format!("Level {} is out of range, using {}", requested, level));
    }
    level
}

fn load_benchmarks(args: &Args, config: &Config) -> anyhow::Result<BenchmarkSet> {
    match args.benchmarks.as_ref().or(config.benchmarks_path.as_ref()) {
        Some(path) => BenchmarkSet::load(path)
            .with_context(|| format!("loading benchmarks from {}", path.display())),
        None => BenchmarkSet::bundled().context("loading bundled benchmarks"),
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(patch) = args.patch.clone() {
        config = config.with_version(patch)?;
    }

    let client = DataDragonClient::new(config.clone());

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Loading champion data for patch {}", config.version));
    pb.enable_steady_tick(Duration::from_millis(100));
    let loaded = ChampionCache::get_or_load(&client, args.offline);
    pb.finish_and_clear();

    let cache = loaded.context("loading champion dataset")?;
    display_dataset_summary(cache);

    let benchmarks = load_benchmarks(&args, &config)?;
    for id in benchmarks.unknown_ids(|id| cache.contains(id)) {
        warn!("Benchmark entry {} does not match any champion in patch {}", id, cache.version);
    }

    match args.command {
        Command::Rankings { role, level, top } => {
            let level = effective_level(level);
            let ranked = rank_champions(&cache.champions, level, role);
            display_rankings(&ranked, level, top);
        }
        Command::Leaderboard { board, stat, level, top } => {
            let level = effective_level(level);
            let board = Leaderboard::parse(&board, stat).map_err(anyhow::Error::msg)?;
            let entries = leaderboard(&cache.champions, board, level);
            display_leaderboard(&entries, &format!("📊 {} at level {}", board.title(), level), top);
        }
        Command::Champion { name, level } => {
            let level = effective_level(level);
            let champion = cache.champion(&name)?;
            display_champion(champion, level, &benchmarks);
        }
        Command::Benchmark { category } => {
            let ranked = benchmarks.ranking(category);
            display_category_ranking(category, &ranked, |id| {
                cache
                    .champions
                    .get(id)
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| id.to_string())
            });
        }
        Command::List { query, role, sort, reverse } => {
            let matches = match query.as_deref() {
                Some(query) => search(&cache.champions, query),
                None => cache.champions.values().collect(),
            };
            let mut list = filter_by_role(matches, role);
            sort_champions(&mut list, sort, reverse);
            display_champion_list(&list);
        }
    }

    Ok(())
}
