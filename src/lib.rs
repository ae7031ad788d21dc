pub mod analysis;
pub mod api;
pub mod cache;
pub mod config;
pub mod display;
pub mod error;

pub use analysis::benchmark::{BenchmarkCategory, BenchmarkSet, CategoryScores};
pub use analysis::normalize::normalize;
pub use analysis::projection::{project, project_stats_at_level, DerivedStats};
pub use analysis::rating::{overall_score, rank_champions, score_dps, score_mobility, score_tankiness};
pub use analysis::role::{role_of, Role};
pub use api::models::{Champion, ChampionStats};
pub use error::AppError;
