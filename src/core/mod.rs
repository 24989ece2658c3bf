pub mod attention;
pub mod backup;
pub mod filter;
pub mod leaderboard;
pub mod metrics;
pub mod tmo;

pub use leaderboard::{LeaderboardRow, leaderboard};
pub use metrics::{StatusSummary, count_by_status, mean_duration, status_summary};
