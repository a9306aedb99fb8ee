//! Fantasy-point scoring for a recreational football club.
//!
//! Feed the session log and the roster to [`compute_stats`] (or a
//! configured [`StatsAggregator`]) to get one [`PlayerStatLine`] per player,
//! then derive leaderboards with [`rank`] / [`top_leaders`] or a CSV export
//! with [`to_csv`]. [`Club`] bundles the data with those views.

pub use club::{ClearRange, Club};
pub use error::{ClubError, Result};
pub use fantasy::aggregator::{compute_stats, JoinKey, StatsAggregator};
pub use fantasy::csv_export::{to_csv, CsvExporter, CsvQuoting, CSV_HEADER};
pub use fantasy::leaderboard::{rank, top_leaders, StatFilter, DEFAULT_LIMIT};
pub use fantasy::scoring::{appearance_points, TierWeights};
pub use fantasy::sessions::SessionFilter;
pub use model::*;

mod club;
mod error;
mod fantasy;
pub mod model;

#[cfg(test)]
mod tests;
