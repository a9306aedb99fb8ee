pub(crate) mod aggregator;
pub(crate) mod csv_export;
pub(crate) mod leaderboard;
pub(crate) mod scoring;
pub(crate) mod sessions;
