use itertools::Itertools;

use crate::model::{Leaders, Metric, PlayerStatLine};

/// Row cap for the on-screen rankings.
pub const DEFAULT_LIMIT: usize = 10;

/// Sort `lines` by `metric`, highest first, keeping only lines accepted by
/// `filter` and at most `limit` of them.
///
/// The sort is stable: lines with equal values keep their input order.
pub fn rank<F>(
    lines: &[PlayerStatLine],
    metric: Metric,
    filter: F,
    limit: Option<usize>,
) -> Vec<PlayerStatLine>
where
    F: Fn(&PlayerStatLine) -> bool,
{
    lines
        .iter()
        .filter(|line| filter(line))
        .sorted_by(|a, b| b.metric(metric).total_cmp(&a.metric(metric)))
        .take(limit.unwrap_or(usize::MAX))
        .cloned()
        .collect()
}

/// Pick the leader for points, goals, assists and appearances. Ties go to
/// the line that comes first in `lines`.
pub fn top_leaders(lines: &[PlayerStatLine]) -> Leaders {
    let leader = |metric| rank(lines, metric, |_| true, Some(1)).into_iter().next();
    Leaders {
        top_points: leader(Metric::TotalPoints),
        top_scorer: leader(Metric::Goals),
        top_assister: leader(Metric::Assists),
        appearance_king: leader(Metric::Appearances),
    }
}

/// Predicate over stat lines matching the dashboard's search box and
/// position dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatFilter {
    position: Option<String>,
    name: Option<String>,
}

impl StatFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep lines whose position contains `position`, ignoring case.
    /// `"all"` keeps everything.
    pub fn position(mut self, position: &str) -> Self {
        let position = position.to_lowercase();
        self.position = (position != "all").then_some(position);
        self
    }

    /// Keep lines whose name contains `query`, ignoring case.
    pub fn name(mut self, query: &str) -> Self {
        self.name = Some(query.to_lowercase());
        self
    }

    pub fn matches(&self, line: &PlayerStatLine) -> bool {
        let position_ok = self
            .position
            .as_deref()
            .is_none_or(|pos| line.position.to_lowercase().contains(pos));
        let name_ok = self
            .name
            .as_deref()
            .is_none_or(|query| line.name.to_lowercase().contains(query));
        position_ok && name_ok
    }
}
