use serde::{Deserialize, Serialize};

use super::{Player, PlayerId};

/// A roster player's statistics accumulated over a set of sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatLine {
    pub id: PlayerId,
    pub name: String,
    pub position: String,
    pub goals: u32,
    pub assists: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub own_goals: u32,
    pub appearances: u32,
    pub starts: u32,
    pub subs: u32,
    /// Sum of per-appearance fantasy points. May be negative.
    pub total_points: f64,
    /// Reserved; nothing populates it yet.
    pub attendance_points: f64,
}

impl PlayerStatLine {
    /// A zeroed line for `player`.
    pub fn new(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            position: player.position().to_string(),
            goals: 0,
            assists: 0,
            yellow_cards: 0,
            red_cards: 0,
            own_goals: 0,
            appearances: 0,
            starts: 0,
            subs: 0,
            total_points: 0.0,
            attendance_points: 0.0,
        }
    }

    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::TotalPoints => self.total_points,
            Metric::Goals => self.goals.into(),
            Metric::Assists => self.assists.into(),
            Metric::Appearances => self.appearances.into(),
            Metric::YellowCards => self.yellow_cards.into(),
            Metric::RedCards => self.red_cards.into(),
            Metric::OwnGoals => self.own_goals.into(),
            Metric::Starts => self.starts.into(),
            Metric::Subs => self.subs.into(),
            Metric::AttendancePoints => self.attendance_points,
        }
    }
}

/// A numeric column of [`PlayerStatLine`] that leaderboards can sort by.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Metric {
    #[default]
    TotalPoints,
    Goals,
    Assists,
    Appearances,
    YellowCards,
    RedCards,
    OwnGoals,
    Starts,
    Subs,
    AttendancePoints,
}

/// The headline leaders shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaders {
    pub top_points: Option<PlayerStatLine>,
    pub top_scorer: Option<PlayerStatLine>,
    pub top_assister: Option<PlayerStatLine>,
    pub appearance_king: Option<PlayerStatLine>,
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_metric_parses_dashboard_sort_keys() {
        assert_eq!("totalPoints".parse::<Metric>().unwrap(), Metric::TotalPoints);
        assert_eq!("goals".parse::<Metric>().unwrap(), Metric::Goals);
        assert_eq!("yellowCards".parse::<Metric>().unwrap(), Metric::YellowCards);
        assert!("rating".parse::<Metric>().is_err());
        for metric in Metric::iter() {
            assert_eq!(metric.to_string().parse::<Metric>().unwrap(), metric);
        }
    }

    #[test]
    fn test_new_line_is_zeroed() {
        let line = PlayerStatLine::new(&Player::new(3, "Marcus R.", "Defender"));
        for metric in Metric::iter() {
            assert_eq!(line.metric(metric), 0.0, "{metric}");
        }
        assert_eq!(line.position, "Defender");
    }
}
