use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Opaque session identifier.
pub type SessionId = u64;

/// Kind of recorded club activity.
#[derive(
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
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SessionType {
    Match,
    Training,
}

/// How a player took part in a session.
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Starter,
    Sub,
    /// Any label other than "starter" or "sub". Scores like a starter but
    /// counts towards neither starts nor subs.
    Other,
}

impl Role {
    /// Interpret a raw role label for scoring. A missing label means
    /// "starter"; matching is exact.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            None => Self::Starter,
            Some(label) => Self::from_str(label).unwrap_or(Self::Other),
        }
    }

    /// Points for turning up in this role.
    pub fn appearance_points(self) -> f64 {
        match self {
            Self::Sub => 0.5,
            Self::Starter | Self::Other => 1.0,
        }
    }
}

/// One player's involvement for one side in one session.
///
/// Counters stay optional so that exports can tell "never recorded" apart
/// from an explicit zero; every scoring path reads them through the
/// defaulting accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationRecord {
    pub name: String,
    /// Roster id, when the record was captured with one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<PlayerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assists: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yellow: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub red: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub own_goals: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl ParticipationRecord {
    /// A starter with every counter explicitly zeroed, the way the session
    /// editor adds a player to a side.
    pub fn starter(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            goals: Some(0),
            assists: Some(0),
            yellow: Some(0),
            red: Some(0),
            own_goals: Some(0),
            role: Some(Role::Starter.to_string()),
            ..Default::default()
        }
    }

    pub fn goals(&self) -> u32 {
        self.goals.unwrap_or_default()
    }

    pub fn assists(&self) -> u32 {
        self.assists.unwrap_or_default()
    }

    pub fn yellow(&self) -> u32 {
        self.yellow.unwrap_or_default()
    }

    pub fn red(&self) -> u32 {
        self.red.unwrap_or_default()
    }

    pub fn own_goals(&self) -> u32 {
        self.own_goals.unwrap_or_default()
    }

    pub fn role(&self) -> Role {
        Role::from_label(self.role.as_deref())
    }
}

/// One side's participation in a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub name: String,
    /// Side coach; only meaningful for matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coach: Option<String>,
    /// Goals by this side's players plus opponent own goals.
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub players: Vec<ParticipationRecord>,
}

impl TeamRecord {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
            ..Default::default()
        }
    }

    pub fn with_player(mut self, player: ParticipationRecord) -> Self {
        self.players.push(player);
        self
    }

    fn goals_scored(&self) -> u32 {
        self.players
            .iter()
            .map(ParticipationRecord::goals)
            .fold(0, u32::saturating_add)
    }

    fn own_goals_conceded(&self) -> u32 {
        self.players
            .iter()
            .map(ParticipationRecord::own_goals)
            .fold(0, u32::saturating_add)
    }
}

/// One recorded match or training session between two sides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: SessionId,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub session_type: SessionType,
    /// Session-wide coach; only meaningful for training.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coach: Option<String>,
    pub teams: Vec<TeamRecord>,
}

impl Session {
    pub fn new(id: SessionId, date: NaiveDate, session_type: SessionType) -> Self {
        Self {
            id,
            date,
            session_type,
            coach: None,
            teams: Vec::new(),
        }
    }

    pub fn with_team(mut self, team: TeamRecord) -> Self {
        self.teams.push(team);
        self
    }

    /// The first side whose name differs from `team`'s. Sides sharing a
    /// name never count as each other's opponent.
    pub fn opponent_of(&self, team: &TeamRecord) -> Option<&TeamRecord> {
        self.teams.iter().find(|t| t.name != team.name)
    }

    pub fn is_well_formed(&self) -> bool {
        self.teams.len() == 2
    }

    /// Re-derive every side's score from the participation records: own
    /// players' goals plus own goals committed by the other sides.
    pub fn recalculate_scores(&mut self) {
        let own_goals: Vec<u32> = self
            .teams
            .iter()
            .map(TeamRecord::own_goals_conceded)
            .collect();
        let total_own_goals = own_goals.iter().copied().fold(0, u32::saturating_add);
        for (team, own) in self.teams.iter_mut().zip(own_goals) {
            let gifted = total_own_goals.saturating_sub(own);
            team.score = team.goals_scored().saturating_add(gifted);
        }
    }
}
