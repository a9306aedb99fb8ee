use chrono::{Days, NaiveDate};
use tracing::{debug, instrument};

use crate::error::{ClubError, Result};
use crate::fantasy::aggregator::StatsAggregator;
use crate::fantasy::csv_export::CsvExporter;
use crate::fantasy::leaderboard;
use crate::model::*;

/// How much of the session log [`Club::clear_sessions`] drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearRange {
    All,
    /// Sessions dated within the last 7 days.
    LastWeek,
    /// Sessions dated within the last 30 days.
    LastMonth,
}

impl ClearRange {
    fn days(self) -> Option<u64> {
        match self {
            ClearRange::All => None,
            ClearRange::LastWeek => Some(7),
            ClearRange::LastMonth => Some(30),
        }
    }
}

/// The club's roster and session log.
///
/// Every derived view is recomputed from the full log on demand.
///
/// # Examples
///
/// ```
/// # fn example() -> squad_points::Result<()> {
/// use squad_points::{Club, Player};
///
/// let mut club = Club::new();
/// club.add_player(Player::new(1, "Bede O.", "Forward"))?;
/// let leaders = club.leaders();
/// assert_eq!(leaders.top_points.unwrap().name, "Bede O.");
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct Club {
    players: Vec<Player>,
    sessions: Vec<Session>,
    aggregator: StatsAggregator,
    exporter: CsvExporter,
}

impl Club {
    /// Create an empty club with default engine settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a club from already-loaded data.
    pub fn with_data(players: Vec<Player>, sessions: Vec<Session>) -> Self {
        Self {
            players,
            sessions,
            ..Self::default()
        }
    }

    /// Use the provided aggregator, e.g. to switch to name joins.
    pub fn with_aggregator(mut self, aggregator: StatsAggregator) -> Self {
        self.aggregator = aggregator;
        self
    }

    pub fn with_exporter(mut self, exporter: CsvExporter) -> Self {
        self.exporter = exporter;
        self
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn add_player(&mut self, player: Player) -> Result<()> {
        if self.players.iter().any(|p| p.id == player.id) {
            return Err(ClubError::DuplicatePlayer { id: player.id });
        }
        self.players.push(player);
        Ok(())
    }

    /// Change a player's display name and position. Session records tagged
    /// with the player's id keep counting towards them.
    #[instrument(skip(self, name, position))]
    pub fn rename_player(
        &mut self,
        id: PlayerId,
        name: impl Into<String>,
        position: impl Into<String>,
    ) -> Result<()> {
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ClubError::UnknownPlayer { id })?;
        player.name = name.into();
        player.position = Some(position.into());
        debug!(name = %player.name, "renamed player");
        Ok(())
    }

    pub fn remove_player(&mut self, id: PlayerId) -> Result<Player> {
        let idx = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or(ClubError::UnknownPlayer { id })?;
        Ok(self.players.remove(idx))
    }

    /// Drop the whole roster. Sessions go with it.
    pub fn clear_players(&mut self) {
        self.players.clear();
        self.sessions.clear();
    }

    /// Replace the session with the same id, or append a new one.
    #[instrument(skip_all, fields(id = session.id))]
    pub fn upsert_session(&mut self, session: Session) -> Result<()> {
        if !session.is_well_formed() {
            return Err(ClubError::MalformedSession {
                id: session.id,
                teams: session.teams.len(),
            });
        }
        match self.sessions.iter_mut().find(|s| s.id == session.id) {
            Some(existing) => {
                debug!("replacing session");
                *existing = session;
            }
            None => self.sessions.push(session),
        }
        Ok(())
    }

    pub fn remove_session(&mut self, id: SessionId) -> Result<Session> {
        let idx = self
            .sessions
            .iter()
            .position(|s| s.id == id)
            .ok_or(ClubError::UnknownSession { id })?;
        Ok(self.sessions.remove(idx))
    }

    /// Drop sessions in `range`, counted back from `today`. Returns how many
    /// were removed.
    #[instrument(skip(self))]
    pub fn clear_sessions(&mut self, range: ClearRange, today: NaiveDate) -> usize {
        let before = self.sessions.len();
        match range.days().and_then(|days| today.checked_sub_days(Days::new(days))) {
            Some(cutoff) => self.sessions.retain(|s| s.date < cutoff),
            None => self.sessions.clear(),
        }
        let removed = before - self.sessions.len();
        debug!(removed, "cleared sessions");
        removed
    }

    pub fn stats(&self) -> Vec<PlayerStatLine> {
        self.aggregator.compute(&self.sessions, &self.players)
    }

    pub fn leaders(&self) -> Leaders {
        leaderboard::top_leaders(&self.stats())
    }

    /// Ranked stat lines for players matching `filter`.
    pub fn leaderboard(
        &self,
        metric: Metric,
        filter: &leaderboard::StatFilter,
        limit: Option<usize>,
    ) -> Vec<PlayerStatLine> {
        leaderboard::rank(&self.stats(), metric, |line| filter.matches(line), limit)
    }

    pub fn export_csv(&self) -> Result<String> {
        self.exporter.export(&self.sessions)
    }
}
