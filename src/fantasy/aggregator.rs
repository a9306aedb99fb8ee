use std::collections::HashMap;

use tracing::{debug, instrument, warn};

use crate::fantasy::scoring;
use crate::model::{
    ParticipationRecord, Player, PlayerId, PlayerStatLine, PositionTier, Role, Session,
};

/// How participation records are matched to roster players.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JoinKey {
    /// Match on `player_id` when the record carries one, otherwise on name.
    /// Renaming a player keeps their id-tagged history.
    #[default]
    Id,
    /// Match on the display name only.
    Name,
}

/// Folds a session log into per-player stat lines.
///
/// # Examples
///
/// ```
/// use squad_points::{JoinKey, Player, StatsAggregator};
///
/// let roster = vec![Player::new(1, "Bede O.", "Forward")];
/// let lines = StatsAggregator::new()
///     .with_join_key(JoinKey::Name)
///     .compute(&[], &roster);
/// assert_eq!(lines[0].total_points, 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StatsAggregator {
    join_key: JoinKey,
}

impl StatsAggregator {
    /// Create an aggregator joining on id, falling back to name.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_join_key(mut self, join_key: JoinKey) -> Self {
        self.join_key = join_key;
        self
    }

    pub fn join_key(&self) -> JoinKey {
        self.join_key
    }

    /// Compute one stat line per roster player, in roster order.
    ///
    /// Records for players missing from the roster are dropped. Inputs are
    /// only read; every counter lives in the returned lines.
    #[instrument(skip_all, fields(sessions = sessions.len(), players = players.len()))]
    pub fn compute(&self, sessions: &[Session], players: &[Player]) -> Vec<PlayerStatLine> {
        let mut book = StatBook::new(players);

        for session in sessions {
            for team in &session.teams {
                let opponent = session.opponent_of(team);
                if opponent.is_none() {
                    debug!(session = session.id, team = %team.name, "no distinct opponent");
                }

                for record in &team.players {
                    let Some(line) = book.resolve(record, self.join_key) else {
                        debug!(session = session.id, name = %record.name, "dropping unknown player");
                        continue;
                    };
                    let tier = PositionTier::classify(&line.position);
                    let points = scoring::appearance_points(record, tier, opponent);
                    accumulate(line, record, points);
                }
            }
        }

        book.lines
    }
}

/// Compute stat lines with the default [`StatsAggregator`].
pub fn compute_stats(sessions: &[Session], players: &[Player]) -> Vec<PlayerStatLine> {
    StatsAggregator::new().compute(sessions, players)
}

fn accumulate(line: &mut PlayerStatLine, record: &ParticipationRecord, points: f64) {
    line.goals = line.goals.saturating_add(record.goals());
    line.assists = line.assists.saturating_add(record.assists());
    line.yellow_cards = line.yellow_cards.saturating_add(record.yellow());
    line.red_cards = line.red_cards.saturating_add(record.red());
    line.own_goals = line.own_goals.saturating_add(record.own_goals());
    line.appearances = line.appearances.saturating_add(1);
    line.total_points += points;

    // Counters only trust an explicit label; a missing role scores as a
    // starter but is counted in neither.
    match record.role.as_deref() {
        None => {}
        Some(label) => match Role::from_label(Some(label)) {
            Role::Starter => line.starts = line.starts.saturating_add(1),
            Role::Sub => line.subs = line.subs.saturating_add(1),
            Role::Other => warn!(name = %record.name, role = label, "unrecognised role"),
        },
    }
}

/// Stat lines keyed by both name and id.
struct StatBook {
    lines: Vec<PlayerStatLine>,
    by_name: HashMap<String, usize>,
    by_id: HashMap<PlayerId, usize>,
}

impl StatBook {
    fn new(players: &[Player]) -> Self {
        let mut book = Self {
            lines: Vec::with_capacity(players.len()),
            by_name: HashMap::with_capacity(players.len()),
            by_id: HashMap::with_capacity(players.len()),
        };

        for player in players {
            let line = PlayerStatLine::new(player);
            // A repeated name takes over the earlier entry's slot.
            let idx = match book.by_name.get(&player.name).copied() {
                Some(idx) => {
                    book.lines[idx] = line;
                    idx
                }
                None => {
                    book.lines.push(line);
                    book.by_name.insert(player.name.clone(), book.lines.len() - 1);
                    book.lines.len() - 1
                }
            };
            book.by_id.insert(player.id, idx);
        }

        book
    }

    fn resolve(
        &mut self,
        record: &ParticipationRecord,
        join_key: JoinKey,
    ) -> Option<&mut PlayerStatLine> {
        let idx = match (join_key, record.player_id) {
            (JoinKey::Id, Some(id)) => self.by_id.get(&id),
            _ => self.by_name.get(&record.name),
        };
        idx.copied().map(|idx| &mut self.lines[idx])
    }
}
