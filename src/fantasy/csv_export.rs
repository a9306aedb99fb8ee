use std::slice;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::{debug, instrument};

use crate::error::Result;
use crate::fantasy::aggregator::{JoinKey, StatsAggregator};
use crate::model::{ParticipationRecord, Player, Session};

pub const CSV_HEADER: [&str; 13] = [
    "Session ID",
    "Date",
    "Type",
    "Team",
    "Player Name",
    "Position",
    "Role",
    "Goals",
    "Assists",
    "Yellow",
    "Red",
    "Own Goals",
    "Points",
];

/// Whether exported fields get quoted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CsvQuoting {
    /// Write every field raw. A comma inside a name shifts the columns, as
    /// the dashboard export always has.
    #[default]
    Never,
    /// Quote fields containing a delimiter, quote or newline.
    Necessary,
}

impl From<CsvQuoting> for QuoteStyle {
    fn from(quoting: CsvQuoting) -> Self {
        match quoting {
            CsvQuoting::Never => QuoteStyle::Never,
            CsvQuoting::Necessary => QuoteStyle::Necessary,
        }
    }
}

/// Flattens a session log into one CSV row per participation record.
#[derive(Debug, Clone, Default)]
pub struct CsvExporter {
    quoting: CsvQuoting,
}

impl CsvExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quoting(mut self, quoting: CsvQuoting) -> Self {
        self.quoting = quoting;
        self
    }

    /// Render `sessions` in session, team, player order.
    ///
    /// Counters that were never recorded come out as empty fields, except
    /// own goals which fall back to `0`. The points column is what the
    /// aggregator gives the player for that one session alone.
    #[instrument(skip_all, fields(sessions = sessions.len()))]
    pub fn export(&self, sessions: &[Session]) -> Result<String> {
        let mut writer = WriterBuilder::new()
            .quote_style(self.quoting.into())
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(CSV_HEADER)?;

        let mut rows = 0usize;
        for session in sessions {
            for team in &session.teams {
                for record in &team.players {
                    let points = session_points(session, record);
                    writer.write_record([
                        session.id.to_string(),
                        session.date.to_string(),
                        session.session_type.to_string(),
                        team.name.clone(),
                        record.name.clone(),
                        record.position.clone().unwrap_or_default(),
                        record.role.clone().unwrap_or_default(),
                        raw_count(record.goals),
                        raw_count(record.assists),
                        raw_count(record.yellow),
                        raw_count(record.red),
                        record.own_goals().to_string(),
                        points.to_string(),
                    ])?;
                    rows += 1;
                }
            }
        }

        let bytes = writer.into_inner()?;
        debug!(rows, "exported csv");
        Ok(String::from_utf8(bytes)?)
    }
}

/// Export with the default [`CsvExporter`].
pub fn to_csv(sessions: &[Session]) -> Result<String> {
    CsvExporter::new().export(sessions)
}

/// Points for `record` computed from a one-session log and a one-player
/// roster built from the record's name and position. The join is by name,
/// so the roster id is a placeholder.
fn session_points(session: &Session, record: &ParticipationRecord) -> f64 {
    let roster = [Player {
        id: 0,
        name: record.name.clone(),
        position: record.position.clone(),
    }];
    StatsAggregator::new()
        .with_join_key(JoinKey::Name)
        .compute(slice::from_ref(session), &roster)
        .first()
        .map_or(0.0, |line| line.total_points)
}

fn raw_count(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
