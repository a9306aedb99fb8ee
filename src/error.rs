use std::string::FromUtf8Error;

use crate::model::{PlayerId, SessionId};

/// All errors that can occur while exporting or mutating club data.
#[derive(thiserror::Error, Debug)]
pub enum ClubError {
    /// Writing a CSV record failed.
    #[error("failed to write csv record: {0}")]
    Csv(#[from] csv::Error),

    /// The CSV writer could not hand back its buffer.
    #[error("failed to flush csv writer: {0}")]
    CsvFlush(String),

    /// The exported CSV was not valid UTF-8.
    #[error("csv output is not valid utf-8: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// No session with this id exists in the store.
    #[error("unknown session {id}")]
    UnknownSession { id: SessionId },

    /// No player with this id exists in the roster.
    #[error("unknown player {id}")]
    UnknownPlayer { id: PlayerId },

    /// A player with this id is already on the roster.
    #[error("player {id} is already on the roster")]
    DuplicatePlayer { id: PlayerId },

    /// A session must have exactly two team records.
    #[error("session {id} has {teams} team records, expected 2")]
    MalformedSession { id: SessionId, teams: usize },
}

impl<W> From<csv::IntoInnerError<W>> for ClubError {
    fn from(err: csv::IntoInnerError<W>) -> Self {
        ClubError::CsvFlush(err.error().to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClubError>;
