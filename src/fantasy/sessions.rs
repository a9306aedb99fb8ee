use crate::model::{Session, SessionType};

/// Search over the session log, as used by the match history page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionFilter {
    query: String,
    session_type: Option<SessionType>,
}

impl SessionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Match sessions where a team name, the ISO date or the type label
    /// contains `query`, ignoring case.
    pub fn query(mut self, query: &str) -> Self {
        self.query = query.to_lowercase();
        self
    }

    pub fn session_type(mut self, session_type: SessionType) -> Self {
        self.session_type = Some(session_type);
        self
    }

    pub fn matches(&self, session: &Session) -> bool {
        let type_ok = self.session_type.is_none_or(|t| t == session.session_type);
        type_ok && self.matches_query(session)
    }

    pub fn apply<'a>(&self, sessions: &'a [Session]) -> Vec<&'a Session> {
        sessions.iter().filter(|s| self.matches(s)).collect()
    }

    fn matches_query(&self, session: &Session) -> bool {
        let query = self.query.as_str();
        session
            .teams
            .iter()
            .any(|t| t.name.to_lowercase().contains(query))
            || session.date.to_string().contains(query)
            || session.session_type.to_string().contains(query)
    }
}
