use serde::{Deserialize, Serialize};

/// Opaque roster identifier.
pub type PlayerId = u64;

/// Position label used when a roster entry carries none.
pub const DEFAULT_POSITION: &str = "Midfielder";

/// A member of the club roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(default)]
    pub id: PlayerId,
    pub name: String,
    /// Free-form role label such as "Forward" or "GK".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            position: Some(position.into()),
        }
    }

    /// The position label, falling back to [`DEFAULT_POSITION`].
    pub fn position(&self) -> &str {
        self.position.as_deref().unwrap_or(DEFAULT_POSITION)
    }

    pub fn tier(&self) -> PositionTier {
        PositionTier::classify(self.position())
    }
}

/// Scoring tier a free-form position label falls into.
#[derive(
    Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, strum_macros::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum PositionTier {
    Goalkeeper,
    Defender,
    Midfielder,
    /// Forwards, wingers and anything unclassified.
    Forward,
}

impl PositionTier {
    /// Classify a position label. Matching is case-insensitive and by
    /// substring; the first rule that matches wins, checked in the order
    /// goalkeeper, defender, midfielder.
    pub fn classify(position: &str) -> Self {
        let pos = position.to_lowercase();
        if pos.contains("goal") || pos == "gk" {
            Self::Goalkeeper
        } else if pos.contains("defender") {
            Self::Defender
        } else if pos.contains("midfield") {
            Self::Midfielder
        } else {
            Self::Forward
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_precedence() {
        assert_eq!(PositionTier::classify("Goalkeeper"), PositionTier::Goalkeeper);
        assert_eq!(PositionTier::classify("GK"), PositionTier::Goalkeeper);
        assert_eq!(PositionTier::classify("Centre Defender"), PositionTier::Defender);
        assert_eq!(
            PositionTier::classify("defensive midfielder"),
            PositionTier::Midfielder
        );
        assert_eq!(PositionTier::classify("Winger"), PositionTier::Forward);
        assert_eq!(PositionTier::classify(""), PositionTier::Forward);
        // "goal" is checked before "defender".
        assert_eq!(PositionTier::classify("goal defender"), PositionTier::Goalkeeper);
        // "gk" only counts as the whole label.
        assert_eq!(PositionTier::classify("gk/defender"), PositionTier::Defender);
    }

    #[test]
    fn test_missing_position_defaults_to_midfielder() {
        let player: Player = serde_json::from_str(r#"{"id": 7, "name": "John D."}"#).unwrap();
        assert_eq!(player.position(), "Midfielder");
        assert_eq!(player.tier(), PositionTier::Midfielder);
        assert_eq!(PositionTier::Midfielder.to_string(), "midfielder");
    }
}
