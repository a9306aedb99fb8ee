use crate::model::{ParticipationRecord, PositionTier, TeamRecord};

const YELLOW_CARD_PENALTY: f64 = 2.0;
const RED_CARD_PENALTY: f64 = 4.0;

/// Per-tier point values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierWeights {
    pub goal: f64,
    pub assist: f64,
    pub clean_sheet: f64,
}

impl From<PositionTier> for TierWeights {
    fn from(tier: PositionTier) -> Self {
        match tier {
            PositionTier::Goalkeeper => Self {
                goal: 5.0,
                assist: 3.0,
                clean_sheet: 4.0,
            },
            PositionTier::Defender => Self {
                goal: 3.0,
                assist: 3.0,
                clean_sheet: 3.0,
            },
            PositionTier::Midfielder => Self {
                goal: 2.0,
                assist: 2.0,
                clean_sheet: 2.0,
            },
            PositionTier::Forward => Self {
                goal: 2.0,
                assist: 1.0,
                clean_sheet: 2.0,
            },
        }
    }
}

/// Fantasy points earned by a single appearance.
///
/// `opponent` is the other side of the same session, if one could be found;
/// a clean sheet is awarded only when it exists and scored nothing. The
/// result is not floored, so cards can push it below zero.
pub fn appearance_points(
    record: &ParticipationRecord,
    tier: PositionTier,
    opponent: Option<&TeamRecord>,
) -> f64 {
    let weights = TierWeights::from(tier);
    let mut points = record.role().appearance_points();

    points += f64::from(record.goals()) * weights.goal;
    points += f64::from(record.assists()) * weights.assist;

    if opponent.is_some_and(|team| team.score == 0) {
        points += weights.clean_sheet;
    }

    points -= f64::from(record.yellow()) * YELLOW_CARD_PENALTY;
    points -= f64::from(record.red()) * RED_CARD_PENALTY;
    points
}
