//! Per-round judgement result type.

use serde::Serialize;

/// Outcome of judging one exchange of user message and bot response.
///
/// Points here are the round's deltas, not the session totals.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct RoundJudgement {
    /// Points awarded to the user this round.
    pub user_points: u32,
    /// Points awarded to the bot this round.
    pub bot_points: u32,
    /// Sassy narration of the score, chosen at random.
    pub explanation: String,
}
