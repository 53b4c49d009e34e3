//! Argument session entity and time-budget computations.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Fixed session time budget in seconds (5 minutes).
pub const SESSION_DURATION_SECONDS: u64 = 300;

/// A single timed round of mock debate with running point totals.
///
/// Activity is derived, not stored: a session is active while its time
/// budget is unexhausted and it has not been explicitly ended.  The
/// transition to inactive is one-way; a session is single-use and cannot
/// be restarted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct ArgumentSession {
    /// Running total of points awarded to the user.
    pub user_points: u32,
    /// Running total of points awarded to the bot.
    pub bot_points: u32,
    /// Creation timestamp; immutable after construction.
    pub started_at: DateTime<Utc>,
    /// Time budget in seconds; immutable after construction.
    pub duration_seconds: u64,
    /// Set once by an explicit end; never cleared.
    ended: bool,
}

impl ArgumentSession {
    /// Construct a fresh session starting now with zeroed point totals.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Utc::now())
    }

    /// Construct a session with an explicit start timestamp.
    #[must_use]
    pub fn starting_at(started_at: DateTime<Utc>) -> Self {
        Self {
            user_points: 0,
            bot_points: 0,
            started_at,
            duration_seconds: SESSION_DURATION_SECONDS,
            ended: false,
        }
    }

    /// Whole seconds remaining in the time budget at `now`, truncated.
    ///
    /// Never negative: once the budget is exhausted this stays at zero.
    /// An explicitly ended session also reports zero.
    #[must_use]
    pub fn remaining_seconds(&self, now: DateTime<Utc>) -> u64 {
        if self.ended {
            return 0;
        }
        // Truncate the remainder, not the elapsed time: 299.5 s left is 299.
        let elapsed_ms = now.signed_duration_since(self.started_at).num_milliseconds();
        let elapsed_ms = u64::try_from(elapsed_ms).unwrap_or(0);
        (self.duration_seconds * 1000).saturating_sub(elapsed_ms) / 1000
    }

    /// Whether the session is still active at `now`.
    ///
    /// Pure function of `(now, started_at, duration, ended)`; reading it
    /// mutates nothing.  Once false it can never flip back to true.
    #[must_use]
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        !self.ended && self.remaining_seconds(now) > 0
    }

    /// Mark the session as explicitly ended.  Irreversible.
    pub fn end(&mut self) {
        self.ended = true;
    }

    /// Add one round's points to the running totals.
    pub fn award(&mut self, user_points: u32, bot_points: u32) {
        self.user_points += user_points;
        self.bot_points += bot_points;
    }
}

impl Default for ArgumentSession {
    fn default() -> Self {
        Self::new()
    }
}
