//! The sassy argument bot: session lifecycle, responses, and scoring.

pub mod responses;

use std::time::Duration;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::models::round::RoundJudgement;
use crate::models::session::ArgumentSession;
use crate::{AppError, Result};

/// Simulated latency for operations that would call an external service.
const SIMULATED_LATENCY: Duration = Duration::from_millis(100);

/// Points the bot always earns per round, for sass.
const BOT_POINTS_PER_ROUND: u32 = 3;

/// Whitespace-delimited words per user point.
const WORDS_PER_POINT: usize = 5;

/// Sir Interruptsalot: a mock debate opponent with canned comebacks.
///
/// Owns at most one [`ArgumentSession`] at a time; starting a new session
/// replaces any prior one wholesale.  The random source is injected at
/// construction so tests can pin it for deterministic output.
#[derive(Debug)]
pub struct SassyArgumentBot<R: Rng> {
    /// Credential for the external answering service this mock never calls.
    #[allow(dead_code)]
    api_key: String,
    rng: R,
    session: Option<ArgumentSession>,
}

impl SassyArgumentBot<StdRng> {
    /// Construct a bot seeded from OS entropy.
    #[must_use]
    pub fn from_entropy(api_key: impl Into<String>) -> Self {
        Self::new(api_key, StdRng::from_entropy())
    }
}

impl<R: Rng> SassyArgumentBot<R> {
    /// Construct a bot with an explicit random source.
    #[must_use]
    pub fn new(api_key: impl Into<String>, rng: R) -> Self {
        Self {
            api_key: api_key.into(),
            rng,
            session: None,
        }
    }

    /// The current session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&ArgumentSession> {
        self.session.as_ref()
    }

    /// Start a new argument session, discarding any prior one.
    ///
    /// Prior session state is lost; nothing is archived.
    pub fn start_new_session(&mut self) {
        self.session = Some(ArgumentSession::new());
        info!("argument session started");
    }

    /// Get a sassy response to the user's message.
    ///
    /// Chosen uniformly at random from the canned template set; repeats are
    /// allowed.  Suspends for the simulated service latency before
    /// returning.  No session state is read or written.
    pub async fn get_bot_response(&mut self, user_message: &str) -> String {
        tokio::time::sleep(SIMULATED_LATENCY).await;
        responses::pick_response(&mut self.rng, user_message)
    }

    /// Judge one argument round and add the points to the session totals.
    ///
    /// The user earns one point per five whitespace-delimited words in
    /// their message (floor); the bot always earns three.  Suspends for the
    /// simulated judging latency before returning.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NoActiveSession`] if no session has been
    /// started.
    pub async fn judge_round(
        &mut self,
        user_message: &str,
        _bot_response: &str,
    ) -> Result<RoundJudgement> {
        tokio::time::sleep(SIMULATED_LATENCY).await;

        let session = self.session.as_mut().ok_or(AppError::NoActiveSession)?;

        let word_count = user_message.split_whitespace().count();
        let user_points = u32::try_from(word_count / WORDS_PER_POINT).unwrap_or(u32::MAX);
        let bot_points = BOT_POINTS_PER_ROUND;

        session.award(user_points, bot_points);
        info!(
            user_points,
            bot_points,
            total_user = session.user_points,
            total_bot = session.bot_points,
            "round judged"
        );

        let explanation = responses::pick_explanation(&mut self.rng, user_points, bot_points);
        Ok(RoundJudgement {
            user_points,
            bot_points,
            explanation,
        })
    }

    /// Whole seconds remaining in the current session, or 0 with none.
    #[must_use]
    pub fn get_time_remaining(&self) -> u64 {
        self.session
            .as_ref()
            .map_or(0, |session| session.remaining_seconds(Utc::now()))
    }

    /// End the session and produce the final report.
    ///
    /// With no session, returns a fixed "no session" message.  Otherwise
    /// the session is marked ended (irreversibly inactive) but retained
    /// until the next [`Self::start_new_session`], and the report names the
    /// winner by strict comparison of the final totals.
    pub fn end_session(&mut self) -> String {
        let Some(session) = self.session.as_mut() else {
            return "No session to end!".to_owned();
        };

        session.end();

        let result = if session.user_points > session.bot_points {
            "🎉 Congratulations! You out-argued Sir Interruptsalot!"
        } else if session.bot_points > session.user_points {
            "😏 Sir Interruptsalot wins! Better luck next time!"
        } else {
            "🤝 It's a tie! You're equally stubborn!"
        };

        info!(
            user_points = session.user_points,
            bot_points = session.bot_points,
            "argument session ended"
        );

        format!(
            "\n🏁 **FINAL RESULTS** 🏁\n\n{result}\n\n📊 **Final Scores:**\n• You: {user} points\n• Sir Interruptsalot: {bot} points\n\nThanks for playing with Sir Interruptsalot! 🎭\n",
            user = session.user_points,
            bot = session.bot_points,
        )
    }
}
