//! Canned response and explanation template sets.
//!
//! Nondeterminism is isolated here: selection is a pure function of an
//! injected random source mapping to an index into an immutable ordered
//! template list, so tests can pin the source and assert exact output.

use rand::Rng;

/// Number of sassy reply templates.
pub const RESPONSE_COUNT: usize = 5;

/// Number of judgement explanation templates.
pub const EXPLANATION_COUNT: usize = 3;

/// Render the sassy reply template at `index`, interpolating the user's
/// message verbatim.
///
/// # Panics
///
/// Panics if `index >= RESPONSE_COUNT`.
#[must_use]
pub fn render_response(index: usize, user_message: &str) -> String {
    match index {
        0 => format!(
            "Oh please, '{user_message}'? That's the best you can do? I've heard more convincing arguments from my toaster."
        ),
        1 => format!(
            "Let me interrupt you right there - '{user_message}' is exactly the kind of thinking that got us into this mess in the first place!"
        ),
        2 => format!(
            "ACTUALLY, '{user_message}' is completely wrong, and here's why you should probably just stick to watching cat videos..."
        ),
        3 => format!(
            "I'm sorry, did you just say '{user_message}'? Because that's absolutely hilarious if you actually believe that nonsense."
        ),
        4 => format!(
            "Hold up, hold up - '{user_message}'? That's not an argument, that's just wishful thinking with extra steps!"
        ),
        _ => unreachable!("response template index out of range"),
    }
}

/// Render the judgement explanation template at `index`, interpolating the
/// computed round points.
///
/// # Panics
///
/// Panics if `index >= EXPLANATION_COUNT`.
#[must_use]
pub fn render_explanation(index: usize, user_points: u32, bot_points: u32) -> String {
    match index {
        0 => format!(
            "Sir Interruptsalot gets {bot_points} points for superior sass levels. You get {user_points} points for trying."
        ),
        1 => format!(
            "The bot wins {bot_points} points for interruption technique. You earn {user_points} points for persistence."
        ),
        2 => format!(
            "Sir Interruptsalot scores {bot_points} points for creative dismissal. You get {user_points} points for effort."
        ),
        _ => unreachable!("explanation template index out of range"),
    }
}

/// Pick a sassy reply uniformly at random.  Repeats are allowed; no memory
/// of previously served templates is kept.
pub fn pick_response<R: Rng>(rng: &mut R, user_message: &str) -> String {
    render_response(rng.gen_range(0..RESPONSE_COUNT), user_message)
}

/// Pick a judgement explanation uniformly at random.
pub fn pick_explanation<R: Rng>(rng: &mut R, user_points: u32, bot_points: u32) -> String {
    render_explanation(rng.gen_range(0..EXPLANATION_COUNT), user_points, bot_points)
}
