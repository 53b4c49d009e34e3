//! Thin HTTP layer forwarding to the bot.
//!
//! No protocol design beyond plain JSON-in/JSON-out payloads; the core
//! boundary is the bot's operations, and these handlers only translate.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::info;

use crate::bot::SassyArgumentBot;
use crate::models::round::RoundJudgement;
use crate::{AppError, GlobalConfig, Result};

/// Shared bot handle behind the HTTP layer.
///
/// The design assumes a single logical caller; the mutex only serializes
/// access to the shared handle.
pub type SharedBot = Arc<Mutex<SassyArgumentBot<StdRng>>>;

/// Request body carrying a user message.
#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    /// The user's argument text, treated as an opaque string.
    pub message: String,
}

/// Request body for judging one round.
#[derive(Debug, Deserialize)]
pub struct JudgeRequest {
    /// The user's argument text.
    pub message: String,
    /// The bot response served for this round.
    pub bot_response: String,
}

/// Response body carrying the bot's sassy reply.
#[derive(Debug, Serialize)]
pub struct RespondResponse {
    /// The canned reply, message interpolated verbatim.
    pub response: String,
}

/// Response body for the time-remaining query.
#[derive(Debug, Serialize)]
pub struct TimeResponse {
    /// Whole seconds left in the session budget; 0 with no session.
    pub seconds_remaining: u64,
}

/// Response body carrying a session report.
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    /// Multi-line final report text.
    pub report: String,
}

/// Map a domain error onto an HTTP status and plain-text body.
fn error_response(err: &AppError) -> (StatusCode, String) {
    let status = match err {
        AppError::NoActiveSession => StatusCode::CONFLICT,
        AppError::Config(_) | AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, err.to_string())
}

/// Handler for `GET /health` — returns 200 OK with a plain-text body.
async fn health() -> &'static str {
    "ok"
}

/// Handler for `POST /session/start`.
async fn start_session(State(bot): State<SharedBot>) -> StatusCode {
    bot.lock().await.start_new_session();
    StatusCode::NO_CONTENT
}

/// Handler for `POST /respond`.
async fn respond(
    State(bot): State<SharedBot>,
    Json(req): Json<MessageRequest>,
) -> Json<RespondResponse> {
    let response = bot.lock().await.get_bot_response(&req.message).await;
    Json(RespondResponse { response })
}

/// Handler for `POST /judge`.
async fn judge(
    State(bot): State<SharedBot>,
    Json(req): Json<JudgeRequest>,
) -> std::result::Result<Json<RoundJudgement>, (StatusCode, String)> {
    let judgement = bot
        .lock()
        .await
        .judge_round(&req.message, &req.bot_response)
        .await
        .map_err(|err| error_response(&err))?;
    Ok(Json(judgement))
}

/// Handler for `GET /time`.
async fn time_remaining(State(bot): State<SharedBot>) -> Json<TimeResponse> {
    let seconds_remaining = bot.lock().await.get_time_remaining();
    Json(TimeResponse { seconds_remaining })
}

/// Handler for `POST /session/end`.
async fn end_session(State(bot): State<SharedBot>) -> Json<ReportResponse> {
    let report = bot.lock().await.end_session();
    Json(ReportResponse { report })
}

/// Build the arena router over a shared bot handle.
#[must_use]
pub fn router(bot: SharedBot) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/session/start", post(start_session))
        .route("/session/end", post(end_session))
        .route("/respond", post(respond))
        .route("/judge", post(judge))
        .route("/time", get(time_remaining))
        .with_state(bot)
}

/// Serve the arena HTTP API until the process receives Ctrl-C.
///
/// # Errors
///
/// Returns `AppError::Io` if the listener cannot bind or the server fails.
pub async fn serve(config: &GlobalConfig, bot: SharedBot) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    info!(%local, "arena HTTP server listening");

    axum::serve(listener, router(bot))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await?;

    Ok(())
}
