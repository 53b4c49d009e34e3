#![forbid(unsafe_code)]

//! `argument-arena` — mock sassy debate bot library.
//!
//! Simulates a timed argument session against "Sir Interruptsalot":
//! canned responses, a simple point tally, and an end-of-session report.

pub mod bot;
pub mod config;
pub mod errors;
pub mod http;
pub mod models;

pub use config::GlobalConfig;
pub use errors::{AppError, Result};
