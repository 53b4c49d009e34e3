//! Domain model module declarations.

pub mod round;
pub mod session;
