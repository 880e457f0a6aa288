//! Utilities shared by the Oekaki binaries.

pub mod logger;
pub mod time;
