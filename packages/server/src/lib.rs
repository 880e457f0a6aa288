//! Oekaki session coordinator.
//!
//! One shared game session: players join over WebSocket, take turns drawing a
//! prompt while the others guess, and every message is fanned out to all connections.

pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
