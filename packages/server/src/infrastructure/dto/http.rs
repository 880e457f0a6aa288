//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatEntryDetailDto {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameConfigDto {
    pub rounds: u32,
    pub turns_per_round: u32,
    pub total_turns_elapsed: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionDetailDto {
    pub connection_id: String,
    /// Player bound to this connection, `None` for spectators
    pub player_id: Option<String>,
    /// RFC 3339 (JST)
    pub connected_at: Option<String>,
}

/// Response body of `GET /debug/session`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionStateDto {
    pub players: Vec<String>,
    pub turn_order: Vec<String>,
    pub current_turn_index: usize,
    pub current_turn: Option<String>,
    pub phase: String,
    pub round: u32,
    pub game_started: bool,
    pub config: GameConfigDto,
    pub chat_history: Vec<ChatEntryDetailDto>,
    pub connections: Vec<ConnectionDetailDto>,
}
