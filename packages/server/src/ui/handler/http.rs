//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{
    infrastructure::dto::http::{ConnectionDetailDto, GameConfigDto, SessionStateDto},
    ui::state::AppState,
};
use oekaki_shared::time::timestamp_to_jst_rfc3339;

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Debug endpoint to get the current session state (for testing purposes)
pub async fn debug_session_state(State(state): State<Arc<AppState>>) -> Json<SessionStateDto> {
    let snapshot = state.get_session_state_usecase.execute().await;
    let session = snapshot.session;
    let config = session.config();

    // Domain Model から DTO への変換
    let dto = SessionStateDto {
        players: session
            .players()
            .iter()
            .map(|p| p.as_str().to_string())
            .collect(),
        turn_order: session
            .turn_order()
            .iter()
            .map(|p| p.as_str().to_string())
            .collect(),
        current_turn_index: session.current_turn_index(),
        current_turn: session.current_player().map(|p| p.as_str().to_string()),
        phase: session.phase().as_str().to_string(),
        round: session.round(),
        game_started: session.is_game_started(),
        config: GameConfigDto {
            rounds: config.rounds,
            turns_per_round: config.turns_per_round,
            total_turns_elapsed: config.total_turns_elapsed,
        },
        chat_history: session
            .chat_history()
            .iter()
            .cloned()
            .map(Into::into)
            .collect(),
        connections: snapshot
            .connections
            .into_iter()
            .map(|c| ConnectionDetailDto {
                connection_id: c.info.connection_id.to_string(),
                player_id: c.player_id.map(|p| p.into_string()),
                connected_at: timestamp_to_jst_rfc3339(c.info.connected_at.value()),
            })
            .collect(),
    };

    Json(dto)
}
