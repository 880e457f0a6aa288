//! WebSocket message DTOs.
//!
//! Every frame is a JSON object tagged by `type`. Field names follow the browser client
//! (`camelCase`), e.g. `turnOrder`, `chatHistory`, `imageData`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

// ========================================
// Inbound (client → server)
// ========================================

/// Inbound message kinds with dedicated handling.
///
/// Anything else is relayed verbatim and never deserialized into [`InboundMessage`].
pub const KNOWN_INBOUND_TYPES: &[&str] = &[
    "join",
    "start",
    "turn_end",
    "drawing_completed",
    "drawing_time_up",
    "answering_time_up",
    "chat",
    "answer",
    "image_sended",
    "paint",
    "undo",
    "redo",
];

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InboundMessage {
    Join {
        #[serde(deserialize_with = "lenient_string")]
        id: String,
    },
    Start {
        #[serde(default)]
        rounds: Value,
        #[serde(default)]
        turns: Value,
    },
    TurnEnd {},
    DrawingCompleted {},
    DrawingTimeUp {},
    AnsweringTimeUp {},
    Chat {
        #[serde(default, deserialize_with = "lenient_string")]
        id: String,
        #[serde(default, deserialize_with = "lenient_string")]
        text: String,
    },
    Answer {},
    ImageSended {
        #[serde(rename = "imageData", default)]
        image_data: Value,
    },
    Paint {},
    Undo {},
    Redo {},
}

/// Accept strings as-is and stringify other scalars (clients sometimes send numeric IDs).
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Errors raised while decoding an inbound frame
#[derive(Debug, Error)]
pub enum InboundMessageError {
    #[error("Invalid JSON message: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid '{field}' value: {value}")]
    InvalidCount { field: &'static str, value: String },
}

// ========================================
// Outbound (server → client)
// ========================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    Init,
    Join,
    Leave,
    PlayerCountUpdate,
    Start,
    NextTurn,
    GameEnd,
    ImageSended,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatEntryDto {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitMessage {
    pub r#type: MessageType,
    pub players: Vec<String>,
    pub chat_history: Vec<ChatEntryDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinMessage {
    pub r#type: MessageType,
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveMessage {
    pub r#type: MessageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerCountUpdateMessage {
    pub r#type: MessageType,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartMessage {
    pub r#type: MessageType,
    pub first_char: String,
    pub turn_order: Vec<String>,
    pub remaining_time: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_turn: Option<String>,
    pub phase: String,
    pub rounds: u32,
    pub turns: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextTurnMessage {
    pub r#type: MessageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_turn: Option<String>,
    pub turn_order: Vec<String>,
    pub round: u32,
    pub phase: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEndMessage {
    pub r#type: MessageType,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSendedMessage {
    pub r#type: MessageType,
    pub image_data: Value,
}
