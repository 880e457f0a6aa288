//! Conversion logic between wire DTOs and domain events.

use serde_json::Value;

use crate::domain::{ChatEntry, ClientEvent, PlayerId, ServerEvent, StrokeKind};
use crate::infrastructure::dto::{http as http_dto, websocket as dto};

// ========================================
// Wire → Domain
// ========================================

/// Decode one inbound text frame.
///
/// Frames that are valid JSON but carry an unrecognised (or missing) `type` become
/// [`ClientEvent::Unknown`] so they can be relayed untouched.
pub fn parse_client_event(text: &str) -> Result<ClientEvent, dto::InboundMessageError> {
    let value: Value = serde_json::from_str(text)?;
    let kind = value
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    if !dto::KNOWN_INBOUND_TYPES.contains(&kind.as_str()) {
        return Ok(ClientEvent::Unknown(kind));
    }

    let message: dto::InboundMessage = serde_json::from_value(value)?;
    ClientEvent::try_from(message)
}

impl TryFrom<dto::InboundMessage> for ClientEvent {
    type Error = dto::InboundMessageError;

    fn try_from(message: dto::InboundMessage) -> Result<Self, Self::Error> {
        use dto::InboundMessage as In;

        Ok(match message {
            In::Join { id } => ClientEvent::Join(PlayerId::new(id)),
            In::Start { rounds, turns } => ClientEvent::Start {
                // rounds は表示用なので、読めなくても開始は止めない
                rounds: parse_count("rounds", &rounds).unwrap_or_else(|e| {
                    tracing::warn!("{}. Starting with rounds = 0", e);
                    0
                }),
                turns: parse_count("turns", &turns)?,
            },
            In::TurnEnd {} => ClientEvent::TurnEnd,
            In::DrawingCompleted {} => ClientEvent::DrawingCompleted,
            In::DrawingTimeUp {} => ClientEvent::DrawingTimeUp,
            In::AnsweringTimeUp {} => ClientEvent::AnsweringTimeUp,
            In::Chat { id, text } => ClientEvent::Chat(ChatEntry::new(id, text)),
            In::Answer {} => ClientEvent::Answer,
            In::ImageSended { image_data } => ClientEvent::ImageSended { image_data },
            In::Paint {} => ClientEvent::Stroke(StrokeKind::Paint),
            In::Undo {} => ClientEvent::Stroke(StrokeKind::Undo),
            In::Redo {} => ClientEvent::Stroke(StrokeKind::Redo),
        })
    }
}

/// Read a non-negative count sent either as a JSON number or as a form string.
///
/// Strings are read like `parseInt`: leading whitespace is skipped and the leading
/// digits are used (`"3 rounds"` → 3). Fractions are truncated.
fn parse_count(field: &'static str, value: &Value) -> Result<u32, dto::InboundMessageError> {
    let invalid = || dto::InboundMessageError::InvalidCount {
        field,
        value: value.to_string(),
    };

    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                u32::try_from(v).map_err(|_| invalid())
            } else {
                match n.as_f64() {
                    Some(f) if f.is_finite() && f >= 0.0 && f < f64::from(u32::MAX) => {
                        Ok(f.trunc() as u32)
                    }
                    _ => Err(invalid()),
                }
            }
        }
        Value::String(s) => {
            let digits: String = s
                .trim_start()
                .chars()
                .take_while(char::is_ascii_digit)
                .collect();
            digits.parse::<u32>().map_err(|_| invalid())
        }
        _ => Err(invalid()),
    }
}

// ========================================
// Domain → Wire
// ========================================

/// Encode an outbound event as the JSON text sent to clients.
pub fn encode_server_event(event: &ServerEvent) -> Result<String, serde_json::Error> {
    use dto::MessageType;

    match event {
        ServerEvent::Init {
            players,
            chat_history,
        } => serde_json::to_string(&dto::InitMessage {
            r#type: MessageType::Init,
            players: player_strings(players),
            chat_history: chat_history.iter().cloned().map(Into::into).collect(),
        }),
        ServerEvent::Joined(player) => serde_json::to_string(&dto::JoinMessage {
            r#type: MessageType::Join,
            id: player.as_str().to_string(),
        }),
        ServerEvent::Left(player) => serde_json::to_string(&dto::LeaveMessage {
            r#type: MessageType::Leave,
            id: player.as_ref().map(|p| p.as_str().to_string()),
        }),
        ServerEvent::PlayerCountUpdated(count) => {
            serde_json::to_string(&dto::PlayerCountUpdateMessage {
                r#type: MessageType::PlayerCountUpdate,
                count: *count,
            })
        }
        ServerEvent::GameStarted(start) => serde_json::to_string(&dto::StartMessage {
            r#type: MessageType::Start,
            first_char: start.prompt.to_string(),
            turn_order: player_strings(&start.turn_order),
            remaining_time: start.remaining_time,
            current_turn: start.current_turn.as_ref().map(|p| p.as_str().to_string()),
            phase: start.phase.as_str().to_string(),
            rounds: start.rounds,
            turns: start.turns,
        }),
        ServerEvent::NextTurn(notice) => serde_json::to_string(&dto::NextTurnMessage {
            r#type: MessageType::NextTurn,
            current_turn: notice.current_turn.as_ref().map(|p| p.as_str().to_string()),
            turn_order: player_strings(&notice.turn_order),
            round: notice.round,
            phase: notice.phase.as_str().to_string(),
        }),
        ServerEvent::GameEnded { message } => serde_json::to_string(&dto::GameEndMessage {
            r#type: MessageType::GameEnd,
            message: message.clone(),
        }),
        ServerEvent::ImageShared { image_data } => {
            serde_json::to_string(&dto::ImageSendedMessage {
                r#type: MessageType::ImageSended,
                image_data: image_data.clone(),
            })
        }
        ServerEvent::Relay(raw) => Ok(raw.clone()),
    }
}

fn player_strings(players: &[PlayerId]) -> Vec<String> {
    players.iter().map(|p| p.as_str().to_string()).collect()
}

impl From<ChatEntry> for dto::ChatEntryDto {
    fn from(entry: ChatEntry) -> Self {
        Self {
            id: entry.id,
            text: entry.text,
        }
    }
}

impl From<ChatEntry> for http_dto::ChatEntryDetailDto {
    fn from(entry: ChatEntry) -> Self {
        Self {
            id: entry.id,
            text: entry.text,
        }
    }
}
