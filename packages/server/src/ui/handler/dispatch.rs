//! Inbound message routing.
//!
//! | type                                   | handling                                   |
//! |----------------------------------------|--------------------------------------------|
//! | `paint`, `undo`, `redo`, `answer`      | relayed verbatim to everyone               |
//! | `join`                                 | JoinGameUseCase                            |
//! | `start`                                | StartGameUseCase                           |
//! | `drawing_completed`, `drawing_time_up` | ProgressTurnUseCase::finish_drawing        |
//! | `turn_end`                             | ProgressTurnUseCase::end_turn              |
//! | `answering_time_up`                    | ProgressTurnUseCase::expire_answering      |
//! | `chat`                                 | relayed verbatim and recorded in history   |
//! | `image_sended`                         | re-encoded to everyone except the sender   |
//! | anything else                          | relayed verbatim to everyone               |

use crate::{
    domain::{ClientEvent, ConnectionId},
    infrastructure::dto::conversion::parse_client_event,
    ui::state::AppState,
    usecase::DrawingEnd,
};

/// Decode one text frame and route it. Malformed frames are logged and dropped.
pub async fn dispatch_text(state: &AppState, connection_id: ConnectionId, text: &str) {
    match parse_client_event(text) {
        Ok(event) => dispatch_event(state, connection_id, event, text).await,
        Err(e) => {
            tracing::warn!(
                "Dropped malformed message from connection {}: {}",
                connection_id,
                e
            );
        }
    }
}

/// Route a decoded event. `raw` is the received frame, used for verbatim relays.
pub async fn dispatch_event(
    state: &AppState,
    connection_id: ConnectionId,
    event: ClientEvent,
    raw: &str,
) {
    match event {
        ClientEvent::Stroke(_) | ClientEvent::Answer => {
            state.relay_message_usecase.relay(raw).await;
        }
        ClientEvent::Join(player_id) => {
            state
                .join_game_usecase
                .execute(connection_id, player_id)
                .await;
        }
        ClientEvent::Start { rounds, turns } => {
            state.start_game_usecase.execute(rounds, turns).await;
        }
        ClientEvent::TurnEnd => {
            tracing::info!("Received turn_end from connection {}", connection_id);
            state.progress_turn_usecase.end_turn().await;
        }
        ClientEvent::DrawingCompleted => {
            tracing::info!("Received drawing_completed from connection {}", connection_id);
            state
                .progress_turn_usecase
                .finish_drawing(connection_id, DrawingEnd::Completed)
                .await;
        }
        ClientEvent::DrawingTimeUp => {
            tracing::info!("Received drawing_time_up from connection {}", connection_id);
            state
                .progress_turn_usecase
                .finish_drawing(connection_id, DrawingEnd::TimeUp)
                .await;
        }
        ClientEvent::AnsweringTimeUp => {
            tracing::info!("Received answering_time_up from connection {}", connection_id);
            state
                .progress_turn_usecase
                .expire_answering(connection_id)
                .await;
        }
        ClientEvent::Chat(entry) => {
            state.relay_message_usecase.relay_chat(entry, raw).await;
        }
        ClientEvent::ImageSended { image_data } => {
            tracing::info!("Received image_sended from connection {}", connection_id);
            state
                .relay_message_usecase
                .share_image(connection_id, image_data)
                .await;
        }
        ClientEvent::Unknown(kind) => {
            tracing::debug!("Relaying unrecognised message type '{}'", kind);
            state.relay_message_usecase.relay(raw).await;
        }
    }
}
