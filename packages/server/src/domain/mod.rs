//! Domain layer: session state machine, value objects and collaborator interfaces.

pub mod entity;
pub mod error;
pub mod event;
pub mod message_pusher;
pub mod randomizer;
pub mod value_object;

pub use entity::{
    CHAT_HISTORY_CAPACITY, ChatEntry, ChatHistory, DRAWING_TIME_LIMIT_SECS, Departure,
    GAME_END_MESSAGE, GameConfig, GameStart, PlayerRegistry, Session, TurnAdvance, TurnNotice,
};
pub use error::MessagePushError;
pub use event::{ClientEvent, ServerEvent, StrokeKind};
#[cfg(test)]
pub use message_pusher::MockMessagePusher;
pub use message_pusher::{ConnectionInfo, MessagePusher, PusherChannel};
pub use randomizer::{PROMPT_CHARACTERS, Randomizer};
pub use value_object::{ConnectionId, Phase, PlayerId, Timestamp};
