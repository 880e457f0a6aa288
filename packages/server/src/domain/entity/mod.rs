//! エンティティ定義

mod chat_history;
mod game_config;
mod player_registry;
mod session;

pub use chat_history::{CHAT_HISTORY_CAPACITY, ChatEntry, ChatHistory};
pub use game_config::GameConfig;
pub use player_registry::PlayerRegistry;
pub use session::{
    DRAWING_TIME_LIMIT_SECS, Departure, GAME_END_MESSAGE, GameStart, Session, TurnAdvance,
    TurnNotice,
};
