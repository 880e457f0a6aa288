//! Server state shared by all handlers.

use std::sync::Arc;

use oekaki_shared::time::Clock;
use tokio::sync::Mutex;

use crate::{
    domain::{MessagePusher, Randomizer, Session},
    usecase::{
        ConnectConnectionUseCase, DisconnectConnectionUseCase, GetSessionStateUseCase,
        JoinGameUseCase, ProgressTurnUseCase, RelayMessageUseCase, StartGameUseCase,
    },
};

/// Shared application state
pub struct AppState {
    /// ConnectConnectionUseCase（接続受け付け）
    pub connect_connection_usecase: Arc<ConnectConnectionUseCase>,
    /// DisconnectConnectionUseCase（接続切断）
    pub disconnect_connection_usecase: Arc<DisconnectConnectionUseCase>,
    /// JoinGameUseCase（プレイヤー参加）
    pub join_game_usecase: Arc<JoinGameUseCase>,
    /// StartGameUseCase（ゲーム開始）
    pub start_game_usecase: Arc<StartGameUseCase>,
    /// ProgressTurnUseCase（ターン進行）
    pub progress_turn_usecase: Arc<ProgressTurnUseCase>,
    /// RelayMessageUseCase（メッセージ中継）
    pub relay_message_usecase: Arc<RelayMessageUseCase>,
    /// GetSessionStateUseCase（状態取得）
    pub get_session_state_usecase: Arc<GetSessionStateUseCase>,
}

impl AppState {
    /// Wire every use case around one shared session.
    pub fn new(
        session: Arc<Mutex<Session>>,
        message_pusher: Arc<dyn MessagePusher>,
        randomizer: Arc<dyn Randomizer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            connect_connection_usecase: Arc::new(ConnectConnectionUseCase::new(
                message_pusher.clone(),
                clock,
            )),
            disconnect_connection_usecase: Arc::new(DisconnectConnectionUseCase::new(
                session.clone(),
                message_pusher.clone(),
            )),
            join_game_usecase: Arc::new(JoinGameUseCase::new(
                session.clone(),
                message_pusher.clone(),
            )),
            start_game_usecase: Arc::new(StartGameUseCase::new(
                session.clone(),
                message_pusher.clone(),
                randomizer,
            )),
            progress_turn_usecase: Arc::new(ProgressTurnUseCase::new(
                session.clone(),
                message_pusher.clone(),
            )),
            relay_message_usecase: Arc::new(RelayMessageUseCase::new(
                session.clone(),
                message_pusher.clone(),
            )),
            get_session_state_usecase: Arc::new(GetSessionStateUseCase::new(
                session,
                message_pusher,
            )),
        }
    }
}
