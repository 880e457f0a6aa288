//! UseCase layer.
//!
//! Every use case locks the same `Arc<Mutex<Session>>` for the whole event, including
//! the resulting broadcasts, so events are applied and announced one at a time.

mod connect_connection;
mod disconnect_connection;
mod get_session_state;
mod join_game;
mod notify;
mod progress_turn;
mod relay_message;
mod start_game;

pub use connect_connection::ConnectConnectionUseCase;
pub use disconnect_connection::DisconnectConnectionUseCase;
pub use get_session_state::{ConnectionSnapshot, GetSessionStateUseCase, SessionSnapshot};
pub use join_game::JoinGameUseCase;
pub use progress_turn::{DrawingEnd, ProgressTurnUseCase};
pub use relay_message::RelayMessageUseCase;
pub use start_game::StartGameUseCase;

#[cfg(test)]
pub(crate) mod test_support {
    //! UseCase テスト用の共通セットアップ

    use std::sync::Arc;

    use serde_json::Value;
    use tokio::sync::{Mutex, mpsc};

    use crate::{
        domain::{ConnectionId, MessagePusher, PlayerId, Session, Timestamp},
        infrastructure::{message_pusher::WebSocketMessagePusher, randomizer::FixedRandomizer},
    };

    use super::{JoinGameUseCase, StartGameUseCase};

    pub(crate) struct Harness {
        pub session: Arc<Mutex<Session>>,
        pub pusher: Arc<WebSocketMessagePusher>,
    }

    impl Harness {
        pub fn new() -> Self {
            Self {
                session: Arc::new(Mutex::new(Session::new())),
                pusher: Arc::new(WebSocketMessagePusher::new()),
            }
        }

        /// 接続を 1 本開き、その受信側を返す
        pub async fn connect(&self) -> (ConnectionId, mpsc::UnboundedReceiver<String>) {
            let (tx, rx) = mpsc::unbounded_channel();
            let id = ConnectionId::generate();
            self.pusher
                .register_connection(id, Timestamp::new(0), tx)
                .await;
            (id, rx)
        }

        pub async fn join(&self, connection_id: ConnectionId, player_id: &str) {
            JoinGameUseCase::new(self.session.clone(), self.pusher.clone())
                .execute(connection_id, PlayerId::new(player_id))
                .await;
        }

        /// 参加順のままターン順を決めて開始する
        pub async fn start(&self, rounds: u32, turns: u32) {
            StartGameUseCase::new(
                self.session.clone(),
                self.pusher.clone(),
                Arc::new(FixedRandomizer::default()),
            )
            .execute(rounds, turns)
            .await;
        }
    }

    /// 受信済みのメッセージを JSON として全部取り出す
    pub(crate) fn drain(rx: &mut mpsc::UnboundedReceiver<String>) -> Vec<Value> {
        let mut messages = Vec::new();
        while let Ok(text) = rx.try_recv() {
            messages.push(serde_json::from_str(&text).expect("pushed messages are JSON"));
        }
        messages
    }
}
