//! UseCase: ゲーム開始（`start`）

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{GameStart, MessagePusher, Randomizer, ServerEvent, Session};

use super::notify;

/// ゲーム開始のユースケース
pub struct StartGameUseCase {
    session: Arc<Mutex<Session>>,
    message_pusher: Arc<dyn MessagePusher>,
    randomizer: Arc<dyn Randomizer>,
}

impl StartGameUseCase {
    pub fn new(
        session: Arc<Mutex<Session>>,
        message_pusher: Arc<dyn MessagePusher>,
        randomizer: Arc<dyn Randomizer>,
    ) -> Self {
        Self {
            session,
            message_pusher,
            randomizer,
        }
    }

    /// ゲームを開始し、全員に `start` と `next_turn` を送る
    ///
    /// 参加人数のチェックは行わない。ゲーム中に呼ばれた場合は最初からやり直しになる。
    pub async fn execute(&self, rounds: u32, turns: u32) -> GameStart {
        let mut session = self.session.lock().await;

        let start = session.start(rounds, turns, self.randomizer.as_ref());
        let turn_order: Vec<&str> = start.turn_order.iter().map(|p| p.as_str()).collect();
        tracing::info!(
            "Game started: rounds={}, turns={}, prompt='{}', turn order={:?}",
            rounds,
            turns,
            start.prompt,
            turn_order
        );

        let pusher = self.message_pusher.as_ref();
        notify::broadcast(pusher, &ServerEvent::GameStarted(start.clone())).await;
        notify::broadcast(pusher, &ServerEvent::NextTurn(session.turn_notice())).await;

        start
    }
}
