//! UseCase: 接続の切断
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectConnectionUseCase::execute() メソッド
//! - 人数通知 → （必要なら）リセット → leave 通知、の順序
//!
//! ### どのような状況を想定しているか
//! - 正常系：参加済みプレイヤーの切断
//! - エッジケース：join していない接続の切断（leave の id なし）
//! - エッジケース：ゲーム中に最後のプレイヤーが切断（リセット）

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{ConnectionId, Departure, MessagePusher, ServerEvent, Session};

use super::notify;

/// 接続切断のユースケース
pub struct DisconnectConnectionUseCase {
    session: Arc<Mutex<Session>>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectConnectionUseCase {
    pub fn new(session: Arc<Mutex<Session>>, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            session,
            message_pusher,
        }
    }

    /// 切断を実行
    pub async fn execute(&self, connection_id: ConnectionId) -> Departure {
        let mut session = self.session.lock().await;
        let pusher = self.message_pusher.as_ref();

        pusher.unregister_connection(&connection_id).await;
        let departure = session.leave(&connection_id);

        match &departure.player {
            Some(player_id) => tracing::info!(
                "Player '{}' disconnected. Remaining players: {}",
                player_id,
                departure.player_count
            ),
            None => tracing::info!(
                "Connection {} without a player disconnected",
                connection_id
            ),
        }

        notify::broadcast(
            pusher,
            &ServerEvent::PlayerCountUpdated(departure.player_count),
        )
        .await;
        if departure.reset {
            tracing::info!("All players left. Session state has been reset");
        }
        notify::broadcast(pusher, &ServerEvent::Left(departure.player.clone())).await;

        departure
    }
}
