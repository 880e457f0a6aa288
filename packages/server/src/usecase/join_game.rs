//! UseCase: プレイヤーの参加（`join`）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinGameUseCase::execute() メソッド
//! - 参加者への init 送信、全員への join / 人数通知
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規プレイヤーの参加
//! - エッジケース：同じ ID での再参加（人数が増えない）

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{ConnectionId, MessagePusher, PlayerId, ServerEvent, Session};

use super::notify;

/// プレイヤー参加のユースケース
pub struct JoinGameUseCase {
    session: Arc<Mutex<Session>>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl JoinGameUseCase {
    pub fn new(session: Arc<Mutex<Session>>, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            session,
            message_pusher,
        }
    }

    /// 参加を実行
    ///
    /// 1. `players` に追加（既にいれば何もしない）し、接続と対応付ける
    /// 2. 参加した接続に `init`（プレイヤー一覧・チャット履歴）を送る
    /// 3. 全員に `join` と `player_count_update` を送る
    ///
    /// # Returns
    ///
    /// 参加後のプレイヤー数
    pub async fn execute(&self, connection_id: ConnectionId, player_id: PlayerId) -> usize {
        let mut session = self.session.lock().await;

        if !session.join(connection_id, player_id.clone()) {
            tracing::debug!("Player '{}' is already in the session", player_id);
        }
        let player_count = session.player_count();
        tracing::info!(
            "Player '{}' joined from connection {} ({} players)",
            player_id,
            connection_id,
            player_count
        );

        let pusher = self.message_pusher.as_ref();
        let init = ServerEvent::Init {
            players: session.players().to_vec(),
            chat_history: session.chat_history().to_vec(),
        };
        notify::push_to(pusher, &connection_id, &init).await;
        notify::broadcast(pusher, &ServerEvent::Joined(player_id)).await;
        notify::broadcast(pusher, &ServerEvent::PlayerCountUpdated(player_count)).await;

        player_count
    }
}
