//! UseCase: メッセージの中継
//!
//! 描画（paint / undo / redo）・回答・未知のメッセージは受信したテキストのまま全員へ、
//! チャットは全員へ中継した上で履歴に記録、画像は送信者以外へ再エンコードして送る。
//! 中身は解釈しない。

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;

use crate::domain::{ChatEntry, ConnectionId, MessagePusher, ServerEvent, Session};

use super::notify;

/// メッセージ中継のユースケース
pub struct RelayMessageUseCase {
    session: Arc<Mutex<Session>>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl RelayMessageUseCase {
    pub fn new(session: Arc<Mutex<Session>>, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            session,
            message_pusher,
        }
    }

    /// 受信したテキストをそのまま全員に送る
    pub async fn relay(&self, raw: &str) {
        // 他のイベントとの送信順を揃えるため、状態は変えなくてもロックを取る
        let _session = self.session.lock().await;
        notify::broadcast(
            self.message_pusher.as_ref(),
            &ServerEvent::Relay(raw.to_string()),
        )
        .await;
    }

    /// チャットを全員に送り、履歴に記録する
    pub async fn relay_chat(&self, entry: ChatEntry, raw: &str) {
        let mut session = self.session.lock().await;
        notify::broadcast(
            self.message_pusher.as_ref(),
            &ServerEvent::Relay(raw.to_string()),
        )
        .await;
        session.record_chat(entry);
    }

    /// 画像を送信者以外の全員に送る
    pub async fn share_image(&self, sender: ConnectionId, image_data: Value) {
        let _session = self.session.lock().await;
        notify::broadcast_except(
            self.message_pusher.as_ref(),
            &sender,
            &ServerEvent::ImageShared { image_data },
        )
        .await;
    }
}
