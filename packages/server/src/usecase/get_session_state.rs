//! UseCase: セッション状態の取得（デバッグ用）

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{ConnectionInfo, MessagePusher, PlayerId, Session};

/// 接続と、対応しているプレイヤー（観戦者は `None`）
#[derive(Debug, Clone)]
pub struct ConnectionSnapshot {
    pub info: ConnectionInfo,
    pub player_id: Option<PlayerId>,
}

/// ある時点のセッション全体
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub session: Session,
    pub connections: Vec<ConnectionSnapshot>,
}

/// セッション状態取得のユースケース
pub struct GetSessionStateUseCase {
    session: Arc<Mutex<Session>>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl GetSessionStateUseCase {
    pub fn new(session: Arc<Mutex<Session>>, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            session,
            message_pusher,
        }
    }

    pub async fn execute(&self) -> SessionSnapshot {
        let session = self.session.lock().await;
        let connections = self
            .message_pusher
            .connections()
            .await
            .into_iter()
            .map(|info| ConnectionSnapshot {
                player_id: session.player_of(&info.connection_id).cloned(),
                info,
            })
            .collect();

        SessionSnapshot {
            session: session.clone(),
            connections,
        }
    }
}
