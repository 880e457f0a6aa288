//! UseCase: 接続の受け付け
//!
//! 接続をブロードキャスト先として登録するだけで、プレイヤーとの対応付けは `join` まで行わない。
//! join していない接続も全ブロードキャストを受け取る（観戦者）。

use std::sync::Arc;

use oekaki_shared::time::Clock;

use crate::domain::{ConnectionId, MessagePusher, PusherChannel, Timestamp};

/// 接続受け付けのユースケース
pub struct ConnectConnectionUseCase {
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
}

impl ConnectConnectionUseCase {
    pub fn new(message_pusher: Arc<dyn MessagePusher>, clock: Arc<dyn Clock>) -> Self {
        Self {
            message_pusher,
            clock,
        }
    }

    /// 接続を登録し、接続時刻を返す
    pub async fn execute(&self, connection_id: ConnectionId, sender: PusherChannel) -> Timestamp {
        let connected_at = Timestamp::new(self.clock.now_jst_millis());
        self.message_pusher
            .register_connection(connection_id, connected_at, sender)
            .await;
        tracing::info!("Connection {} opened", connection_id);
        connected_at
    }
}
