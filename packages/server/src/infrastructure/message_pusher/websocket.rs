//! WebSocket を使った MessagePusher 実装
//!
//! ## 責務
//!
//! - 開いている接続ごとの `UnboundedSender` を管理
//! - ドメインイベントを JSON にエンコードして送信（push_to, broadcast, broadcast_except）
//!
//! ## 設計ノート
//!
//! WebSocket の生成は UI 層（`src/ui/handler/websocket.rs`）で行われます。
//! この実装は生成された `UnboundedSender` を受け取り、メッセージ送信に使用します。
//! チャンネルへの送信はブロックしないため、セッションのロックを保持したまま呼び出しても
//! 接続ごとの送信順序が保たれます。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    domain::{
        ConnectionId, ConnectionInfo, MessagePushError, MessagePusher, PusherChannel,
        ServerEvent, Timestamp,
    },
    infrastructure::dto::conversion::encode_server_event,
};

/// 接続 1 本分の送信先
struct ConnectionEntry {
    sender: PusherChannel,
    connected_at: Timestamp,
}

/// WebSocket を使った MessagePusher 実装
///
/// ## 使用例
///
/// ```ignore
/// let pusher = WebSocketMessagePusher::new();
/// pusher.register_connection(connection_id, connected_at, tx).await;
/// pusher.broadcast(&ServerEvent::PlayerCountUpdated(1)).await?;
/// ```
#[derive(Default)]
pub struct WebSocketMessagePusher {
    /// Key: ConnectionId / Value: 送信チャンネルと接続時刻
    connections: Arc<Mutex<HashMap<ConnectionId, ConnectionEntry>>>,
}

impl WebSocketMessagePusher {
    pub fn new() -> Self {
        Self::default()
    }

    /// 条件に合う全接続へ送る。失敗した接続は警告を出して読み飛ばす
    async fn send_where(
        &self,
        event: &ServerEvent,
        include: impl Fn(&ConnectionId) -> bool + Send,
    ) -> Result<(), MessagePushError> {
        let content = encode_server_event(event)?;
        let connections = self.connections.lock().await;

        for (connection_id, entry) in connections.iter() {
            if !include(connection_id) {
                continue;
            }
            if entry.sender.is_closed() {
                tracing::debug!(
                    "Connection {} is closing, skipping '{}'",
                    connection_id,
                    event.kind()
                );
                continue;
            }
            if let Err(e) = entry.sender.send(content.clone()) {
                tracing::warn!(
                    "Failed to push '{}' to connection {}: {}",
                    event.kind(),
                    connection_id,
                    e
                );
            }
        }

        tracing::debug!(
            "Broadcasted '{}' ({} open connections)",
            event.kind(),
            connections.len()
        );
        Ok(())
    }
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_connection(
        &self,
        connection_id: ConnectionId,
        connected_at: Timestamp,
        sender: PusherChannel,
    ) {
        let mut connections = self.connections.lock().await;
        connections.insert(
            connection_id,
            ConnectionEntry {
                sender,
                connected_at,
            },
        );
        tracing::debug!("Connection {} registered to MessagePusher", connection_id);
    }

    async fn unregister_connection(&self, connection_id: &ConnectionId) {
        let mut connections = self.connections.lock().await;
        connections.remove(connection_id);
        tracing::debug!("Connection {} unregistered from MessagePusher", connection_id);
    }

    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        event: &ServerEvent,
    ) -> Result<(), MessagePushError> {
        let content = encode_server_event(event)?;
        let connections = self.connections.lock().await;

        let entry = connections
            .get(connection_id)
            .ok_or_else(|| MessagePushError::ConnectionNotFound(connection_id.to_string()))?;
        entry
            .sender
            .send(content)
            .map_err(|e| MessagePushError::PushFailed(e.to_string()))?;

        tracing::debug!("Pushed '{}' to connection {}", event.kind(), connection_id);
        Ok(())
    }

    async fn broadcast(&self, event: &ServerEvent) -> Result<(), MessagePushError> {
        self.send_where(event, |_| true).await
    }

    async fn broadcast_except(
        &self,
        excluded: &ConnectionId,
        event: &ServerEvent,
    ) -> Result<(), MessagePushError> {
        let excluded = *excluded;
        self.send_where(event, move |id| *id != excluded).await
    }

    async fn connections(&self) -> Vec<ConnectionInfo> {
        let connections = self.connections.lock().await;
        let mut infos: Vec<ConnectionInfo> = connections
            .iter()
            .map(|(connection_id, entry)| ConnectionInfo {
                connection_id: *connection_id,
                connected_at: entry.connected_at,
            })
            .collect();
        infos.sort_by_key(|info| info.connected_at);
        infos
    }
}
