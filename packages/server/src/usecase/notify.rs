//! 通知の共通処理
//!
//! 送信失敗はクライアントに返さず、ログに残して処理を続ける。

use crate::domain::{ConnectionId, MessagePusher, ServerEvent};

pub(crate) async fn broadcast(pusher: &dyn MessagePusher, event: &ServerEvent) {
    if let Err(e) = pusher.broadcast(event).await {
        tracing::warn!("Failed to broadcast '{}': {}", event.kind(), e);
    }
}

pub(crate) async fn broadcast_except(
    pusher: &dyn MessagePusher,
    excluded: &ConnectionId,
    event: &ServerEvent,
) {
    if let Err(e) = pusher.broadcast_except(excluded, event).await {
        tracing::warn!("Failed to broadcast '{}': {}", event.kind(), e);
    }
}

pub(crate) async fn push_to(
    pusher: &dyn MessagePusher,
    connection_id: &ConnectionId,
    event: &ServerEvent,
) {
    if let Err(e) = pusher.push_to(connection_id, event).await {
        tracing::warn!(
            "Failed to push '{}' to connection {}: {}",
            event.kind(),
            connection_id,
            e
        );
    }
}
