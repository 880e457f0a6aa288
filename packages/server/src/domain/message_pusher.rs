//! MessagePusher trait 定義（ブロードキャスト先の抽象化）
//!
//! 開いている接続の管理と、接続へのメッセージ送信のインターフェース。
//! 具体的な実装（WebSocket）は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{ConnectionId, MessagePushError, ServerEvent, Timestamp};

/// 接続ごとの送信チャンネル
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// 接続中のコネクション情報（デバッグ表示用）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionInfo {
    pub connection_id: ConnectionId,
    pub connected_at: Timestamp,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// 接続を登録（まだプレイヤーとは対応していない状態）
    async fn register_connection(
        &self,
        connection_id: ConnectionId,
        connected_at: Timestamp,
        sender: PusherChannel,
    );

    /// 接続の登録を解除
    async fn unregister_connection(&self, connection_id: &ConnectionId);

    /// 特定の接続に送信
    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        event: &ServerEvent,
    ) -> Result<(), MessagePushError>;

    /// 開いている全接続に送信
    ///
    /// 個々の接続への送信失敗は読み飛ばし、ループは止めない。
    async fn broadcast(&self, event: &ServerEvent) -> Result<(), MessagePushError>;

    /// 指定した接続以外の全接続に送信
    async fn broadcast_except(
        &self,
        excluded: &ConnectionId,
        event: &ServerEvent,
    ) -> Result<(), MessagePushError>;

    /// 接続中のコネクション一覧
    async fn connections(&self) -> Vec<ConnectionInfo>;
}
