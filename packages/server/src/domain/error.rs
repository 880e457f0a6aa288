//! ドメイン層のエラー定義

use thiserror::Error;

/// メッセージ送信のエラー
#[derive(Debug, Error)]
pub enum MessagePushError {
    /// 送信先の接続が登録されていない
    #[error("Connection '{0}' not found")]
    ConnectionNotFound(String),

    /// チャンネルへの送信に失敗（接続が閉じている）
    #[error("Failed to push message: {0}")]
    PushFailed(String),

    /// ワイヤー形式へのエンコードに失敗
    #[error("Failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),
}
