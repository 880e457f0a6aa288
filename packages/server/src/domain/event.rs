//! クライアント ⇔ サーバー間でやり取りするイベント（ドメイン表現）
//!
//! ワイヤー形式（JSON）との変換は Infrastructure 層の DTO が担当します。

use serde_json::Value;

use super::{ChatEntry, GameStart, PlayerId, TurnNotice};

/// 描画操作の種類（中身は解釈せずに中継する）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeKind {
    Paint,
    Undo,
    Redo,
}

/// クライアントから届いたイベント
#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    Join(PlayerId),
    Start { rounds: u32, turns: u32 },
    TurnEnd,
    DrawingCompleted,
    DrawingTimeUp,
    AnsweringTimeUp,
    Chat(ChatEntry),
    Answer,
    ImageSended { image_data: Value },
    Stroke(StrokeKind),
    /// 未知の type（type 名を保持）
    Unknown(String),
}

/// サーバーから送るイベント
#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    /// join した本人への初期状態
    Init {
        players: Vec<PlayerId>,
        chat_history: Vec<ChatEntry>,
    },
    Joined(PlayerId),
    Left(Option<PlayerId>),
    PlayerCountUpdated(usize),
    GameStarted(GameStart),
    NextTurn(TurnNotice),
    GameEnded { message: String },
    ImageShared { image_data: Value },
    /// 受信したテキストをそのまま中継する
    Relay(String),
}

impl ServerEvent {
    /// ログ用の種別名
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Init { .. } => "init",
            Self::Joined(_) => "join",
            Self::Left(_) => "leave",
            Self::PlayerCountUpdated(_) => "player_count_update",
            Self::GameStarted(_) => "start",
            Self::NextTurn(_) => "next_turn",
            Self::GameEnded { .. } => "game_end",
            Self::ImageShared { .. } => "image_sended",
            Self::Relay(_) => "relay",
        }
    }
}
