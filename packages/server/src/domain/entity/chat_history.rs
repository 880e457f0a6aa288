//! チャット履歴（直近 50 件のリングバッファ）

use std::collections::VecDeque;

/// 保持するチャット履歴の最大件数
pub const CHAT_HISTORY_CAPACITY: usize = 50;

/// チャット 1 件
///
/// `id` はクライアントが送ってきた値をそのまま保持する（参加済みプレイヤーとは限らない）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub id: String,
    pub text: String,
}

impl ChatEntry {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChatHistory {
    entries: VecDeque<ChatEntry>,
}

impl ChatHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 履歴に追加し、容量を超えた場合は最も古い 1 件を取り除いて返す
    pub fn push(&mut self, entry: ChatEntry) -> Option<ChatEntry> {
        self.entries.push_back(entry);
        if self.entries.len() > CHAT_HISTORY_CAPACITY {
            self.entries.pop_front()
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatEntry> {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<ChatEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
