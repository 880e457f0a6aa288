//! 接続とプレイヤー ID の双方向対応表
//!
//! 1 つの接続には高々 1 つのプレイヤー ID、1 つのプレイヤー ID には高々 1 つの接続が対応する。
//! 同じプレイヤー ID で別の接続から `join` された場合は、古い接続との対応を外して付け替える。

use std::collections::HashMap;

use crate::domain::{ConnectionId, PlayerId};

#[derive(Debug, Clone, Default)]
pub struct PlayerRegistry {
    by_connection: HashMap<ConnectionId, PlayerId>,
    by_player: HashMap<PlayerId, ConnectionId>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 接続とプレイヤー ID を対応付ける
    ///
    /// # Returns
    ///
    /// 同じプレイヤー ID に別の接続が対応していた場合、その（対応を外された）接続 ID
    pub fn associate(
        &mut self,
        connection_id: ConnectionId,
        player_id: PlayerId,
    ) -> Option<ConnectionId> {
        // この接続が以前に別の ID で join していたら、その逆引きを外す
        if let Some(previous) = self.by_connection.remove(&connection_id) {
            if self.by_player.get(&previous) == Some(&connection_id) {
                self.by_player.remove(&previous);
            }
        }

        let displaced = self
            .by_player
            .insert(player_id.clone(), connection_id)
            .filter(|other| other != &connection_id);
        if let Some(other) = displaced {
            self.by_connection.remove(&other);
        }

        self.by_connection.insert(connection_id, player_id);
        displaced
    }

    /// 接続の対応を外し、対応していたプレイヤー ID を返す
    pub fn release(&mut self, connection_id: &ConnectionId) -> Option<PlayerId> {
        let player_id = self.by_connection.remove(connection_id)?;
        if self.by_player.get(&player_id) == Some(connection_id) {
            self.by_player.remove(&player_id);
        }
        Some(player_id)
    }

    pub fn player_of(&self, connection_id: &ConnectionId) -> Option<&PlayerId> {
        self.by_connection.get(connection_id)
    }

    pub fn connection_of(&self, player_id: &PlayerId) -> Option<&ConnectionId> {
        self.by_player.get(player_id)
    }

    pub fn len(&self) -> usize {
        self.by_connection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_connection.is_empty()
    }

    pub fn clear(&mut self) {
        self.by_connection.clear();
        self.by_player.clear();
    }
}
