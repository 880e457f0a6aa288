//! UseCase: ターン / フェーズの進行
//!
//! `drawing_completed` / `drawing_time_up` / `turn_end` / `answering_time_up` を扱う。
//! 時間切れはクライアントからの申告をそのまま信用する（サーバー側にタイマーはない）。
//! ガード条件を満たさないイベントは何も通知せずに捨てる。
//!
//! ## テスト実装の作業記録
//!
//! ### どのような状況を想定しているか
//! - 正常系：描画 → 回答 → 次のプレイヤー
//! - 異常系：手番でないプレイヤーからの通知、フェーズ違いの通知（無視される）
//! - エッジケース：ターン予算切れで game_end

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{
    ConnectionId, GAME_END_MESSAGE, MessagePusher, ServerEvent, Session, TurnAdvance, TurnNotice,
};

use super::notify;

/// 描画フェーズを終える理由
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingEnd {
    Completed,
    TimeUp,
}

/// ターン進行のユースケース
pub struct ProgressTurnUseCase {
    session: Arc<Mutex<Session>>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl ProgressTurnUseCase {
    pub fn new(session: Arc<Mutex<Session>>, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            session,
            message_pusher,
        }
    }

    /// 描画完了 / 描画時間切れ: drawing → answering
    ///
    /// # Returns
    ///
    /// 遷移した場合はその通知内容、ガードで弾かれた場合は `None`
    pub async fn finish_drawing(
        &self,
        sender: ConnectionId,
        reason: DrawingEnd,
    ) -> Option<TurnNotice> {
        let mut session = self.session.lock().await;

        let Some(notice) = session.finish_drawing(&sender) else {
            tracing::debug!(
                "Ignored {:?} from connection {} (phase: {}, current turn: {:?})",
                reason,
                sender,
                session.phase(),
                session.current_player().map(|p| p.as_str())
            );
            return None;
        };

        tracing::info!(
            "Phase changed: drawing -> answering ({:?}, current turn: {:?})",
            reason,
            notice.current_turn.as_ref().map(|p| p.as_str())
        );
        notify::broadcast(
            self.message_pusher.as_ref(),
            &ServerEvent::NextTurn(notice.clone()),
        )
        .await;

        Some(notice)
    }

    /// 回答終了（`turn_end`）
    pub async fn end_turn(&self) -> Option<TurnAdvance> {
        let mut session = self.session.lock().await;

        let Some(advance) = session.end_turn() else {
            tracing::debug!("Ignored turn_end (phase: {})", session.phase());
            return None;
        };

        self.publish(&advance).await;
        Some(advance)
    }

    /// 回答時間切れ（`answering_time_up`）
    pub async fn expire_answering(&self, sender: ConnectionId) -> Option<TurnAdvance> {
        let mut session = self.session.lock().await;

        let Some(advance) = session.expire_answering(&sender) else {
            tracing::debug!(
                "Ignored answering_time_up from connection {} (phase: {})",
                sender,
                session.phase()
            );
            return None;
        };

        self.publish(&advance).await;
        Some(advance)
    }

    /// ターンを進めた結果を全員に通知する
    ///
    /// 呼び出し側がセッションのロックを保持している間に呼ぶこと。
    async fn publish(&self, advance: &TurnAdvance) {
        let pusher = self.message_pusher.as_ref();
        match advance {
            TurnAdvance::Next(notice) => {
                tracing::info!(
                    "Next turn: {:?} (round {}, phase {})",
                    notice.current_turn.as_ref().map(|p| p.as_str()),
                    notice.round,
                    notice.phase
                );
                notify::broadcast(pusher, &ServerEvent::NextTurn(notice.clone())).await;
            }
            TurnAdvance::GameOver => {
                tracing::info!("Game over. Session state has been reset");
                notify::broadcast(
                    pusher,
                    &ServerEvent::GameEnded {
                        message: GAME_END_MESSAGE.to_string(),
                    },
                )
                .await;
            }
        }
    }
}
