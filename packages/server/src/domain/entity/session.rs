//! Session エンティティ: ゲーム全体で 1 つだけ存在する共有状態
//!
//! メンバー管理・ターン順・フェーズ遷移・ゲーム長の管理を行う純粋な状態機械です。
//! I/O は一切行わず、各操作は呼び出し側（UseCase 層）が通知に使う値を返します。
//!
//! ## 状態遷移
//!
//! ```text
//!  (未開始) --start--> drawing --drawing_completed / drawing_time_up--> answering
//!                         ^                                               |
//!                         +------ turn_end / answering_time_up -----------+
//!                                  (ターン予算切れなら game_end + リセット)
//! ```
//!
//! ガード条件を満たさないイベントは `None` を返すだけで、エラーにはしない。

use crate::domain::{ConnectionId, Phase, PlayerId, Randomizer};

use super::{ChatEntry, ChatHistory, GameConfig, PlayerRegistry};

/// `start` 通知に載せる描画制限時間（秒）。サーバーはタイマーを持たず、目安として送るだけ
pub const DRAWING_TIME_LIMIT_SECS: u32 = 60;

/// ターン予算を使い切ったときの `game_end` メッセージ
pub const GAME_END_MESSAGE: &str = "ゲーム終了！設定されたターン数に達しました。";

/// 誰の手番か、の通知内容（`next_turn`）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnNotice {
    pub current_turn: Option<PlayerId>,
    pub turn_order: Vec<PlayerId>,
    pub round: u32,
    pub phase: Phase,
}

/// ゲーム開始の通知内容（`start`）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStart {
    pub prompt: char,
    pub turn_order: Vec<PlayerId>,
    pub remaining_time: u32,
    pub current_turn: Option<PlayerId>,
    pub phase: Phase,
    pub rounds: u32,
    pub turns: u32,
}

/// ターンを進めた結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnAdvance {
    /// 次の手番（またはフェーズ）へ進んだ
    Next(TurnNotice),
    /// ターン予算を使い切ったのでゲーム終了。セッションはリセット済み
    GameOver,
}

/// 接続切断の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    /// 切断した接続に対応していたプレイヤー ID
    pub player: Option<PlayerId>,
    /// 切断処理後のプレイヤー数
    pub player_count: usize,
    /// 全員いなくなったためセッションをリセットしたか
    pub reset: bool,
}

/// 共有セッション
#[derive(Debug, Clone)]
pub struct Session {
    /// 参加中のプレイヤー（重複なし、参加順）
    players: Vec<PlayerId>,
    /// 開始時に固定されるターン順
    turn_order: Vec<PlayerId>,
    current_turn_index: usize,
    phase: Phase,
    /// 1 始まり
    round: u32,
    config: GameConfig,
    game_started: bool,
    chat_history: ChatHistory,
    registry: PlayerRegistry,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            turn_order: Vec::new(),
            current_turn_index: 0,
            phase: Phase::Drawing,
            round: 1,
            config: GameConfig::default(),
            game_started: false,
            chat_history: ChatHistory::new(),
            registry: PlayerRegistry::new(),
        }
    }

    // ========================================
    // メンバー管理
    // ========================================

    /// プレイヤーを参加させ、接続と対応付ける
    ///
    /// 既に参加済みの ID なら `players` は変わらない。
    ///
    /// # Returns
    ///
    /// 新しくプレイヤーとして追加された場合 `true`
    pub fn join(&mut self, connection_id: ConnectionId, player_id: PlayerId) -> bool {
        let added = if self.players.contains(&player_id) {
            false
        } else {
            self.players.push(player_id.clone());
            true
        };

        if let Some(displaced) = self.registry.associate(connection_id, player_id.clone()) {
            tracing::debug!(
                "Player '{}' moved from connection {} to {}",
                player_id,
                displaced,
                connection_id
            );
        }

        added
    }

    /// 接続を切り離す
    ///
    /// 対応するプレイヤーがいれば `players` から外す。プレイヤーが 0 人になり、
    /// かつターン順が確定済み（ゲームが開始されたことがある）ならセッションをリセットする。
    pub fn leave(&mut self, connection_id: &ConnectionId) -> Departure {
        let player = self.registry.release(connection_id);
        if let Some(player_id) = &player {
            self.players.retain(|p| p != player_id);
        }

        let player_count = self.players.len();
        let reset = player_count == 0 && !self.turn_order.is_empty();
        if reset {
            self.reset();
        }

        Departure {
            player,
            player_count,
            reset,
        }
    }

    // ========================================
    // ターン / フェーズ遷移
    // ========================================

    /// ゲームを開始する
    ///
    /// 参加者数のガードはない（0 人でも開始できる）。`round` は引き継ぐ。
    pub fn start(&mut self, rounds: u32, turns: u32, randomizer: &dyn Randomizer) -> GameStart {
        self.config = GameConfig::new(rounds, turns);

        let prompt = randomizer.pick_prompt();
        let mut turn_order = self.players.clone();
        randomizer.shuffle_players(&mut turn_order);

        self.turn_order = turn_order;
        self.current_turn_index = 0;
        self.phase = Phase::Drawing;
        self.game_started = true;

        GameStart {
            prompt,
            turn_order: self.turn_order.clone(),
            remaining_time: DRAWING_TIME_LIMIT_SECS,
            current_turn: self.current_player().cloned(),
            phase: self.phase,
            rounds: self.config.rounds,
            turns: self.config.turns_per_round,
        }
    }

    /// 描画完了 / 描画時間切れ
    ///
    /// ガード: `drawing` フェーズ中、かつ送信元が手番のプレイヤー。
    pub fn finish_drawing(&mut self, sender: &ConnectionId) -> Option<TurnNotice> {
        if self.phase != Phase::Drawing || !self.is_current_player(sender) {
            return None;
        }

        self.phase = Phase::Answering;
        Some(self.turn_notice())
    }

    /// 回答終了（`turn_end`）
    ///
    /// ガード: `answering` フェーズ中であること（送信元は問わない）。
    pub fn end_turn(&mut self) -> Option<TurnAdvance> {
        if self.phase != Phase::Answering {
            return None;
        }

        Some(self.advance_turn())
    }

    /// 回答時間切れ（`answering_time_up`）
    ///
    /// ガード: `answering` フェーズ中、かつ送信元が手番のプレイヤー。
    pub fn expire_answering(&mut self, sender: &ConnectionId) -> Option<TurnAdvance> {
        if self.phase != Phase::Answering || !self.is_current_player(sender) {
            return None;
        }

        Some(self.advance_turn())
    }

    /// ターンを進める
    ///
    /// `answering` フェーズから呼ばれる前提。それ以外のフェーズで呼ばれた場合は
    /// 警告を出し、手番を動かさずに現在の状態を通知する。
    pub fn advance_turn(&mut self) -> TurnAdvance {
        let elapsed = self.config.record_turn();
        tracing::info!(
            "Total turns elapsed: {} / {}",
            elapsed,
            self.config.configured_total()
        );

        if self.config.is_exhausted(self.players.len()) {
            tracing::info!("Turn budget reached. Ending the game");
            self.reset();
            return TurnAdvance::GameOver;
        }

        if self.phase == Phase::Answering {
            if !self.turn_order.is_empty() {
                self.current_turn_index = (self.current_turn_index + 1) % self.turn_order.len();
                if self.current_turn_index == 0 {
                    self.round += 1;
                    tracing::info!("Round finished. Next round: {}", self.round);
                }
            }
            self.phase = Phase::Drawing;
        } else {
            tracing::warn!(
                "advance_turn called outside the answering phase (phase: {})",
                self.phase
            );
        }

        TurnAdvance::Next(self.turn_notice())
    }

    /// 現在の手番の通知内容
    pub fn turn_notice(&self) -> TurnNotice {
        TurnNotice {
            current_turn: self.current_player().cloned(),
            turn_order: self.turn_order.clone(),
            round: self.round,
            phase: self.phase,
        }
    }

    // ========================================
    // チャット
    // ========================================

    /// チャットを履歴に記録する（直近 50 件まで）
    pub fn record_chat(&mut self, entry: ChatEntry) {
        self.chat_history.push(entry);
    }

    // ========================================
    // リセット
    // ========================================

    /// 初期状態に戻す
    ///
    /// 接続自体（ブロードキャスト先）はセッションの外で管理されているので残る。
    /// 接続とプレイヤーの対応は消えるため、続けて遊ぶには再度 `join` が必要。
    /// `phase` はリセット対象に含めない（次の `start` で `drawing` になる）。
    pub fn reset(&mut self) {
        self.players.clear();
        self.registry.clear();
        self.chat_history.clear();
        self.turn_order.clear();
        self.current_turn_index = 0;
        self.round = 1;
        self.game_started = false;
        self.config = GameConfig::default();
    }

    // ========================================
    // 参照
    // ========================================

    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn turn_order(&self) -> &[PlayerId] {
        &self.turn_order
    }

    pub fn current_turn_index(&self) -> usize {
        self.current_turn_index
    }

    /// 手番のプレイヤー（ターン順が空なら `None`）
    pub fn current_player(&self) -> Option<&PlayerId> {
        self.turn_order.get(self.current_turn_index)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_game_started(&self) -> bool {
        self.game_started
    }

    pub fn chat_history(&self) -> &ChatHistory {
        &self.chat_history
    }

    pub fn player_of(&self, connection_id: &ConnectionId) -> Option<&PlayerId> {
        self.registry.player_of(connection_id)
    }

    /// 送信元の接続が手番のプレイヤーか（未 join の接続は常に `false`）
    fn is_current_player(&self, connection_id: &ConnectionId) -> bool {
        match (self.registry.player_of(connection_id), self.current_player()) {
            (Some(sender), Some(current)) => sender == current,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 参加順をそのままターン順にする Randomizer
    struct InOrder;

    impl Randomizer for InOrder {
        fn shuffle_players(&self, _players: &mut [PlayerId]) {}

        fn pick_prompt(&self) -> char {
            'あ'
        }
    }

    /// 参加順を逆にする Randomizer
    struct Reversed;

    impl Randomizer for Reversed {
        fn shuffle_players(&self, players: &mut [PlayerId]) {
            players.reverse();
        }

        fn pick_prompt(&self) -> char {
            'ん'
        }
    }

    fn id(value: &str) -> PlayerId {
        PlayerId::new(value)
    }

    /// alice, bob を参加させたセッションと各接続を返す
    fn session_with_two_players() -> (Session, ConnectionId, ConnectionId) {
        let mut session = Session::new();
        let a = ConnectionId::generate();
        let b = ConnectionId::generate();
        session.join(a, id("alice"));
        session.join(b, id("bob"));
        (session, a, b)
    }

    #[test]
    fn test_new_session_has_initial_values() {
        // テスト項目: 生成直後のセッションは初期値を持つ
        // given (前提条件):

        // when (操作):
        let session = Session::new();

        // then (期待する結果):
        assert!(session.players().is_empty());
        assert!(session.turn_order().is_empty());
        assert_eq!(session.current_turn_index(), 0);
        assert_eq!(session.phase(), Phase::Drawing);
        assert_eq!(session.round(), 1);
        assert!(!session.is_game_started());
        assert_eq!(session.config(), &GameConfig::default());
        assert!(session.chat_history().is_empty());
    }

    #[test]
    fn test_join_same_id_twice_is_noop() {
        // テスト項目: 同じ ID で 2 回 join してもプレイヤー数は変わらず、ターン順にも重複しない
        // given (前提条件):
        let mut session = Session::new();
        let conn = ConnectionId::generate();

        // when (操作):
        let first = session.join(conn, id("alice"));
        let second = session.join(conn, id("alice"));
        let start = session.start(1, 1, &InOrder);

        // then (期待する結果):
        assert!(first);
        assert!(!second);
        assert_eq!(session.player_count(), 1);
        assert_eq!(start.turn_order, vec![id("alice")]);
    }

    #[test]
    fn test_start_snapshots_players_into_turn_order() {
        // テスト項目: start でプレイヤー全員の並べ替えがターン順になり、手番 0・描画フェーズになる
        // given (前提条件):
        let mut session = Session::new();
        for name in ["alice", "bob", "charlie"] {
            session.join(ConnectionId::generate(), id(name));
        }

        // when (操作):
        let start = session.start(2, 3, &Reversed);

        // then (期待する結果):
        assert_eq!(start.turn_order, vec![id("charlie"), id("bob"), id("alice")]);
        assert_eq!(start.current_turn, Some(id("charlie")));
        assert_eq!(start.prompt, 'ん');
        assert_eq!(start.remaining_time, 60);
        assert_eq!(start.phase, Phase::Drawing);
        assert_eq!((start.rounds, start.turns), (2, 3));
        assert_eq!(session.current_turn_index(), 0);
        assert!(session.is_game_started());
        assert_eq!(session.config().total_turns_elapsed, 0);
    }

    #[test]
    fn test_start_with_no_players() {
        // テスト項目: プレイヤー 0 人でも start でき、手番は存在しない
        // given (前提条件):
        let mut session = Session::new();

        // when (操作):
        let start = session.start(1, 1, &InOrder);

        // then (期待する結果):
        assert!(start.turn_order.is_empty());
        assert_eq!(start.current_turn, None);
        assert!(session.is_game_started());
    }

    #[test]
    fn test_finish_drawing_from_non_current_player_is_ignored() {
        // テスト項目: 手番でないプレイヤーの描画完了ではフェーズが変わらない
        // given (前提条件):
        let (mut session, _a, b) = session_with_two_players();
        session.start(1, 1, &InOrder);

        // when (操作):
        let notice = session.finish_drawing(&b);

        // then (期待する結果):
        assert_eq!(notice, None);
        assert_eq!(session.phase(), Phase::Drawing);
    }

    #[test]
    fn test_finish_drawing_from_unjoined_connection_is_ignored() {
        // テスト項目: join していない接続からの描画完了は無視される
        // given (前提条件):
        let (mut session, _a, _b) = session_with_two_players();
        session.start(1, 1, &InOrder);

        // when (操作):
        let notice = session.finish_drawing(&ConnectionId::generate());

        // then (期待する結果):
        assert_eq!(notice, None);
        assert_eq!(session.phase(), Phase::Drawing);
    }

    #[test]
    fn test_finish_drawing_before_start_is_ignored() {
        // テスト項目: ゲーム開始前の描画完了は無視される
        // given (前提条件):
        let (mut session, a, _b) = session_with_two_players();

        // when (操作):
        let notice = session.finish_drawing(&a);

        // then (期待する結果):
        assert_eq!(notice, None);
    }

    #[test]
    fn test_end_turn_outside_answering_is_ignored() {
        // テスト項目: 描画フェーズ中の turn_end は無視され、経過ターン数も増えない
        // given (前提条件):
        let (mut session, _a, _b) = session_with_two_players();
        session.start(1, 1, &InOrder);

        // when (操作):
        let advance = session.end_turn();

        // then (期待する結果):
        assert_eq!(advance, None);
        assert_eq!(session.config().total_turns_elapsed, 0);
    }

    #[test]
    fn test_expire_answering_requires_current_player() {
        // テスト項目: 回答時間切れは手番のプレイヤーからのみ受け付ける
        // given (前提条件):
        let (mut session, a, b) = session_with_two_players();
        session.start(1, 2, &InOrder);
        session.finish_drawing(&a);

        // when (操作):
        let from_other = session.expire_answering(&b);
        let from_current = session.expire_answering(&a);

        // then (期待する結果):
        assert_eq!(from_other, None);
        assert!(matches!(from_current, Some(TurnAdvance::Next(_))));
        assert_eq!(session.current_player(), Some(&id("bob")));
    }

    #[test]
    fn test_two_player_single_turn_game_scenario() {
        // テスト項目: 2 人・1 ターン設定のゲームが 2 ターン目の終わりで終了しリセットされる
        // given (前提条件):
        let (mut session, a, b) = session_with_two_players();
        session.start(1, 1, &InOrder);
        session.record_chat(ChatEntry::new("alice", "hi"));

        // when (操作): alice の描画完了
        let notice = session.finish_drawing(&a).expect("alice is on turn");

        // then (期待する結果): 回答フェーズ、手番は alice のまま
        assert_eq!(notice.phase, Phase::Answering);
        assert_eq!(notice.current_turn, Some(id("alice")));

        // when (操作): 回答終了
        let advance = session.end_turn();

        // then (期待する結果): 1 >= 1*2 は偽なので bob の描画へ
        assert_eq!(session.config().total_turns_elapsed, 1);
        match advance {
            Some(TurnAdvance::Next(notice)) => {
                assert_eq!(notice.current_turn, Some(id("bob")));
                assert_eq!(notice.phase, Phase::Drawing);
                assert_eq!(notice.round, 1);
            }
            other => panic!("expected next turn, got {other:?}"),
        }

        // when (操作): bob の描画完了と回答終了
        assert!(session.finish_drawing(&b).is_some());
        let advance = session.end_turn();

        // then (期待する結果): 2 >= 1*2 でゲーム終了、全状態リセット
        assert_eq!(advance, Some(TurnAdvance::GameOver));
        assert!(session.players().is_empty());
        assert!(session.turn_order().is_empty());
        assert!(!session.is_game_started());
        assert!(session.chat_history().is_empty());
        assert_eq!(session.player_of(&a), None);
        assert_eq!(session.config(), &GameConfig::default());
    }

    #[test]
    fn test_round_increments_when_turn_order_wraps() {
        // テスト項目: ターン順が一巡するとラウンドが 1 増える
        // given (前提条件):
        let (mut session, a, b) = session_with_two_players();
        session.start(2, 2, &InOrder);

        // when (操作): alice, bob の順に 1 ターンずつ
        session.finish_drawing(&a);
        session.end_turn();
        session.finish_drawing(&b);
        let advance = session.end_turn();

        // then (期待する結果): 2 < 2*2 なので継続、alice の手番でラウンド 2
        match advance {
            Some(TurnAdvance::Next(notice)) => {
                assert_eq!(notice.current_turn, Some(id("alice")));
                assert_eq!(notice.round, 2);
            }
            other => panic!("expected next turn, got {other:?}"),
        }
        assert_eq!(session.current_turn_index(), 0);
    }

    #[test]
    fn test_departure_mid_game_shortens_turn_budget() {
        // テスト項目: 途中退出でプレイヤー数が減るとターン予算も減り、早く終わる
        // given (前提条件):
        let mut session = Session::new();
        let a = ConnectionId::generate();
        let b = ConnectionId::generate();
        let c = ConnectionId::generate();
        session.join(a, id("alice"));
        session.join(b, id("bob"));
        session.join(c, id("charlie"));
        session.start(1, 1, &InOrder);
        session.leave(&c);

        // when (操作): alice のターンを 1 回終える（1 >= 1*2 は偽）、bob のターンを終える
        session.finish_drawing(&a);
        assert!(matches!(session.end_turn(), Some(TurnAdvance::Next(_))));
        session.finish_drawing(&b);
        let advance = session.end_turn();

        // then (期待する結果): 開始時は 3 人だったが 2 ターンで終了
        assert_eq!(advance, Some(TurnAdvance::GameOver));
    }

    #[test]
    fn test_departed_player_slot_is_still_visited() {
        // テスト項目: 退出したプレイヤーの枠もターン順から消えず、手番として回ってくる
        // given (前提条件):
        let mut session = Session::new();
        let a = ConnectionId::generate();
        let b = ConnectionId::generate();
        let c = ConnectionId::generate();
        session.join(a, id("alice"));
        session.join(b, id("bob"));
        session.join(c, id("charlie"));
        session.start(1, 5, &InOrder);
        session.leave(&b);

        // when (操作):
        session.finish_drawing(&a);
        let advance = session.end_turn();

        // then (期待する結果):
        match advance {
            Some(TurnAdvance::Next(notice)) => {
                assert_eq!(notice.current_turn, Some(id("bob")));
                assert_eq!(notice.turn_order.len(), 3);
            }
            other => panic!("expected next turn, got {other:?}"),
        }
    }

    #[test]
    fn test_advance_turn_outside_answering_keeps_turn() {
        // テスト項目: 回答フェーズ以外で advance_turn しても手番は動かない（警告のみ）
        // given (前提条件):
        let (mut session, _a, _b) = session_with_two_players();
        session.start(1, 5, &InOrder);

        // when (操作):
        let advance = session.advance_turn();

        // then (期待する結果):
        match advance {
            TurnAdvance::Next(notice) => {
                assert_eq!(notice.current_turn, Some(id("alice")));
                assert_eq!(notice.phase, Phase::Drawing);
            }
            TurnAdvance::GameOver => panic!("budget should not be exhausted"),
        }
        assert_eq!(session.config().total_turns_elapsed, 1);
    }

    #[test]
    fn test_last_player_leaving_mid_game_resets() {
        // テスト項目: ゲーム中に最後のプレイヤーが抜けるとリセットされ、次の join はまっさらな状態から始まる
        // given (前提条件):
        let mut session = Session::new();
        let a = ConnectionId::generate();
        session.join(a, id("alice"));
        session.start(1, 1, &InOrder);
        session.record_chat(ChatEntry::new("alice", "hello"));

        // when (操作):
        let departure = session.leave(&a);
        let rejoined = session.join(ConnectionId::generate(), id("bob"));

        // then (期待する結果):
        assert_eq!(departure.player, Some(id("alice")));
        assert_eq!(departure.player_count, 0);
        assert!(departure.reset);
        assert!(rejoined);
        assert_eq!(session.players(), &[id("bob")]);
        assert!(session.turn_order().is_empty());
        assert!(!session.is_game_started());
        assert!(session.chat_history().is_empty());
    }

    #[test]
    fn test_last_player_leaving_before_start_keeps_chat() {
        // テスト項目: 開始前に全員抜けてもリセットは行われない
        // given (前提条件):
        let mut session = Session::new();
        let a = ConnectionId::generate();
        session.join(a, id("alice"));
        session.record_chat(ChatEntry::new("alice", "hello"));

        // when (操作):
        let departure = session.leave(&a);

        // then (期待する結果):
        assert!(!departure.reset);
        assert_eq!(session.chat_history().len(), 1);
    }

    #[test]
    fn test_leave_unjoined_connection() {
        // テスト項目: join していない接続の切断ではプレイヤーは減らない
        // given (前提条件):
        let (mut session, _a, _b) = session_with_two_players();

        // when (操作):
        let departure = session.leave(&ConnectionId::generate());

        // then (期待する結果):
        assert_eq!(departure.player, None);
        assert_eq!(departure.player_count, 2);
        assert!(!departure.reset);
    }

    #[test]
    fn test_rejoin_from_new_connection_moves_turn_rights() {
        // テスト項目: 同じ ID で別接続から join し直すと、手番の権限は新しい接続に移る
        // given (前提条件):
        let mut session = Session::new();
        let old_conn = ConnectionId::generate();
        let new_conn = ConnectionId::generate();
        session.join(old_conn, id("alice"));
        session.start(1, 1, &InOrder);

        // when (操作):
        session.join(new_conn, id("alice"));

        // then (期待する結果):
        assert_eq!(session.finish_drawing(&old_conn), None);
        assert!(session.finish_drawing(&new_conn).is_some());
        assert_eq!(session.player_count(), 1);
    }

    #[test]
    fn test_game_over_keeps_answering_phase() {
        // テスト項目: ゲーム終了のリセットでフェーズは戻らず、続く turn_end も再び終了扱いになる
        // given (前提条件):
        let (mut session, a, b) = session_with_two_players();
        session.start(1, 1, &InOrder);
        session.finish_drawing(&a);
        session.end_turn();
        session.finish_drawing(&b);
        assert_eq!(session.end_turn(), Some(TurnAdvance::GameOver));

        // when (操作):
        let phase_after_reset = session.phase();
        let stray = session.end_turn();

        // then (期待する結果): 0 人なので予算は 0、1 >= 0 で再び終了
        assert_eq!(phase_after_reset, Phase::Answering);
        assert_eq!(stray, Some(TurnAdvance::GameOver));
        assert_eq!(session.round(), 1);
    }

    #[test]
    fn test_restart_keeps_round_count() {
        // テスト項目: ゲーム中に start し直してもラウンド数はそのまま引き継がれる
        // given (前提条件):
        let (mut session, a, b) = session_with_two_players();
        session.start(3, 3, &InOrder);
        session.finish_drawing(&a);
        session.end_turn();
        session.finish_drawing(&b);
        session.end_turn();
        assert_eq!(session.round(), 2);

        // when (操作):
        session.start(3, 3, &InOrder);

        // then (期待する結果):
        let notice = session.turn_notice();
        assert_eq!(notice.round, 2);
        assert_eq!(notice.phase, Phase::Drawing);
        assert_eq!(notice.current_turn, Some(id("alice")));
        assert_eq!(session.config().total_turns_elapsed, 0);
    }
}
