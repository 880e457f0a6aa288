//! ゲーム長の設定と経過ターン数

/// ゲーム設定
///
/// `start` 時にクライアントから受け取った値で初期化され、以降は
/// `record_turn` による経過ターン数の加算だけで変化する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    /// 設定ラウンド数（表示用。終了判定には使わない）
    pub rounds: u32,
    /// 1 ラウンドあたりのターン数
    pub turns_per_round: u32,
    /// 経過した総ターン数
    pub total_turns_elapsed: u32,
}

impl GameConfig {
    pub fn new(rounds: u32, turns_per_round: u32) -> Self {
        Self {
            rounds,
            turns_per_round,
            total_turns_elapsed: 0,
        }
    }

    /// 経過ターン数を 1 進め、進めた後の値を返す
    pub fn record_turn(&mut self) -> u32 {
        self.total_turns_elapsed = self.total_turns_elapsed.saturating_add(1);
        self.total_turns_elapsed
    }

    /// 現在のプレイヤー数から見たターン予算（`turns_per_round * player_count`）
    pub fn turn_budget(&self, player_count: usize) -> u64 {
        u64::from(self.turns_per_round) * player_count as u64
    }

    /// ターン予算を使い切ったか
    ///
    /// 予算は開始時のターン順ではなく *現在の* プレイヤー数で計算する。
    /// 途中退出があるとゲームは設定より早く終わる。
    pub fn is_exhausted(&self, player_count: usize) -> bool {
        u64::from(self.total_turns_elapsed) >= self.turn_budget(player_count)
    }

    /// ログ表示用の設定総ターン数（`rounds * turns_per_round`）
    pub fn configured_total(&self) -> u64 {
        u64::from(self.rounds) * u64::from(self.turns_per_round)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config_starts_with_zero_elapsed() {
        // テスト項目: 新しい設定は経過ターン数 0 で始まる
        // given (前提条件):

        // when (操作):
        let config = GameConfig::new(3, 2);

        // then (期待する結果):
        assert_eq!(config.rounds, 3);
        assert_eq!(config.turns_per_round, 2);
        assert_eq!(config.total_turns_elapsed, 0);
        assert_eq!(config.configured_total(), 6);
    }

    #[test]
    fn test_budget_uses_live_player_count() {
        // テスト項目: 予算はその時点のプレイヤー数で決まる
        // given (前提条件):
        let mut config = GameConfig::new(1, 1);
        config.record_turn();

        // when (操作):
        let with_two = config.is_exhausted(2);
        let with_one = config.is_exhausted(1);

        // then (期待する結果):
        assert!(!with_two);
        assert!(with_one);
    }

    #[test]
    fn test_zero_turns_is_exhausted_immediately() {
        // テスト項目: 1 ラウンドのターン数が 0 の場合、最初のターンで予算切れになる
        // given (前提条件):
        let mut config = GameConfig::new(5, 0);

        // when (操作):
        config.record_turn();

        // then (期待する結果):
        assert!(config.is_exhausted(4));
    }
}
