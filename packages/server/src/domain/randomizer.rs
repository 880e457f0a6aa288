//! 乱数の抽象化
//!
//! ターン順のシャッフルとお題の文字選びを差し替えられるようにする。
//! 具体的な実装は Infrastructure 層が提供します。

use super::PlayerId;

/// お題に使う文字（ひらがな 46 文字）
pub const PROMPT_CHARACTERS: &str =
    "あいうえおかきくけこさしすせそたちつてとなにぬねのはひふへほまみむめもやゆよらりるれろわをん";

pub trait Randomizer: Send + Sync {
    /// ターン順を決めるためにプレイヤーを並べ替える
    fn shuffle_players(&self, players: &mut [PlayerId]);

    /// お題の文字を 1 つ選ぶ
    fn pick_prompt(&self) -> char;
}
