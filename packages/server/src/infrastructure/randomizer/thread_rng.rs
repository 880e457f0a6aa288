//! `rand` を使った Randomizer

use rand::{Rng, seq::SliceRandom};

use crate::domain::{PROMPT_CHARACTERS, PlayerId, Randomizer};

/// スレッドローカル乱数で並べ替え・文字選びを行う
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngRandomizer;

impl Randomizer for ThreadRngRandomizer {
    fn shuffle_players(&self, players: &mut [PlayerId]) {
        players.shuffle(&mut rand::rng());
    }

    fn pick_prompt(&self) -> char {
        let characters: Vec<char> = PROMPT_CHARACTERS.chars().collect();
        let index = rand::rng().random_range(0..characters.len());
        characters[index]
    }
}

/// 参加順をそのままターン順にし、常に同じ文字を返す
#[derive(Debug, Clone, Copy)]
pub struct FixedRandomizer {
    prompt: char,
}

impl FixedRandomizer {
    pub fn new(prompt: char) -> Self {
        Self { prompt }
    }
}

impl Default for FixedRandomizer {
    fn default() -> Self {
        Self::new('あ')
    }
}

impl Randomizer for FixedRandomizer {
    fn shuffle_players(&self, _players: &mut [PlayerId]) {}

    fn pick_prompt(&self) -> char {
        self.prompt
    }
}
