//! `Randomizer` trait の実装
//!
//! - `thread_rng`: `rand` のスレッドローカル乱数を使う本番用実装
//! - `FixedRandomizer`: 並べ替えず、決まった文字を返すテスト用実装

pub mod thread_rng;

pub use thread_rng::{FixedRandomizer, ThreadRngRandomizer};
