//! Shuffle and Select
//!
//! The full theme list is shuffled with Fisher-Yates, then a contiguous run
//! is cut from it: the front for `Easy`/`Medium`, the back for `Hard`.

use crate::Difficulty;
use rand::Rng;

/// Smallest number of words a player can ask for.
pub const MIN_WORD_COUNT: usize = 5;

/// Largest number of words a player can ask for.
pub const MAX_WORD_COUNT: usize = 20;

/// Word count used until the player picks one.
pub const DEFAULT_WORD_COUNT: usize = 10;

/// Clamp a requested count into `[MIN_WORD_COUNT, MAX_WORD_COUNT]`.
///
/// ```
/// use imposter_words::clamp_word_count;
///
/// assert_eq!(clamp_word_count(3), 5);
/// assert_eq!(clamp_word_count(99), 20);
/// assert_eq!(clamp_word_count(-4), 5);
/// ```
pub fn clamp_word_count(count: i64) -> usize {
    count.clamp(MIN_WORD_COUNT as i64, MAX_WORD_COUNT as i64) as usize
}

/// Uniformly random permutation of `items` (Fisher-Yates). The input is left
/// untouched.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Shuffle `words` and cut `count` of them according to `difficulty`.
///
/// `count` is bounded by the list length; an empty list yields an empty
/// result.
pub fn draw<R: Rng + ?Sized>(
    words: &[String],
    difficulty: Difficulty,
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    let shuffled = shuffle(words, rng);
    let take = count.min(shuffled.len());

    match difficulty {
        // Easy and Medium intentionally share the prefix
        Difficulty::Easy | Difficulty::Medium => shuffled[..take].to_vec(),
        Difficulty::Hard => shuffled[shuffled.len() - take..].to_vec(),
    }
}
