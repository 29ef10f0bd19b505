// Title selection: one random corpus word, uppercased.

use crate::vocab::VocabularyIndex;
use rand::Rng;

/// Pick a poem title from the flat corpus vocabulary.
///
/// The draw is uniform over every distinct word form in the corpus,
/// regardless of category, and deliberately unrelated to any generated
/// poem. Returns `None` only when the corpus had no words at all.
pub fn pick_title(vocab: &VocabularyIndex, rng: &mut impl Rng) -> Option<String> {
    let words = vocab.words();
    if words.is_empty() {
        return None;
    }
    let word = &words[rng.random_range(0..words.len())];
    Some(word.to_uppercase())
}
