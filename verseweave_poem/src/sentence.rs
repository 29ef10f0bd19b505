// Sentence assembly: fill one template with randomly drawn words.
//
// Walks the template in order. Slots draw a uniform-random word from the
// tag's pool; marks fuse onto the token just produced, so "brightly" + ","
// becomes the single token "brightly,". The first token is capitalized,
// everything else stays in the lowercase form the index stores.

use crate::error::PoemError;
use crate::types::{Piece, Template};
use crate::vocab::VocabularyIndex;
use rand::Rng;

/// Build one sentence from a template.
///
/// Returns the ordered token sequence, punctuation already fused, ready to
/// be joined with single spaces. Fails with `VocabularyGap` when a slot's
/// tag has no words, and with `MalformedTemplate` if punctuation appears
/// before any word (the catalog check makes that unreachable for catalog
/// templates, but the builder guards regardless).
pub fn build_sentence(
    template: Template,
    vocab: &VocabularyIndex,
    rng: &mut impl Rng,
) -> Result<Vec<String>, PoemError> {
    let mut sent: Vec<String> = Vec::with_capacity(template.len());
    for piece in template {
        match piece {
            Piece::Mark(mark) => match sent.last_mut() {
                Some(token) => token.push_str(mark.as_str()),
                None => {
                    return Err(PoemError::MalformedTemplate {
                        index: 0,
                        reason: "punctuation before any word",
                    });
                }
            },
            Piece::Slot(tag) => {
                let word = vocab.pick(tag, rng)?;
                if sent.is_empty() {
                    sent.push(capitalize(word));
                } else {
                    sent.push(word.to_string());
                }
            }
        }
    }
    Ok(sent)
}

/// Capitalize the first character of a word.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => {
            let upper: String = c.to_uppercase().collect();
            format!("{}{}", upper, chars.as_str())
        }
    }
}
