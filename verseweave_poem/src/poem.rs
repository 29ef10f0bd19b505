// Poem assembly: drive the line assembler until the poem may end.
//
// A poem has a randomly chosen minimum line count L. Lines 1..=L are built
// with the poem forbidden to end, so each is exactly its target width. From
// line L+1 onward the poem may end, which happens the moment the sentence
// buffer drains — so the poem can run past L lines to let the sentence in
// progress finish, but it never stops mid-sentence and never emits an empty
// line.

use crate::config::PoemConfig;
use crate::error::PoemError;
use crate::line::build_line;
use crate::templates::TemplateCatalog;
use crate::title::pick_title;
use crate::vocab::VocabularyIndex;
use rand::Rng;
use std::collections::VecDeque;
use std::fmt;

/// A finished poem: title plus rendered lines.
#[derive(Debug, Clone)]
pub struct Poem {
    /// Uppercase single-word title, unrelated to the poem's content.
    pub title: String,
    /// Rendered lines, in order.
    pub lines: Vec<String>,
}

impl fmt::Display for Poem {
    /// Title, blank separator, then one line per record.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f)?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Build a poem's rendered lines.
///
/// Draws the minimum line count from `config`, then loops: lines up to that
/// minimum are full width, later lines run only while an unfinished sentence
/// remains. Tokens are joined with single spaces; punctuation was fused at
/// sentence-build time and brings no extra spacing.
pub fn build_poem(
    catalog: &TemplateCatalog,
    vocab: &VocabularyIndex,
    config: &PoemConfig,
    rng: &mut impl Rng,
) -> Result<Vec<String>, PoemError> {
    let min_lines = config.min_lines(rng);
    let mut buffer: VecDeque<String> = VecDeque::new();
    let mut poem = Vec::with_capacity(min_lines);
    let mut line_no = 1usize;
    while line_no <= min_lines || !buffer.is_empty() {
        let can_end_poem = line_no > min_lines;
        let line = build_line(&mut buffer, can_end_poem, catalog, vocab, config, rng)?;
        poem.push(line.join(" "));
        line_no += 1;
    }
    Ok(poem)
}

/// Generate a complete poem: title plus lines.
///
/// The title is drawn from the flat corpus vocabulary and has no relation
/// to the generated lines. An empty vocabulary yields an untitled poem only
/// in the degenerate empty-corpus case; the title falls back to the empty
/// string there rather than failing a build that the templates could still
/// satisfy through synthetic categories.
pub fn compose(
    catalog: &TemplateCatalog,
    vocab: &VocabularyIndex,
    config: &PoemConfig,
    rng: &mut impl Rng,
) -> Result<Poem, PoemError> {
    let lines = build_poem(catalog, vocab, config, rng)?;
    let title = pick_title(vocab, rng).unwrap_or_default();
    Ok(Poem { title, lines })
}
