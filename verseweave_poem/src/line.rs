// Line assembly: pack sentence tokens into fixed-width poem lines.
//
// Lines have a target width but sentences have their own length, so the
// assembler greedily consumes the sentence buffer across line boundaries.
// When the buffer runs dry mid-line there are two cases: if the poem has
// met its minimum length (`can_end_poem`), the line stops short — the only
// way a line comes out under its target width — otherwise a fresh sentence
// is built from a random template and packing continues. Ordinary lines
// therefore routinely span sentence boundaries.

use crate::config::PoemConfig;
use crate::error::PoemError;
use crate::sentence::build_sentence;
use crate::templates::TemplateCatalog;
use crate::vocab::VocabularyIndex;
use rand::Rng;
use std::collections::VecDeque;

/// Build one poem line, consuming (and refilling) the sentence buffer.
///
/// The buffer is the in-progress sentence shared across lines; it is
/// consumed front-to-back and left holding whatever the line did not take.
pub fn build_line(
    buffer: &mut VecDeque<String>,
    can_end_poem: bool,
    catalog: &TemplateCatalog,
    vocab: &VocabularyIndex,
    config: &PoemConfig,
    rng: &mut impl Rng,
) -> Result<Vec<String>, PoemError> {
    let width = config.line_width(rng);
    let mut line = Vec::with_capacity(width);
    while line.len() < width {
        match buffer.pop_front() {
            Some(token) => line.push(token),
            None => {
                if can_end_poem {
                    return Ok(line);
                }
                let template = catalog.pick(rng);
                buffer.extend(build_sentence(template, vocab, rng)?);
            }
        }
    }
    Ok(line)
}
