// Core template types: punctuation marks and template pieces.
//
// A template is an ordered sequence of pieces, each either a category slot
// (an opaque part-of-speech tag, drawn from the vocabulary index at build
// time) or a punctuation mark (fused onto the preceding word). Templates
// are static data — see `templates.rs` for the built-in catalog.

use serde::{Deserialize, Serialize};

/// The closed set of punctuation marks templates may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Punct {
    /// Mid-sentence pause.
    Comma,
    /// Sentence end.
    Period,
    /// Parenthetical break, rendered as a double hyphen.
    Dash,
    /// Emphatic mid-sentence or sentence-final mark.
    Exclaim,
}

impl Punct {
    /// The rendered text of this mark.
    pub fn as_str(self) -> &'static str {
        match self {
            Punct::Comma => ",",
            Punct::Period => ".",
            Punct::Dash => "--",
            Punct::Exclaim => "!",
        }
    }

    /// Whether this mark may close a sentence.
    pub fn is_terminal(self) -> bool {
        matches!(self, Punct::Period | Punct::Exclaim)
    }
}

/// One element of a sentence template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    /// A category slot, filled by a random word carrying this tag.
    Slot(&'static str),
    /// A punctuation mark, fused onto the preceding word.
    Mark(Punct),
}

/// An ordered sequence of pieces defining one sentence shape.
pub type Template = &'static [Piece];
