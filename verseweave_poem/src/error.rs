// Error kinds for poem generation.
//
// Both variants are data/authoring defects, not transient conditions:
// nothing here is retried, and the caller is expected to fix the corpus or
// the template table rather than handle these at runtime.

use thiserror::Error;

/// Errors surfaced by catalog validation and poem generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoemError {
    /// A template asked for a category that has no words after index
    /// construction and corrections. The fix is a data-contract one: the
    /// corpus plus the synthetic categories must cover every tag used by
    /// every template.
    #[error("no vocabulary for tag '{tag}'")]
    VocabularyGap { tag: String },

    /// A template is structurally invalid: punctuation with no preceding
    /// word to fuse onto, or a shape that does not end a sentence.
    #[error("malformed template at index {index}: {reason}")]
    MalformedTemplate { index: usize, reason: &'static str },
}
