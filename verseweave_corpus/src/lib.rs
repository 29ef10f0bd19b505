// Tagged word corpus for verseweave.
//
// A corpus is a flat list of (word, part-of-speech tag) pairs, loaded from
// JSON ("JSON string in, typed struct out"). The poem engine consumes it
// exactly once at startup to build its category index; this crate knows
// nothing about templates, categories, or poems.
//
// Two views are exposed, matching what the engine needs:
// - `tagged_words()`: every (word, tag) pair, in corpus order
// - `words()`: every plain word form, in corpus order (title selection)
//
// The default corpus is embedded at compile time from
// `data/tagged_corpus.json` via `include_str!` (`default_corpus()`), so the
// binary needs no files on disk at runtime.

use serde::{Deserialize, Serialize};

/// One corpus entry: a raw word form and its part-of-speech tag.
///
/// Tags are opaque strings — the corpus does not interpret them. Word forms
/// are stored exactly as they appear in the source data, including case and
/// any internal symbols; normalization is the consumer's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaggedWord {
    /// The word form as it appeared in the source text.
    pub word: String,
    /// Part-of-speech tag assigned by the source tagger.
    pub tag: String,
}

/// The top-level JSON structure for a corpus file.
#[derive(Debug, Deserialize)]
struct CorpusFile {
    entries: Vec<TaggedWord>,
}

/// A loaded tagged corpus.
///
/// Constructed from JSON via `from_json()`. Preserves entry order from the
/// source file; duplicate words are expected (a corpus is running text, not
/// a word list) and deduplication happens downstream.
#[derive(Debug, Clone)]
pub struct TaggedCorpus {
    entries: Vec<TaggedWord>,
}

impl TaggedCorpus {
    /// Parse a corpus from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let file: CorpusFile = serde_json::from_str(json)?;
        Ok(TaggedCorpus {
            entries: file.entries,
        })
    }

    /// All (word, tag) pairs, in corpus order.
    pub fn tagged_words(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|e| (e.word.as_str(), e.tag.as_str()))
    }

    /// All plain word forms, in corpus order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.word.as_str())
    }

    /// Number of entries in the corpus.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the corpus has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Load the default corpus embedded at compile time.
///
/// Uses `include_str!` to embed `data/tagged_corpus.json`. Panics if the
/// embedded JSON is malformed (should never happen in a released build).
pub fn default_corpus() -> TaggedCorpus {
    let json = include_str!("../../data/tagged_corpus.json");
    TaggedCorpus::from_json(json).expect("embedded tagged_corpus.json is malformed")
}
