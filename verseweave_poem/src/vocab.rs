// Category-indexed vocabulary built from a tagged corpus.
//
// One pass over the corpus groups lowercase word forms by tag, discarding
// raw forms that carry tagger artifacts (symbols from `EXCLUDED_SYMBOLS`).
// A fixed corrections table then runs in order: per-tag denylists remove
// known-bad fragments the source tagger produces, and synthetic closed-class
// categories (articles, the extended conjunction set, possessive pronouns)
// are unioned in because the corpus does not cover them reliably.
//
// After corrections each pool is frozen into a sorted `Vec`, so a uniform
// draw is a single index and iteration order is stable. The index is
// immutable from then on and can be shared across any number of poem builds.
//
// The flat `all_words` list (title selection) is a separate view of the
// corpus: deduplicated and lowercased but NOT symbol-filtered — the
// exclusion set applies to category pools only.

use crate::error::PoemError;
use rand::Rng;
use rustc_hash::{FxHashMap, FxHashSet};
use verseweave_corpus::TaggedCorpus;

/// Characters that mark corpus-internal symbols and abbreviation artifacts.
/// A raw word form containing any of these never enters a category pool.
const EXCLUDED_SYMBOLS: &[char] = &['@', ':', '_', '.', '$', ',', '#'];

/// One post-pass correction operation.
#[derive(Debug, Clone, Copy)]
enum Fix {
    /// Remove each listed form from the tag's pool, if present.
    Remove(&'static [&'static str]),
    /// Union the listed forms into the tag's pool, creating it if absent.
    Inject(&'static [&'static str]),
}

/// The fixed corrections table, applied in order after the corpus pass.
///
/// Denylists target tagger output that reads badly in generated text:
/// stray fragments misclassified as determiners, modal contractions lacking
/// their base form ("ca" from "can't", "wo" from "won't", the 'll/'d
/// fragments in both apostrophe spellings), a spurious copula fragment
/// ("ai" from "ain't"), and prepositions that need context to parse.
/// Injections supply the closed-class categories the templates rely on.
const CORRECTIONS: &[(&str, Fix)] = &[
    ("TO", Fix::Remove(&["na"])),
    ("DT", Fix::Remove(&["thei", "de"])),
    (
        "MD",
        Fix::Remove(&["ca", "\u{2019}ll", "'ll", "ll", "wo", "\u{2019}d", "'d"]),
    ),
    ("VBZ", Fix::Remove(&["ai"])),
    ("IN", Fix::Remove(&["en", "de", "ago", "like", "unlike"])),
    ("ART", Fix::Inject(&["the", "a", "an", "this"])),
    ("ARTP", Fix::Inject(&["these", "those"])),
    ("FB", Fix::Inject(&["for", "and", "nor", "but", "or", "yet", "so"])),
    (
        "PSP",
        Fix::Inject(&["my", "mine", "your", "his", "her", "their", "its", "our"]),
    ),
];

/// Immutable mapping from part-of-speech tag to its word pool, plus the
/// flat corpus vocabulary used for title selection.
#[derive(Debug, Clone)]
pub struct VocabularyIndex {
    pools: FxHashMap<String, Vec<String>>,
    all_words: Vec<String>,
}

impl VocabularyIndex {
    /// Build the index from a tagged corpus.
    ///
    /// Words are lowercased and deduplicated per tag; raw forms containing
    /// any excluded symbol are skipped. The corrections table then runs in
    /// its fixed order, and pools are frozen sorted.
    pub fn build(corpus: &TaggedCorpus) -> Self {
        let mut sets: FxHashMap<String, FxHashSet<String>> = FxHashMap::default();
        for (word, tag) in corpus.tagged_words() {
            if word.contains(EXCLUDED_SYMBOLS) {
                continue;
            }
            sets.entry(tag.to_string())
                .or_default()
                .insert(word.to_lowercase());
        }

        apply_corrections(&mut sets);

        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut all_words = Vec::new();
        for word in corpus.words() {
            let lower = word.to_lowercase();
            if seen.insert(lower.clone()) {
                all_words.push(lower);
            }
        }

        Self::freeze(sets, all_words)
    }

    /// Build an index directly from explicit pools.
    ///
    /// For hosts that bring their own vocabulary, and for tests that need
    /// exact control over every draw (singleton pools make the engine
    /// deterministic without touching the RNG).
    pub fn from_pools(pools: &[(&str, &[&str])], words: &[&str]) -> Self {
        let mut sets: FxHashMap<String, FxHashSet<String>> = FxHashMap::default();
        for (tag, entries) in pools {
            let set = sets.entry((*tag).to_string()).or_default();
            for w in *entries {
                set.insert((*w).to_string());
            }
        }
        let all_words = words.iter().map(|w| (*w).to_string()).collect();
        Self::freeze(sets, all_words)
    }

    /// Sort each pool and fix the index shape.
    fn freeze(sets: FxHashMap<String, FxHashSet<String>>, all_words: Vec<String>) -> Self {
        let pools = sets
            .into_iter()
            .map(|(tag, set)| {
                let mut pool: Vec<String> = set.into_iter().collect();
                pool.sort();
                (tag, pool)
            })
            .collect();
        VocabularyIndex { pools, all_words }
    }

    /// The word pool for a tag, if the tag has one.
    pub fn pool(&self, tag: &str) -> Option<&[String]> {
        self.pools.get(tag).map(|p| p.as_slice())
    }

    /// Draw one word uniformly from the tag's pool.
    ///
    /// Fails with `VocabularyGap` if the tag has no pool or an empty one.
    /// This surfaces when a template first asks for the tag, not eagerly at
    /// construction time.
    pub fn pick<'a>(&'a self, tag: &str, rng: &mut impl Rng) -> Result<&'a str, PoemError> {
        match self.pools.get(tag) {
            Some(pool) if !pool.is_empty() => {
                let idx = rng.random_range(0..pool.len());
                Ok(pool[idx].as_str())
            }
            _ => Err(PoemError::VocabularyGap {
                tag: tag.to_string(),
            }),
        }
    }

    /// The flat, deduplicated, lowercase corpus vocabulary.
    pub fn words(&self) -> &[String] {
        &self.all_words
    }
}

fn apply_corrections(sets: &mut FxHashMap<String, FxHashSet<String>>) {
    for (tag, fix) in CORRECTIONS {
        match fix {
            Fix::Remove(words) => {
                if let Some(set) = sets.get_mut(*tag) {
                    for w in *words {
                        set.remove(*w);
                    }
                }
            }
            Fix::Inject(words) => {
                let set = sets.entry((*tag).to_string()).or_default();
                for w in *words {
                    set.insert((*w).to_string());
                }
            }
        }
    }
}
