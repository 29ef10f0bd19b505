// verseweave_poem — template-driven free-verse poem generation.
//
// Words are sampled by part-of-speech category into fixed sentence
// templates, and finished sentences are packed greedily into fixed-width
// poem lines until the poem has met a randomly chosen minimum length and
// the sentence in progress has ended.
//
// Architecture:
// - `types.rs`:     `Punct`, `Piece`, `Template` — template building blocks
// - `vocab.rs`:     `VocabularyIndex` — corpus pass, exclusion set,
//                   corrections table, synthetic closed-class categories
// - `templates.rs`: the built-in catalog + load-time conformance check
// - `sentence.rs`:  template → token sequence (punctuation fusing,
//                   first-word capitalization)
// - `line.rs`:      sentence buffer → fixed-width lines
// - `poem.rs`:      the poem loop, `Poem`, `compose()`
// - `title.rs`:     random uppercase title from the flat corpus vocabulary
// - `config.rs`:    `PoemConfig` — line width and minimum length ranges
// - `error.rs`:     `PoemError` — vocabulary gaps, malformed templates
//
// All randomness flows through `&mut impl Rng` arguments; the library never
// owns an RNG and makes no reproducibility promises. The expensive steps —
// corpus loading and index construction — happen once; a built
// `VocabularyIndex` and `TemplateCatalog` are immutable and can serve any
// number of `compose()` calls.

pub mod config;
pub mod error;
pub mod line;
pub mod poem;
pub mod sentence;
pub mod templates;
pub mod title;
pub mod types;
pub mod vocab;

// Re-export key types at crate root for convenience.
pub use config::PoemConfig;
pub use error::PoemError;
pub use poem::{Poem, build_poem, compose};
pub use templates::{TEMPLATES, TemplateCatalog};
pub use title::pick_title;
pub use types::{Piece, Punct, Template};
pub use vocab::VocabularyIndex;

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use verseweave_corpus::default_corpus;

    #[test]
    fn test_default_corpus_covers_every_template_tag() {
        // The shipped data contract: every slot in every built-in template
        // must have a non-empty pool after corrections, or generation can
        // die mid-poem with a vocabulary gap.
        let vocab = VocabularyIndex::build(&default_corpus());
        let catalog = TemplateCatalog::builtin().unwrap();
        for template in catalog.templates() {
            for piece in *template {
                if let Piece::Slot(tag) = piece {
                    let pool = vocab.pool(tag);
                    assert!(
                        pool.is_some_and(|p| !p.is_empty()),
                        "tag '{}' has no vocabulary in the shipped corpus",
                        tag
                    );
                }
            }
        }
    }

    #[test]
    fn test_default_corpus_denylists_hold() {
        let vocab = VocabularyIndex::build(&default_corpus());
        // The shipped corpus plants every denylisted form; none may survive.
        for w in ["ago", "like", "unlike", "en", "de"] {
            assert!(!vocab.pool("IN").unwrap().iter().any(|x| x == w));
        }
        assert!(!vocab.pool("MD").unwrap().iter().any(|x| x == "ca" || x == "wo"));
        assert!(!vocab.pool("VBZ").unwrap().iter().any(|x| x == "ai"));
        assert!(!vocab.pool("TO").unwrap().iter().any(|x| x == "na"));
    }

    #[test]
    fn test_end_to_end_compose_on_default_corpus() {
        let vocab = VocabularyIndex::build(&default_corpus());
        let catalog = TemplateCatalog::builtin().unwrap();
        let config = PoemConfig::default();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let poem = compose(&catalog, &vocab, &config, &mut rng).unwrap();
            assert!(!poem.title.is_empty());
            assert_eq!(poem.title, poem.title.to_uppercase());
            assert!(poem.lines.len() >= config.poem_lines_min);
            let last = poem.lines.last().unwrap();
            assert!(last.ends_with('.') || last.ends_with('!'));
        }
    }

    #[test]
    fn test_index_reuse_across_builds() {
        // One index, many poems: construction is the one-time cost.
        let vocab = VocabularyIndex::build(&default_corpus());
        let catalog = TemplateCatalog::builtin().unwrap();
        let config = PoemConfig::default();
        let mut rng = StdRng::seed_from_u64(99);
        let first = build_poem(&catalog, &vocab, &config, &mut rng).unwrap();
        let second = build_poem(&catalog, &vocab, &config, &mut rng).unwrap();
        assert!(!first.is_empty());
        assert!(!second.is_empty());
    }
}
