// verseweave — free-verse poem generator CLI entry point.
//
// Builds the vocabulary index from the embedded corpus, composes one poem,
// and prints the title, a blank line, and the poem lines to stdout. Takes
// no flags; the tunables live in `PoemConfig` and the template table.

use rand::SeedableRng;
use rand::rngs::StdRng;
use verseweave_corpus::default_corpus;
use verseweave_poem::{PoemConfig, TemplateCatalog, VocabularyIndex, compose};

fn main() {
    let corpus = default_corpus();
    let vocab = VocabularyIndex::build(&corpus);
    let catalog = match TemplateCatalog::builtin() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("template catalog error: {}", e);
            std::process::exit(1);
        }
    };

    let config = PoemConfig::default();
    let mut rng = StdRng::from_os_rng();

    match compose(&catalog, &vocab, &config, &mut rng) {
        Ok(poem) => print!("{}", poem),
        Err(e) => {
            eprintln!("poem generation failed: {}", e);
            std::process::exit(1);
        }
    }
}
