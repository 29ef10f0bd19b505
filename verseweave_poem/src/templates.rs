// The built-in sentence template catalog.
//
// Seven fixed shapes mixing part-of-speech slots with punctuation. Tags are
// Penn-treebank style where the corpus supplies them (NN, VBP, RB, ...) plus
// the synthetic closed classes the vocabulary index injects: ART (singular
// article/demonstrative), ARTP (plural demonstrative), FB (the full
// for/and/nor/but/or/yet/so conjunction set), PSP (possessive pronoun).
//
// `TemplateCatalog::new` runs the conformance check once at construction:
// a template may not open with punctuation (nothing to fuse onto) and must
// close with a terminal mark. Authoring mistakes surface here rather than
// in the middle of a poem build.

use crate::error::PoemError;
use crate::types::Piece::{Mark, Slot};
use crate::types::{Punct, Template};
use rand::Rng;

/// The built-in sentence shapes.
pub const TEMPLATES: &[Template] = &[
    // "Under those stars shine brightly, old stars shine and shine higher."
    &[
        Slot("IN"),
        Slot("ARTP"),
        Slot("NNS"),
        Slot("VBP"),
        Slot("RB"),
        Mark(Punct::Comma),
        Slot("JJ"),
        Slot("NNS"),
        Slot("VBP"),
        Slot("FB"),
        Slot("VBP"),
        Slot("RBR"),
        Mark(Punct::Period),
    ],
    // "The night, who softly fell, waits under a moon of shadows."
    &[
        Slot("ART"),
        Slot("NN"),
        Mark(Punct::Comma),
        Slot("WP"),
        Slot("RB"),
        Slot("VBD"),
        Mark(Punct::Comma),
        Slot("VBZ"),
        Slot("IN"),
        Slot("ART"),
        Slot("NN"),
        Slot("IN"),
        Slot("NNS"),
        Mark(Punct::Period),
    ],
    // "Oh, luna! my heart must drift to the quiet sea."
    &[
        Slot("UH"),
        Mark(Punct::Comma),
        Slot("FW"),
        Mark(Punct::Exclaim),
        Slot("PSP"),
        Slot("NN"),
        Slot("MD"),
        Slot("VB"),
        Slot("TO"),
        Slot("ART"),
        Slot("JJ"),
        Slot("NN"),
        Mark(Punct::Period),
    ],
    // "To wander the road, all those rivers -- cold against my fire -- rise slowly."
    &[
        Slot("TO"),
        Slot("VB"),
        Slot("ART"),
        Slot("NN"),
        Mark(Punct::Comma),
        Slot("PDT"),
        Slot("ARTP"),
        Slot("NNS"),
        Mark(Punct::Dash),
        Slot("JJ"),
        Slot("IN"),
        Slot("PSP"),
        Slot("NN"),
        Mark(Punct::Dash),
        Slot("VBP"),
        Slot("RB"),
        Mark(Punct::Period),
    ],
    // "Burning falls gently."
    &[Slot("VBG"), Slot("VBZ"), Slot("RB"), Mark(Punct::Period)],
    // "Stars are those oldest dreams."
    &[
        Slot("NNS"),
        Slot("VBP"),
        Slot("ARTP"),
        Slot("JJS"),
        Slot("NNS"),
        Mark(Punct::Period),
    ],
    // "Listen there."
    &[Slot("VB"), Slot("EX"), Mark(Punct::Period)],
];

/// A validated, read-only collection of sentence templates.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: &'static [Template],
}

impl TemplateCatalog {
    /// Wrap the built-in `TEMPLATES` table.
    pub fn builtin() -> Result<Self, PoemError> {
        Self::new(TEMPLATES)
    }

    /// Wrap an arbitrary template table, running the conformance check.
    pub fn new(templates: &'static [Template]) -> Result<Self, PoemError> {
        for (index, template) in templates.iter().enumerate() {
            match template.first() {
                None => {
                    return Err(PoemError::MalformedTemplate {
                        index,
                        reason: "template is empty",
                    });
                }
                Some(Mark(_)) => {
                    return Err(PoemError::MalformedTemplate {
                        index,
                        reason: "starts with punctuation",
                    });
                }
                Some(Slot(_)) => {}
            }
            match template.last() {
                Some(Mark(p)) if p.is_terminal() => {}
                _ => {
                    return Err(PoemError::MalformedTemplate {
                        index,
                        reason: "does not end with a sentence-final mark",
                    });
                }
            }
        }
        Ok(TemplateCatalog { templates })
    }

    /// Select one template uniformly at random.
    pub fn pick(&self, rng: &mut impl Rng) -> Template {
        self.templates[rng.random_range(0..self.templates.len())]
    }

    /// All templates, in catalog order.
    pub fn templates(&self) -> &[Template] {
        self.templates
    }

    /// Number of templates in the catalog.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the catalog holds no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_builtin_catalog_validates() {
        let catalog = TemplateCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 7);
    }

    #[test]
    fn test_first_template_shape() {
        // The end-to-end vocabulary scenario depends on this exact shape
        // staying first in the table.
        let first = TEMPLATES[0];
        assert_eq!(first[0], Slot("IN"));
        assert_eq!(first[5], Mark(Punct::Comma));
        assert_eq!(first[12], Mark(Punct::Period));
        assert_eq!(first.len(), 13);
    }

    #[test]
    fn test_punctuation_first_rejected() {
        static BAD: &[Template] = &[&[Mark(Punct::Comma), Slot("NN"), Mark(Punct::Period)]];
        assert_eq!(
            TemplateCatalog::new(BAD).unwrap_err(),
            PoemError::MalformedTemplate {
                index: 0,
                reason: "starts with punctuation",
            }
        );
    }

    #[test]
    fn test_non_terminal_ending_rejected() {
        static BAD: &[Template] = &[
            &[Slot("VB"), Slot("EX"), Mark(Punct::Period)],
            &[Slot("NN"), Mark(Punct::Comma)],
        ];
        assert_eq!(
            TemplateCatalog::new(BAD).unwrap_err(),
            PoemError::MalformedTemplate {
                index: 1,
                reason: "does not end with a sentence-final mark",
            }
        );
    }

    #[test]
    fn test_missing_final_mark_rejected() {
        static BAD: &[Template] = &[&[Slot("NN"), Slot("VBZ")]];
        assert!(TemplateCatalog::new(BAD).is_err());
    }

    #[test]
    fn test_empty_template_rejected() {
        static BAD: &[Template] = &[&[]];
        assert_eq!(
            TemplateCatalog::new(BAD).unwrap_err(),
            PoemError::MalformedTemplate {
                index: 0,
                reason: "template is empty",
            }
        );
    }

    #[test]
    fn test_exclamation_ending_accepted() {
        static OK: &[Template] = &[&[Slot("UH"), Mark(Punct::Exclaim)]];
        assert!(TemplateCatalog::new(OK).is_ok());
    }

    #[test]
    fn test_pick_covers_catalog() {
        let catalog = TemplateCatalog::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = vec![false; catalog.len()];
        for _ in 0..500 {
            let t = catalog.pick(&mut rng);
            let idx = catalog
                .templates()
                .iter()
                .position(|&c| std::ptr::eq(c, t))
                .unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s), "uniform pick should hit every template");
    }
}
