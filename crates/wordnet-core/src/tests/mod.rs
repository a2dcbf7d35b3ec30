
use wordnet_types::DefinitionType;

use crate::index::{DictionaryIndex, SupplementalKind};

pub(crate) const VERBS: &str = include_str!("../../../wordnet-dictionary/tests/fixtures/data.verb");
pub(crate) const NOUNS: &str = include_str!("../../../wordnet-dictionary/tests/fixtures/data.noun");
pub(crate) const ADVERBS: &str = include_str!("../../../wordnet-dictionary/tests/fixtures/data.adv");
pub(crate) const ADJECTIVES: &str = include_str!("../../../wordnet-dictionary/tests/fixtures/data.adj");
pub(crate) const SYNONYMS: &str = include_str!("../../../wordnet-dictionary/tests/fixtures/synonyms.txt");
pub(crate) const RELATED: &str = include_str!("../../../wordnet-dictionary/tests/fixtures/related.txt");

/// Index over the fixture files, loaded in production order
pub(crate) fn fixture_index() -> DictionaryIndex {
    let mut builder = DictionaryIndex::builder();

    for (data, definition_type) in [
        (VERBS, DefinitionType::Verb),
        (NOUNS, DefinitionType::Noun),
        (ADVERBS, DefinitionType::Adverb),
        (ADJECTIVES, DefinitionType::Adjective),
    ] {
        builder
            .read_wordnet(data.as_bytes(), definition_type, definition_type.file_name())
            .unwrap();
    }

    builder
        .read_supplemental(SYNONYMS.as_bytes(), SupplementalKind::Synonyms, "synonyms.txt")
        .unwrap();
    builder
        .read_supplemental(RELATED.as_bytes(), SupplementalKind::Related, "related.txt")
        .unwrap();

    builder.build()
}
