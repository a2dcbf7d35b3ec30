use std::collections::BTreeMap;

use wordnet_types::{DefinitionType, Word, WordSet};

use crate::index::DictionaryIndex;

/// Read-only queries over a built [`DictionaryIndex`].
///
/// Input words are lower-cased before lookup. Unknown words produce empty
/// results.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    index: &'a DictionaryIndex,
}

impl<'a> QueryEngine<'a> {
    pub fn new(index: &'a DictionaryIndex) -> Self {
        Self { index }
    }

    pub fn get_all_words(&self) -> WordSet {
        self.index.headwords().collect()
    }

    pub fn lookup(&self, word: &str) -> Option<&'a Word> {
        self.index.word(&word.to_lowercase())
    }

    /// Every synonym across all senses of `word`, optionally merged with the
    /// supplemental synonyms, then filtered by part of speech.
    pub fn get_all_synonyms(
        &self,
        word: &str,
        include_supplemental: bool,
        types: &[DefinitionType],
    ) -> WordSet {
        let mut synonyms = WordSet::new();

        if let Some(entry) = self.lookup(word) {
            for definition in &entry.definitions {
                synonyms.extend(definition.synonyms.iter().map(String::as_str));
            }
        }

        if include_supplemental
            && let Some(extra) = self.index.supplemental_synonyms(&word.to_lowercase())
        {
            synonyms.extend(extra.iter().map(String::as_str));
        }

        self.filter(synonyms, types)
    }

    /// Synonyms grouped by the part of speech of the sense they came from.
    ///
    /// Supplemental synonyms are filed under the parts of speech of their own
    /// dictionary senses. A non-empty `types` keeps only those keys.
    pub fn get_synonyms(
        &self,
        word: &str,
        include_supplemental: bool,
        types: &[DefinitionType],
    ) -> BTreeMap<DefinitionType, WordSet> {
        let mut synonyms: BTreeMap<DefinitionType, WordSet> = BTreeMap::new();

        if let Some(entry) = self.lookup(word) {
            for definition in entry.definitions.iter().filter(|d| !d.synonyms.is_empty()) {
                synonyms
                    .entry(definition.definition_type)
                    .or_default()
                    .extend(definition.synonyms.iter().map(String::as_str));
            }
        }

        if include_supplemental
            && let Some(extra) = self.index.supplemental_synonyms(&word.to_lowercase())
        {
            for supplemental in extra {
                let Some(found) = self.lookup(supplemental) else {
                    continue;
                };
                for definition in &found.definitions {
                    synonyms
                        .entry(definition.definition_type)
                        .or_default()
                        .insert(supplemental.as_str());
                }
            }
        }

        if !types.is_empty() {
            synonyms.retain(|t, _| types.contains(t));
        }

        synonyms
    }

    /// Supplemental related words, filtered by part of speech.
    pub fn get_all_related(&self, word: &str, types: &[DefinitionType]) -> WordSet {
        match self.index.supplemental_related(&word.to_lowercase()) {
            Some(related) => self.filter(related.iter().map(String::as_str).collect(), types),
            None => WordSet::new(),
        }
    }

    /// Keep only candidates with at least one sense of every requested type.
    ///
    /// An empty `types` passes the set through unchanged.
    pub fn filter(&self, mut candidates: WordSet, types: &[DefinitionType]) -> WordSet {
        if types.is_empty() {
            return candidates;
        }

        candidates.retain(|candidate| {
            self.lookup(candidate)
                .is_some_and(|w| types.iter().all(|t| w.has_type(*t)))
        });
        candidates
    }
}
