use std::collections::BTreeMap;

use serde::Serialize;
use wordnet_types::{DefinitionType, Word, WordSet};

use crate::error::Result;
use crate::index::{DictionaryIndex, SupplementalKind};
use crate::query::QueryEngine;

/// Dictionary query operations
///
/// Every method may trigger a one-time load and therefore returns
/// [`Result`]. Unknown words are not errors.
pub trait WordDictionary: Send + Sync {
    /// All indexed headwords
    fn get_all_words(&self) -> Result<WordSet>;

    /// Case-insensitive headword lookup
    fn lookup(&self, word: &str) -> Result<Option<&Word>>;

    /// Flat set of synonyms, see [`QueryEngine::get_all_synonyms`]
    fn get_all_synonyms(
        &self,
        word: &str,
        include_supplemental: bool,
        types: &[DefinitionType],
    ) -> Result<WordSet>;

    /// Synonyms keyed by part of speech, see [`QueryEngine::get_synonyms`]
    fn get_synonyms(
        &self,
        word: &str,
        include_supplemental: bool,
        types: &[DefinitionType],
    ) -> Result<BTreeMap<DefinitionType, WordSet>>;

    /// Supplemental related words
    fn get_all_related(&self, word: &str, types: &[DefinitionType]) -> Result<WordSet>;

    /// Dictionary metadata
    fn metadata(&self) -> Result<DictionaryMetadata>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DictionaryMetadata {
    pub name: String,
    pub version: String,
    pub word_count: usize,
    pub definition_count: usize,
    pub supplemental_synonym_count: usize,
    pub supplemental_related_count: usize,
}

impl DictionaryMetadata {
    pub fn from_index(index: &DictionaryIndex) -> Self {
        Self {
            name: "WordNet".to_string(),
            version: "3.0".to_string(),
            word_count: index.word_count(),
            definition_count: index.definition_count(),
            supplemental_synonym_count: index.supplemental_count(SupplementalKind::Synonyms),
            supplemental_related_count: index.supplemental_count(SupplementalKind::Related),
        }
    }
}

/// An eagerly built index answers queries without a load step.
impl WordDictionary for DictionaryIndex {
    fn get_all_words(&self) -> Result<WordSet> {
        Ok(QueryEngine::new(self).get_all_words())
    }

    fn lookup(&self, word: &str) -> Result<Option<&Word>> {
        Ok(QueryEngine::new(self).lookup(word))
    }

    fn get_all_synonyms(
        &self,
        word: &str,
        include_supplemental: bool,
        types: &[DefinitionType],
    ) -> Result<WordSet> {
        Ok(QueryEngine::new(self).get_all_synonyms(word, include_supplemental, types))
    }

    fn get_synonyms(
        &self,
        word: &str,
        include_supplemental: bool,
        types: &[DefinitionType],
    ) -> Result<BTreeMap<DefinitionType, WordSet>> {
        Ok(QueryEngine::new(self).get_synonyms(word, include_supplemental, types))
    }

    fn get_all_related(&self, word: &str, types: &[DefinitionType]) -> Result<WordSet> {
        Ok(QueryEngine::new(self).get_all_related(word, types))
    }

    fn metadata(&self) -> Result<DictionaryMetadata> {
        Ok(DictionaryMetadata::from_index(self))
    }
}
