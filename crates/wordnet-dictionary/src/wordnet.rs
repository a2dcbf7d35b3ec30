use std::collections::BTreeMap;
use std::path::Path;

use once_cell::sync::OnceCell;
use wordnet_config::dictionary::DictionaryConfig;
use wordnet_core::{DictionaryIndex, DictionaryMetadata, QueryEngine, Result, WordDictionary};
use wordnet_types::{DefinitionType, Word, WordSet};

use crate::loader::WordNetLoader;

/// WordNet dictionary that reads its files on first use.
///
/// The index is built at most once. Concurrent first callers block until
/// one of them finishes; a failed build leaves the dictionary unloaded and
/// the next call starts over from empty maps.
pub struct WordNetDictionary {
    config: DictionaryConfig,
    index: OnceCell<DictionaryIndex>,
}

impl WordNetDictionary {
    pub fn new(config: DictionaryConfig) -> Self {
        Self {
            config,
            index: OnceCell::new(),
        }
    }

    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(DictionaryConfig::with_data_dir(dir.as_ref()))
    }

    pub fn config(&self) -> &DictionaryConfig {
        &self.config
    }

    pub fn is_loaded(&self) -> bool {
        self.index.get().is_some()
    }

    /// Build the index if needed and return it
    pub fn ensure_loaded(&self) -> Result<&DictionaryIndex> {
        self.index.get_or_try_init(|| {
            WordNetLoader::load(&self.config).inspect_err(|e| {
                tracing::warn!("Failed to load WordNet dictionary: {}", e);
            })
        })
    }

    fn engine(&self) -> Result<QueryEngine<'_>> {
        self.ensure_loaded().map(QueryEngine::new)
    }
}

impl WordDictionary for WordNetDictionary {
    fn get_all_words(&self) -> Result<WordSet> {
        Ok(self.engine()?.get_all_words())
    }

    fn lookup(&self, word: &str) -> Result<Option<&Word>> {
        Ok(self.engine()?.lookup(word))
    }

    fn get_all_synonyms(
        &self,
        word: &str,
        include_supplemental: bool,
        types: &[DefinitionType],
    ) -> Result<WordSet> {
        Ok(self.engine()?.get_all_synonyms(word, include_supplemental, types))
    }

    fn get_synonyms(
        &self,
        word: &str,
        include_supplemental: bool,
        types: &[DefinitionType],
    ) -> Result<BTreeMap<DefinitionType, WordSet>> {
        Ok(self.engine()?.get_synonyms(word, include_supplemental, types))
    }

    fn get_all_related(&self, word: &str, types: &[DefinitionType]) -> Result<WordSet> {
        Ok(self.engine()?.get_all_related(word, types))
    }

    fn metadata(&self) -> Result<DictionaryMetadata> {
        self.ensure_loaded().map(DictionaryMetadata::from_index)
    }
}
