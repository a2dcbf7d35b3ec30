use std::collections::{HashMap, HashSet};
use std::io::BufRead;

use wordnet_types::{Definition, DefinitionType, Word};

use crate::error::{LoadError, ParseFailure, Result};
use crate::{parser, supplemental};

/// Lower-cased headword to associated words
pub type SupplementalMap = HashMap<String, HashSet<String>>;

/// Which supplemental map a file feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplementalKind {
    Synonyms,
    Related,
}

/// In-memory WordNet index plus the supplemental associations.
///
/// Read-only once built. Keys are lower-cased headwords.
#[derive(Debug, Clone, Default)]
pub struct DictionaryIndex {
    words: HashMap<String, Word>,
    supplemental_synonyms: SupplementalMap,
    supplemental_related: SupplementalMap,
}

impl DictionaryIndex {
    pub fn builder() -> IndexBuilder {
        IndexBuilder::default()
    }

    /// Exact lookup by an already lower-cased headword
    pub fn word(&self, headword: &str) -> Option<&Word> {
        self.words.get(headword)
    }

    pub fn headwords(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }

    pub fn supplemental_synonyms(&self, headword: &str) -> Option<&HashSet<String>> {
        self.supplemental_synonyms.get(headword)
    }

    pub fn supplemental_related(&self, headword: &str) -> Option<&HashSet<String>> {
        self.supplemental_related.get(headword)
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn definition_count(&self) -> usize {
        self.words.values().map(|w| w.definitions.len()).sum()
    }

    pub fn supplemental_count(&self, kind: SupplementalKind) -> usize {
        match kind {
            SupplementalKind::Synonyms => self.supplemental_synonyms.len(),
            SupplementalKind::Related => self.supplemental_related.len(),
        }
    }
}

/// Accumulates parsed source files into a [`DictionaryIndex`].
#[derive(Debug, Default)]
pub struct IndexBuilder {
    index: DictionaryIndex,
}

impl IndexBuilder {
    /// Append a definition, creating the word on first sight
    pub fn add_definition(&mut self, headword: String, definition: Definition) -> &mut Self {
        self.index
            .words
            .entry(headword)
            .or_insert_with_key(|key| Word::new(key.as_str()))
            .definitions
            .push(definition);
        self
    }

    /// Set a supplemental entry, normalized like a line of a supplemental
    /// file. Replaces any earlier entry for the same headword.
    pub fn add_supplemental<I, S>(
        &mut self,
        kind: SupplementalKind,
        headword: &str,
        values: I,
    ) -> Result<&mut Self, ParseFailure>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (key, values) = supplemental::normalize_entry(headword, values)?;
        self.map_mut(kind).insert(key, values);
        Ok(self)
    }

    /// Read a WordNet data file of one part of speech.
    ///
    /// Returns the number of definitions added. `source` names the input in
    /// errors.
    pub fn read_wordnet<R: BufRead>(
        &mut self,
        reader: R,
        definition_type: DefinitionType,
        source: &str,
    ) -> Result<usize> {
        let mut added = 0;

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| LoadError::io(source, e))?;
            if parser::is_header(&line) {
                continue;
            }

            let (headword, definition) = parser::parse_line(&line, definition_type)
                .map_err(|reason| LoadError::malformed(source, idx + 1, &line, reason))?;
            self.add_definition(headword, definition);
            added += 1;
        }

        tracing::debug!("Read {} {} definitions from {}", added, definition_type, source);
        Ok(added)
    }

    /// Read a supplemental file. Later duplicate keys replace earlier ones.
    pub fn read_supplemental<R: BufRead>(
        &mut self,
        reader: R,
        kind: SupplementalKind,
        source: &str,
    ) -> Result<usize> {
        let mut added = 0;

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| LoadError::io(source, e))?;
            let (key, values) = supplemental::parse_line(&line)
                .map_err(|reason| LoadError::malformed(source, idx + 1, &line, reason))?;
            self.map_mut(kind).insert(key, values);
            added += 1;
        }

        tracing::debug!("Read {} supplemental {:?} entries from {}", added, kind, source);
        Ok(added)
    }

    pub fn build(self) -> DictionaryIndex {
        self.index
    }

    fn map_mut(&mut self, kind: SupplementalKind) -> &mut SupplementalMap {
        match kind {
            SupplementalKind::Synonyms => &mut self.index.supplemental_synonyms,
            SupplementalKind::Related => &mut self.index.supplemental_related,
        }
    }
}
