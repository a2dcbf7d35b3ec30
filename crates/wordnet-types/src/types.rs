use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Part of speech of a single sense.
///
/// Declaration order is the canonical rank used when ordering definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefinitionType {
    Noun,
    Verb,
    Adverb,
    Adjective,
}

impl DefinitionType {
    pub const ALL: [DefinitionType; 4] = [
        DefinitionType::Noun,
        DefinitionType::Verb,
        DefinitionType::Adverb,
        DefinitionType::Adjective,
    ];

    /// WordNet synset type code
    pub fn code(&self) -> &'static str {
        match self {
            DefinitionType::Noun => "n",
            DefinitionType::Verb => "v",
            DefinitionType::Adverb => "r",
            DefinitionType::Adjective => "a",
        }
    }

    /// Reverse lookup of [`DefinitionType::code`]. Unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DefinitionType::Noun => "noun",
            DefinitionType::Verb => "verb",
            DefinitionType::Adverb => "adverb",
            DefinitionType::Adjective => "adjective",
        }
    }

    /// Name of the Princeton data file holding this part of speech
    pub fn file_name(&self) -> &'static str {
        match self {
            DefinitionType::Noun => "data.noun",
            DefinitionType::Verb => "data.verb",
            DefinitionType::Adverb => "data.adv",
            DefinitionType::Adjective => "data.adj",
        }
    }
}

impl fmt::Display for DefinitionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown part of speech: {0}")]
pub struct UnknownDefinitionType(pub String);

impl FromStr for DefinitionType {
    type Err = UnknownDefinitionType;

    /// Accepts either the single-letter code or the full name, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Self::from_code(&lowered)
            .or_else(|| Self::ALL.into_iter().find(|t| t.as_str() == lowered))
            .ok_or_else(|| UnknownDefinitionType(s.to_string()))
    }
}

/// One sense of a headword.
///
/// Identity is the headword plus its part of speech; the gloss, synonyms and
/// usages are payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Definition {
    pub word: String,
    pub definition_type: DefinitionType,
    pub gloss: Option<String>,
    pub synonyms: Vec<String>,
    pub usages: Vec<String>,
}

impl Definition {
    pub fn new(word: impl Into<String>, definition_type: DefinitionType) -> Self {
        Self {
            word: word.into(),
            definition_type,
            gloss: None,
            synonyms: Vec::new(),
            usages: Vec::new(),
        }
    }
}

impl PartialEq for Definition {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word && self.definition_type == other.definition_type
    }
}

impl Eq for Definition {}

impl Hash for Definition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.word.hash(state);
        self.definition_type.hash(state);
    }
}

impl Ord for Definition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.word
            .to_lowercase()
            .cmp(&other.word.to_lowercase())
            .then(self.definition_type.cmp(&other.definition_type))
            // keeps Ord consistent with Eq for headwords differing only in case
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for Definition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A dictionary headword and its senses in load order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    pub word: String,
    pub definitions: Vec<Definition>,
}

impl Word {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into().to_lowercase(),
            definitions: Vec::new(),
        }
    }

    pub fn definitions_of(&self, definition_type: DefinitionType) -> impl Iterator<Item = &Definition> {
        self.definitions
            .iter()
            .filter(move |d| d.definition_type == definition_type)
    }

    pub fn has_type(&self, definition_type: DefinitionType) -> bool {
        self.definitions_of(definition_type).next().is_some()
    }

    /// Distinct parts of speech in rank order
    pub fn types(&self) -> Vec<DefinitionType> {
        DefinitionType::ALL
            .into_iter()
            .filter(|t| self.has_type(*t))
            .collect()
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.word.hash(state);
    }
}
