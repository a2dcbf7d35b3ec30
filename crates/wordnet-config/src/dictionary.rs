use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use wordnet_types::DefinitionType;

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_verb_file() -> String {
    DefinitionType::Verb.file_name().to_string()
}

fn default_noun_file() -> String {
    DefinitionType::Noun.file_name().to_string()
}

fn default_adverb_file() -> String {
    DefinitionType::Adverb.file_name().to_string()
}

fn default_adjective_file() -> String {
    DefinitionType::Adjective.file_name().to_string()
}

fn default_synonyms_file() -> String {
    "synonyms.txt".to_string()
}

fn default_related_file() -> String {
    "related.txt".to_string()
}

/// Where the WordNet and supplemental files live.
///
/// File names are resolved relative to `data_dir` unless absolute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_verb_file")]
    pub verb_file: String,
    #[serde(default = "default_noun_file")]
    pub noun_file: String,
    #[serde(default = "default_adverb_file")]
    pub adverb_file: String,
    #[serde(default = "default_adjective_file")]
    pub adjective_file: String,
    /// Supplemental `word=syn\tsyn` file
    #[serde(default = "default_synonyms_file")]
    pub synonyms_file: String,
    /// Supplemental `word=rel\trel` file
    #[serde(default = "default_related_file")]
    pub related_file: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            verb_file: default_verb_file(),
            noun_file: default_noun_file(),
            adverb_file: default_adverb_file(),
            adjective_file: default_adjective_file(),
            synonyms_file: default_synonyms_file(),
            related_file: default_related_file(),
        }
    }
}

impl DictionaryConfig {
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub(crate) fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            data_dir: lookup("WORDNET_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            verb_file: lookup("WORDNET_VERB_FILE").unwrap_or(defaults.verb_file),
            noun_file: lookup("WORDNET_NOUN_FILE").unwrap_or(defaults.noun_file),
            adverb_file: lookup("WORDNET_ADVERB_FILE").unwrap_or(defaults.adverb_file),
            adjective_file: lookup("WORDNET_ADJECTIVE_FILE").unwrap_or(defaults.adjective_file),
            synonyms_file: lookup("WORDNET_SYNONYMS_FILE").unwrap_or(defaults.synonyms_file),
            related_file: lookup("WORDNET_RELATED_FILE").unwrap_or(defaults.related_file),
        }
    }

    pub fn file_for(&self, definition_type: DefinitionType) -> PathBuf {
        let name = match definition_type {
            DefinitionType::Verb => &self.verb_file,
            DefinitionType::Noun => &self.noun_file,
            DefinitionType::Adverb => &self.adverb_file,
            DefinitionType::Adjective => &self.adjective_file,
        };
        self.data_dir.join(name)
    }

    pub fn synonyms_path(&self) -> PathBuf {
        self.data_dir.join(&self.synonyms_file)
    }

    pub fn related_path(&self) -> PathBuf {
        self.data_dir.join(&self.related_file)
    }
}
