use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use wordnet_dictionary::{DefinitionType, DictionaryMetadata, Word, WordSet};

use crate::cli::OutputFormat;

/// Result of one command, rendered as text or JSON
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Output<'a> {
    Word(Option<&'a Word>),
    Words(WordSet),
    Grouped(BTreeMap<DefinitionType, WordSet>),
    Stats(DictionaryMetadata),
}

impl Output<'_> {
    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(self),
            OutputFormat::Human => Ok(self.to_string()),
        }
    }
}

/// Human-readable form
impl fmt::Display for Output<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Word(None) => writeln!(f, "Not found"),
            Output::Word(Some(word)) => write_word(f, word),
            Output::Words(words) => words.iter().try_for_each(|word| writeln!(f, "{word}")),
            Output::Grouped(groups) => groups
                .iter()
                .try_for_each(|(definition_type, words)| writeln!(f, "{definition_type}: {words}")),
            Output::Stats(metadata) => {
                writeln!(f, "{} {}", metadata.name, metadata.version)?;
                writeln!(f, "words:                 {}", metadata.word_count)?;
                writeln!(f, "definitions:           {}", metadata.definition_count)?;
                writeln!(f, "supplemental synonyms: {}", metadata.supplemental_synonym_count)?;
                writeln!(f, "supplemental related:  {}", metadata.supplemental_related_count)
            }
        }
    }
}

fn write_word(f: &mut fmt::Formatter<'_>, word: &Word) -> fmt::Result {
    let types: Vec<&str> = word.types().iter().map(DefinitionType::as_str).collect();
    writeln!(f, "{} ({})", word.word, types.join(", "))?;

    for (i, definition) in word.definitions.iter().enumerate() {
        writeln!(
            f,
            "{:>3}. ({}) {}",
            i + 1,
            definition.definition_type,
            definition.gloss.as_deref().unwrap_or("")
        )?;
        if !definition.synonyms.is_empty() {
            writeln!(f, "     synonyms: {}", definition.synonyms.join(", "))?;
        }
        for usage in &definition.usages {
            writeln!(f, "     e.g. {usage}")?;
        }
    }

    Ok(())
}
