use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use wordnet_config::dictionary::DictionaryConfig;
use wordnet_core::{DictionaryIndex, LoadError, Result, SupplementalKind};
use wordnet_types::DefinitionType;

/// Order the part-of-speech files are read in; decides definition order
/// within a word.
pub const LOAD_ORDER: [DefinitionType; 4] = [
    DefinitionType::Verb,
    DefinitionType::Noun,
    DefinitionType::Adverb,
    DefinitionType::Adjective,
];

pub struct WordNetLoader;

impl WordNetLoader {
    /// Read all six source files into a fresh index
    pub fn load(config: &DictionaryConfig) -> Result<DictionaryIndex> {
        tracing::info!("Loading WordNet dictionary from {}", config.data_dir.display());
        let mut builder = DictionaryIndex::builder();

        for definition_type in LOAD_ORDER {
            let path = config.file_for(definition_type);
            let reader = open(&path)?;
            builder.read_wordnet(reader, definition_type, &path.display().to_string())?;
        }

        for (path, kind) in [
            (config.synonyms_path(), SupplementalKind::Synonyms),
            (config.related_path(), SupplementalKind::Related),
        ] {
            let reader = open(&path)?;
            builder.read_supplemental(reader, kind, &path.display().to_string())?;
        }

        let index = builder.build();
        tracing::info!(
            "Loaded {} words ({} definitions)",
            index.word_count(),
            index.definition_count()
        );
        Ok(index)
    }

    /// Load using default file names under `dir`
    pub fn load_from_dir(dir: &Path) -> Result<DictionaryIndex> {
        Self::load(&DictionaryConfig::with_data_dir(dir))
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path).map(BufReader::new).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::ResourceNotFound(path.display().to_string()),
        _ => LoadError::Io {
            file: path.display().to_string(),
            source: e,
        },
    })
}
