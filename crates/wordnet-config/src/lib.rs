use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;

pub mod dictionary;

fn default_log_filter() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dictionary: DictionaryConfig,
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Build from process environment, falling back to defaults
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_filter = lookup("WORDNET_LOG").unwrap_or_else(default_log_filter);

        Config {
            dictionary: DictionaryConfig::from_lookup(&lookup),
            log_filter,
        }
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;
    use std::path::PathBuf;

    use wordnet_types::DefinitionType;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.log_filter, "info");
        assert_eq!(
            config.dictionary.file_for(DefinitionType::Adverb),
            PathBuf::from("data").join("data.adv")
        );
        assert_eq!(
            config.dictionary.synonyms_path(),
            PathBuf::from("data").join("synonyms.txt")
        );
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("WORDNET_DATA_DIR", "/opt/wordnet"),
            ("WORDNET_NOUN_FILE", "nouns.dat"),
            ("WORDNET_RELATED_FILE", "rel.tsv"),
            ("WORDNET_LOG", "debug"),
        ]
        .into_iter()
        .collect();

        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.log_filter, "debug");
        assert_eq!(
            config.dictionary.file_for(DefinitionType::Noun),
            PathBuf::from("/opt/wordnet/nouns.dat")
        );
        assert_eq!(
            config.dictionary.file_for(DefinitionType::Verb),
            PathBuf::from("/opt/wordnet/data.verb")
        );
        assert_eq!(
            config.dictionary.related_path(),
            PathBuf::from("/opt/wordnet/rel.tsv")
        );
    }

    #[test]
    fn test_json_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"dictionary": {{"data_dir": "/srv/wn"}}}}"#).unwrap();

        let config = Config::from_json_file(file.path()).unwrap();
        assert_eq!(config.dictionary.data_dir, PathBuf::from("/srv/wn"));
        assert_eq!(config.dictionary.verb_file, "data.verb");
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_json_file_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = Config::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_json_file_missing() {
        let err = Config::from_json_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
