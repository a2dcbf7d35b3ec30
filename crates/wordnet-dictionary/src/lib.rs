pub mod loader;
pub mod wordnet;

pub use loader::WordNetLoader;
pub use wordnet::WordNetDictionary;

pub use wordnet_core::{DictionaryIndex, DictionaryMetadata, LoadError, QueryEngine, WordDictionary};
pub use wordnet_types::{Definition, DefinitionType, Word, WordSet};
