pub mod dictionary;
pub mod error;
pub mod index;
pub mod parser;
pub mod query;
pub mod supplemental;

#[cfg(test)]
mod tests;

pub use dictionary::{DictionaryMetadata, WordDictionary};
pub use error::{LoadError, ParseFailure, Result};
pub use index::{DictionaryIndex, IndexBuilder, SupplementalKind};
pub use query::QueryEngine;
