pub mod types;
pub mod word_set;

pub use types::{Definition, DefinitionType, UnknownDefinitionType, Word};
pub use word_set::WordSet;
