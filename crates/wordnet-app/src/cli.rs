use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use wordnet_dictionary::DefinitionType;

/// Query the Princeton WordNet dictionary
#[derive(Parser, Debug, Clone)]
#[command(name = "wordnet")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct CliArgs {
    /// JSON config file; environment variables are used when omitted
    #[arg(short, long, env = "WORDNET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding the WordNet and supplemental files
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show every definition of a word
    Lookup(WordArgs),

    /// List synonyms of a word
    Synonyms(SynonymArgs),

    /// List supplemental related words
    Related(RelatedArgs),

    /// List indexed headwords
    Words(WordsArgs),

    /// Show dictionary statistics
    Stats,
}

#[derive(Args, Debug, Clone)]
pub struct WordArgs {
    pub word: String,
}

#[derive(Args, Debug, Clone)]
pub struct SynonymArgs {
    pub word: String,

    /// Merge the supplemental synonym list
    #[arg(short, long)]
    pub supplemental: bool,

    /// Group synonyms by part of speech
    #[arg(short, long)]
    pub grouped: bool,

    /// Required part of speech (n, v, r, a or full name); repeatable
    #[arg(short, long = "pos", value_name = "POS")]
    pub pos: Vec<DefinitionType>,
}

#[derive(Args, Debug, Clone)]
pub struct RelatedArgs {
    pub word: String,

    /// Required part of speech; repeatable
    #[arg(short, long = "pos", value_name = "POS")]
    pub pos: Vec<DefinitionType>,
}

#[derive(Args, Debug, Clone)]
pub struct WordsArgs {
    /// Print at most this many headwords
    #[arg(short, long)]
    pub limit: Option<usize>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}
