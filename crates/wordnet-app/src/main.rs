use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordnet_config::Config;
use wordnet_dictionary::WordDictionary;

pub mod cli;
pub mod output;
pub mod state;


use self::cli::{CliArgs, Command};
use self::output::Output;
use self::state::AppState;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();
    let config = load_config(&args)?;
    init_tracing(&config.log_filter);

    let state = AppState::new(config);
    let output = run(&state, &args.command)?;
    print!("{}", output.render(args.format)?);

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::new(),
    };

    if let Some(dir) = &args.data_dir {
        config.dictionary.data_dir = dir.clone();
    }

    Ok(config)
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run<'a>(state: &'a AppState, command: &Command) -> Result<Output<'a>> {
    let dictionary = &state.dictionary;
    dictionary.ensure_loaded().with_context(|| {
        format!(
            "failed to load WordNet data from {}",
            dictionary.config().data_dir.display()
        )
    })?;

    let output = match command {
        Command::Lookup(args) => Output::Word(dictionary.lookup(&args.word)?),
        Command::Synonyms(args) if args.grouped => {
            Output::Grouped(dictionary.get_synonyms(&args.word, args.supplemental, &args.pos)?)
        }
        Command::Synonyms(args) => {
            Output::Words(dictionary.get_all_synonyms(&args.word, args.supplemental, &args.pos)?)
        }
        Command::Related(args) => Output::Words(dictionary.get_all_related(&args.word, &args.pos)?),
        Command::Words(args) => {
            let words = dictionary.get_all_words()?;
            let limit = args.limit.unwrap_or(words.len());
            Output::Words(words.into_iter().take(limit).collect())
        }
        Command::Stats => Output::Stats(dictionary.metadata()?),
    };

    tracing::debug!("Executed {:?}", command);
    Ok(output)
}
