use wordnet_config::Config;
use wordnet_dictionary::WordNetDictionary;

pub struct AppState {
    pub config: Config,
    pub dictionary: WordNetDictionary,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let dictionary = WordNetDictionary::new(config.dictionary.clone());

        Self { config, dictionary }
    }
}
