mod common;

use std::fs;
use std::sync::Arc;
use std::thread;

use wordnet_dictionary::{DefinitionType, LoadError, WordDictionary, WordNetDictionary, WordNetLoader};

use common::{fixture_dir, scratch_copy};

#[test]
fn test_loads_lazily_on_first_query() {
    let dictionary = WordNetDictionary::from_dir(fixture_dir());
    assert!(!dictionary.is_loaded());

    let show = dictionary.lookup("show").unwrap().unwrap();
    assert_eq!(show.definitions.len(), 7);
    assert!(dictionary.is_loaded());
}

#[test]
fn test_queries_through_trait_object() {
    let dictionary: Box<dyn WordDictionary> = Box::new(WordNetDictionary::from_dir(fixture_dir()));

    let synonyms = dictionary.get_synonyms("Show", false, &[]).unwrap();
    assert_eq!(synonyms.keys().copied().collect::<Vec<_>>(), vec![DefinitionType::Verb]);
    assert_eq!(dictionary.get_all_synonyms("show", true, &[]).unwrap().len(), 9);
    assert_eq!(
        dictionary
            .get_all_related("show", &[DefinitionType::Noun, DefinitionType::Verb])
            .unwrap()
            .len(),
        3
    );
    assert_eq!(dictionary.get_all_words().unwrap().len(), 10);
    assert!(dictionary.lookup("xxxx").unwrap().is_none());
}

#[test]
fn test_repeated_queries_reuse_index() {
    let dictionary = WordNetDictionary::from_dir(fixture_dir());

    let first = dictionary.ensure_loaded().unwrap();
    let second = dictionary.ensure_loaded().unwrap();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_concurrent_first_queries_share_one_index() {
    let dictionary = Arc::new(WordNetDictionary::from_dir(fixture_dir()));

    let addresses: Vec<usize> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let dictionary = Arc::clone(&dictionary);
                s.spawn(move || {
                    let word = dictionary.lookup("show").unwrap().unwrap();
                    assert_eq!(word.definitions.len(), 7);
                    dictionary.ensure_loaded().unwrap() as *const _ as usize
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));

    // every sense loaded exactly once
    let metadata = dictionary.metadata().unwrap();
    assert_eq!(metadata.word_count, 10);
    assert_eq!(metadata.definition_count, 22);
    assert_eq!(dictionary.lookup("show").unwrap().unwrap().definitions.len(), 7);
}

#[test]
fn test_missing_file_is_resource_not_found() {
    let dir = scratch_copy(&["data.adv"]);

    let err = WordNetLoader::load_from_dir(dir.path()).unwrap_err();
    match err {
        LoadError::ResourceNotFound(path) => assert!(path.ends_with("data.adv")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_supplemental_file_is_fatal() {
    let dir = scratch_copy(&["related.txt"]);

    let dictionary = WordNetDictionary::from_dir(dir.path());
    assert!(matches!(
        dictionary.get_all_related("show", &[]),
        Err(LoadError::ResourceNotFound(_))
    ));
    assert!(!dictionary.is_loaded());
}

#[test]
fn test_malformed_line_aborts_load() {
    let dir = scratch_copy(&[]);
    let noun = dir.path().join("data.noun");
    let mut content = fs::read_to_string(&noun).unwrap();
    content.push_str("03000007 10 n zz broken 0 000 | not hex\n");
    fs::write(&noun, content).unwrap();

    let err = WordNetLoader::load_from_dir(dir.path()).unwrap_err();
    match err {
        LoadError::MalformedLine { file, line, .. } => {
            assert!(file.ends_with("data.noun"));
            assert!(line.starts_with("03000007"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_failed_load_retries_from_scratch() {
    let dir = scratch_copy(&["data.noun"]);
    let dictionary = WordNetDictionary::from_dir(dir.path());

    // verb file parses before the missing noun file fails the load
    assert!(dictionary.lookup("show").is_err());
    assert!(!dictionary.is_loaded());

    fs::copy(fixture_dir().join("data.noun"), dir.path().join("data.noun")).unwrap();

    let show = dictionary.lookup("show").unwrap().unwrap();
    // no duplicated verb senses from the aborted attempt
    assert_eq!(show.definitions.len(), 7);
    assert!(dictionary.is_loaded());
}

#[test]
fn test_metadata() {
    let dictionary = WordNetDictionary::from_dir(fixture_dir());
    let metadata = dictionary.metadata().unwrap();

    assert_eq!(metadata.name, "WordNet");
    assert_eq!(metadata.word_count, 10);
    assert_eq!(metadata.definition_count, 22);
}
