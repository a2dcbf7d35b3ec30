//! Parser for Princeton WordNet `data.*` lines.
//!
//! A data line is a space separated record:
//!
//! ```text
//! synset_offset lex_filenum ss_type w_cnt word lex_id [word lex_id...] p_cnt [ptr...] | gloss
//! ```
//!
//! `w_cnt` is a two digit hexadecimal count. Words use `_` in place of spaces.
//! The gloss section holds the definition followed by `;` separated usage
//! examples.

use wordnet_types::{Definition, DefinitionType};

use crate::error::ParseFailure;

const WORD_COUNT: usize = 3;
const WORD: usize = 4;

/// Lines starting with two spaces are the license header.
pub fn is_header(line: &str) -> bool {
    line.starts_with("  ")
}

/// `_` to space, trimmed and lower-cased
pub fn normalize_word(token: &str) -> String {
    token.replace('_', " ").trim().to_lowercase()
}

/// Parse one non-header data line into its headword and definition.
pub fn parse_line(
    line: &str,
    definition_type: DefinitionType,
) -> Result<(String, Definition), ParseFailure> {
    let tokens: Vec<&str> = line.split(' ').collect();

    let headword = tokens
        .get(WORD)
        .map(|t| normalize_word(t))
        .ok_or(ParseFailure::MissingField(WORD))?;

    let count_token = tokens
        .get(WORD_COUNT)
        .ok_or(ParseFailure::MissingField(WORD_COUNT))?;
    let word_count =
        usize::from_str_radix(count_token, 16).map_err(|_| ParseFailure::InvalidWordCount)?;

    // each word is followed by its lex_id, so synonyms sit on every other token
    let synonyms = (1..word_count)
        .map(|i| {
            let idx = WORD + 2 * i;
            tokens
                .get(idx)
                .map(|t| normalize_word(t))
                .ok_or(ParseFailure::MissingField(idx))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let pipe = line.find('|').ok_or(ParseFailure::MissingGloss)?;
    let definition_line = line[pipe..].trim();
    let body = &definition_line[1..];

    let (gloss, usages) = match body.find(';') {
        None => (body.trim().to_string(), Vec::new()),
        Some(idx) => (body[..idx].trim().to_string(), split_usages(&body[idx + 1..])),
    };

    let mut definition = Definition::new(headword.clone(), definition_type);
    definition.gloss = Some(gloss);
    definition.synonyms = synonyms;
    definition.usages = usages;

    Ok((headword, definition))
}

/// Segments between `;` are usages; the trailing segment only when non-empty.
fn split_usages(rest: &str) -> Vec<String> {
    let mut usages = Vec::new();
    let mut segments = rest.split(';').peekable();

    while let Some(segment) = segments.next() {
        let usage = segment.trim();
        if segments.peek().is_some() || !usage.is_empty() {
            usages.push(usage.to_string());
        }
    }

    usages
}
