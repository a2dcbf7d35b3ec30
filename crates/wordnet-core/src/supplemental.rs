//! Parser for supplemental `word=value\tvalue` association files.

use std::collections::HashSet;

use crate::error::ParseFailure;

/// Parse one line into its lower-cased key and the set of trimmed values.
///
/// Values keep their original case. An empty key is kept as `""`.
pub fn parse_line(line: &str) -> Result<(String, HashSet<String>), ParseFailure> {
    let (key, values) = line.split_once('=').ok_or(ParseFailure::MissingDelimiter)?;
    normalize_entry(key, values.split('\t'))
}

/// Trim and lower-case the key, trim the values and drop empty ones.
pub fn normalize_entry<I, S>(key: &str, values: I) -> Result<(String, HashSet<String>), ParseFailure>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let values: HashSet<String> = values
        .into_iter()
        .filter_map(|v| {
            let v = v.as_ref().trim();
            (!v.is_empty()).then(|| v.to_string())
        })
        .collect();

    if values.is_empty() {
        return Err(ParseFailure::MissingValues);
    }

    Ok((key.trim().to_lowercase(), values))
}
