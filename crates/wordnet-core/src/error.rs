/// Result alias for dictionary loading and querying.
pub type Result<T, E = LoadError> = std::result::Result<T, E>;

/// Why a single source line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseFailure {
    #[error("missing field {0}")]
    MissingField(usize),

    #[error("word count is not hexadecimal")]
    InvalidWordCount,

    #[error("missing '|' gloss separator")]
    MissingGloss,

    #[error("missing '=' delimiter")]
    MissingDelimiter,

    #[error("missing values after '='")]
    MissingValues,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Malformed line {line_number} in {file} ({reason}): {line}")]
    MalformedLine {
        file: String,
        line_number: usize,
        line: String,
        reason: ParseFailure,
    },

    #[error("IO error reading {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    pub(crate) fn malformed(file: &str, line_number: usize, line: &str, reason: ParseFailure) -> Self {
        Self::MalformedLine {
            file: file.to_string(),
            line_number,
            line: line.to_string(),
            reason,
        }
    }

    pub(crate) fn io(file: &str, source: std::io::Error) -> Self {
        Self::Io {
            file: file.to_string(),
            source,
        }
    }
}
