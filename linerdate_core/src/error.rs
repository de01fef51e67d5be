use thiserror::Error;

/// Error type for pattern and rule construction.
#[derive(Debug, Error)]
pub enum PatternError {
    /// A regex pattern failed to compile.
    #[error("invalid pattern `{id}`: {source}")]
    Regex {
        id: String,
        #[source]
        source: regex::Error,
    },

    /// An entity label string did not name a known label.
    #[error("unknown entity label: {0}")]
    Label(String),

    /// The phrase isolator was given no cue words to anchor on.
    #[error("cue word list is empty")]
    NoCueWords,
}

impl PatternError {
    /// Wrap a regex compilation failure with the identifier of the pattern
    /// that produced it.
    pub fn regex(id: impl Into<String>, source: regex::Error) -> Self {
        Self::Regex {
            id: id.into(),
            source,
        }
    }
}
