use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("invalid match pattern '{pattern}': {source}")]
    Invalid {
        pattern: String,
        source: glob::PatternError,
    },
}

impl PatternError {
    pub fn invalid(pattern: impl Into<String>, source: glob::PatternError) -> Self {
        Self::Invalid {
            pattern: pattern.into(),
            source,
        }
    }
}
