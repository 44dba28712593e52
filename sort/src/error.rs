use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("container `{selector}` not found")]
    ContainerNotFound { selector: String },
    #[error("invalid selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },
    #[error("item {index} has no count label")]
    MissingCount { index: usize },
    #[error("item {index} has an unparsable count label `{label}`")]
    InvalidCount { index: usize, label: String },
    #[error("unknown sort order `{0}`")]
    UnknownOrder(String),
    #[error("no document available")]
    NoDocument,
    #[error("DOM operation failed: {0}")]
    Dom(String),
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error comes from locating the container rather than
    /// from the items inside it.
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            Error::ContainerNotFound { .. } | Error::InvalidSelector { .. } | Error::NoDocument
        )
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Error::MissingCount { .. } | Error::InvalidCount { .. })
    }
}
