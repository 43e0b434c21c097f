use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlogError {
    #[error("No such author: {0}")]
    AuthorNotFound(String),

    #[error("Post already exists: {0}")]
    PostExists(String),

    #[error("No such author: {0}")]
    UnknownAuthor(String),

    #[error("Invalid timestamp '{raw}': {source}")]
    InvalidTimestamp {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Project already initialized at {0}")]
    AlreadyInitialized(String),
}

/// Coarse classification of a [`BlogError`], reported to API clients as
/// `extensions.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An id the contract requires to exist was not found.
    LookupFault,
    /// Mutation input failed a precondition.
    ValidationFault,
    Internal,
}

impl ErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::LookupFault => "LOOKUP_FAULT",
            ErrorKind::ValidationFault => "VALIDATION_FAULT",
            ErrorKind::Internal => "INTERNAL",
        }
    }
}

impl BlogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlogError::AuthorNotFound(_) => ErrorKind::LookupFault,
            BlogError::PostExists(_) | BlogError::UnknownAuthor(_) => ErrorKind::ValidationFault,
            _ => ErrorKind::Internal,
        }
    }
}

impl ErrorExtensions for BlogError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.kind().code());
        })
    }
}

pub type Result<T> = std::result::Result<T, BlogError>;
