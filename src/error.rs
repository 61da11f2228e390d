//! Error types for rs-eclair.
//!
//! Unrecognized markup is never an error: the traversal engine silently
//! resolves it to the skip state. The variants below cover the remaining
//! failure modes of traversal, retrieval and rendering.

/// Error type for traversal, retrieval and rendering operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The event stream closed more elements than it opened.
    ///
    /// This means the tokenizer broke its balancing contract. The traversal
    /// must be abandoned; the engine does not try to recover.
    #[error("unbalanced event stream: close event at root depth")]
    UnbalancedClose,

    /// A transition callback reported a failure.
    #[error("transition handler failed: {0}")]
    Handler(String),

    /// The HTTP request could not be completed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status {
        /// HTTP status code returned by the server.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// The configured base URL is not a valid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The requested output format name is not known.
    #[error("unknown output format: {0}")]
    UnknownFormat(String),

    /// Serializing the extracted record failed.
    #[error("rendering failed: {0}")]
    Render(#[from] serde_json::Error),
}

/// Result type alias for rs-eclair operations.
pub type Result<T> = std::result::Result<T, Error>;
