use std::path::PathBuf;
use std::time::Duration;

use reqwest::StatusCode;

/// Everything that can go wrong before a payload reaches the normalizer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("File is required: {} does not exist", .0.display())]
    MissingFile(PathBuf),

    #[error("Query is required.")]
    EmptyQuery,

    #[error("failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// Connection, TLS or body failures, and form parts reqwest rejects.
    #[error("request to evaluation service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("evaluation service did not answer within {0:?}")]
    Timeout(Duration),

    /// Non-success status. `message` is the response text, or a generic
    /// description when the body was empty.
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    #[error("response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}
