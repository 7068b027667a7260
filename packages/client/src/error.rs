use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure: connection refused, DNS, broken stream.
    #[error("Request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("Backend returned status {0}")]
    Status(reqwest::StatusCode),

    /// The body did not match the expected response envelope.
    #[error("Unexpected response envelope: {0}")]
    Envelope(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
