use thiserror::Error;

/// The standard result type used throughout the application.
pub type StdResult<T> = Result<T, anyhow::Error>;

/// Fetcher error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetcherError {
    /// The exchange did not produce a response (connection, timeout, TLS, DNS or I/O fault)
    #[error("Transport error: {0}")]
    Transport(String),
    /// The server answered with a non-success status
    #[error("Server error: status={status}, body={body}")]
    Status {
        /// The status code.
        status: u16,
        /// The error body sent by the server.
        body: String,
    },
    /// The body was absent or could not be decoded
    #[error("Decoding error: {0}")]
    Decode(String),
}
