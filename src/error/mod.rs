use std::io;
use thiserror::Error;

/// Error type returned by transport adapters.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Why an inbound frame could not be turned into a command.
#[derive(Debug, Error)]
pub enum MessageError {
    #[error("failed to parse message: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("invalid command payload: {0}")]
    InvalidCommand(#[source] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },
    #[error("server terminated: {0}")]
    Serve(#[from] io::Error),
}
