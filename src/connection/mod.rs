
use crate::error::BoxError;
use crate::response::Response;
use async_trait::async_trait;

/// Outgoing half of a connection, as seen by the broadcaster.
#[async_trait]
pub trait SinkAdapter {
    async fn send(&mut self, response: &Response) -> Result<(), BoxError>;
}

/// Incoming half of a connection.
///
/// Yields raw text frames; decoding is left to the joint so that a malformed
/// frame never ends the connection. `Ok(None)` means the peer closed it.
#[async_trait]
pub trait StreamAdapter {
    async fn next(&mut self) -> Result<Option<String>, BoxError>;
}

/// Turns a binary frame into text the way a JSON parser would read it.
pub fn binary_to_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
