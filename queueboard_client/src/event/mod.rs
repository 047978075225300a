use anyhow::{anyhow, Result};
use queueboard::ticket::Snapshot;
use serde::Deserialize;


/// A message pushed by the queueboard server.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    Init(Snapshot),
    Update(Snapshot),
    AdminLoginSuccess,
    AdminLoginFailed,
}

impl Event {
    pub fn parse(message: &str) -> Result<Event> {
        serde_json::from_str(message).map_err(|e| anyhow!("Failed to parse event: {}", e))
    }
}
