
use crate::error::MessageError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Debug;

/// Inbound command, tagged by its `type` field on the wire.
///
/// ```rust
/// use queueboard::message::Command;
///
/// let command = Command::decode(r#"{"type":"remove","number":"A42"}"#).unwrap();
/// assert_eq!(command, Some(Command::Remove { number: "A42".to_string() }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Add a ticket to the tail of the queue (open to anyone)
    Enqueue {
        number: String,
        #[serde(default)]
        counter: Option<String>,
    },
    /// Ask for admin privilege on this connection
    AdminLogin { password: String },
    /// Call the next ticket (admin only)
    Next,
    /// Drop every ticket with the given number (admin only)
    Remove { number: String },
    /// Empty the board (admin only)
    ClearAll,
}

const COMMAND_TYPES: [&str; 5] = ["enqueue", "admin_login", "next", "remove", "clear_all"];

impl Command {
    /// Decodes one text frame.
    ///
    /// Returns `Ok(None)` for well-formed JSON whose `type` is missing or unknown;
    /// such frames are ignored by the coordinator. Unparseable JSON, and known
    /// commands missing a required field, are reported as [`MessageError`].
    pub fn decode(text: &str) -> Result<Option<Command>, MessageError> {
        let value: Value = serde_json::from_str(text).map_err(MessageError::Malformed)?;

        let known = value
            .get("type")
            .and_then(Value::as_str)
            .is_some_and(|kind| COMMAND_TYPES.contains(&kind));
        if !known {
            return Ok(None);
        }

        serde_json::from_value(value)
            .map(Some)
            .map_err(MessageError::InvalidCommand)
    }

    /// Whether the command needs a privileged connection to take effect.
    pub fn requires_admin(&self) -> bool {
        matches!(
            self,
            Command::Next | Command::Remove { .. } | Command::ClearAll
        )
    }
}
