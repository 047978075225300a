
use serde::{Deserialize, Serialize};

/// A queued request: a client-chosen label plus the counter its holder should go to.
///
/// `number` is not unique; two tickets may carry the same label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub number: String,
    pub counter: Option<String>,
}

impl Ticket {
    /// Creates a ticket, storing an empty counter label as no counter at all.
    pub fn new(number: impl Into<String>, counter: Option<String>) -> Self {
        Ticket {
            number: number.into(),
            counter: counter.filter(|counter| !counter.is_empty()),
        }
    }
}

/// Full view of the board as sent over the wire: the waiting queue and the ticket being served.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub queue: Vec<Ticket>,
    pub current: Option<Ticket>,
}
