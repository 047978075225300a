//! Client-side copy of the board, rebuilt from every snapshot the server sends.
mod test;

use crate::event::Event;
use queueboard::ticket::{Snapshot, Ticket};
use std::fmt;

pub const LOGIN_FAILED_TEXT: &str = "Incorrect password";

/// A called ticket that should be rung and spoken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub number: String,
    pub counter: Option<String>,
}

impl Announcement {
    /// Text handed to speech synthesis once the tone has finished.
    pub fn speech(&self) -> String {
        match &self.counter {
            Some(counter) => format!("{}. Please go to {}", self.number, counter),
            None => format!("{}.", self.number),
        }
    }
}

impl From<&Ticket> for Announcement {
    fn from(ticket: &Ticket) -> Self {
        Announcement {
            number: ticket.number.clone(),
            counter: ticket.counter.clone(),
        }
    }
}

/// What a viewer tab knows: the last snapshot plus purely local UI state.
///
/// The admin flag only unlocks controls; the server checks privilege on its own.
#[derive(Debug, Clone, Default)]
pub struct Mirror {
    snapshot: Snapshot,
    previous_number: Option<String>,
    admin: bool,
    login_error: Option<String>,
}

impl Mirror {
    pub fn new() -> Self {
        Mirror::default()
    }

    /// Applies one server event and returns the announcement it triggers, if any.
    ///
    /// A snapshot announces its `current` ticket only when the number differs from
    /// the one seen in the previous snapshot; an empty `current` resets that memory.
    pub fn apply(&mut self, event: Event) -> Option<Announcement> {
        match event {
            Event::Init(snapshot) | Event::Update(snapshot) => self.replace(snapshot),
            Event::AdminLoginSuccess => {
                self.admin = true;
                self.login_error = None;
                None
            }
            Event::AdminLoginFailed => {
                self.login_error = Some(LOGIN_FAILED_TEXT.to_string());
                None
            }
        }
    }

    fn replace(&mut self, snapshot: Snapshot) -> Option<Announcement> {
        let announcement = snapshot
            .current
            .as_ref()
            .filter(|ticket| self.previous_number.as_deref() != Some(ticket.number.as_str()))
            .map(Announcement::from);

        self.previous_number = snapshot.current.as_ref().map(|ticket| ticket.number.clone());
        self.snapshot = snapshot;
        announcement
    }

    /// Local logout: locks the admin controls without telling the server.
    pub fn logout(&mut self) {
        self.admin = false;
        self.login_error = None;
    }

    pub fn is_admin(&self) -> bool {
        self.admin
    }

    pub fn login_error(&self) -> Option<&str> {
        self.login_error.as_deref()
    }

    pub fn queue(&self) -> &[Ticket] {
        &self.snapshot.queue
    }

    pub fn current(&self) -> Option<&Ticket> {
        self.snapshot.current.as_ref()
    }
}

impl fmt::Display for Mirror {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Queue:")?;
        if self.queue().is_empty() {
            writeln!(f, "  No one in queue.")?;
        }
        for ticket in self.queue() {
            writeln!(
                f,
                "  {} >> {}",
                ticket.number,
                ticket.counter.as_deref().unwrap_or("-")
            )?;
        }

        match self.current() {
            Some(ticket) => {
                writeln!(f, "Now Calling: {}", ticket.number)?;
                writeln!(
                    f,
                    "Please go to {}",
                    ticket.counter.as_deref().unwrap_or("-")
                )?;
            }
            None => {
                writeln!(f, "Now Calling: --")?;
                writeln!(f, "Waiting for next...")?;
            }
        }

        if self.admin {
            write!(f, "[admin]")
        } else if let Some(error) = &self.login_error {
            write!(f, "[viewer] {}", error)
        } else {
            write!(f, "[viewer]")
        }
    }
}
