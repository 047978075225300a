
use crate::client::Client;
use crate::message::Command;
use crate::response::Response;
use crate::store::QueueStore;
use crate::ticket::{Snapshot, Ticket};
use std::fmt;

/// The shared admin password.
///
/// Never printed: `Debug` shows a placeholder.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminSecret(String);

impl AdminSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        AdminSecret(secret.into())
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

impl fmt::Debug for AdminSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AdminSecret(***)")
    }
}

/// What the joint must do once a command has been applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    /// Send this state to every connection.
    Broadcast(Snapshot),
    /// Send this response to the commanding connection only.
    Reply(Response),
}

/// Owns the board and applies commands to it.
///
/// One coordinator serves every connection; the joint hands it the commanding
/// connection's [`Client`] record so privilege is checked per connection.
#[derive(Debug)]
pub struct Coordinator {
    store: QueueStore,
    secret: AdminSecret,
}

impl Coordinator {
    pub fn new(secret: AdminSecret) -> Self {
        Coordinator {
            store: QueueStore::new(),
            secret,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.store.snapshot()
    }

    /// Applies `command` on behalf of `client`.
    ///
    /// Admin-only commands from an unprivileged client leave the board untouched
    /// but still broadcast it.
    pub fn dispatch(&mut self, client: &mut Client, command: Command) -> Dispatch {
        if command.requires_admin() && !client.is_admin() {
            tracing::debug!(client = client.id, ?command, "ignoring admin command");
            return Dispatch::Broadcast(self.snapshot());
        }

        match command {
            Command::Enqueue { number, counter } => {
                self.store.enqueue(Ticket::new(number, counter));
            }
            Command::AdminLogin { password } => return self.login(client, &password),
            Command::Next => self.store.next(),
            Command::Remove { number } => self.store.remove(&number),
            Command::ClearAll => self.store.clear_all(),
        }

        Dispatch::Broadcast(self.snapshot())
    }

    fn login(&self, client: &mut Client, password: &str) -> Dispatch {
        if self.secret.matches(password) {
            client.grant_admin();
            tracing::info!(client = client.id, "admin login accepted");
            Dispatch::Reply(Response::AdminLoginSuccess)
        } else {
            tracing::info!(client = client.id, "admin login rejected");
            Dispatch::Reply(Response::AdminLoginFailed)
        }
    }
}
