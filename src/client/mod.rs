//! This module defines the `Client` struct, the coordinator's record of one open connection.

/// A connected viewer or admin.
///
/// Privilege lives here and nowhere else: it is granted by a successful login and
/// disappears with the connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: u64,
    is_admin: bool,
}

impl Client {
    /// Creates an unprivileged client with the given connection ID.
    pub fn new(id: u64) -> Self {
        Client {
            id,
            is_admin: false,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub(crate) fn grant_admin(&mut self) {
        self.is_admin = true;
    }
}
