
use crate::ticket::{Snapshot, Ticket};
use std::collections::VecDeque;

/// Owns the single queue and `current` ticket of a board.
///
/// Every transition keeps `current` out of `queue`: a ticket is popped from the head
/// at the moment it becomes current.
#[derive(Debug, Default)]
pub struct QueueStore {
    queue: VecDeque<Ticket>,
    current: Option<Ticket>,
}

impl QueueStore {
    pub fn new() -> Self {
        QueueStore::default()
    }

    /// Appends a ticket to the tail. An idle board calls the head straight away.
    pub fn enqueue(&mut self, ticket: Ticket) {
        self.queue.push_back(ticket);
        if self.current.is_none() {
            self.current = self.queue.pop_front();
        }
    }

    /// Replaces `current` with the head of the queue, or clears it when the queue is empty.
    pub fn next(&mut self) {
        self.current = self.queue.pop_front();
    }

    /// Drops every waiting ticket labelled `number`, and clears `current` if it carries it.
    ///
    /// A cleared `current` is not refilled from the queue.
    pub fn remove(&mut self, number: &str) {
        self.queue.retain(|ticket| ticket.number != number);
        if self
            .current
            .as_ref()
            .is_some_and(|ticket| ticket.number == number)
        {
            self.current = None;
        }
    }

    pub fn clear_all(&mut self) {
        self.queue.clear();
        self.current = None;
    }

    pub fn current(&self) -> Option<&Ticket> {
        self.current.as_ref()
    }

    pub fn queue(&self) -> impl Iterator<Item = &Ticket> {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            queue: self.queue.iter().cloned().collect(),
            current: self.current.clone(),
        }
    }
}
