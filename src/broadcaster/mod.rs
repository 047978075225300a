mod test;

use crate::client::Client;
use crate::error::BoxError;
use crate::response::Response;
use std::collections::HashMap;
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::Mutex;

/// Outgoing queue of one connection, drained by that connection's writer task.
pub type Outbox = UnboundedSender<Response>;

/// Registry of open connections: their session records and their outboxes.
///
/// Sending only enqueues, so a connection that stops reading never holds up
/// the others.
pub struct Broadcaster {
    clients: Arc<Mutex<HashMap<u64, Client>>>,
    outboxes: Arc<Mutex<HashMap<u64, Outbox>>>,
}

impl Broadcaster {
    pub fn new() -> Self {
        Broadcaster {
            clients: Arc::new(Mutex::new(HashMap::new())),
            outboxes: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn get_clients(&self) -> &Arc<Mutex<HashMap<u64, Client>>> {
        &self.clients
    }

    pub fn get_outboxes(&self) -> &Arc<Mutex<HashMap<u64, Outbox>>> {
        &self.outboxes
    }

    pub async fn add_client_connection(&self, client: Client, outbox: Outbox) {
        let id = client.id;
        self.clients.lock().await.insert(id, client);
        self.outboxes.lock().await.insert(id, outbox);
    }

    /// Unregisters a connection. Dropping its outbox lets the writer task finish
    /// flushing and exit.
    pub async fn remove_client_connection(&self, client_id: u64) {
        self.clients.lock().await.remove(&client_id);
        self.outboxes.lock().await.remove(&client_id);
    }

    /// Queues `response` for one connection.
    pub async fn send_to_client(&self, client_id: u64, response: &Response) -> Result<(), BoxError> {
        let outboxes = self.outboxes.lock().await;
        let outbox = outboxes.get(&client_id).ok_or_else(|| {
            Box::new(io::Error::new(
                io::ErrorKind::NotFound,
                format!("client {} is not connected", client_id),
            )) as BoxError
        })?;
        outbox.send(response.clone()).map_err(|_| {
            Box::new(io::Error::new(
                io::ErrorKind::BrokenPipe,
                format!("writer for client {} has stopped", client_id),
            )) as BoxError
        })
    }

    /// Queues the same `response` for every open connection and returns how many
    /// accepted it.
    ///
    /// A connection whose writer has stopped is skipped; it is unregistered when
    /// its own stream ends.
    pub async fn broadcast(&self, response: &Response) -> usize {
        let outboxes = self.outboxes.lock().await;
        let mut delivered = 0;
        for (client_id, outbox) in outboxes.iter() {
            match outbox.send(response.clone()) {
                Ok(()) => delivered += 1,
                Err(_) => tracing::debug!(client = client_id, "broadcast skipped, writer stopped"),
            }
        }
        delivered
    }
}

impl Default for Broadcaster {
    fn default() -> Self {
        Broadcaster::new()
    }
}
