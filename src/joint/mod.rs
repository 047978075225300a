//! The transport-agnostic core: one coordinator, many connections.
//!
//! Transports ([`axum`], [`mpsc`]) adapt their connections to [`SinkAdapter`] and
//! [`StreamAdapter`] and hand them to [`Joint::handle_stream`].
pub mod axum;
pub mod mpsc;

use crate::broadcaster::{Broadcaster, Outbox};
use crate::client::Client;
use crate::connection::{SinkAdapter, StreamAdapter};
use crate::dispatcher::{AdminSecret, Coordinator, Dispatch};
use crate::message::Command;
use crate::response::Response;
use crate::ticket::Snapshot;
use crate::utils::get_id;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tokio::sync::Mutex;

/// Connects the coordinator to every open connection.
///
/// The coordinator lock is held from the moment a command is applied until its
/// broadcast or reply has been queued on the outboxes, so commands from all
/// connections are processed one at a time, to completion. Each connection's
/// writer task drains its outbox at whatever pace its peer reads.
pub struct Joint {
    pub(crate) coordinator: Mutex<Coordinator>,
    pub(crate) broadcaster: Broadcaster,
}

impl Joint {
    pub fn new(secret: AdminSecret) -> Self {
        Joint {
            coordinator: Mutex::new(Coordinator::new(secret)),
            broadcaster: Broadcaster::new(),
        }
    }

    pub async fn snapshot(&self) -> Snapshot {
        self.coordinator.lock().await.snapshot()
    }

    pub async fn connection_count(&self) -> usize {
        self.broadcaster.get_outboxes().lock().await.len()
    }

    /// Serves one connection until its stream ends.
    ///
    /// The connection is registered and its `init` snapshot queued before any
    /// other command can broadcast, so it sees every later update exactly once.
    /// Returns once everything queued for the connection has been written.
    pub async fn handle_stream<T, S>(&self, stream: &mut T, sink: S)
    where
        T: StreamAdapter + Send,
        S: SinkAdapter + Send + 'static,
    {
        let client_id = get_id();
        let (outbox, pending) = unbounded_channel();
        let writer = tokio::spawn(write_responses(client_id, pending, sink));
        self.connect(client_id, outbox).await;

        loop {
            match stream.next().await {
                Ok(Some(text)) => self.handle_message(client_id, &text).await,
                Ok(None) => break,
                Err(e) => {
                    tracing::debug!(client = client_id, "stream error: {}", e);
                    break;
                }
            }
        }

        self.broadcaster.remove_client_connection(client_id).await;
        if let Err(e) = writer.await {
            tracing::debug!(client = client_id, "writer task failed: {}", e);
        }
        tracing::debug!(client = client_id, "connection closed");
    }

    async fn connect(&self, client_id: u64, outbox: Outbox) {
        let coordinator = self.coordinator.lock().await;
        self.broadcaster
            .add_client_connection(Client::new(client_id), outbox)
            .await;
        let init = Response::Init(coordinator.snapshot());
        if let Err(e) = self.broadcaster.send_to_client(client_id, &init).await {
            tracing::debug!(client = client_id, "failed to queue init: {}", e);
        }
        tracing::debug!(client = client_id, "connection opened");
    }

    /// Decodes and applies one text frame received from `client_id`.
    ///
    /// Malformed frames are logged, unknown command types are dropped silently;
    /// neither produces a reply.
    pub async fn handle_message(&self, client_id: u64, text: &str) {
        let command = match Command::decode(text) {
            Ok(Some(command)) => command,
            Ok(None) => {
                tracing::debug!(client = client_id, "ignoring unknown message type");
                return;
            }
            Err(e) => {
                tracing::warn!(client = client_id, "{}", e);
                return;
            }
        };

        if let Err(e) = self.dispatch(client_id, command).await {
            tracing::debug!(client = client_id, "{}", e);
        }
    }

    /// Applies `command` on behalf of a registered connection and delivers the result.
    pub async fn dispatch(&self, client_id: u64, command: Command) -> Result<Dispatch, String> {
        let mut coordinator = self.coordinator.lock().await;

        let dispatch = {
            let mut clients = self.broadcaster.get_clients().lock().await;
            let client = clients
                .get_mut(&client_id)
                .ok_or_else(|| format!("client {} not found", client_id))?;
            coordinator.dispatch(client, command)
        };

        match &dispatch {
            Dispatch::Broadcast(snapshot) => {
                self.broadcaster
                    .broadcast(&Response::Update(snapshot.clone()))
                    .await;
            }
            Dispatch::Reply(response) => {
                self.broadcaster
                    .send_to_client(client_id, response)
                    .await
                    .map_err(|e| format!("failed to reply: {}", e))?;
            }
        }

        drop(coordinator);
        Ok(dispatch)
    }
}

// Forwards queued responses to the transport until the outbox closes or the peer fails.
async fn write_responses<S>(client_id: u64, mut pending: UnboundedReceiver<Response>, mut sink: S)
where
    S: SinkAdapter + Send,
{
    while let Some(response) = pending.recv().await {
        if let Err(e) = sink.send(&response).await {
            tracing::debug!(client = client_id, "send failed: {}", e);
            break;
        }
    }
}
