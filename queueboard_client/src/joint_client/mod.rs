use crate::announcer::Announcer;
use crate::event_listener::EventListener;
use crate::mirror::Mirror;
use crate::ticket::Category;
use crate::utils::{WSSink, WSStream};
use anyhow::{anyhow, Result};
use futures_util::{SinkExt, StreamExt};
use queueboard::message::Command;
use queueboard::ticket::Ticket;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_tungstenite::connect_async;
use tungstenite::protocol::Message;
use url::Url;


/// A viewer/admin connection to a queueboard server.
pub struct QueueClient {
    listener: Arc<EventListener>,
    sink: Option<Arc<Mutex<WSSink>>>,
    stream: Option<Arc<Mutex<WSStream>>>,
}

impl QueueClient {
    pub fn new(announcer: Arc<dyn Announcer>) -> Self {
        QueueClient {
            listener: Arc::new(EventListener::new(announcer)),
            sink: None,
            stream: None,
        }
    }

    pub fn listener(&self) -> Arc<EventListener> {
        self.listener.clone()
    }

    pub fn mirror(&self) -> Arc<Mutex<Mirror>> {
        self.listener.mirror()
    }

    pub async fn connect(&mut self, addr: &str) -> Result<()> {
        let url = Url::parse(addr)?;
        if !matches!(url.scheme(), "ws" | "wss") {
            return Err(anyhow!("Unsupported scheme {}, expected ws or wss", url.scheme()));
        }

        let (ws_stream, _) = connect_async(url.as_str()).await?;
        let (sink, stream) = ws_stream.split();
        self.sink = Some(Arc::new(Mutex::new(sink)));
        self.stream = Some(Arc::new(Mutex::new(stream)));
        Ok(())
    }

    /// Spawns the task that applies server frames to the mirror until the socket closes.
    pub fn listen(&self) -> Result<JoinHandle<()>> {
        let stream = self
            .stream
            .clone()
            .ok_or_else(|| anyhow!("WebSocket stream is not initialized"))?;
        let listener = self.listener.clone();

        Ok(tokio::spawn(async move {
            let mut stream = stream.lock().await;
            while let Some(msg) = stream.next().await {
                let text = match msg {
                    Ok(Message::Text(text)) => text,
                    Ok(Message::Close(_)) => break,
                    Ok(_) => continue,
                    Err(e) => {
                        tracing::error!("WebSocket error: {}", e);
                        break;
                    }
                };
                if let Err(e) = listener.handle_event(text.as_str()).await {
                    tracing::warn!("Error handling message: {}", e);
                }
            }
            tracing::debug!("server connection closed");
        }))
    }

    /// Draws a ticket for `category`, sends it, and returns what was sent.
    pub async fn enqueue(&self, category: Category) -> Result<Ticket> {
        let ticket = category.draw(&mut rand::rng());
        self.enqueue_ticket(ticket.clone()).await?;
        Ok(ticket)
    }

    pub async fn enqueue_ticket(&self, ticket: Ticket) -> Result<()> {
        self.send_command(&Command::Enqueue {
            number: ticket.number,
            counter: ticket.counter,
        })
        .await
    }

    pub async fn login(&self, password: &str) -> Result<()> {
        self.send_command(&Command::AdminLogin {
            password: password.to_string(),
        })
        .await
    }

    /// Locks the local admin controls. The server is not told; this connection
    /// keeps whatever privilege it was granted.
    pub async fn logout(&self) {
        self.mirror().lock().await.logout();
    }

    pub async fn next(&self) -> Result<()> {
        self.send_command(&Command::Next).await
    }

    pub async fn remove(&self, number: &str) -> Result<()> {
        self.send_command(&Command::Remove {
            number: number.to_string(),
        })
        .await
    }

    pub async fn clear_all(&self) -> Result<()> {
        self.send_command(&Command::ClearAll).await
    }

    async fn send_command(&self, command: &Command) -> Result<()> {
        let json = serde_json::to_string(command)?;
        let sink = self
            .sink
            .as_ref()
            .ok_or_else(|| anyhow!("WebSocket stream is not initialized"))?;
        sink.lock().await.send(Message::Text(json.into())).await?;
        Ok(())
    }
}
