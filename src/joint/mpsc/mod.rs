
use crate::connection::{SinkAdapter, StreamAdapter};
use crate::dispatcher::AdminSecret;
use crate::error::BoxError;
use crate::joint::Joint;
use crate::response::Response;
use crate::ticket::Snapshot;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::io;
use tokio::sync::mpsc::{self, Receiver, Sender};

/// An implementation of [`SinkAdapter`] that sends responses over a `tokio::sync::mpsc::Sender`.
#[derive(Clone)]
pub struct MPSCSink {
    sender: Sender<Response>,
}

#[async_trait]
impl SinkAdapter for MPSCSink {
    async fn send(&mut self, response: &Response) -> Result<(), BoxError> {
        self.sender.send(response.clone()).await.map_err(|e| {
            Box::new(io::Error::new(
                io::ErrorKind::BrokenPipe,
                format!("Failed to send response: {}", e),
            )) as _
        })
    }
}

/// An implementation of [`StreamAdapter`] that receives text frames from a `tokio::sync::mpsc::Receiver`.
///
/// Dropping the paired sender closes the connection.
pub struct MPSCStream {
    receiver: Receiver<String>,
}

#[async_trait]
impl StreamAdapter for MPSCStream {
    async fn next(&mut self) -> Result<Option<String>, BoxError> {
        Ok(self.receiver.recv().await)
    }
}

/// A queue board whose connections are pairs of Tokio channels.
pub struct MPSCJoint {
    joint: Arc<Joint>,
}

impl MPSCJoint {
    pub fn new(secret: AdminSecret) -> Self {
        MPSCJoint {
            joint: Arc::new(Joint::new(secret)),
        }
    }

    /// Connects a new client via MPSC channels.
    ///
    /// Returns the sender for raw text frames and the receiver for responses.
    /// The first response is always the connection's `init` snapshot.
    pub fn connect(&self, buffer_size: usize) -> (Sender<String>, Receiver<Response>) {
        let (msg_tx, msg_rx) = mpsc::channel(buffer_size);
        let (resp_tx, resp_rx) = mpsc::channel(buffer_size);

        let joint = self.joint.clone();

        tokio::spawn(async move {
            let mut stream = MPSCStream { receiver: msg_rx };
            let sink = MPSCSink { sender: resp_tx };

            joint.handle_stream(&mut stream, sink).await;
        });

        (msg_tx, resp_rx)
    }

    pub async fn snapshot(&self) -> Snapshot {
        self.joint.snapshot().await
    }

    pub async fn connection_count(&self) -> usize {
        self.joint.connection_count().await
    }
}
