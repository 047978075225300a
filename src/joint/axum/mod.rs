
use crate::connection::{binary_to_text, SinkAdapter, StreamAdapter};
use crate::dispatcher::AdminSecret;
use crate::error::{BoxError, ServerError};
use crate::joint::Joint;
use crate::response::Response;
use crate::ticket::Snapshot;
use async_trait::async_trait;
use axum::extract::ws::{Message, Utf8Bytes, WebSocket};
use axum::extract::WebSocketUpgrade;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};

/// Route the board's websocket is mounted on.
pub const WS_PATH: &str = "/ws";

pub struct AxumWSSink {
    sink: SplitSink<WebSocket, Message>,
}

#[async_trait]
impl SinkAdapter for AxumWSSink {
    async fn send(&mut self, response: &Response) -> Result<(), BoxError> {
        let message = Message::Text(Utf8Bytes::from(response.to_json()?));
        self.sink.send(message).await.map_err(|e| Box::new(e) as _)
    }
}

pub struct AxumWSStream {
    stream: SplitStream<WebSocket>,
}

#[async_trait]
impl StreamAdapter for AxumWSStream {
    async fn next(&mut self) -> Result<Option<String>, BoxError> {
        while let Some(message) = self.stream.next().await {
            match message? {
                Message::Text(text) => return Ok(Some(text.as_str().to_owned())),
                Message::Binary(bytes) => return Ok(Some(binary_to_text(&bytes))),
                Message::Close(_) => return Ok(None),
                Message::Ping(_) | Message::Pong(_) => {}
            }
        }
        Ok(None)
    }
}

/// The queue board served over axum: a websocket endpoint plus the static client bundle.
pub struct AxumWSJoint {
    joint: Arc<Joint>,
}

impl AxumWSJoint {
    pub fn new(secret: AdminSecret) -> Self {
        AxumWSJoint {
            joint: Arc::new(Joint::new(secret)),
        }
    }

    pub async fn ws_handler(
        ws: WebSocketUpgrade,
        joint: Arc<Joint>,
    ) -> impl IntoResponse {
        ws.on_upgrade(|socket| async move {
            let (sink, stream) = socket.split();

            let mut stream_adapter = AxumWSStream { stream };
            let sink_adapter = AxumWSSink { sink };

            joint.handle_stream(&mut stream_adapter, sink_adapter).await;
        })
    }

    pub fn attach_router(&self, path: &str, router: Router) -> Router {
        let joint = self.joint.clone();
        router.route(path, get(move |ws| AxumWSJoint::ws_handler(ws, joint)))
    }

    /// Full application: websocket on [`WS_PATH`], files from `static_dir`, and
    /// `index.html` for every other path so client-side routes resolve.
    pub fn router(&self, static_dir: &Path) -> Router {
        let index = ServeFile::new(static_dir.join("index.html"));
        let files = ServeDir::new(static_dir).fallback(index);

        self.attach_router(WS_PATH, Router::new())
            .fallback_service(files)
            .layer(CorsLayer::permissive())
    }

    pub async fn serve(&self, listener: TcpListener, static_dir: &Path) -> Result<(), ServerError> {
        let app = self.router(static_dir);
        axum::serve(listener, app).await.map_err(ServerError::Serve)
    }

    pub async fn snapshot(&self) -> Snapshot {
        self.joint.snapshot().await
    }

    pub async fn connection_count(&self) -> usize {
        self.joint.connection_count().await
    }
}
