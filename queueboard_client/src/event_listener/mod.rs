use crate::announcer::{announce, Announcer};
use crate::event::Event;
use crate::mirror::Mirror;
use anyhow::Result;
use futures_util::future::BoxFuture;
use std::sync::Arc;
use tokio::sync::Mutex;


type ChangeHandler = Box<dyn Fn(Mirror) -> BoxFuture<'static, Result<()>> + Send + Sync>;

/// Feeds server frames into the mirror and fires the side effects they call for.
pub struct EventListener {
    mirror: Arc<Mutex<Mirror>>,
    announcer: Arc<dyn Announcer>,
    handle_change: Mutex<Option<ChangeHandler>>,
}

impl EventListener {
    pub fn new(announcer: Arc<dyn Announcer>) -> Self {
        EventListener {
            mirror: Arc::new(Mutex::new(Mirror::new())),
            announcer,
            handle_change: Mutex::new(None),
        }
    }

    pub fn mirror(&self) -> Arc<Mutex<Mirror>> {
        self.mirror.clone()
    }

    /// Registers the callback run with a copy of the mirror after every event.
    pub async fn register_handler(&self, handler: ChangeHandler) {
        *self.handle_change.lock().await = Some(handler);
    }

    pub async fn handle_event(&self, message: &str) -> Result<()> {
        let event = Event::parse(message)?;

        let (view, announcement) = {
            let mut mirror = self.mirror.lock().await;
            let announcement = mirror.apply(event);
            (mirror.clone(), announcement)
        };

        if let Some(handler) = &*self.handle_change.lock().await {
            handler(view).await?;
        }

        if let Some(announcement) = announcement {
            announce(self.announcer.as_ref(), &announcement).await?;
        }
        Ok(())
    }
}
