#[cfg(test)]
mod tests {
    use crate::broadcaster::Broadcaster;
    use crate::client::Client;
    use crate::response::Response;
    use crate::ticket::{Snapshot, Ticket};
    use tokio::sync::mpsc::{self, UnboundedReceiver};

    fn update() -> Response {
        Response::Update(Snapshot {
            queue: vec![],
            current: Some(Ticket::new("A1", Some("Counter 1".to_string()))),
        })
    }

    async fn register(broadcaster: &Broadcaster, id: u64) -> UnboundedReceiver<Response> {
        let (outbox, pending) = mpsc::unbounded_channel();
        broadcaster
            .add_client_connection(Client::new(id), outbox)
            .await;
        pending
    }

    #[tokio::test]
    async fn test_add_and_remove_client_connection() {
        let broadcaster = Broadcaster::new();

        let _first = register(&broadcaster, 1).await;
        let _second = register(&broadcaster, 2).await;
        assert_eq!(broadcaster.get_clients().lock().await.len(), 2);
        assert_eq!(broadcaster.get_outboxes().lock().await.len(), 2);

        broadcaster.remove_client_connection(1).await;
        assert_eq!(broadcaster.get_clients().lock().await.len(), 1);
        assert_eq!(broadcaster.get_outboxes().lock().await.len(), 1);

        // removing twice is harmless
        broadcaster.remove_client_connection(1).await;
        assert_eq!(broadcaster.get_clients().lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_remove_closes_outbox() {
        let broadcaster = Broadcaster::new();
        let mut pending = register(&broadcaster, 1).await;

        broadcaster.broadcast(&update()).await;
        broadcaster.remove_client_connection(1).await;

        // queued responses are still drained before the channel reports closed
        assert_eq!(pending.recv().await, Some(update()));
        assert_eq!(pending.recv().await, None);
    }

    #[tokio::test]
    async fn test_broadcast_reaches_every_client() {
        let broadcaster = Broadcaster::new();
        let mut receivers = Vec::new();
        for id in 0..3 {
            receivers.push(register(&broadcaster, id).await);
        }

        let delivered = broadcaster.broadcast(&update()).await;
        assert_eq!(delivered, 3);
        for pending in &mut receivers {
            assert_eq!(pending.try_recv().unwrap(), update());
        }
    }

    #[tokio::test]
    async fn test_broadcast_skips_stopped_writer() {
        let broadcaster = Broadcaster::new();
        let mut healthy = register(&broadcaster, 1).await;
        drop(register(&broadcaster, 2).await);

        let delivered = broadcaster.broadcast(&update()).await;
        assert_eq!(delivered, 1);
        assert_eq!(healthy.try_recv().unwrap(), update());
    }

    #[tokio::test]
    async fn test_broadcast_does_not_wait_for_readers() {
        let broadcaster = Broadcaster::new();
        let _never_read = register(&broadcaster, 1).await;
        let mut reader = register(&broadcaster, 2).await;

        for _ in 0..1000 {
            assert_eq!(broadcaster.broadcast(&update()).await, 2);
        }
        assert_eq!(reader.try_recv().unwrap(), update());
    }

    #[tokio::test]
    async fn test_send_to_client_targets_one_connection() {
        let broadcaster = Broadcaster::new();
        let mut first = register(&broadcaster, 1).await;
        let mut second = register(&broadcaster, 2).await;

        broadcaster
            .send_to_client(2, &Response::AdminLoginFailed)
            .await
            .unwrap();

        assert!(first.try_recv().is_err());
        assert_eq!(second.try_recv().unwrap(), Response::AdminLoginFailed);
    }

    #[tokio::test]
    async fn test_send_to_unknown_client_fails() {
        let broadcaster = Broadcaster::new();
        let result = broadcaster
            .send_to_client(99, &Response::AdminLoginSuccess)
            .await;
        assert!(result.is_err());
    }
}
