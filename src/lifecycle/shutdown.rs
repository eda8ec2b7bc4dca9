//! Shutdown coordination for serving mode.

use tokio::sync::broadcast;

/// Fans a single stop request out to every running server.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver that resolves once `trigger` is called.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Ask every subscriber to stop. Does nothing when nobody listens.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}
