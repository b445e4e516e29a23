//! Shutdown coordination.

use tokio::sync::watch;

/// Coordinator for graceful shutdown.
///
/// Backed by a watch channel, so a task that subscribes after the trigger
/// still observes it.
#[derive(Debug)]
pub struct Shutdown {
    tx: watch::Sender<bool>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> ShutdownSignal {
        ShutdownSignal {
            rx: self.tx.subscribe(),
        }
    }

    /// Trigger the shutdown signal. Idempotent.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }

    /// Number of live subscribers (tasks still running).
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving half handed to long-running tasks.
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
}

impl ShutdownSignal {
    /// Resolve once shutdown has been triggered, or the coordinator dropped.
    pub async fn recv(&mut self) {
        // An error means the sender is gone, which is as final as a trigger.
        let _ = self.rx.wait_for(|triggered| *triggered).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_trigger_wakes_subscriber() {
        let shutdown = Shutdown::new();
        let mut signal = shutdown.subscribe();

        let waiter = tokio::spawn(async move { signal.recv().await });
        shutdown.trigger();

        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("subscriber was not woken")
            .unwrap();
        assert!(shutdown.is_triggered());
    }

    #[tokio::test]
    async fn test_late_subscriber_sees_trigger() {
        let shutdown = Shutdown::new();
        shutdown.trigger();

        let mut signal = shutdown.subscribe();
        tokio::time::timeout(Duration::from_secs(1), signal.recv())
            .await
            .expect("late subscriber missed the trigger");
    }

    #[tokio::test]
    async fn test_dropped_coordinator_releases_subscribers() {
        let shutdown = Shutdown::new();
        let mut signal = shutdown.subscribe();
        assert_eq!(shutdown.receiver_count(), 1);

        drop(shutdown);
        tokio::time::timeout(Duration::from_secs(1), signal.recv())
            .await
            .expect("subscriber outlived the coordinator");
    }
}
