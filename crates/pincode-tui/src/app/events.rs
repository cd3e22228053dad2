//! Event handling for the demo host

use std::time::Duration;

use tokio::sync::mpsc;

/// Host events produced off the render loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Verification of an entered PIN finished
    Verified { accepted: bool },
}

/// Channel that background tasks report into
pub struct EventHandler {
    /// Sender for events
    sender: mpsc::UnboundedSender<Event>,
    /// Receiver for events
    receiver: mpsc::UnboundedReceiver<Event>,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler {
    /// Create a new event handler
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { sender, receiver }
    }

    /// Get a clone of the sender for other tasks to send events
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.sender.clone()
    }

    /// Try to receive the next event (non-blocking)
    pub fn try_recv(&mut self) -> Option<Event> {
        self.receiver.try_recv().ok()
    }

    /// Receive the next event
    pub async fn recv(&mut self) -> Option<Event> {
        self.receiver.recv().await
    }
}

/// Check an entered PIN against the expected one after `latency`
///
/// Stands in for a slow backend check; the result arrives as
/// [`Event::Verified`].
pub fn spawn_verification(
    sender: mpsc::UnboundedSender<Event>,
    entered: String,
    expected: Option<String>,
    latency: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(latency).await;
        let accepted = expected.as_deref() == Some(entered.as_str());
        tracing::debug!(accepted, "Verification finished");
        if sender.send(Event::Verified { accepted }).is_err() {
            tracing::debug!("Host gone before verification finished");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_verification_accepts_match() {
        let mut events = EventHandler::new();
        spawn_verification(
            events.sender(),
            "1234".to_string(),
            Some("1234".to_string()),
            Duration::ZERO,
        )
        .await
        .unwrap();

        assert_eq!(events.try_recv(), Some(Event::Verified { accepted: true }));
    }

    #[tokio::test]
    async fn test_verification_rejects_mismatch_and_missing() {
        let mut events = EventHandler::new();
        spawn_verification(
            events.sender(),
            "1234".to_string(),
            Some("4321".to_string()),
            Duration::from_millis(5),
        );
        assert_eq!(events.recv().await, Some(Event::Verified { accepted: false }));

        spawn_verification(events.sender(), "1234".to_string(), None, Duration::ZERO);
        assert_eq!(events.recv().await, Some(Event::Verified { accepted: false }));
    }

    #[test]
    fn test_try_recv_empty() {
        let mut events = EventHandler::new();
        assert!(events.try_recv().is_none());
    }
}
