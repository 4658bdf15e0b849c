//! Sync job status broadcasting
//!
//! The sync worker publishes its progress here; register screens subscribe
//! and refresh when a job finishes.

use fhircore_core::FhirDateTime;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

const DEFAULT_BUFFER_SIZE: usize = 64;

/// State of a sync job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SyncJobStatus {
    Started,
    InProgress {
        completed: u32,
        total: u32,
    },
    Finished {
        timestamp: FhirDateTime,
    },
    Failed {
        timestamp: FhirDateTime,
        reason: String,
    },
}

impl SyncJobStatus {
    pub fn finished(timestamp: FhirDateTime) -> Self {
        Self::Finished { timestamp }
    }

    pub fn failed(timestamp: FhirDateTime, reason: impl Into<String>) -> Self {
        Self::Failed {
            timestamp,
            reason: reason.into(),
        }
    }

    /// Whether the job has ended, successfully or not
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished { .. } | Self::Failed { .. })
    }

    /// Time the job ended, if it has
    pub fn completed_at(&self) -> Option<FhirDateTime> {
        match self {
            Self::Finished { timestamp } | Self::Failed { timestamp, .. } => Some(*timestamp),
            Self::Started | Self::InProgress { .. } => None,
        }
    }
}

/// Broadcaster of sync job states.
///
/// Cloning shares the underlying channel.
#[derive(Clone)]
pub struct SyncBroadcaster {
    sender: broadcast::Sender<SyncJobStatus>,
}

impl SyncBroadcaster {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BUFFER_SIZE)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Send a state to all subscribers.
    ///
    /// Returns the number of subscribers that received it, 0 when nobody listens.
    pub fn send(&self, status: SyncJobStatus) -> usize {
        self.sender.send(status).unwrap_or_default()
    }

    /// Subscribe to states sent after this call
    pub fn subscribe(&self) -> broadcast::Receiver<SyncJobStatus> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    pub fn has_subscribers(&self) -> bool {
        self.subscriber_count() > 0
    }
}

impl Default for SyncBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SyncBroadcaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncBroadcaster")
            .field("subscriber_count", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn timestamp() -> FhirDateTime {
        "2021-05-15T14:30:00Z".parse().unwrap()
    }

    #[test]
    fn test_send_without_subscribers() {
        let broadcaster = SyncBroadcaster::new();
        assert!(!broadcaster.has_subscribers());
        assert_eq!(broadcaster.send(SyncJobStatus::Started), 0);
    }

    #[tokio::test]
    async fn test_send_receive() {
        let broadcaster = SyncBroadcaster::new();
        let mut first = broadcaster.subscribe();
        let mut second = broadcaster.clone().subscribe();
        assert_eq!(broadcaster.subscriber_count(), 2);

        let sent = broadcaster.send(SyncJobStatus::InProgress {
            completed: 3,
            total: 10,
        });
        assert_eq!(sent, 2);

        assert_eq!(
            first.recv().await.unwrap(),
            SyncJobStatus::InProgress {
                completed: 3,
                total: 10
            }
        );
        assert!(matches!(
            second.recv().await.unwrap(),
            SyncJobStatus::InProgress { .. }
        ));
    }

    #[test]
    fn test_terminal_states() {
        assert!(!SyncJobStatus::Started.is_terminal());
        assert_eq!(SyncJobStatus::Started.completed_at(), None);

        let failed = SyncJobStatus::failed(timestamp(), "timeout");
        assert!(failed.is_terminal());
        assert_eq!(failed.completed_at(), Some(timestamp()));
    }

    #[test]
    fn test_status_serialization() {
        let value = serde_json::to_value(SyncJobStatus::failed(timestamp(), "timeout")).unwrap();
        assert_eq!(
            value,
            json!({
                "state": "failed",
                "timestamp": "2021-05-15T14:30:00Z",
                "reason": "timeout"
            })
        );

        let parsed: SyncJobStatus =
            serde_json::from_value(json!({"state": "in_progress", "completed": 1, "total": 2}))
                .unwrap();
        assert_eq!(
            parsed,
            SyncJobStatus::InProgress {
                completed: 1,
                total: 2
            }
        );
    }
}
