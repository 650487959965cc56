//! Store for the reader-facing subscription snapshot.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Last known subscription state rendered by the settings page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionSnapshot {
    pub subscribed: bool,
    pub topics: Vec<String>,
    #[serde(rename = "totalReceived")]
    pub total_received: u32,
}

impl Default for SubscriptionSnapshot {
    fn default() -> Self {
        SubscriptionSnapshot {
            subscribed: true,
            topics: vec!["AI".to_string(), "ML".to_string(), "NLP".to_string()],
            total_received: 12,
        }
    }
}

#[async_trait]
pub trait SubscriptionStore: Send + Sync {
    async fn get(&self) -> SubscriptionSnapshot;
    /// Records the outcome of a subscribe/unsubscribe call.
    async fn set_subscribed(&self, subscribed: bool) -> SubscriptionSnapshot;
}

/// Synchronized in-memory store.
#[derive(Default)]
pub struct InMemorySubscriptionStore {
    state: RwLock<SubscriptionSnapshot>,
}

#[async_trait]
impl SubscriptionStore for InMemorySubscriptionStore {
    async fn get(&self) -> SubscriptionSnapshot {
        self.state.read().await.clone()
    }

    async fn set_subscribed(&self, subscribed: bool) -> SubscriptionSnapshot {
        let mut state = self.state.write().await;
        state.subscribed = subscribed;
        state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_subscribed_round_trip() {
        let store = InMemorySubscriptionStore::default();
        assert!(store.get().await.subscribed);

        let snapshot = store.set_subscribed(false).await;
        assert!(!snapshot.subscribed);
        assert_eq!(snapshot.total_received, 12);
        assert!(!store.get().await.subscribed);
    }

    #[test]
    fn test_snapshot_field_names() {
        let json = serde_json::to_value(SubscriptionSnapshot::default()).unwrap();
        assert_eq!(json["totalReceived"], 12);
        assert_eq!(json["topics"][0], "AI");
    }
}
