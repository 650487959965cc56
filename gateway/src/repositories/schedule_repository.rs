//! Store for the recurring delivery configuration.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Delivery cadence options for the recurring newsletter send.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

/// Recurring delivery configuration shown on the scheduler page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    pub enabled: bool,
    pub frequency: Frequency,
    pub time: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        ScheduleConfig {
            enabled: true,
            frequency: Frequency::Weekly,
            time: "09:00".to_string(),
        }
    }
}

/// Partial update merged over the stored configuration.
#[derive(Debug, Default, Deserialize)]
pub struct ScheduleConfigPatch {
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub frequency: Option<Frequency>,
    #[serde(default)]
    pub time: Option<String>,
}

#[async_trait]
pub trait ScheduleStore: Send + Sync {
    async fn get(&self) -> ScheduleConfig;
    async fn update(&self, patch: ScheduleConfigPatch) -> ScheduleConfig;
}

/// Synchronized in-memory store.
#[derive(Default)]
pub struct InMemoryScheduleStore {
    state: RwLock<ScheduleConfig>,
}

#[async_trait]
impl ScheduleStore for InMemoryScheduleStore {
    async fn get(&self) -> ScheduleConfig {
        self.state.read().await.clone()
    }

    async fn update(&self, patch: ScheduleConfigPatch) -> ScheduleConfig {
        let mut state = self.state.write().await;
        if let Some(enabled) = patch.enabled {
            state.enabled = enabled;
        }
        if let Some(frequency) = patch.frequency {
            state.frequency = frequency;
        }
        if let Some(time) = patch.time {
            state.time = time;
        }
        state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_defaults() {
        let store = InMemoryScheduleStore::default();
        let config = store.get().await;

        assert!(config.enabled);
        assert_eq!(config.frequency, Frequency::Weekly);
        assert_eq!(config.time, "09:00");
    }

    #[tokio::test]
    async fn test_partial_update_merges() {
        let store = InMemoryScheduleStore::default();
        let updated = store
            .update(ScheduleConfigPatch {
                enabled: Some(false),
                frequency: None,
                time: None,
            })
            .await;

        assert!(!updated.enabled);
        assert_eq!(updated.frequency, Frequency::Weekly);
        assert_eq!(updated.time, "09:00");

        let updated = store
            .update(ScheduleConfigPatch {
                enabled: None,
                frequency: Some(Frequency::Daily),
                time: Some("06:30".to_string()),
            })
            .await;

        assert!(!updated.enabled);
        assert_eq!(updated.frequency, Frequency::Daily);
        assert_eq!(updated.time, "06:30");
    }

    #[test]
    fn test_frequency_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(Frequency::Weekly).unwrap(),
            serde_json::json!("weekly")
        );
    }
}
