use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// `voice_id` and `messages` are kept exactly as the client sent them,
/// absent fields included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationRecord {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

/// Append-only, in-memory conversation log. Contents are lost on restart.
#[derive(Default)]
pub struct ConversationStore {
    records: RwLock<Vec<ConversationRecord>>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(
        &self,
        voice_id: Option<String>,
        messages: Option<serde_json::Value>,
    ) -> ConversationRecord {
        let record = ConversationRecord {
            id: Uuid::new_v4(),
            voice_id,
            messages,
            created_at: Utc::now(),
        };

        // Records are never edited in place, so a poisoned lock still guards a valid log.
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());

        record
    }

    /// All records in insertion order.
    pub fn list_all(&self) -> Vec<ConversationRecord> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
