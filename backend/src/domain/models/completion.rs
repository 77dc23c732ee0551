use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded completion of a single milestone.
///
/// At most one record exists per milestone id: re-completing is a
/// no-op and undoing removes the record. The persisted list of these
/// records is the sole source of truth for completion state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// Milestone id from the static catalog
    pub id: String,
    pub completed_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_uri: Option<String>,
    /// Age in whole months when the milestone was marked complete
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_at_completion: Option<i32>,
}
