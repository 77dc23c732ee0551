use anyhow::Result;
use log::{debug, warn};
use std::sync::Arc;

use super::connection::JsonConnection;
use crate::storage::traits::BadgeStateStorage;

const BADGES_SEEN_KEY: &str = "badges_seen.json";

/// JSON-file-backed record of badge ids already celebrated.
///
/// Earned badges are always derived; this record only guards the
/// one-time unlock celebration against re-firing after a restart.
#[derive(Clone)]
pub struct BadgeStateRepository {
    connection: Arc<JsonConnection>,
}

impl BadgeStateRepository {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self { connection }
    }
}

impl BadgeStateStorage for BadgeStateRepository {
    fn store_seen_badges(&self, badge_ids: &[String]) -> Result<()> {
        self.connection.write_record(BADGES_SEEN_KEY, &badge_ids)?;
        debug!("Saved {} seen badge ids", badge_ids.len());
        Ok(())
    }

    fn get_seen_badges(&self) -> Result<Vec<String>> {
        match self.connection.read_record(BADGES_SEEN_KEY) {
            Ok(ids) => Ok(ids.unwrap_or_default()),
            Err(e) => {
                warn!("Failed to read seen badges, falling back to empty set: {}", e);
                Ok(Vec::new())
            }
        }
    }
}
