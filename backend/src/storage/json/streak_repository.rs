use anyhow::Result;
use log::{debug, warn};
use std::sync::Arc;

use super::connection::JsonConnection;
use crate::domain::models::streak::StreakState;
use crate::storage::traits::StreakStorage;

const STREAK_KEY: &str = "streak.json";

/// JSON-file-backed streak state repository
#[derive(Clone)]
pub struct StreakRepository {
    connection: Arc<JsonConnection>,
}

impl StreakRepository {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self { connection }
    }
}

impl StreakStorage for StreakRepository {
    fn store_streak(&self, state: &StreakState) -> Result<()> {
        self.connection.write_record(STREAK_KEY, state)?;
        debug!(
            "Saved streak: current={} longest={} total={}",
            state.current_streak, state.longest_streak, state.total_check_ins
        );
        Ok(())
    }

    fn get_streak(&self) -> Result<StreakState> {
        match self.connection.read_record(STREAK_KEY) {
            Ok(state) => Ok(state.unwrap_or_default()),
            Err(e) => {
                warn!("Failed to read streak record, falling back to default: {}", e);
                Ok(StreakState::default())
            }
        }
    }
}
