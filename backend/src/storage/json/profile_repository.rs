use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;

use super::connection::JsonConnection;
use crate::domain::models::profile::BabyProfile;
use crate::storage::traits::ProfileStorage;

const PROFILE_KEY: &str = "baby_profile.json";

/// JSON-file-backed baby profile repository
#[derive(Clone)]
pub struct ProfileRepository {
    connection: Arc<JsonConnection>,
}

impl ProfileRepository {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self { connection }
    }
}

impl ProfileStorage for ProfileRepository {
    fn store_profile(&self, profile: &BabyProfile) -> Result<()> {
        self.connection.write_record(PROFILE_KEY, profile)?;
        info!("Saved profile for {}", profile.name);
        Ok(())
    }

    /// A failed read is treated as "no data yet", indistinguishable
    /// from first run: log and fall back rather than block the app.
    fn get_profile(&self) -> Result<Option<BabyProfile>> {
        match self.connection.read_record(PROFILE_KEY) {
            Ok(profile) => Ok(profile),
            Err(e) => {
                warn!("Failed to read profile record, falling back to first-run state: {}", e);
                Ok(None)
            }
        }
    }
}
