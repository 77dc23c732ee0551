use anyhow::Result;
use log::{debug, warn};
use std::sync::Arc;

use super::connection::JsonConnection;
use crate::domain::models::completion::CompletionRecord;
use crate::storage::traits::CompletionStorage;

const COMPLETIONS_KEY: &str = "milestone_completions.json";

/// JSON-file-backed completion record repository.
///
/// The whole list is persisted on every change; the record count is
/// bounded by the catalog size, so a full rewrite stays cheap.
#[derive(Clone)]
pub struct CompletionRepository {
    connection: Arc<JsonConnection>,
}

impl CompletionRepository {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self { connection }
    }
}

impl CompletionStorage for CompletionRepository {
    fn store_completions(&self, records: &[CompletionRecord]) -> Result<()> {
        self.connection.write_record(COMPLETIONS_KEY, &records)?;
        debug!("Saved {} completion records", records.len());
        Ok(())
    }

    fn list_completions(&self) -> Result<Vec<CompletionRecord>> {
        match self.connection.read_record(COMPLETIONS_KEY) {
            Ok(records) => Ok(records.unwrap_or_default()),
            Err(e) => {
                warn!("Failed to read completion records, falling back to empty list: {}", e);
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    fn setup_test_repo() -> (CompletionRepository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        (CompletionRepository::new(Arc::new(connection)), temp_dir)
    }

    fn record(id: &str) -> CompletionRecord {
        CompletionRecord {
            id: id.to_string(),
            completed_at: Utc::now(),
            note: None,
            photo_uri: None,
            age_at_completion: Some(2),
        }
    }

    #[test]
    fn first_run_lists_empty() {
        let (repo, _temp_dir) = setup_test_repo();
        assert!(repo.list_completions().unwrap().is_empty());
    }

    #[test]
    fn store_and_list_preserves_order() {
        let (repo, _temp_dir) = setup_test_repo();

        let records = vec![record("nb_coos"), record("nb_social_smile")];
        repo.store_completions(&records).unwrap();

        let listed = repo.list_completions().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, "nb_coos");
        assert_eq!(listed[1].id, "nb_social_smile");
    }

    #[test]
    fn optional_fields_survive_round_trip() {
        let (repo, _temp_dir) = setup_test_repo();

        let mut rec = record("nb_lifts_head");
        rec.note = Some("during tummy time!".to_string());
        rec.photo_uri = Some("file:///photos/tummy.jpg".to_string());
        repo.store_completions(&[rec.clone()]).unwrap();

        let listed = repo.list_completions().unwrap();
        assert_eq!(listed[0], rec);
    }

    #[test]
    fn corrupt_record_falls_back_to_empty() {
        let (repo, temp_dir) = setup_test_repo();

        std::fs::write(temp_dir.path().join(COMPLETIONS_KEY), "[{").unwrap();

        assert!(repo.list_completions().unwrap().is_empty());
    }

    #[test]
    fn completions_persist_across_connections() {
        let (repo, temp_dir) = setup_test_repo();
        repo.store_completions(&[record("m5_rolls_over")]).unwrap();

        let connection2 = JsonConnection::new(temp_dir.path()).unwrap();
        let repo2 = CompletionRepository::new(Arc::new(connection2));
        assert_eq!(repo2.list_completions().unwrap().len(), 1);
    }
}
