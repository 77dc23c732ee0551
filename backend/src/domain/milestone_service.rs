use anyhow::Result;
use chrono::Utc;
use log::{debug, info, warn};
use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::catalog;
use crate::domain::commands::milestones::{
    CompleteMilestoneCommand, CompleteMilestoneResult, UndoMilestoneCommand, UndoMilestoneResult,
};
use crate::domain::models::completion::CompletionRecord;
use crate::storage::json::{CompletionRepository, JsonConnection};
use crate::storage::traits::CompletionStorage;

/// Service owning the milestone completion store.
///
/// The persisted record list is the sole source of truth; the id set
/// used for membership tests is rebuilt from it on every load and is
/// never incrementally maintained, so the two cannot diverge.
#[derive(Clone)]
pub struct MilestoneService {
    completion_repository: CompletionRepository,
}

impl MilestoneService {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        let completion_repository = CompletionRepository::new(connection);
        Self { completion_repository }
    }

    /// Mark a milestone complete. Idempotent: completing an
    /// already-complete milestone is a no-op, not an error.
    pub fn complete_milestone(&self, command: CompleteMilestoneCommand) -> Result<CompleteMilestoneResult> {
        let definition = catalog::milestone(&command.milestone_id)
            .ok_or_else(|| anyhow::anyhow!("Unknown milestone id: {}", command.milestone_id))?;

        let mut records = self.completion_repository.list_completions()?;
        let previous_count = records.len();

        if let Some(existing) = records.iter().find(|r| r.id == command.milestone_id) {
            debug!("Milestone {} already complete, ignoring", command.milestone_id);
            return Ok(CompleteMilestoneResult {
                record: existing.clone(),
                newly_completed: false,
                previous_count,
                new_count: previous_count,
            });
        }

        let record = CompletionRecord {
            id: command.milestone_id.clone(),
            completed_at: Utc::now(),
            note: command.note,
            photo_uri: command.photo_uri,
            age_at_completion: command.age_at_completion,
        };

        records.push(record.clone());
        self.completion_repository.store_completions(&records)?;

        info!("Completed milestone '{}' ({} total)", definition.title, records.len());

        Ok(CompleteMilestoneResult {
            record,
            newly_completed: true,
            previous_count,
            new_count: previous_count + 1,
        })
    }

    /// Undo a completion. A never-completed id is a no-op.
    pub fn undo_milestone(&self, command: UndoMilestoneCommand) -> Result<UndoMilestoneResult> {
        let mut records = self.completion_repository.list_completions()?;
        let before = records.len();

        records.retain(|r| r.id != command.milestone_id);

        if records.len() == before {
            warn!("Undo for never-completed milestone {}, ignoring", command.milestone_id);
            return Ok(UndoMilestoneResult { removed: false, remaining_count: before });
        }

        self.completion_repository.store_completions(&records)?;
        info!("Undid milestone {} ({} remaining)", command.milestone_id, records.len());

        Ok(UndoMilestoneResult { removed: true, remaining_count: records.len() })
    }

    /// Membership test against the derived completed-id set
    pub fn is_complete(&self, milestone_id: &str) -> Result<bool> {
        Ok(self.completed_ids()?.contains(milestone_id))
    }

    /// The completed-id index, rebuilt from the persisted list
    pub fn completed_ids(&self) -> Result<HashSet<String>> {
        let records = self.completion_repository.list_completions()?;
        Ok(records.into_iter().map(|r| r.id).collect())
    }

    /// All completion records in insertion order
    pub fn list_completions(&self) -> Result<Vec<CompletionRecord>> {
        self.completion_repository.list_completions()
    }
}
