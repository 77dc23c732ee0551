//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow
//! different storage backends to be used interchangeably in the domain
//! layer. All operations are synchronous: persistence is local file
//! I/O with a single in-process owner, so there is nothing to await.

use anyhow::Result;

use crate::domain::models::completion::CompletionRecord;
use crate::domain::models::profile::BabyProfile;
use crate::domain::models::streak::StreakState;

/// Trait defining the interface for baby profile storage.
///
/// The profile is a single record: storing overwrites any previous
/// value, and a missing record is indistinguishable from first run.
pub trait ProfileStorage: Send + Sync {
    /// Store (or overwrite) the profile record
    fn store_profile(&self, profile: &BabyProfile) -> Result<()>;

    /// Retrieve the profile record, None on first run
    fn get_profile(&self) -> Result<Option<BabyProfile>>;
}

/// Trait defining the interface for completion record storage.
///
/// The persisted list is the sole source of truth; callers persist the
/// full list on every change and derive any lookup indexes from it.
pub trait CompletionStorage: Send + Sync {
    /// Persist the full completion list, replacing the previous one
    fn store_completions(&self, records: &[CompletionRecord]) -> Result<()>;

    /// List all completion records in insertion order
    fn list_completions(&self) -> Result<Vec<CompletionRecord>>;
}

/// Trait defining the interface for streak state storage.
pub trait StreakStorage: Send + Sync {
    /// Persist the streak record, replacing the previous one
    fn store_streak(&self, state: &StreakState) -> Result<()>;

    /// Retrieve the streak record, default (all zero) on first run
    fn get_streak(&self) -> Result<StreakState>;
}

/// Trait defining the interface for the seen-badge record.
///
/// Badges themselves are derived, never stored; this record only
/// remembers which badge ids have already been celebrated so unlock
/// events cannot re-fire across app restarts.
pub trait BadgeStateStorage: Send + Sync {
    /// Persist the set of celebrated badge ids
    fn store_seen_badges(&self, badge_ids: &[String]) -> Result<()>;

    /// Retrieve the celebrated badge ids, empty on first run
    fn get_seen_badges(&self) -> Result<Vec<String>>;
}
