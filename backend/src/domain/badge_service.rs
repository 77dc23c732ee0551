//! Badge evaluation.
//!
//! Earned badges are a pure function of current state, recomputed on
//! every evaluation and never persisted as truth. Only the set of
//! already-celebrated badge ids is persisted, so the one-time unlock
//! celebration survives app restarts without re-firing.

use anyhow::Result;
use log::info;
use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::catalog;
use crate::domain::commands::badges::BadgeRefreshResult;
use crate::domain::models::badge::BadgeRequirement;
use crate::domain::models::completion::CompletionRecord;
use crate::domain::models::milestone::MilestoneCategory;
use crate::domain::models::streak::StreakState;
use crate::storage::json::{BadgeStateRepository, JsonConnection};
use crate::storage::traits::BadgeStateStorage;

/// Evaluate every badge rule against current state. Returns earned
/// badge ids in catalog order.
pub fn evaluate_badges(completions: &[CompletionRecord], streak: &StreakState) -> Vec<String> {
    let completed_ids: HashSet<&str> = completions.iter().map(|r| r.id.as_str()).collect();

    catalog::BADGES
        .iter()
        .filter(|badge| requirement_met(&badge.requirement, completions, streak, &completed_ids))
        .map(|badge| badge.id.to_string())
        .collect()
}

fn requirement_met(
    requirement: &BadgeRequirement,
    completions: &[CompletionRecord],
    streak: &StreakState,
    completed_ids: &HashSet<&str>,
) -> bool {
    match requirement {
        BadgeRequirement::TotalCompletions { threshold } => completions.len() >= *threshold,
        BadgeRequirement::StreakLength { threshold } => streak.current_streak >= *threshold,
        BadgeRequirement::EarlyCompletion => completions.iter().any(|record| {
            match (record.age_at_completion, catalog::milestone(&record.id)) {
                (Some(age), Some(m)) => age < m.typical_month as i32,
                _ => false,
            }
        }),
        BadgeRequirement::PhotosAttached { threshold } => {
            completions.iter().filter(|r| r.photo_uri.is_some()).count() >= *threshold
        }
        BadgeRequirement::FullBandComplete => catalog::AGE_BANDS
            .iter()
            .any(|band| band_fully_complete(band.id, completed_ids)),
        BadgeRequirement::CategoryCompleteInBand => catalog::AGE_BANDS.iter().any(|band| {
            MilestoneCategory::ALL
                .iter()
                .any(|category| category_complete_in_band(band.id, *category, completed_ids))
        }),
    }
}

fn band_fully_complete(band_id: &str, completed_ids: &HashSet<&str>) -> bool {
    let mut milestones = catalog::milestones_in_band(band_id).peekable();
    milestones.peek().is_some() && milestones.all(|m| completed_ids.contains(m.id))
}

fn category_complete_in_band(
    band_id: &str,
    category: MilestoneCategory,
    completed_ids: &HashSet<&str>,
) -> bool {
    let mut milestones = catalog::milestones_in_band(band_id)
        .filter(|m| m.category == category)
        .peekable();
    milestones.peek().is_some() && milestones.all(|m| completed_ids.contains(m.id))
}

/// Completion-count thresholds newly crossed by moving from
/// `previous_count` to `new_count`: every fixed threshold `t` with
/// `previous_count < t <= new_count`. Used to fire the celebratory
/// notification exactly once per threshold.
pub fn newly_crossed_thresholds(previous_count: usize, new_count: usize) -> Vec<usize> {
    catalog::TOTAL_COMPLETION_THRESHOLDS
        .iter()
        .copied()
        .filter(|t| previous_count < *t && *t <= new_count)
        .collect()
}

/// Service owning the celebrated-badge record
#[derive(Clone)]
pub struct BadgeService {
    badge_state_repository: BadgeStateRepository,
}

impl BadgeService {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        let badge_state_repository = BadgeStateRepository::new(connection);
        Self { badge_state_repository }
    }

    /// Re-evaluate the earned set and diff it against the persisted
    /// seen set. Newly earned ids are added to the seen record so they
    /// celebrate exactly once, even if later lost to an undo and
    /// earned again.
    pub fn refresh(&self, completions: &[CompletionRecord], streak: &StreakState) -> Result<BadgeRefreshResult> {
        let earned = evaluate_badges(completions, streak);

        let mut seen = self.badge_state_repository.get_seen_badges()?;
        let seen_set: HashSet<&str> = seen.iter().map(String::as_str).collect();

        let newly_earned: Vec<String> = earned
            .iter()
            .filter(|id| !seen_set.contains(id.as_str()))
            .cloned()
            .collect();

        if !newly_earned.is_empty() {
            info!("Newly earned badges: {:?}", newly_earned);
            seen.extend(newly_earned.iter().cloned());
            self.badge_state_repository.store_seen_badges(&seen)?;
        }

        Ok(BadgeRefreshResult { earned, newly_earned })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::tempdir;

    fn record(id: &str) -> CompletionRecord {
        CompletionRecord {
            id: id.to_string(),
            completed_at: Utc::now(),
            note: None,
            photo_uri: None,
            age_at_completion: None,
        }
    }

    fn records(ids: &[&str]) -> Vec<CompletionRecord> {
        ids.iter().map(|id| record(id)).collect()
    }

    fn no_streak() -> StreakState {
        StreakState::default()
    }

    #[test]
    fn total_completion_badges_follow_count() {
        let earned = evaluate_badges(&records(&["nb_coos"]), &no_streak());
        assert!(earned.contains(&"first_milestone".to_string()));
        assert!(!earned.contains(&"five_milestones".to_string()));

        let five = records(&["nb_coos", "nb_lifts_head", "nb_social_smile", "nb_follows_faces", "nb_grasps_finger"]);
        let earned = evaluate_badges(&five, &no_streak());
        assert!(earned.contains(&"five_milestones".to_string()));
    }

    #[test]
    fn streak_badges_follow_current_streak() {
        let streak = StreakState {
            current_streak: 7,
            longest_streak: 7,
            last_check_in: None,
            total_check_ins: 7,
        };

        let earned = evaluate_badges(&[], &streak);
        assert!(earned.contains(&"three_day_streak".to_string()));
        assert!(earned.contains(&"week_streak".to_string()));
        assert!(!earned.contains(&"month_streak".to_string()));
    }

    #[test]
    fn early_completion_requires_age_before_typical() {
        // nb_coos is typical at 2 months
        let mut rec = record("nb_coos");
        rec.age_at_completion = Some(1);
        let earned = evaluate_badges(&[rec], &no_streak());
        assert!(earned.contains(&"early_bird".to_string()));

        let mut rec = record("nb_coos");
        rec.age_at_completion = Some(2);
        let earned = evaluate_badges(&[rec], &no_streak());
        assert!(!earned.contains(&"early_bird".to_string()));

        // Without a recorded age there is nothing to compare
        let earned = evaluate_badges(&[record("nb_coos")], &no_streak());
        assert!(!earned.contains(&"early_bird".to_string()));
    }

    #[test]
    fn photo_badge_counts_photo_references() {
        let mut recs = records(&["nb_coos", "nb_lifts_head", "nb_social_smile", "nb_follows_faces", "nb_grasps_finger"]);
        for rec in recs.iter_mut().take(4) {
            rec.photo_uri = Some("file:///p.jpg".to_string());
        }
        let earned = evaluate_badges(&recs, &no_streak());
        assert!(!earned.contains(&"memory_keeper".to_string()));

        recs[4].photo_uri = Some("file:///p5.jpg".to_string());
        let earned = evaluate_badges(&recs, &no_streak());
        assert!(earned.contains(&"memory_keeper".to_string()));
    }

    #[test]
    fn full_band_flips_on_the_last_milestone() {
        // band_10_12 has seven milestones
        let all: Vec<&str> = catalog::milestones_in_band("band_10_12").map(|m| m.id).collect();
        assert_eq!(all.len(), 7);

        let six = records(&all[..6]);
        let earned = evaluate_badges(&six, &no_streak());
        assert!(!earned.contains(&"band_champion".to_string()));

        let seven = records(&all);
        let earned = evaluate_badges(&seven, &no_streak());
        assert!(earned.contains(&"band_champion".to_string()));
    }

    #[test]
    fn category_complete_needs_every_milestone_of_the_category() {
        // band_7_9 has two physical milestones
        let earned = evaluate_badges(&records(&["m7_sits_unsupported"]), &no_streak());
        // sits alone leaves crawling open, but the single-milestone
        // cognitive category of the band is untouched too
        assert!(!earned.contains(&"category_specialist".to_string()));

        let earned = evaluate_badges(&records(&["m7_sits_unsupported", "m7_crawls"]), &no_streak());
        assert!(earned.contains(&"category_specialist".to_string()));
    }

    #[test]
    fn crossing_detection_fires_once_per_threshold() {
        assert_eq!(newly_crossed_thresholds(0, 1), vec![1]);
        assert_eq!(newly_crossed_thresholds(4, 5), vec![5]);
        assert_eq!(newly_crossed_thresholds(5, 6), Vec::<usize>::new());
        assert_eq!(newly_crossed_thresholds(4, 12), vec![5, 10]);
        assert_eq!(newly_crossed_thresholds(1, 1), Vec::<usize>::new());
    }

    #[test]
    fn refresh_celebrates_each_badge_once() {
        let temp_dir = tempdir().unwrap();
        let conn = JsonConnection::new(temp_dir.path().to_path_buf()).unwrap();
        let service = BadgeService::new(Arc::new(conn));

        let one = records(&["nb_coos"]);
        let result = service.refresh(&one, &no_streak()).unwrap();
        assert!(result.newly_earned.contains(&"first_milestone".to_string()));

        // Same state again: earned, but nothing newly earned
        let result = service.refresh(&one, &no_streak()).unwrap();
        assert!(result.earned.contains(&"first_milestone".to_string()));
        assert!(result.newly_earned.is_empty());
    }

    #[test]
    fn fifth_completion_earns_the_badge_exactly_once() {
        let temp_dir = tempdir().unwrap();
        let conn = JsonConnection::new(temp_dir.path().to_path_buf()).unwrap();
        let service = BadgeService::new(Arc::new(conn));

        let ids = ["nb_coos", "nb_lifts_head", "nb_social_smile", "nb_follows_faces", "nb_grasps_finger", "m3_laughs"];

        let four = records(&ids[..4]);
        let result = service.refresh(&four, &no_streak()).unwrap();
        assert!(!result.earned.contains(&"five_milestones".to_string()));
        assert_eq!(newly_crossed_thresholds(3, 4), Vec::<usize>::new());

        // The fourth-to-fifth transition crosses the threshold
        let five = records(&ids[..5]);
        let result = service.refresh(&five, &no_streak()).unwrap();
        assert!(result.newly_earned.contains(&"five_milestones".to_string()));
        assert_eq!(newly_crossed_thresholds(4, 5), vec![5]);

        // The sixth completion does not re-trigger it
        let six = records(&ids);
        let result = service.refresh(&six, &no_streak()).unwrap();
        assert!(result.earned.contains(&"five_milestones".to_string()));
        assert!(!result.newly_earned.contains(&"five_milestones".to_string()));
        assert_eq!(newly_crossed_thresholds(5, 6), Vec::<usize>::new());
    }

    #[test]
    fn refresh_does_not_recelebrate_after_undo_and_redo() {
        let temp_dir = tempdir().unwrap();
        let conn = JsonConnection::new(temp_dir.path().to_path_buf()).unwrap();
        let service = BadgeService::new(Arc::new(conn));

        service.refresh(&records(&["nb_coos"]), &no_streak()).unwrap();

        // Undo drops the earned set to empty
        let result = service.refresh(&[], &no_streak()).unwrap();
        assert!(result.earned.is_empty());
        assert!(result.newly_earned.is_empty());

        // Re-earning the badge stays silent
        let result = service.refresh(&records(&["nb_coos"]), &no_streak()).unwrap();
        assert!(result.earned.contains(&"first_milestone".to_string()));
        assert!(result.newly_earned.is_empty());
    }

    #[test]
    fn seen_badges_persist_across_service_instances() {
        let temp_dir = tempdir().unwrap();
        let conn = JsonConnection::new(temp_dir.path().to_path_buf()).unwrap();
        let service = BadgeService::new(Arc::new(conn));
        service.refresh(&records(&["nb_coos"]), &no_streak()).unwrap();

        // Simulated app restart
        let conn2 = JsonConnection::new(temp_dir.path()).unwrap();
        let service2 = BadgeService::new(Arc::new(conn2));
        let result = service2.refresh(&records(&["nb_coos"]), &no_streak()).unwrap();
        assert!(result.newly_earned.is_empty());
    }
}
