//! The tracker context: one explicit object owning every service, built
//! from an injected storage connection and handed to whatever component
//! tree needs it. Lifecycle is init (wire services over the connection),
//! mutate (user actions), flush (each mutation persists immediately).
//! There are no ambient module-level singletons.

use anyhow::Result;
use chrono::{Local, NaiveDate, Utc};
use log::info;
use std::sync::Arc;

use crate::domain::age;
use crate::domain::badge_service::{self, BadgeService};
use crate::domain::commands::milestones::{CompleteMilestoneCommand, UndoMilestoneCommand};
use crate::domain::commands::profile::SetupProfileCommand;
use crate::domain::mappers;
use crate::domain::milestone_service::MilestoneService;
use crate::domain::profile_service::ProfileService;
use crate::domain::streak_service::StreakService;
use crate::storage::json::JsonConnection;

/// Façade the presentation layer drives. All user actions
/// (`setup_profile`, `complete_milestone`, `undo_milestone`,
/// `daily_check_in`) and all derived views (`checklist`, `badges`,
/// `keepsakes`) go through here.
#[derive(Clone)]
pub struct TrackerContext {
    profile_service: ProfileService,
    milestone_service: MilestoneService,
    streak_service: StreakService,
    badge_service: BadgeService,
}

impl TrackerContext {
    /// Wire the services over an injected connection
    pub fn init(connection: Arc<JsonConnection>) -> Self {
        info!("Initializing tracker context at {:?}", connection.base_directory());
        Self {
            profile_service: ProfileService::new(Arc::clone(&connection)),
            milestone_service: MilestoneService::new(Arc::clone(&connection)),
            streak_service: StreakService::new(Arc::clone(&connection)),
            badge_service: BadgeService::new(connection),
        }
    }

    /// Wire the services over the default data directory
    pub fn init_default() -> Result<Self> {
        Ok(Self::init(Arc::new(JsonConnection::new_default()?)))
    }

    /// Create or edit the baby profile
    pub fn setup_profile(&self, request: shared::SetupProfileRequest) -> Result<shared::SetupProfileResponse> {
        let result = self.profile_service.setup_profile(SetupProfileCommand {
            name: request.name,
            date_of_birth: request.date_of_birth,
        })?;

        Ok(shared::SetupProfileResponse {
            profile: mappers::to_profile_dto(&result.profile),
            success_message: result.success_message,
        })
    }

    /// The stored profile, None before first setup
    pub fn profile(&self) -> Result<Option<shared::BabyProfile>> {
        Ok(self.profile_service.get_profile()?.as_ref().map(mappers::to_profile_dto))
    }

    /// The full checklist view for the current clock; None before a
    /// profile is set up, since there is no age to classify against
    pub fn checklist(&self) -> Result<Option<shared::ChecklistResponse>> {
        self.checklist_at(Local::now().date_naive(), Utc::now())
    }

    fn checklist_at(
        &self,
        today: NaiveDate,
        now: chrono::DateTime<Utc>,
    ) -> Result<Option<shared::ChecklistResponse>> {
        let profile = match self.profile_service.get_profile()? {
            Some(profile) => profile,
            None => return Ok(None),
        };

        let age_months = age::age_in_whole_months(profile.date_of_birth, today);
        let age_days = age::age_in_days(profile.date_of_birth, now);
        let classification = age::classify_bands(age_months);
        let completions = self.milestone_service.list_completions()?;

        Ok(Some(mappers::to_checklist_response(
            age_months,
            age_days,
            &classification,
            &completions,
        )))
    }

    /// Mark a milestone complete and report any badges or completion
    /// thresholds this crossed, each celebrated exactly once
    pub fn complete_milestone(
        &self,
        request: shared::CompleteMilestoneRequest,
    ) -> Result<shared::CompleteMilestoneResponse> {
        let age_at_completion = self
            .profile_service
            .get_profile()?
            .map(|p| age::age_in_whole_months(p.date_of_birth, Local::now().date_naive()));

        let result = self.milestone_service.complete_milestone(CompleteMilestoneCommand {
            milestone_id: request.milestone_id.clone(),
            note: request.note,
            photo_uri: request.photo_uri,
            age_at_completion,
        })?;

        let completions = self.milestone_service.list_completions()?;
        let streak = self.streak_service.current_streak()?;
        let refresh = self.badge_service.refresh(&completions, &streak)?;

        let crossed_thresholds = if result.newly_completed {
            badge_service::newly_crossed_thresholds(result.previous_count, result.new_count)
        } else {
            Vec::new()
        };

        let success_message = if result.newly_completed {
            format!("Milestone '{}' marked complete", request.milestone_id)
        } else {
            format!("Milestone '{}' was already complete", request.milestone_id)
        };

        Ok(shared::CompleteMilestoneResponse {
            newly_completed: result.newly_completed,
            completed_count: result.new_count,
            newly_earned_badges: mappers::to_earned_badge_views(&refresh.newly_earned),
            crossed_thresholds,
            success_message,
        })
    }

    /// Undo a completion; a never-completed id is a quiet no-op
    pub fn undo_milestone(&self, request: shared::UndoMilestoneRequest) -> Result<shared::UndoMilestoneResponse> {
        let result = self
            .milestone_service
            .undo_milestone(UndoMilestoneCommand { milestone_id: request.milestone_id })?;

        Ok(shared::UndoMilestoneResponse {
            removed: result.removed,
            completed_count: result.remaining_count,
        })
    }

    /// Evaluate the once-per-day check-in against the device-local date
    pub fn daily_check_in(&self) -> Result<shared::CheckInResponse> {
        self.daily_check_in_on(Local::now().date_naive())
    }

    fn daily_check_in_on(&self, today: NaiveDate) -> Result<shared::CheckInResponse> {
        let result = self.streak_service.daily_check_in_on(today)?;

        let success_message = if result.already_checked_in {
            "Already checked in today".to_string()
        } else {
            format!("Checked in! {} day streak", result.streak.current_streak)
        };

        Ok(shared::CheckInResponse {
            streak: mappers::to_streak_summary(&result.streak),
            already_checked_in: result.already_checked_in,
            success_message,
        })
    }

    /// Re-evaluate the badge set; newly earned ids are reported once
    pub fn badges(&self) -> Result<shared::BadgesResponse> {
        let completions = self.milestone_service.list_completions()?;
        let streak = self.streak_service.current_streak()?;
        let refresh = self.badge_service.refresh(&completions, &streak)?;

        Ok(shared::BadgesResponse {
            badges: mappers::to_badge_views(&refresh.earned),
            newly_earned: refresh.newly_earned,
        })
    }

    /// Birth-date keepsake facts; None before a profile is set up
    pub fn keepsakes(&self) -> Result<Option<shared::KeepsakeSummary>> {
        Ok(self
            .profile_service
            .get_profile()?
            .as_ref()
            .map(mappers::to_keepsake_summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Duration, Months};
    use tempfile::TempDir;

    fn setup_test() -> (TrackerContext, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let conn = JsonConnection::new(temp_dir.path()).unwrap();
        (TrackerContext::init(Arc::new(conn)), temp_dir)
    }

    fn setup_profile_born_months_ago(ctx: &TrackerContext, months: u32) -> NaiveDate {
        let birth = Local::now()
            .date_naive()
            .checked_sub_months(Months::new(months))
            .unwrap();
        ctx.setup_profile(shared::SetupProfileRequest {
            name: "Willow".to_string(),
            date_of_birth: birth.format("%Y-%m-%d").to_string(),
        })
        .unwrap();
        birth
    }

    #[test]
    fn checklist_is_none_before_setup() {
        let (ctx, _temp_dir) = setup_test();
        assert!(ctx.checklist().unwrap().is_none());
        assert!(ctx.keepsakes().unwrap().is_none());
        assert!(ctx.profile().unwrap().is_none());
    }

    #[test]
    fn six_month_old_gets_the_five_six_band() {
        let (ctx, _temp_dir) = setup_test();
        setup_profile_born_months_ago(&ctx, 6);

        let checklist = ctx.checklist().unwrap().unwrap();
        assert_eq!(checklist.age_months, 6);
        assert_eq!(checklist.current_band_id.as_deref(), Some("band_5_6"));
    }

    #[test]
    fn completing_records_age_and_celebrates_thresholds() {
        let (ctx, _temp_dir) = setup_test();
        setup_profile_born_months_ago(&ctx, 1);

        let response = ctx
            .complete_milestone(shared::CompleteMilestoneRequest {
                milestone_id: "nb_coos".to_string(),
                note: None,
                photo_uri: None,
            })
            .unwrap();

        assert!(response.newly_completed);
        assert_eq!(response.completed_count, 1);
        assert_eq!(response.crossed_thresholds, vec![1]);
        // Completed at one month, a month before the typical age of two
        assert!(response.newly_earned_badges.iter().any(|b| b.id == "first_milestone"));
        assert!(response.newly_earned_badges.iter().any(|b| b.id == "early_bird"));

        // Re-completing is a no-op and celebrates nothing
        let repeat = ctx
            .complete_milestone(shared::CompleteMilestoneRequest {
                milestone_id: "nb_coos".to_string(),
                note: None,
                photo_uri: None,
            })
            .unwrap();
        assert!(!repeat.newly_completed);
        assert_eq!(repeat.completed_count, 1);
        assert!(repeat.crossed_thresholds.is_empty());
        assert!(repeat.newly_earned_badges.is_empty());
    }

    #[test]
    fn badges_do_not_recelebrate_across_restart() {
        let (ctx, temp_dir) = setup_test();
        setup_profile_born_months_ago(&ctx, 1);

        ctx.complete_milestone(shared::CompleteMilestoneRequest {
            milestone_id: "nb_coos".to_string(),
            note: None,
            photo_uri: None,
        })
        .unwrap();

        // Fresh context over the same storage, as after an app restart
        let conn = JsonConnection::new(temp_dir.path()).unwrap();
        let restarted = TrackerContext::init(Arc::new(conn));

        let badges = restarted.badges().unwrap();
        assert!(badges.badges.iter().find(|b| b.id == "first_milestone").unwrap().earned);
        assert!(badges.newly_earned.is_empty());
    }

    #[test]
    fn undo_then_checklist_reflects_the_removal() {
        let (ctx, _temp_dir) = setup_test();
        setup_profile_born_months_ago(&ctx, 6);

        ctx.complete_milestone(shared::CompleteMilestoneRequest {
            milestone_id: "m5_rolls_over".to_string(),
            note: None,
            photo_uri: None,
        })
        .unwrap();

        let response = ctx
            .undo_milestone(shared::UndoMilestoneRequest { milestone_id: "m5_rolls_over".to_string() })
            .unwrap();
        assert!(response.removed);
        assert_eq!(response.completed_count, 0);

        let checklist = ctx.checklist().unwrap().unwrap();
        let band = checklist.bands.iter().find(|b| b.band_id == "band_5_6").unwrap();
        assert_eq!(band.completed_count, 0);

        let missing = ctx
            .undo_milestone(shared::UndoMilestoneRequest { milestone_id: "m5_rolls_over".to_string() })
            .unwrap();
        assert!(!missing.removed);
    }

    #[test]
    fn daily_check_in_continues_across_days() {
        let (ctx, _temp_dir) = setup_test();
        let today = Local::now().date_naive();

        let first = ctx.daily_check_in_on(today).unwrap();
        assert!(!first.already_checked_in);
        assert_eq!(first.streak.current_streak, 1);

        let again = ctx.daily_check_in_on(today).unwrap();
        assert!(again.already_checked_in);

        let tomorrow = ctx.daily_check_in_on(today + Duration::days(1)).unwrap();
        assert_eq!(tomorrow.streak.current_streak, 2);
        assert_eq!(tomorrow.streak.longest_streak, 2);
    }

    #[test]
    fn keepsakes_follow_the_birth_date() {
        let (ctx, _temp_dir) = setup_test();
        ctx.setup_profile(shared::SetupProfileRequest {
            name: "Willow".to_string(),
            date_of_birth: "2026-02-07".to_string(),
        })
        .unwrap();

        let keepsakes = ctx.keepsakes().unwrap().unwrap();
        assert_eq!(keepsakes.zodiac_sign, "Aquarius");
        assert_eq!(keepsakes.birthstone, "Amethyst");

        let profile = ctx.profile().unwrap().unwrap();
        assert_eq!(profile.date_of_birth, "2026-02-07");
        assert_eq!(profile.name, "Willow");
        // Sanity check the stored month survives the round trip
        assert_eq!(
            NaiveDate::parse_from_str(&profile.date_of_birth, "%Y-%m-%d").unwrap().month(),
            2
        );
    }
}
