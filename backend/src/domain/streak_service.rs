//! Daily check-in streak tracking.
//!
//! The transition is evaluated once per app launch against the
//! device-local calendar date. Dates are compared by ISO date equality
//! only; there is no timezone normalization and no retroactive
//! correction for a wrong device clock. That coarseness is a recorded
//! design limitation, not something to silently fix here.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use log::{debug, info};
use std::sync::Arc;

use crate::domain::commands::streak::DailyCheckInResult;
use crate::domain::models::streak::{CheckInStatus, StreakState};
use crate::storage::json::{JsonConnection, StreakRepository};
use crate::storage::traits::StreakStorage;

/// One evaluation of the check-in rule against a concrete date.
///
/// - already checked in today: state unchanged
/// - last check-in was yesterday: the streak continues
/// - anything else (first ever, or a gap of two or more days): the
///   streak restarts at one
pub fn evaluate_check_in(state: &StreakState, today: NaiveDate) -> (StreakState, CheckInStatus) {
    let status = state.status(today);
    let mut next = state.clone();

    match status {
        CheckInStatus::CheckedInToday => {}
        CheckInStatus::CheckedInYesterday => {
            next.current_streak += 1;
            next.longest_streak = next.longest_streak.max(next.current_streak);
            next.last_check_in = Some(today);
            next.total_check_ins += 1;
        }
        CheckInStatus::NoCheckInYet | CheckInStatus::StreakBroken => {
            next.current_streak = 1;
            next.longest_streak = next.longest_streak.max(1);
            next.last_check_in = Some(today);
            next.total_check_ins += 1;
        }
    }

    (next, status)
}

/// Service owning the persisted streak record
#[derive(Clone)]
pub struct StreakService {
    streak_repository: StreakRepository,
}

impl StreakService {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        let streak_repository = StreakRepository::new(connection);
        Self { streak_repository }
    }

    /// Run the once-per-launch check-in against today's local date
    pub fn daily_check_in(&self) -> Result<DailyCheckInResult> {
        self.daily_check_in_on(Local::now().date_naive())
    }

    /// Run the check-in against an explicit date
    pub fn daily_check_in_on(&self, today: NaiveDate) -> Result<DailyCheckInResult> {
        let state = self.streak_repository.get_streak()?;
        let (next, previous_status) = evaluate_check_in(&state, today);

        let already_checked_in = previous_status == CheckInStatus::CheckedInToday;
        if already_checked_in {
            debug!("Already checked in on {}, streak unchanged", today);
        } else {
            self.streak_repository.store_streak(&next)?;
            info!(
                "Checked in on {}: streak {} (longest {})",
                today, next.current_streak, next.longest_streak
            );
        }

        Ok(DailyCheckInResult { streak: next, previous_status, already_checked_in })
    }

    /// Current persisted streak state without evaluating a check-in
    pub fn current_streak(&self) -> Result<StreakState> {
        self.streak_repository.get_streak()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use tempfile::tempdir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn setup_test() -> StreakService {
        let temp_dir = tempdir().unwrap();
        let conn = JsonConnection::new(temp_dir.path().to_path_buf()).unwrap();
        StreakService::new(Arc::new(conn))
    }

    #[test]
    fn first_check_in_starts_a_streak() {
        let state = StreakState::default();
        let today = date(2026, 8, 7);

        let (next, status) = evaluate_check_in(&state, today);

        assert_eq!(status, CheckInStatus::NoCheckInYet);
        assert_eq!(next.current_streak, 1);
        assert_eq!(next.longest_streak, 1);
        assert_eq!(next.total_check_ins, 1);
        assert_eq!(next.last_check_in, Some(today));
    }

    #[test]
    fn yesterday_continues_the_streak() {
        let today = date(2026, 8, 7);
        let state = StreakState {
            current_streak: 3,
            longest_streak: 5,
            last_check_in: Some(today - Duration::days(1)),
            total_check_ins: 10,
        };

        let (next, status) = evaluate_check_in(&state, today);

        assert_eq!(status, CheckInStatus::CheckedInYesterday);
        assert_eq!(next.current_streak, 4);
        assert_eq!(next.longest_streak, 5);
        assert_eq!(next.total_check_ins, 11);
    }

    #[test]
    fn continuation_can_set_a_new_longest() {
        let today = date(2026, 8, 7);
        let state = StreakState {
            current_streak: 5,
            longest_streak: 5,
            last_check_in: Some(today - Duration::days(1)),
            total_check_ins: 12,
        };

        let (next, _) = evaluate_check_in(&state, today);
        assert_eq!(next.current_streak, 6);
        assert_eq!(next.longest_streak, 6);
    }

    #[test]
    fn same_day_is_a_noop() {
        let today = date(2026, 8, 7);
        let state = StreakState {
            current_streak: 4,
            longest_streak: 9,
            last_check_in: Some(today),
            total_check_ins: 20,
        };

        let (next, status) = evaluate_check_in(&state, today);

        assert_eq!(status, CheckInStatus::CheckedInToday);
        assert_eq!(next, state);
    }

    #[test]
    fn gap_of_three_days_resets_to_one() {
        let today = date(2026, 8, 7);
        let state = StreakState {
            current_streak: 7,
            longest_streak: 7,
            last_check_in: Some(today - Duration::days(3)),
            total_check_ins: 30,
        };

        let (next, status) = evaluate_check_in(&state, today);

        assert_eq!(status, CheckInStatus::StreakBroken);
        assert_eq!(next.current_streak, 1);
        assert_eq!(next.longest_streak, 7);
        assert_eq!(next.total_check_ins, 31);
        assert_eq!(next.last_check_in, Some(today));
    }

    #[test]
    fn current_never_exceeds_longest() {
        let mut state = StreakState::default();
        let mut day = date(2026, 8, 1);

        for _ in 0..10 {
            let (next, _) = evaluate_check_in(&state, day);
            assert!(next.current_streak <= next.longest_streak);
            state = next;
            day += Duration::days(1);
        }
        assert_eq!(state.current_streak, 10);
        assert_eq!(state.longest_streak, 10);
    }

    #[test]
    fn service_persists_the_transition() {
        let service = setup_test();
        let today = date(2026, 8, 7);

        let first = service.daily_check_in_on(today).unwrap();
        assert!(!first.already_checked_in);
        assert_eq!(first.streak.current_streak, 1);

        // Second evaluation the same day does not move the streak
        let second = service.daily_check_in_on(today).unwrap();
        assert!(second.already_checked_in);
        assert_eq!(second.streak.current_streak, 1);
        assert_eq!(second.streak.total_check_ins, 1);

        let next_day = service.daily_check_in_on(today + Duration::days(1)).unwrap();
        assert_eq!(next_day.streak.current_streak, 2);
        assert_eq!(next_day.previous_status, CheckInStatus::CheckedInYesterday);
    }
}
