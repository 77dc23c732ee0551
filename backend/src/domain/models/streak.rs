use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Persisted daily check-in streak state.
///
/// Invariant: `current_streak <= longest_streak`. Mutated at most once
/// per calendar day, on the first evaluation that day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakState {
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Device-local calendar date of the last check-in (YYYY-MM-DD)
    pub last_check_in: Option<NaiveDate>,
    pub total_check_ins: u32,
}

impl Default for StreakState {
    fn default() -> Self {
        Self {
            current_streak: 0,
            longest_streak: 0,
            last_check_in: None,
            total_check_ins: 0,
        }
    }
}

/// Where the streak stands relative to a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckInStatus {
    /// No check-in has ever been recorded
    NoCheckInYet,
    /// Already checked in on the given date
    CheckedInToday,
    /// Last check-in was the day before; the streak continues on check-in
    CheckedInYesterday,
    /// Gap of two or more days; the streak resets on check-in
    StreakBroken,
}

impl StreakState {
    /// Classify the streak relative to `today`.
    ///
    /// Comparison is by ISO date equality only; there is no timezone
    /// normalization beyond the device-local date.
    pub fn status(&self, today: NaiveDate) -> CheckInStatus {
        match self.last_check_in {
            None => CheckInStatus::NoCheckInYet,
            Some(last) if last == today => CheckInStatus::CheckedInToday,
            Some(last) if last == today - Duration::days(1) => CheckInStatus::CheckedInYesterday,
            Some(_) => CheckInStatus::StreakBroken,
        }
    }
}
