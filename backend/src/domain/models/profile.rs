use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Domain model for the tracked baby. Single record per installation,
/// created on first setup and overwritten by a later setup edit.
///
/// Age derivations are always computed fresh from the current clock,
/// never cached on the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BabyProfile {
    pub name: String,
    pub date_of_birth: NaiveDate,
}

/// Validation failures that block a profile save.
#[derive(Debug, thiserror::Error)]
pub enum ProfileValidationError {
    #[error("Name cannot be empty")]
    BlankName,
    #[error("Name cannot exceed 100 characters")]
    NameTooLong,
    #[error("Invalid birth date format. Use YYYY-MM-DD.")]
    InvalidDateFormat,
    #[error("Year must be between 1900 and 2100")]
    YearOutOfRange,
    #[error("Month must be between 1 and 12")]
    MonthOutOfRange,
    #[error("Day must be between 1 and 31")]
    DayOutOfRange,
    #[error("Birth date is not a valid calendar date")]
    NotACalendarDate,
}
