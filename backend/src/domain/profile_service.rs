use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::{info, warn};
use std::sync::Arc;

use crate::domain::commands::profile::{SetupProfileCommand, SetupProfileResult};
use crate::domain::models::profile::{BabyProfile, ProfileValidationError};
use crate::storage::json::{JsonConnection, ProfileRepository};
use crate::storage::traits::ProfileStorage;

/// Service for managing the baby profile
#[derive(Clone)]
pub struct ProfileService {
    profile_repository: ProfileRepository,
}

impl ProfileService {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        let profile_repository = ProfileRepository::new(connection);
        Self { profile_repository }
    }

    /// Create or edit the profile. Validation failures block the save
    /// and are reported to the caller for inline display.
    pub fn setup_profile(&self, command: SetupProfileCommand) -> Result<SetupProfileResult> {
        info!("Setting up profile: name={}, date_of_birth={}", command.name, command.date_of_birth);

        Self::validate_command(&command)?;

        let date_of_birth = NaiveDate::parse_from_str(command.date_of_birth.trim(), "%Y-%m-%d")
            .context("Invalid birth date in setup_profile command")?;

        let profile = BabyProfile {
            name: command.name.trim().to_string(),
            date_of_birth,
        };

        self.profile_repository.store_profile(&profile)?;

        info!("Saved profile for {}", profile.name);

        Ok(SetupProfileResult {
            success_message: format!("Profile for '{}' saved", profile.name),
            profile,
        })
    }

    /// Get the current profile, None on first run
    pub fn get_profile(&self) -> Result<Option<BabyProfile>> {
        let profile = self.profile_repository.get_profile()?;
        if profile.is_none() {
            warn!("No profile set up yet");
        }
        Ok(profile)
    }

    fn validate_command(command: &SetupProfileCommand) -> Result<(), ProfileValidationError> {
        if command.name.trim().is_empty() {
            return Err(ProfileValidationError::BlankName);
        }
        if command.name.len() > 100 {
            return Err(ProfileValidationError::NameTooLong);
        }
        Self::validate_date_of_birth(command.date_of_birth.trim())
    }

    /// Validate birth date format (ISO 8601: YYYY-MM-DD) field by field
    /// so the caller can report which component is wrong.
    fn validate_date_of_birth(date_of_birth: &str) -> Result<(), ProfileValidationError> {
        let parts: Vec<&str> = date_of_birth.split('-').collect();
        if parts.len() != 3 {
            return Err(ProfileValidationError::InvalidDateFormat);
        }

        let year: u32 = parts[0].parse().map_err(|_| ProfileValidationError::InvalidDateFormat)?;
        let month: u32 = parts[1].parse().map_err(|_| ProfileValidationError::InvalidDateFormat)?;
        let day: u32 = parts[2].parse().map_err(|_| ProfileValidationError::InvalidDateFormat)?;

        if !(1900..=2100).contains(&year) {
            return Err(ProfileValidationError::YearOutOfRange);
        }
        if !(1..=12).contains(&month) {
            return Err(ProfileValidationError::MonthOutOfRange);
        }
        if !(1..=31).contains(&day) {
            return Err(ProfileValidationError::DayOutOfRange);
        }

        // Component ranges pass; reject impossible calendar dates too
        if NaiveDate::from_ymd_opt(year as i32, month, day).is_none() {
            return Err(ProfileValidationError::NotACalendarDate);
        }

        Ok(())
    }
}
