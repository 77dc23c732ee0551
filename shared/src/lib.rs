use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Profile of the tracked baby. Single record per installation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BabyProfile {
    pub name: String,
    /// Birth date as an ISO date (YYYY-MM-DD)
    pub date_of_birth: String,
}

impl BabyProfile {
    /// Parse the birth date for date pickers and age displays
    pub fn parsed_date_of_birth(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date_of_birth, "%Y-%m-%d").ok()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetupProfileRequest {
    /// Display name for the baby (max 100 characters)
    pub name: String,
    /// Birth date as an ISO date (YYYY-MM-DD)
    pub date_of_birth: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetupProfileResponse {
    pub profile: BabyProfile,
    pub success_message: String,
}

/// Developmental category for rendering and grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MilestoneCategory {
    Physical,
    Cognitive,
    Language,
    Social,
    FineMotor,
}

impl fmt::Display for MilestoneCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MilestoneCategory::Physical => "Physical",
            MilestoneCategory::Cognitive => "Cognitive",
            MilestoneCategory::Language => "Language",
            MilestoneCategory::Social => "Social",
            MilestoneCategory::FineMotor => "Fine Motor",
        };
        write!(f, "{}", label)
    }
}

/// Classification of an age band relative to the baby's current age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BandStatus {
    /// The band the baby's age falls inside; its checklist renders as active
    Current,
    /// The next band ahead of the baby's age
    Upcoming,
    /// A band the baby has aged out of
    Past,
}

/// A single milestone row in a band checklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneView {
    pub id: String,
    pub title: String,
    pub category: MilestoneCategory,
    /// Age in months at which this milestone typically appears
    pub typical_month: u32,
    /// Age in months beyond which an incomplete milestone is flagged
    pub concern_month: u32,
    pub completed: bool,
    /// Completion timestamp (RFC 3339), present when completed
    pub completed_at: Option<String>,
    pub note: Option<String>,
    pub photo_uri: Option<String>,
    /// Age in whole months when the milestone was marked complete
    pub age_at_completion: Option<i32>,
    /// True when the milestone is incomplete past its concern age
    pub delayed: bool,
}

/// One age band's checklist with completion progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandChecklist {
    pub band_id: String,
    pub label: String,
    pub start_month: u32,
    pub end_month: u32,
    pub status: BandStatus,
    pub milestones: Vec<MilestoneView>,
    pub completed_count: usize,
    pub total_count: usize,
}

/// Full checklist view consumed by the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistResponse {
    /// Age in whole months, derived fresh from the clock
    pub age_months: i32,
    /// Age in whole days, derived fresh from the clock
    pub age_days: i64,
    /// All bands in catalog order, each tagged current/upcoming/past
    pub bands: Vec<BandChecklist>,
    /// Band id of the current band, if the age falls inside one
    pub current_band_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompleteMilestoneRequest {
    pub milestone_id: String,
    /// Optional freeform note attached to the completion
    pub note: Option<String>,
    /// Optional photo reference attached to the completion
    pub photo_uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompleteMilestoneResponse {
    /// False when the milestone was already complete (no-op)
    pub newly_completed: bool,
    pub completed_count: usize,
    /// Badges earned by this completion, to celebrate exactly once
    pub newly_earned_badges: Vec<BadgeView>,
    /// Completion-count thresholds crossed by this completion
    pub crossed_thresholds: Vec<usize>,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UndoMilestoneRequest {
    pub milestone_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UndoMilestoneResponse {
    /// False when no completion record existed (no-op)
    pub removed: bool,
    pub completed_count: usize,
}

/// Daily check-in streak summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakSummary {
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Last check-in as an ISO date (YYYY-MM-DD)
    pub last_check_in: Option<String>,
    pub total_check_ins: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInResponse {
    pub streak: StreakSummary,
    /// True when today's check-in had already been recorded
    pub already_checked_in: bool,
    pub success_message: String,
}

/// A badge with its earned state for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeView {
    pub id: String,
    pub title: String,
    pub earned: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgesResponse {
    /// Every badge in catalog order with its earned state
    pub badges: Vec<BadgeView>,
    /// Badge ids earned since the last evaluation, to celebrate once
    pub newly_earned: Vec<String>,
}

/// Birth-date keepsake facts for announcement artifacts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeepsakeSummary {
    pub zodiac_sign: String,
    pub birthstone: String,
    pub life_path_number: u32,
}
