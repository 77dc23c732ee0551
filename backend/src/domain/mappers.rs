//! Conversions from domain types to the public DTOs in the `shared`
//! crate. The presentation layer only ever sees the mapped types.

use std::collections::HashMap;

use crate::domain::age::BandClassification;
use crate::domain::catalog;
use crate::domain::keepsake;
use crate::domain::models::completion::CompletionRecord;
use crate::domain::models::milestone::{AgeBand, MilestoneCategory};
use crate::domain::models::profile::BabyProfile;
use crate::domain::models::streak::StreakState;

pub fn to_profile_dto(profile: &BabyProfile) -> shared::BabyProfile {
    shared::BabyProfile {
        name: profile.name.clone(),
        date_of_birth: profile.date_of_birth.format("%Y-%m-%d").to_string(),
    }
}

pub fn to_category_dto(category: MilestoneCategory) -> shared::MilestoneCategory {
    match category {
        MilestoneCategory::Physical => shared::MilestoneCategory::Physical,
        MilestoneCategory::Cognitive => shared::MilestoneCategory::Cognitive,
        MilestoneCategory::Language => shared::MilestoneCategory::Language,
        MilestoneCategory::Social => shared::MilestoneCategory::Social,
        MilestoneCategory::FineMotor => shared::MilestoneCategory::FineMotor,
    }
}

pub fn to_streak_summary(state: &StreakState) -> shared::StreakSummary {
    shared::StreakSummary {
        current_streak: state.current_streak,
        longest_streak: state.longest_streak,
        last_check_in: state.last_check_in.map(|d| d.format("%Y-%m-%d").to_string()),
        total_check_ins: state.total_check_ins,
    }
}

/// Badge views in catalog order with their earned state
pub fn to_badge_views(earned_ids: &[String]) -> Vec<shared::BadgeView> {
    catalog::BADGES
        .iter()
        .map(|badge| shared::BadgeView {
            id: badge.id.to_string(),
            title: badge.title.to_string(),
            earned: earned_ids.iter().any(|id| id == badge.id),
        })
        .collect()
}

/// Badge views restricted to the given ids, in catalog order
pub fn to_earned_badge_views(ids: &[String]) -> Vec<shared::BadgeView> {
    catalog::BADGES
        .iter()
        .filter(|badge| ids.iter().any(|id| id == badge.id))
        .map(|badge| shared::BadgeView {
            id: badge.id.to_string(),
            title: badge.title.to_string(),
            earned: true,
        })
        .collect()
}

/// Assemble the full checklist view: every band in catalog order
/// tagged current/upcoming/past, each milestone with its completion
/// state and delay flag.
pub fn to_checklist_response(
    age_months: i32,
    age_days: i64,
    classification: &BandClassification,
    completions: &[CompletionRecord],
) -> shared::ChecklistResponse {
    let by_id: HashMap<&str, &CompletionRecord> =
        completions.iter().map(|r| (r.id.as_str(), r)).collect();

    let bands = catalog::AGE_BANDS
        .iter()
        .map(|band| to_band_checklist(band, age_months, classification, &by_id))
        .collect();

    shared::ChecklistResponse {
        age_months,
        age_days,
        bands,
        current_band_id: classification.current.map(|b| b.id.to_string()),
    }
}

fn to_band_checklist(
    band: &'static AgeBand,
    age_months: i32,
    classification: &BandClassification,
    completions_by_id: &HashMap<&str, &CompletionRecord>,
) -> shared::BandChecklist {
    let status = if classification.current.map(|b| b.id) == Some(band.id) {
        shared::BandStatus::Current
    } else if (band.end_month as i32) < age_months {
        shared::BandStatus::Past
    } else {
        shared::BandStatus::Upcoming
    };

    let milestones: Vec<shared::MilestoneView> = catalog::milestones_in_band(band.id)
        .map(|definition| {
            let record = completions_by_id.get(definition.id);
            let completed = record.is_some();
            shared::MilestoneView {
                id: definition.id.to_string(),
                title: definition.title.to_string(),
                category: to_category_dto(definition.category),
                typical_month: definition.typical_month,
                concern_month: definition.concern_month,
                completed,
                completed_at: record.map(|r| r.completed_at.to_rfc3339()),
                note: record.and_then(|r| r.note.clone()),
                photo_uri: record.and_then(|r| r.photo_uri.clone()),
                age_at_completion: record.and_then(|r| r.age_at_completion),
                delayed: !completed && age_months > definition.concern_month as i32,
            }
        })
        .collect();

    let completed_count = milestones.iter().filter(|m| m.completed).count();
    let total_count = milestones.len();

    shared::BandChecklist {
        band_id: band.id.to_string(),
        label: band.label.to_string(),
        start_month: band.start_month,
        end_month: band.end_month,
        status,
        milestones,
        completed_count,
        total_count,
    }
}

pub fn to_keepsake_summary(profile: &BabyProfile) -> shared::KeepsakeSummary {
    shared::KeepsakeSummary {
        zodiac_sign: keepsake::zodiac_sign(profile.date_of_birth).to_string(),
        birthstone: keepsake::birthstone(profile.date_of_birth).to_string(),
        life_path_number: keepsake::life_path_number(profile.date_of_birth),
    }
}
