//! Static milestone catalog: age bands, milestone definitions, and
//! badge definitions. Defined at build time, never mutated.
//!
//! Invariant: the bands partition the supported age range [0, 60]
//! months, sorted by start month, with no gaps or overlaps. Exactly
//! one band is current for any age inside the range.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::models::badge::{BadgeDefinition, BadgeRequirement};
use crate::domain::models::milestone::{AgeBand, MilestoneCategory, MilestoneDefinition};

use crate::domain::models::milestone::MilestoneCategory::{
    Cognitive, FineMotor, Language, Physical, Social,
};

/// Supported age range end, in months
pub const MAX_TRACKED_MONTH: u32 = 60;

/// Fixed ascending completion-count thresholds used to detect a newly
/// crossed threshold after each completion.
pub const TOTAL_COMPLETION_THRESHOLDS: [usize; 6] = [1, 5, 10, 25, 50, 100];

pub static AGE_BANDS: &[AgeBand] = &[
    AgeBand { id: "band_0_2", label: "0–2 months", start_month: 0, end_month: 2 },
    AgeBand { id: "band_3_4", label: "3–4 months", start_month: 3, end_month: 4 },
    AgeBand { id: "band_5_6", label: "5–6 months", start_month: 5, end_month: 6 },
    AgeBand { id: "band_7_9", label: "7–9 months", start_month: 7, end_month: 9 },
    AgeBand { id: "band_10_12", label: "10–12 months", start_month: 10, end_month: 12 },
    AgeBand { id: "band_13_18", label: "13–18 months", start_month: 13, end_month: 18 },
    AgeBand { id: "band_19_24", label: "19–24 months", start_month: 19, end_month: 24 },
    AgeBand { id: "band_25_36", label: "25–36 months", start_month: 25, end_month: 36 },
    AgeBand { id: "band_37_48", label: "3–4 years", start_month: 37, end_month: 48 },
    AgeBand { id: "band_49_60", label: "4–5 years", start_month: 49, end_month: 60 },
];

pub static MILESTONES: &[MilestoneDefinition] = &[
    // 0–2 months
    MilestoneDefinition { id: "nb_lifts_head", title: "Lifts head during tummy time", category: Physical, typical_month: 1, concern_month: 3, band_id: "band_0_2" },
    MilestoneDefinition { id: "nb_follows_faces", title: "Follows faces with eyes", category: Cognitive, typical_month: 1, concern_month: 3, band_id: "band_0_2" },
    MilestoneDefinition { id: "nb_coos", title: "Coos and makes vowel sounds", category: Language, typical_month: 2, concern_month: 4, band_id: "band_0_2" },
    MilestoneDefinition { id: "nb_social_smile", title: "Smiles back at people", category: Social, typical_month: 2, concern_month: 4, band_id: "band_0_2" },
    MilestoneDefinition { id: "nb_grasps_finger", title: "Grips a finger placed in the hand", category: FineMotor, typical_month: 1, concern_month: 3, band_id: "band_0_2" },
    // 3–4 months
    MilestoneDefinition { id: "m3_holds_head_steady", title: "Holds head steady when upright", category: Physical, typical_month: 4, concern_month: 6, band_id: "band_3_4" },
    MilestoneDefinition { id: "m3_recognizes_caregiver", title: "Recognizes familiar caregivers", category: Cognitive, typical_month: 4, concern_month: 6, band_id: "band_3_4" },
    MilestoneDefinition { id: "m3_babbles", title: "Babbles with expression", category: Language, typical_month: 4, concern_month: 6, band_id: "band_3_4" },
    MilestoneDefinition { id: "m3_laughs", title: "Laughs out loud", category: Social, typical_month: 4, concern_month: 6, band_id: "band_3_4" },
    MilestoneDefinition { id: "m3_reaches_for_toys", title: "Reaches for a toy with one hand", category: FineMotor, typical_month: 4, concern_month: 6, band_id: "band_3_4" },
    // 5–6 months
    MilestoneDefinition { id: "m5_rolls_over", title: "Rolls over in both directions", category: Physical, typical_month: 6, concern_month: 8, band_id: "band_5_6" },
    MilestoneDefinition { id: "m5_curious_mirror", title: "Shows curiosity at a mirror", category: Cognitive, typical_month: 6, concern_month: 9, band_id: "band_5_6" },
    MilestoneDefinition { id: "m5_responds_to_name", title: "Responds to own name", category: Language, typical_month: 6, concern_month: 9, band_id: "band_5_6" },
    MilestoneDefinition { id: "m5_enjoys_peekaboo", title: "Enjoys peekaboo", category: Social, typical_month: 6, concern_month: 9, band_id: "band_5_6" },
    MilestoneDefinition { id: "m5_passes_objects", title: "Passes an object hand to hand", category: FineMotor, typical_month: 6, concern_month: 9, band_id: "band_5_6" },
    // 7–9 months
    MilestoneDefinition { id: "m7_sits_unsupported", title: "Sits without support", category: Physical, typical_month: 8, concern_month: 10, band_id: "band_7_9" },
    MilestoneDefinition { id: "m7_crawls", title: "Crawls on hands and knees", category: Physical, typical_month: 9, concern_month: 12, band_id: "band_7_9" },
    MilestoneDefinition { id: "m7_looks_for_dropped", title: "Looks for a dropped toy", category: Cognitive, typical_month: 8, concern_month: 12, band_id: "band_7_9" },
    MilestoneDefinition { id: "m7_says_mama_dada", title: "Says mama or dada", category: Language, typical_month: 9, concern_month: 12, band_id: "band_7_9" },
    MilestoneDefinition { id: "m7_stranger_wary", title: "Shows wariness of strangers", category: Social, typical_month: 8, concern_month: 12, band_id: "band_7_9" },
    MilestoneDefinition { id: "m7_pincer_grasp", title: "Picks up food between finger and thumb", category: FineMotor, typical_month: 9, concern_month: 12, band_id: "band_7_9" },
    // 10–12 months
    MilestoneDefinition { id: "m10_pulls_to_stand", title: "Pulls up to stand", category: Physical, typical_month: 10, concern_month: 13, band_id: "band_10_12" },
    MilestoneDefinition { id: "m10_first_steps", title: "Takes first independent steps", category: Physical, typical_month: 12, concern_month: 16, band_id: "band_10_12" },
    MilestoneDefinition { id: "m10_finds_hidden_toy", title: "Finds a toy hidden under a cup", category: Cognitive, typical_month: 11, concern_month: 14, band_id: "band_10_12" },
    MilestoneDefinition { id: "m10_first_word", title: "Says a first real word", category: Language, typical_month: 12, concern_month: 16, band_id: "band_10_12" },
    MilestoneDefinition { id: "m10_waves_bye", title: "Waves bye-bye", category: Social, typical_month: 11, concern_month: 14, band_id: "band_10_12" },
    MilestoneDefinition { id: "m10_claps_hands", title: "Claps hands", category: Social, typical_month: 11, concern_month: 15, band_id: "band_10_12" },
    MilestoneDefinition { id: "m10_bangs_blocks", title: "Bangs two blocks together", category: FineMotor, typical_month: 11, concern_month: 14, band_id: "band_10_12" },
    // 13–18 months
    MilestoneDefinition { id: "m13_walks_alone", title: "Walks without help", category: Physical, typical_month: 14, concern_month: 18, band_id: "band_13_18" },
    MilestoneDefinition { id: "m13_follows_instruction", title: "Follows a one-step instruction", category: Cognitive, typical_month: 15, concern_month: 20, band_id: "band_13_18" },
    MilestoneDefinition { id: "m13_several_words", title: "Says several single words", category: Language, typical_month: 16, concern_month: 20, band_id: "band_13_18" },
    MilestoneDefinition { id: "m13_points_to_ask", title: "Points to ask for something", category: Social, typical_month: 14, concern_month: 18, band_id: "band_13_18" },
    MilestoneDefinition { id: "m13_scribbles", title: "Scribbles with a crayon", category: FineMotor, typical_month: 15, concern_month: 18, band_id: "band_13_18" },
    // 19–24 months
    MilestoneDefinition { id: "m19_runs", title: "Runs", category: Physical, typical_month: 20, concern_month: 26, band_id: "band_19_24" },
    MilestoneDefinition { id: "m19_kicks_ball", title: "Kicks a ball", category: Physical, typical_month: 22, concern_month: 28, band_id: "band_19_24" },
    MilestoneDefinition { id: "m19_pretend_play", title: "Begins simple pretend play", category: Cognitive, typical_month: 22, concern_month: 28, band_id: "band_19_24" },
    MilestoneDefinition { id: "m19_two_word_phrases", title: "Puts two words together", category: Language, typical_month: 22, concern_month: 27, band_id: "band_19_24" },
    MilestoneDefinition { id: "m19_parallel_play", title: "Plays alongside other children", category: Social, typical_month: 22, concern_month: 28, band_id: "band_19_24" },
    MilestoneDefinition { id: "m19_stacks_blocks", title: "Stacks four or more blocks", category: FineMotor, typical_month: 21, concern_month: 27, band_id: "band_19_24" },
    // 25–36 months
    MilestoneDefinition { id: "m25_jumps", title: "Jumps with both feet", category: Physical, typical_month: 28, concern_month: 34, band_id: "band_25_36" },
    MilestoneDefinition { id: "m25_sorts_shapes", title: "Sorts shapes and colors", category: Cognitive, typical_month: 30, concern_month: 38, band_id: "band_25_36" },
    MilestoneDefinition { id: "m25_short_sentences", title: "Speaks in short sentences", category: Language, typical_month: 30, concern_month: 36, band_id: "band_25_36" },
    MilestoneDefinition { id: "m25_takes_turns", title: "Takes turns in games", category: Social, typical_month: 32, concern_month: 40, band_id: "band_25_36" },
    MilestoneDefinition { id: "m25_copies_circle", title: "Copies a circle", category: FineMotor, typical_month: 34, concern_month: 42, band_id: "band_25_36" },
    // 3–4 years
    MilestoneDefinition { id: "m37_hops", title: "Hops on one foot", category: Physical, typical_month: 42, concern_month: 50, band_id: "band_37_48" },
    MilestoneDefinition { id: "m37_counts_ten", title: "Counts ten objects", category: Cognitive, typical_month: 46, concern_month: 54, band_id: "band_37_48" },
    MilestoneDefinition { id: "m37_tells_story", title: "Tells a simple story", category: Language, typical_month: 44, concern_month: 52, band_id: "band_37_48" },
    MilestoneDefinition { id: "m37_group_play", title: "Plays cooperatively with a group", category: Social, typical_month: 42, concern_month: 50, band_id: "band_37_48" },
    MilestoneDefinition { id: "m37_uses_scissors", title: "Cuts along a line with scissors", category: FineMotor, typical_month: 46, concern_month: 54, band_id: "band_37_48" },
    // 4–5 years
    MilestoneDefinition { id: "m49_skips", title: "Skips with alternating feet", category: Physical, typical_month: 56, concern_month: 64, band_id: "band_49_60" },
    MilestoneDefinition { id: "m49_counts_twenty", title: "Counts to twenty", category: Cognitive, typical_month: 56, concern_month: 64, band_id: "band_49_60" },
    MilestoneDefinition { id: "m49_future_tense", title: "Uses future tense", category: Language, typical_month: 52, concern_month: 60, band_id: "band_49_60" },
    MilestoneDefinition { id: "m49_group_rules", title: "Follows rules in group games", category: Social, typical_month: 54, concern_month: 62, band_id: "band_49_60" },
    MilestoneDefinition { id: "m49_writes_name", title: "Writes some letters of own name", category: FineMotor, typical_month: 56, concern_month: 64, band_id: "band_49_60" },
];

pub static BADGES: &[BadgeDefinition] = &[
    BadgeDefinition { id: "first_milestone", title: "First Milestone", requirement: BadgeRequirement::TotalCompletions { threshold: 1 } },
    BadgeDefinition { id: "five_milestones", title: "High Five", requirement: BadgeRequirement::TotalCompletions { threshold: 5 } },
    BadgeDefinition { id: "ten_milestones", title: "Perfect Ten", requirement: BadgeRequirement::TotalCompletions { threshold: 10 } },
    BadgeDefinition { id: "twenty_five_milestones", title: "Quarter Century", requirement: BadgeRequirement::TotalCompletions { threshold: 25 } },
    BadgeDefinition { id: "fifty_milestones", title: "Half Hundred", requirement: BadgeRequirement::TotalCompletions { threshold: 50 } },
    BadgeDefinition { id: "three_day_streak", title: "Three-Day Streak", requirement: BadgeRequirement::StreakLength { threshold: 3 } },
    BadgeDefinition { id: "week_streak", title: "One-Week Streak", requirement: BadgeRequirement::StreakLength { threshold: 7 } },
    BadgeDefinition { id: "month_streak", title: "One-Month Streak", requirement: BadgeRequirement::StreakLength { threshold: 30 } },
    BadgeDefinition { id: "early_bird", title: "Early Bird", requirement: BadgeRequirement::EarlyCompletion },
    BadgeDefinition { id: "memory_keeper", title: "Memory Keeper", requirement: BadgeRequirement::PhotosAttached { threshold: 5 } },
    BadgeDefinition { id: "band_champion", title: "Age Group Champion", requirement: BadgeRequirement::FullBandComplete },
    BadgeDefinition { id: "category_specialist", title: "Category Specialist", requirement: BadgeRequirement::CategoryCompleteInBand },
];

static MILESTONES_BY_ID: Lazy<HashMap<&'static str, &'static MilestoneDefinition>> =
    Lazy::new(|| MILESTONES.iter().map(|m| (m.id, m)).collect());

/// Look up a milestone definition by id
pub fn milestone(id: &str) -> Option<&'static MilestoneDefinition> {
    MILESTONES_BY_ID.get(id).copied()
}

/// All milestones belonging to the given band, in catalog order
pub fn milestones_in_band(band_id: &str) -> impl Iterator<Item = &'static MilestoneDefinition> + '_ {
    MILESTONES.iter().filter(move |m| m.band_id == band_id)
}

/// Look up an age band by id
pub fn band(band_id: &str) -> Option<&'static AgeBand> {
    AGE_BANDS.iter().find(|b| b.id == band_id)
}
