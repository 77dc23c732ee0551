/// How a badge is earned. Badges are derived, never stored as truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeRequirement {
    /// Total completion count reaches the threshold
    TotalCompletions { threshold: usize },
    /// Current streak length reaches the threshold
    StreakLength { threshold: u32 },
    /// Some milestone was completed before its typical age
    EarlyCompletion,
    /// At least `threshold` completions carry a photo reference
    PhotosAttached { threshold: usize },
    /// Some age band has every one of its milestones completed
    FullBandComplete,
    /// Some band has every milestone of one category completed
    CategoryCompleteInBand,
}

/// Static badge definition from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeDefinition {
    pub id: &'static str,
    pub title: &'static str,
    pub requirement: BadgeRequirement,
}
