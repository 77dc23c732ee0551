//! # JSON Storage Backend
//!
//! File-based persistence: each logical record is one JSON file under
//! the storage root, written atomically.
//!
//! ```text
//! data/
//! ├── baby_profile.json           ← profile record
//! ├── milestone_completions.json  ← ordered completion list
//! ├── streak.json                 ← daily check-in state
//! └── badges_seen.json            ← celebrated badge ids
//! ```

pub mod badge_state_repository;
pub mod completion_repository;
pub mod connection;
pub mod profile_repository;
pub mod streak_repository;

pub use badge_state_repository::BadgeStateRepository;
pub use completion_repository::CompletionRepository;
pub use connection::JsonConnection;
pub use profile_repository::ProfileRepository;
pub use streak_repository::StreakRepository;
