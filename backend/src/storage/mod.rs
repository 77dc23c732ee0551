pub mod json;
pub mod traits;

pub use traits::{BadgeStateStorage, CompletionStorage, ProfileStorage, StreakStorage};
