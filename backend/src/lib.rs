//! Milestone tracker core.
//!
//! Domain services and file-backed storage for tracking a baby's
//! developmental milestones: an age-banded checklist, completion
//! records, a daily check-in streak, and derived achievement badges.
//! The presentation layer talks to [`domain::context::TrackerContext`]
//! and renders the DTOs defined in the `shared` crate.

pub mod domain;
pub mod storage;

pub use domain::context::TrackerContext;
