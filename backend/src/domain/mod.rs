//! Domain layer: models, the static catalog, and the services that
//! implement the tracker's business rules.

pub mod age;
pub mod badge_service;
pub mod catalog;
pub mod commands;
pub mod context;
pub mod keepsake;
pub mod mappers;
pub mod milestone_service;
pub mod models;
pub mod profile_service;
pub mod streak_service;
