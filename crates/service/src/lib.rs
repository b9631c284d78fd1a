//! Service layer for the workout store.
//! - Owns the workout domain types and their validation rules.
//! - Keeps storage behind a repository trait so handlers never see the list directly.
//! - Reports client mistakes through `ServiceError`.

pub mod errors;
pub mod storage;
pub mod workouts;
