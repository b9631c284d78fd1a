//! Workout recording and querying.
//!
//! `domain` holds the records and their validation, `category` the closed set
//! of summable field names, `repository` the storage seam and `service` the
//! create/search/total operations built on top of it.

pub mod category;
pub mod domain;
pub mod repository;
pub mod service;

pub use category::{Category, Total, TotalValue};
pub use domain::{Created, SearchFilter, Workout, WorkoutInput};
pub use repository::{InMemoryWorkoutRepository, WorkoutRepository};
pub use service::WorkoutService;
