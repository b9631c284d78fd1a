use std::sync::Arc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::workouts::category::{sum_category, Category, Total};
use crate::workouts::domain::{Created, SearchFilter, Workout, WorkoutInput};
use crate::workouts::repository::WorkoutRepository;

pub const MSG_EMPTY_STORE: &str = "Workout DB is empty";

/// Application service for workouts.
/// Every operation validates before touching the repository, so a rejected
/// request leaves no trace.
pub struct WorkoutService<R: WorkoutRepository> {
    repo: Arc<R>,
}

impl<R: WorkoutRepository> WorkoutService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Validate, assign a fresh id and append.
    #[instrument(skip_all)]
    pub async fn create(&self, input: WorkoutInput) -> Result<Created, ServiceError> {
        input.validate()?;
        let workout = input.into_workout(Uuid::new_v4().to_string());
        self.repo.append(workout.clone()).await;
        info!(id = %workout.id, date = %workout.date, "workout_created");
        Ok(Created::new(workout))
    }

    /// Filter in insertion order; nothing matching is an empty list, not an error.
    #[instrument(skip(self))]
    pub async fn search(&self, filter: SearchFilter) -> Result<Vec<Workout>, ServiceError> {
        let filter = filter.normalized();
        filter.validate()?;
        let found = if filter.is_empty() {
            self.repo.list().await
        } else {
            self.repo.find(&filter).await
        };
        debug!(count = found.len(), "workout_search");
        Ok(found)
    }

    /// Sum a numeric field over every stored workout.
    ///
    /// An empty store is an error rather than a zero total.
    #[instrument(skip(self))]
    pub async fn total(&self, category: &str) -> Result<Total, ServiceError> {
        let records = self.repo.list().await;
        if records.is_empty() {
            return Err(ServiceError::invalid_value(MSG_EMPTY_STORE));
        }
        let parsed: Category = category.parse()?;
        let total = sum_category(parsed, &records)?;
        debug!(category = %parsed, records = records.len(), "workout_total");
        Ok(Total { category: parsed.to_string(), total })
    }
}
