use async_trait::async_trait;

use crate::storage::list_store::ListStore;
use crate::workouts::domain::{SearchFilter, Workout};

/// Storage seam for workouts. Records are append-only.
#[async_trait]
pub trait WorkoutRepository: Send + Sync {
    async fn append(&self, workout: Workout);
    async fn list(&self) -> Vec<Workout>;
    async fn find(&self, filter: &SearchFilter) -> Vec<Workout>;
}

/// Process-local repository; contents vanish when the process exits.
#[derive(Clone, Default)]
pub struct InMemoryWorkoutRepository {
    store: ListStore<Workout>,
}

impl InMemoryWorkoutRepository {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl WorkoutRepository for InMemoryWorkoutRepository {
    async fn append(&self, workout: Workout) {
        self.store.push(workout).await
    }

    async fn list(&self) -> Vec<Workout> {
        self.store.snapshot().await
    }

    async fn find(&self, filter: &SearchFilter) -> Vec<Workout> {
        self.store.filter(|w| filter.matches(w)).await
    }
}
