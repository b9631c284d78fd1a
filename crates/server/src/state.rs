use std::sync::Arc;

use service::workouts::{InMemoryWorkoutRepository, WorkoutService};

/// Shared handler state. The workout service owns the only store.
#[derive(Clone)]
pub struct AppState {
    pub workouts: Arc<WorkoutService<InMemoryWorkoutRepository>>,
    pub welcome_message: Arc<str>,
}

impl AppState {
    pub fn new(welcome_message: impl Into<Arc<str>>) -> Self {
        let repo = Arc::new(InMemoryWorkoutRepository::new());
        Self {
            workouts: Arc::new(WorkoutService::new(repo)),
            welcome_message: welcome_message.into(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(configs::DEFAULT_WELCOME_MESSAGE)
    }
}
