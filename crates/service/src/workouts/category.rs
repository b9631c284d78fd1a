use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::workouts::domain::Workout;

/// Workout field names accepted by the aggregation endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Id,
    Date,
    StartTime,
    Duration,
    WorkoutType,
    CaloriesBurned,
    Notes,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Id,
        Category::Date,
        Category::StartTime,
        Category::Duration,
        Category::WorkoutType,
        Category::CaloriesBurned,
        Category::Notes,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Id => "id",
            Category::Date => "date",
            Category::StartTime => "start_time",
            Category::Duration => "duration",
            Category::WorkoutType => "workout_type",
            Category::CaloriesBurned => "calories_burned",
            Category::Notes => "notes",
        }
    }

    /// The value this category names on `w`.
    pub fn value_of(self, w: &Workout) -> FieldValue<'_> {
        match self {
            Category::Id => FieldValue::Text(&w.id),
            Category::Date => FieldValue::Text(&w.date),
            Category::StartTime => FieldValue::Text(&w.start_time),
            Category::Duration => FieldValue::Float(w.duration),
            Category::WorkoutType => {
                w.workout_type.as_deref().map_or(FieldValue::Null, FieldValue::Text)
            }
            Category::CaloriesBurned => w.calories_burned.map_or(FieldValue::Null, FieldValue::Int),
            Category::Notes => w.notes.as_deref().map_or(FieldValue::Null, FieldValue::Text),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ServiceError::invalid_value(format!("{s} is not a valid category")))
    }
}

/// A single field read off a workout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldValue<'a> {
    Null,
    Int(i64),
    Float(f64),
    Text(&'a str),
}

/// Sum of a numeric category. Integer fields stay integers on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TotalValue {
    Int(i64),
    Float(f64),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Total {
    pub category: String,
    pub total: TotalValue,
}

/// Sum `category` across `records`, skipping nulls.
///
/// Any present non-numeric value fails the whole sum, so a text field only
/// sums (to `0`) when every record leaves it empty.
pub fn sum_category(
    category: Category,
    records: &[Workout],
) -> Result<TotalValue, ServiceError> {
    let not_numeric = || {
        ServiceError::invalid_value(format!(
            "Category '{category}' cannot be summed, must be numeric (int or float)"
        ))
    };
    let overflows =
        || ServiceError::invalid_value(format!("Category '{category}' total overflows"));

    let mut int_sum: i64 = 0;
    let mut float_sum: Option<f64> = None;
    for w in records {
        match category.value_of(w) {
            FieldValue::Null => {}
            FieldValue::Int(v) => int_sum = int_sum.checked_add(v).ok_or_else(overflows)?,
            FieldValue::Float(v) => *float_sum.get_or_insert(0.0) += v,
            FieldValue::Text(_) => return Err(not_numeric()),
        }
    }

    match float_sum {
        // inf has no JSON representation
        Some(f) => {
            let total = f + int_sum as f64;
            if total.is_finite() {
                Ok(TotalValue::Float(total))
            } else {
                Err(overflows())
            }
        }
        None => Ok(TotalValue::Int(int_sum)),
    }
}
