use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// `DD-MM-YY`
pub const DATE_FORMAT: &str = "%d-%m-%y";
/// `HH-MM`, 24h, no seconds
pub const TIME_FORMAT: &str = "%H-%M";

pub const MSG_BAD_DATE: &str = "Bad Request: Date is in the wrong format. Should be in DD-MM-YY";
pub const MSG_BAD_TIME: &str = "Bad request: Time must be in the format HH-MM";
pub const MSG_BAD_DURATION: &str = "duration cannot be negative";
pub const MSG_BAD_CALORIES: &str = "Calories burned cannot be less than 0";
pub const MSG_BAD_SEARCH_DATE: &str = "date is not in valid format";

/// A stored workout. All seven keys are always serialized; absent optionals are `null`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Workout {
    pub id: String,
    pub date: String,
    pub start_time: String,
    pub duration: f64,
    pub workout_type: Option<String>,
    pub calories_burned: Option<i64>,
    pub notes: Option<String>,
}

/// Create payload. A client-supplied `id` is not part of the input and is
/// dropped during deserialization; the server always assigns its own.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkoutInput {
    pub date: String,
    pub start_time: String,
    pub duration: f64,
    #[serde(default)]
    pub workout_type: Option<String>,
    #[serde(default)]
    pub calories_burned: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl WorkoutInput {
    /// Field checks in a fixed order; the first failure wins.
    pub fn validate(&self) -> Result<(), ServiceError> {
        if !is_valid_date(&self.date) {
            return Err(ServiceError::invalid_format(MSG_BAD_DATE));
        }
        if !is_valid_time(&self.start_time) {
            return Err(ServiceError::invalid_format(MSG_BAD_TIME));
        }
        // NaN fails this comparison too
        if !(self.duration > 0.0) {
            return Err(ServiceError::invalid_value(MSG_BAD_DURATION));
        }
        if let Some(calories) = self.calories_burned {
            if calories < 0 {
                return Err(ServiceError::invalid_value(MSG_BAD_CALORIES));
            }
        }
        Ok(())
    }

    pub fn into_workout(self, id: String) -> Workout {
        Workout {
            id,
            date: self.date,
            start_time: self.start_time,
            duration: self.duration,
            workout_type: self.workout_type,
            calories_burned: self.calories_burned,
            notes: self.notes,
        }
    }
}

/// Calendar-aware: `31-02-25` does not parse.
pub fn is_valid_date(s: &str) -> bool {
    NaiveDate::parse_from_str(s, DATE_FORMAT).is_ok()
}

pub fn is_valid_time(s: &str) -> bool {
    NaiveTime::parse_from_str(s, TIME_FORMAT).is_ok()
}

/// Optional search constraints, combined with AND.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchFilter {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub workout_type: Option<String>,
    #[serde(default)]
    pub note_keyword: Option<String>,
}

impl SearchFilter {
    /// Empty strings count as "not given".
    pub fn normalized(self) -> Self {
        fn non_empty(v: Option<String>) -> Option<String> {
            v.filter(|s| !s.is_empty())
        }
        Self {
            date: non_empty(self.date),
            workout_type: non_empty(self.workout_type),
            note_keyword: non_empty(self.note_keyword),
        }
    }

    pub fn validate(&self) -> Result<(), ServiceError> {
        match &self.date {
            Some(date) if !is_valid_date(date) => {
                Err(ServiceError::invalid_format(MSG_BAD_SEARCH_DATE))
            }
            _ => Ok(()),
        }
    }

    pub fn matches(&self, w: &Workout) -> bool {
        if let Some(date) = &self.date {
            if &w.date != date {
                return false;
            }
        }
        if let Some(kind) = &self.workout_type {
            if w.workout_type.as_ref() != Some(kind) {
                return false;
            }
        }
        if let Some(keyword) = &self.note_keyword {
            match &w.notes {
                Some(notes) if notes.contains(keyword.as_str()) => {}
                _ => return false,
            }
        }
        true
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.workout_type.is_none() && self.note_keyword.is_none()
    }
}

/// Envelope returned by a successful create.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Created {
    pub status: String,
    pub message: String,
    pub workout: Workout,
}

impl Created {
    pub fn new(workout: Workout) -> Self {
        Self { status: "success".into(), message: "Created successfully!".into(), workout }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> WorkoutInput {
        WorkoutInput {
            date: "01-01-25".into(),
            start_time: "07-30".into(),
            duration: 45.0,
            workout_type: Some("run".into()),
            calories_burned: Some(300),
            notes: Some("morning run".into()),
        }
    }

    #[test]
    fn accepts_a_well_formed_workout() {
        assert!(input().validate().is_ok());
    }

    #[test]
    fn rejects_impossible_calendar_dates() {
        let bad = WorkoutInput { date: "31-02-25".into(), ..input() };
        assert_eq!(bad.validate(), Err(ServiceError::InvalidFormat(MSG_BAD_DATE.into())));
        let bad = WorkoutInput { date: "2025-01-01".into(), ..input() };
        assert!(matches!(bad.validate(), Err(ServiceError::InvalidFormat(_))));
    }

    #[test]
    fn rejects_bad_start_time() {
        for t in ["25-00", "07:30", "07-30-00", ""] {
            let bad = WorkoutInput { start_time: t.into(), ..input() };
            assert_eq!(
                bad.validate(),
                Err(ServiceError::InvalidFormat(MSG_BAD_TIME.into())),
                "{t}"
            );
        }
    }

    #[test]
    fn date_is_checked_before_time() {
        let bad = WorkoutInput { date: "x".into(), start_time: "y".into(), ..input() };
        assert_eq!(bad.validate().unwrap_err().message(), MSG_BAD_DATE);
    }

    #[test]
    fn duration_must_be_positive() {
        for d in [-1.0, 0.0, f64::NAN] {
            let bad = WorkoutInput { duration: d, ..input() };
            assert_eq!(bad.validate(), Err(ServiceError::InvalidValue(MSG_BAD_DURATION.into())));
        }
        let ok = WorkoutInput { duration: 0.01, ..input() };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn calories_checked_only_when_present() {
        let bad = WorkoutInput { calories_burned: Some(-5), ..input() };
        assert_eq!(bad.validate(), Err(ServiceError::InvalidValue(MSG_BAD_CALORIES.into())));
        let absent = WorkoutInput { calories_burned: None, ..input() };
        assert!(absent.validate().is_ok());
        let zero = WorkoutInput { calories_burned: Some(0), ..input() };
        assert!(zero.validate().is_ok());
    }

    #[test]
    fn input_ignores_client_id() {
        let v = serde_json::json!({
            "id": "client-chosen",
            "date": "01-01-25",
            "start_time": "07-30",
            "duration": 10
        });
        let parsed: WorkoutInput = serde_json::from_value(v).expect("deserialize");
        assert_eq!(parsed.duration, 10.0);
        assert!(parsed.workout_type.is_none());
        let w = parsed.into_workout("server-id".into());
        assert_eq!(w.id, "server-id");
    }

    #[test]
    fn workout_serializes_nulls_for_absent_fields() {
        let w = WorkoutInput { workout_type: None, calories_burned: None, notes: None, ..input() }
            .into_workout("abc".into());
        let v = serde_json::to_value(&w).expect("serialize");
        assert_eq!(v["workout_type"], serde_json::Value::Null);
        assert_eq!(v["calories_burned"], serde_json::Value::Null);
        assert_eq!(v["notes"], serde_json::Value::Null);
        assert_eq!(v["duration"], serde_json::json!(45.0));
    }

    #[test]
    fn filter_matches_conjunctively() {
        let w = input().into_workout("1".into());
        let f = SearchFilter {
            date: Some("01-01-25".into()),
            workout_type: Some("run".into()),
            note_keyword: Some("run".into()),
        };
        assert!(f.matches(&w));
        let f = SearchFilter { workout_type: Some("swim".into()), ..f };
        assert!(!f.matches(&w));
    }

    #[test]
    fn note_keyword_is_case_sensitive_and_skips_missing_notes() {
        let f = SearchFilter { note_keyword: Some("Run".into()), ..Default::default() };
        assert!(!f.matches(&input().into_workout("1".into())));
        let no_notes = WorkoutInput { notes: None, ..input() }.into_workout("2".into());
        let f = SearchFilter { note_keyword: Some("run".into()), ..Default::default() };
        assert!(!f.matches(&no_notes));
    }

    #[test]
    fn untyped_workouts_never_match_a_type_filter() {
        let w = WorkoutInput { workout_type: None, ..input() }.into_workout("1".into());
        let f = SearchFilter { workout_type: Some("run".into()), ..Default::default() };
        assert!(!f.matches(&w));
    }

    #[test]
    fn empty_strings_are_dropped_by_normalize() {
        let f = SearchFilter {
            date: Some(String::new()),
            workout_type: Some(String::new()),
            note_keyword: None,
        }
        .normalized();
        assert!(f.is_empty());
        assert!(f.validate().is_ok());
    }

    #[test]
    fn search_date_must_be_well_formed() {
        let f = SearchFilter { date: Some("1/1/25".into()), ..Default::default() };
        assert_eq!(f.validate(), Err(ServiceError::InvalidFormat(MSG_BAD_SEARCH_DATE.into())));
    }
}
