use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A live class scheduled at a given date and time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningClass {
    pub id: i32,
    pub title: String,
    pub description: String,
    /// Link participants use to join.
    pub meeting_link: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub uploaded_by: String,
}

/// Payload required to schedule a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLearningClass {
    pub title: String,
    pub description: String,
    pub meeting_link: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub uploaded_by: String,
}
