use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::learning_class::NewLearningClass;
use crate::forms::{sanitize_inline_text, sanitize_multiline_text};

const TITLE_MAX_LEN: u64 = 200;
const DESCRIPTION_MAX_LEN: u64 = 4096;
const AUTHOR_MAX_LEN: u64 = 128;

/// Result type returned by the class form helpers.
pub type ClassFormResult<T> = Result<T, ClassFormError>;

/// Errors that can occur while processing the class form.
#[derive(Debug, Error)]
pub enum ClassFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// A required field is blank after sanitization.
    #[error("{0} cannot be empty")]
    Empty(&'static str),
    #[error("invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("invalid time `{0}`, expected HH:MM")]
    InvalidTime(String),
}

/// Form payload of the "upload class" page. Date and time arrive as the raw
/// strings of `<input type="date">` and `<input type="time">`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddLearningClassForm {
    #[validate(length(min = 1, max = TITLE_MAX_LEN))]
    pub title: String,
    #[validate(length(min = 1, max = DESCRIPTION_MAX_LEN))]
    pub description: String,
    #[validate(url)]
    pub meeting_link: String,
    pub date: String,
    pub time: String,
    #[validate(length(min = 1, max = AUTHOR_MAX_LEN))]
    pub uploaded_by: String,
}

impl AddLearningClassForm {
    /// Validate and parse the payload into a `NewLearningClass`.
    pub fn into_new_class(self) -> ClassFormResult<NewLearningClass> {
        self.validate()?;

        let title = sanitize_inline_text(&self.title);
        if title.is_empty() {
            return Err(ClassFormError::Empty("title"));
        }
        let description = sanitize_multiline_text(&self.description);
        if description.is_empty() {
            return Err(ClassFormError::Empty("description"));
        }
        let uploaded_by = sanitize_inline_text(&self.uploaded_by);
        if uploaded_by.is_empty() {
            return Err(ClassFormError::Empty("uploaded_by"));
        }

        Ok(NewLearningClass {
            title,
            description,
            meeting_link: self.meeting_link.trim().to_string(),
            date: parse_date(&self.date)?,
            time: parse_time(&self.time)?,
            uploaded_by,
        })
    }
}

fn parse_date(raw: &str) -> ClassFormResult<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| ClassFormError::InvalidDate(trimmed.to_string()))
}

fn parse_time(raw: &str) -> ClassFormResult<NaiveTime> {
    let trimmed = raw.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| ClassFormError::InvalidTime(trimmed.to_string()))
}
