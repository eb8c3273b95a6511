use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::webinar::NewWebinar;
use crate::forms::{sanitize_inline_text, sanitize_multiline_text};

const TITLE_MAX_LEN: u64 = 200;
const DESCRIPTION_MAX_LEN: u64 = 4096;
const AUTHOR_MAX_LEN: u64 = 128;

/// Result type returned by the webinar form helpers.
pub type WebinarFormResult<T> = Result<T, WebinarFormError>;

/// Errors that can occur while processing the webinar form.
#[derive(Debug, Error)]
pub enum WebinarFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// A required field is blank after sanitization.
    #[error("{0} cannot be empty")]
    Empty(&'static str),
}

/// Form payload of the "upload webinar" page.
#[derive(Debug, Deserialize, Validate)]
pub struct AddWebinarForm {
    #[validate(length(min = 1, max = TITLE_MAX_LEN))]
    pub title: String,
    #[validate(length(min = 1, max = DESCRIPTION_MAX_LEN))]
    pub description: String,
    #[validate(url)]
    pub video_url: String,
    #[validate(length(min = 1, max = AUTHOR_MAX_LEN))]
    pub uploaded_by: String,
}

impl AddWebinarForm {
    /// Validate and sanitize the payload into a `NewWebinar` published on `today`.
    pub fn into_new_webinar(self, today: NaiveDate) -> WebinarFormResult<NewWebinar> {
        self.validate()?;

        Ok(NewWebinar {
            title: non_empty("title", sanitize_inline_text(&self.title))?,
            description: non_empty("description", sanitize_multiline_text(&self.description))?,
            video_url: self.video_url.trim().to_string(),
            uploaded_by: non_empty("uploaded_by", sanitize_inline_text(&self.uploaded_by))?,
            upload_date: today,
        })
    }
}

fn non_empty(field: &'static str, value: String) -> WebinarFormResult<String> {
    if value.is_empty() {
        Err(WebinarFormError::Empty(field))
    } else {
        Ok(value)
    }
}
