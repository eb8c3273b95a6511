use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A recorded educational session published for customers and vendors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webinar {
    pub id: i32,
    pub title: String,
    pub description: String,
    /// Link to the hosted recording.
    pub video_url: String,
    /// Free-text name of the publisher.
    pub uploaded_by: String,
    /// Day the webinar was published.
    pub upload_date: NaiveDate,
}

/// Payload required to publish a webinar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWebinar {
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub uploaded_by: String,
    pub upload_date: NaiveDate,
}
