use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::webinar::{NewWebinar as DomainNewWebinar, Webinar as DomainWebinar};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::webinars)]
pub struct Webinar {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub uploaded_by: String,
    pub upload_date: NaiveDate,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::webinars)]
pub struct NewWebinar<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub video_url: &'a str,
    pub uploaded_by: &'a str,
    pub upload_date: NaiveDate,
}

impl From<Webinar> for DomainWebinar {
    fn from(value: Webinar) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            video_url: value.video_url,
            uploaded_by: value.uploaded_by,
            upload_date: value.upload_date,
        }
    }
}

impl<'a> From<&'a DomainNewWebinar> for NewWebinar<'a> {
    fn from(value: &'a DomainNewWebinar) -> Self {
        Self {
            title: value.title.as_str(),
            description: value.description.as_str(),
            video_url: value.video_url.as_str(),
            uploaded_by: value.uploaded_by.as_str(),
            upload_date: value.upload_date,
        }
    }
}
