use chrono::{NaiveDate, NaiveTime};
use diesel::prelude::*;

use crate::domain::learning_class::{
    LearningClass as DomainLearningClass, NewLearningClass as DomainNewLearningClass,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::learning_classes)]
pub struct LearningClass {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub meeting_link: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub uploaded_by: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::learning_classes)]
pub struct NewLearningClass<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub meeting_link: &'a str,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub uploaded_by: &'a str,
}

impl From<LearningClass> for DomainLearningClass {
    fn from(value: LearningClass) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            meeting_link: value.meeting_link,
            date: value.date,
            time: value.time,
            uploaded_by: value.uploaded_by,
        }
    }
}

impl<'a> From<&'a DomainNewLearningClass> for NewLearningClass<'a> {
    fn from(value: &'a DomainNewLearningClass) -> Self {
        Self {
            title: value.title.as_str(),
            description: value.description.as_str(),
            meeting_link: value.meeting_link.as_str(),
            date: value.date,
            time: value.time,
            uploaded_by: value.uploaded_by.as_str(),
        }
    }
}
