use diesel::prelude::*;

use crate::domain::webinar::{NewWebinar as DomainNewWebinar, Webinar as DomainWebinar};
use crate::models::webinar::{NewWebinar as DbNewWebinar, Webinar as DbWebinar};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, WebinarReader, WebinarWriter};

impl WebinarReader for DieselRepository {
    fn list_webinars(&self) -> RepositoryResult<Vec<DomainWebinar>> {
        use crate::schema::webinars;

        let mut conn = self.conn()?;
        let rows = webinars::table
            .order((webinars::upload_date.desc(), webinars::id.desc()))
            .load::<DbWebinar>(&mut conn)?;

        Ok(rows.into_iter().map(DomainWebinar::from).collect())
    }
}

impl WebinarWriter for DieselRepository {
    fn create_webinar(&self, new_webinar: &DomainNewWebinar) -> RepositoryResult<DomainWebinar> {
        use crate::schema::webinars;

        let mut conn = self.conn()?;
        let insertable = DbNewWebinar::from(new_webinar);

        let created = diesel::insert_into(webinars::table)
            .values(&insertable)
            .get_result::<DbWebinar>(&mut conn)?;

        Ok(created.into())
    }
}
