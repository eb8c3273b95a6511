use diesel::prelude::*;

use crate::domain::learning_class::{
    LearningClass as DomainLearningClass, NewLearningClass as DomainNewLearningClass,
};
use crate::models::learning_class::{
    LearningClass as DbLearningClass, NewLearningClass as DbNewLearningClass,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, LearningClassReader, LearningClassWriter};

impl LearningClassReader for DieselRepository {
    fn list_learning_classes(&self) -> RepositoryResult<Vec<DomainLearningClass>> {
        use crate::schema::learning_classes;

        let mut conn = self.conn()?;
        let rows = learning_classes::table
            .order((
                learning_classes::date.asc(),
                learning_classes::time.asc(),
                learning_classes::id.asc(),
            ))
            .load::<DbLearningClass>(&mut conn)?;

        Ok(rows.into_iter().map(DomainLearningClass::from).collect())
    }
}

impl LearningClassWriter for DieselRepository {
    fn create_learning_class(
        &self,
        new_class: &DomainNewLearningClass,
    ) -> RepositoryResult<DomainLearningClass> {
        use crate::schema::learning_classes;

        let mut conn = self.conn()?;
        let insertable = DbNewLearningClass::from(new_class);

        let created = diesel::insert_into(learning_classes::table)
            .values(&insertable)
            .get_result::<DbLearningClass>(&mut conn)?;

        Ok(created.into())
    }
}
