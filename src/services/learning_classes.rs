use crate::domain::learning_class::LearningClass;
use crate::forms::learning_classes::AddLearningClassForm;
use crate::repository::{LearningClassReader, LearningClassWriter};
use crate::services::{ServiceError, ServiceResult};

/// Loads scheduled classes in chronological order.
pub fn load_classes<R>(repo: &R) -> ServiceResult<Vec<LearningClass>>
where
    R: LearningClassReader + ?Sized,
{
    repo.list_learning_classes().map_err(ServiceError::from)
}

/// Schedules a new class from the upload form.
pub fn schedule_class<R>(repo: &R, form: AddLearningClassForm) -> ServiceResult<LearningClass>
where
    R: LearningClassWriter + ?Sized,
{
    let new_class = form
        .into_new_class()
        .map_err(|err| ServiceError::InvalidInput(err.to_string()))?;

    repo.create_learning_class(&new_class)
        .map_err(ServiceError::from)
}
