use chrono::NaiveDate;

use crate::domain::webinar::Webinar;
use crate::forms::webinars::AddWebinarForm;
use crate::repository::{WebinarReader, WebinarWriter};
use crate::services::{ServiceError, ServiceResult};

/// Loads the webinar catalog, most recently published first.
pub fn load_webinars<R>(repo: &R) -> ServiceResult<Vec<Webinar>>
where
    R: WebinarReader + ?Sized,
{
    repo.list_webinars().map_err(ServiceError::from)
}

/// Publishes a webinar dated `today`.
pub fn publish_webinar<R>(repo: &R, form: AddWebinarForm, today: NaiveDate) -> ServiceResult<Webinar>
where
    R: WebinarWriter + ?Sized,
{
    let new_webinar = form
        .into_new_webinar(today)
        .map_err(|err| ServiceError::InvalidInput(err.to_string()))?;

    repo.create_webinar(&new_webinar).map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::repository::mock::{MockWebinarReader, MockWebinarWriter};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
    }

    fn valid_form() -> AddWebinarForm {
        AddWebinarForm {
            title: "Diabetes care".to_string(),
            description: "Daily routines.".to_string(),
            video_url: "https://videos.example.com/diabetes".to_string(),
            uploaded_by: "Nurse Kim".to_string(),
        }
    }

    #[test]
    fn load_webinars_passes_catalog_through() {
        let mut repo = MockWebinarReader::new();
        repo.expect_list_webinars().times(1).returning(|| {
            Ok(vec![Webinar {
                id: 1,
                title: "Diabetes care".to_string(),
                description: "Daily routines.".to_string(),
                video_url: "https://videos.example.com/diabetes".to_string(),
                uploaded_by: "Nurse Kim".to_string(),
                upload_date: today(),
            }])
        });

        let webinars = load_webinars(&repo).expect("expected success");

        assert_eq!(webinars.len(), 1);
        assert_eq!(webinars[0].title, "Diabetes care");
    }

    #[test]
    fn publish_webinar_stamps_today() {
        let mut repo = MockWebinarWriter::new();
        repo.expect_create_webinar()
            .times(1)
            .withf(|new_webinar| {
                assert_eq!(new_webinar.upload_date, today());
                assert_eq!(new_webinar.uploaded_by, "Nurse Kim");
                true
            })
            .returning(|new_webinar| {
                Ok(Webinar {
                    id: 3,
                    title: new_webinar.title.clone(),
                    description: new_webinar.description.clone(),
                    video_url: new_webinar.video_url.clone(),
                    uploaded_by: new_webinar.uploaded_by.clone(),
                    upload_date: new_webinar.upload_date,
                })
            });

        let webinar = publish_webinar(&repo, valid_form(), today()).expect("expected success");

        assert_eq!(webinar.id, 3);
    }

    #[test]
    fn publish_webinar_rejects_invalid_form() {
        let mut repo = MockWebinarWriter::new();
        repo.expect_create_webinar().never();

        let mut form = valid_form();
        form.video_url = "ftp//broken".to_string();

        let result = publish_webinar(&repo, form, today());

        assert!(matches!(result, Err(ServiceError::InvalidInput(_))));
    }
}
