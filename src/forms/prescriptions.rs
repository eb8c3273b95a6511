use std::path::Path;

use actix_multipart::form::{MultipartForm, tempfile::TempFile};

/// Multipart form posted by the prescription modal.
#[derive(MultipartForm)]
pub struct UploadPrescriptionForm {
    #[multipart(limit = "10MB")]
    pub prescription: Option<TempFile>,
}

/// A received file ready to be stored.
#[derive(Debug, Clone, Copy)]
pub struct PrescriptionUpload<'a> {
    /// Name supplied by the client, possibly including directories.
    pub file_name: Option<&'a str>,
    /// Location of the spooled upload on disk.
    pub path: &'a Path,
}

impl UploadPrescriptionForm {
    /// The uploaded file, if the request carried one.
    pub fn upload(&self) -> Option<PrescriptionUpload<'_>> {
        self.prescription.as_ref().map(|file| PrescriptionUpload {
            file_name: file.file_name.as_deref(),
            path: file.file.path(),
        })
    }
}
