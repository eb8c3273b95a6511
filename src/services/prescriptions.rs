use std::fs;
use std::path::{Path, PathBuf};

use crate::forms::prescriptions::PrescriptionUpload;
use crate::services::{ServiceError, ServiceResult};

/// Message returned when the request carried no usable file.
pub const NO_FILE_MESSAGE: &str = "No file uploaded.";
/// Message returned after a successful upload.
pub const UPLOADED_MESSAGE: &str = "Prescription uploaded successfully!";

/// Copies an uploaded prescription into `target_dir` and returns where it landed.
///
/// Only the final component of the client file name is used, so names such
/// as `../../etc/passwd` cannot escape the directory.
pub fn store_prescription(
    upload: Option<PrescriptionUpload<'_>>,
    target_dir: &Path,
) -> ServiceResult<PathBuf> {
    let upload = upload.ok_or_else(|| ServiceError::InvalidInput(NO_FILE_MESSAGE.to_string()))?;

    let file_name = upload
        .file_name
        .and_then(|name| Path::new(name).file_name())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ServiceError::InvalidInput(NO_FILE_MESSAGE.to_string()))?;

    fs::create_dir_all(target_dir)?;
    let destination = target_dir.join(file_name);
    fs::copy(upload.path, &destination)?;

    log::info!("Stored prescription at {}", destination.display());
    Ok(destination)
}
