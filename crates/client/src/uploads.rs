//! Upload flows: mark the field busy, send the file(s), write the URL(s)
//! back into the wizard.
//!
//! Upload failures are user-facing and end up in the wizard's field
//! errors. The `Err` side of these functions is reserved for targeting a
//! field the role does not have, or one of the wrong kind.

use futures::future::join_all;
use pawlink_core::error::CoreError;
use pawlink_core::model::UploadTarget;
use pawlink_core::wizard::Wizard;

use crate::error::ClientError;
use crate::traits::{ImageUploader, UploadFile};

/// Upload a single image into `target`. Returns the stored URL, or `None`
/// if the upload failed and the error was recorded on the field.
pub async fn upload_image(
    wizard: &mut Wizard,
    uploader: &dyn ImageUploader,
    target: UploadTarget,
    file: UploadFile,
) -> Result<Option<String>, ClientError> {
    if target.is_gallery() {
        return Err(CoreError::Validation(format!(
            "'{}' takes multiple photos, use upload_photos",
            target.key()
        ))
        .into());
    }
    wizard.begin_upload(target)?;

    let file_name = file.file_name.clone();
    match uploader.upload(file).await {
        Ok(url) => {
            wizard.finish_upload(target, Ok(url.clone()))?;
            Ok(Some(url))
        }
        Err(e) => {
            tracing::warn!(error = %e, field = target.key(), file = %file_name, "Image upload failed");
            wizard.finish_upload(target, Err(e.user_message()))?;
            Ok(None)
        }
    }
}

/// Upload several photos concurrently into a gallery field. Every upload
/// settles; successful URLs are appended in input order and failures are
/// dropped. Returns the number of photos added.
pub async fn upload_photos(
    wizard: &mut Wizard,
    uploader: &dyn ImageUploader,
    target: UploadTarget,
    files: Vec<UploadFile>,
) -> Result<usize, ClientError> {
    if !target.is_gallery() {
        return Err(CoreError::Validation(format!(
            "'{}' takes a single image, use upload_image",
            target.key()
        ))
        .into());
    }
    if files.is_empty() {
        return Ok(0);
    }
    wizard.begin_upload(target)?;

    let names: Vec<String> = files.iter().map(|f| f.file_name.clone()).collect();
    let results = join_all(files.into_iter().map(|f| uploader.upload(f))).await;

    let mut urls = Vec::with_capacity(results.len());
    let mut failed = 0;
    for (name, result) in names.iter().zip(results) {
        match result {
            Ok(url) => urls.push(url),
            Err(e) => {
                failed += 1;
                tracing::warn!(error = %e, field = target.key(), file = %name, "Dropping failed photo upload");
            }
        }
    }

    let added = urls.len();
    tracing::info!(field = target.key(), added, failed, "Photo uploads settled");
    wizard.finish_photo_uploads(target, urls, failed)?;
    Ok(added)
}
