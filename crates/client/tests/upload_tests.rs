//! Upload client against a mocked `/api/upload`, and the wizard upload
//! flows over a scripted uploader.

use std::sync::atomic::{AtomicUsize, Ordering};

use assert_matches::assert_matches;
use async_trait::async_trait;
use pawlink_client::traits::UploadFile;
use pawlink_client::upload::UploadClient;
use pawlink_client::uploads::{upload_image, upload_photos};
use pawlink_client::{ClientError, ImageUploader};
use pawlink_core::model::{RoleDetails, UploadTarget};
use pawlink_core::types::Role;
use pawlink_core::wizard::Wizard;
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn png(name: &str) -> UploadFile {
    UploadFile::new(name, "image/png", vec![0x89, b'P', b'N', b'G'])
}

/// Fails every file whose name starts with `bad`.
struct ScriptedUploader {
    calls: AtomicUsize,
}

impl ScriptedUploader {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ImageUploader for ScriptedUploader {
    async fn upload(&self, file: UploadFile) -> Result<String, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if file.file_name.starts_with("bad") {
            return Err(ClientError::Api {
                status: 422,
                body: json!({ "message": "Unsupported image" }).to_string(),
            });
        }
        Ok(format!("/uploads/{}", file.file_name))
    }
}

// ---------------------------------------------------------------------------
// UploadClient
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upload_client_posts_multipart_image_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .and(body_string_contains("name=\"image\""))
        .and(body_string_contains("filename=\"avatar.png\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "url": "/uploads/abc.png" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = UploadClient::new(server.uri());
    let url = client.upload(png("avatar.png")).await.unwrap();
    assert_eq!(url, "/uploads/abc.png");
}

#[tokio::test]
async fn upload_client_surfaces_api_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .respond_with(ResponseTemplate::new(413).set_body_json(json!({ "message": "File too large" })))
        .mount(&server)
        .await;

    let err = UploadClient::new(server.uri())
        .upload(png("huge.png"))
        .await
        .unwrap_err();
    assert_matches!(err, ClientError::Api { status: 413, .. });
    assert_eq!(err.user_message(), "File too large");
}

#[tokio::test]
async fn upload_client_rejects_missing_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .mount(&server)
        .await;

    let err = UploadClient::new(server.uri())
        .upload(png("a.png"))
        .await
        .unwrap_err();
    assert_matches!(err, ClientError::Decode(_));
}

// ---------------------------------------------------------------------------
// Wizard flows
// ---------------------------------------------------------------------------

#[tokio::test]
async fn image_upload_sets_field() {
    let uploader = ScriptedUploader::new();
    let mut wizard = Wizard::new(Role::Trainer);

    let url = upload_image(&mut wizard, &uploader, UploadTarget::CertificationImage, png("cert.png"))
        .await
        .unwrap();

    assert_eq!(url.as_deref(), Some("/uploads/cert.png"));
    assert!(!wizard.is_uploading(UploadTarget::CertificationImage));
    let RoleDetails::Trainer(d) = &wizard.state().details else {
        panic!("expected trainer details");
    };
    assert_eq!(d.certification_image, "/uploads/cert.png");
}

#[tokio::test]
async fn failed_image_upload_records_field_error() {
    let uploader = ScriptedUploader::new();
    let mut wizard = Wizard::new(Role::PetOwner);

    let url = upload_image(&mut wizard, &uploader, UploadTarget::Image, png("bad.png"))
        .await
        .unwrap();

    assert_eq!(url, None);
    assert_eq!(wizard.errors().get("image"), Some("Unsupported image"));
    assert!(wizard.state().image.is_empty());
    assert!(!wizard.is_uploading(UploadTarget::Image));
}

#[tokio::test]
async fn image_upload_rejects_field_of_other_role() {
    let uploader = ScriptedUploader::new();
    let mut wizard = Wizard::new(Role::PetOwner);

    let result = upload_image(
        &mut wizard,
        &uploader,
        UploadTarget::BusinessCardImage,
        png("card.png"),
    )
    .await;

    assert_matches!(result, Err(ClientError::Core(_)));
    assert_eq!(uploader.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn photo_uploads_keep_successes_and_drop_failures() {
    let uploader = ScriptedUploader::new();
    let mut wizard = Wizard::new(Role::Veterinarian);
    let files = vec![png("front.png"), png("bad-1.png"), png("room.png")];

    let added = upload_photos(&mut wizard, &uploader, UploadTarget::ClinicPhotos, files)
        .await
        .unwrap();

    assert_eq!(added, 2);
    assert_eq!(uploader.calls.load(Ordering::SeqCst), 3);
    assert!(!wizard.errors().contains_key("clinicPhotos"));
    let RoleDetails::Veterinarian(d) = &wizard.state().details else {
        panic!("expected veterinarian details");
    };
    assert_eq!(d.clinic_photos.urls(), ["/uploads/front.png", "/uploads/room.png"]);
}

#[tokio::test]
async fn photo_uploads_all_failing_set_error() {
    let uploader = ScriptedUploader::new();
    let mut wizard = Wizard::new(Role::Trainer);
    let files = vec![png("bad-a.png"), png("bad-b.png")];

    let added = upload_photos(&mut wizard, &uploader, UploadTarget::TrainingPhotos, files)
        .await
        .unwrap();

    assert_eq!(added, 0);
    assert!(wizard.errors().contains_key("trainingPhotos"));
    assert!(!wizard.is_uploading(UploadTarget::TrainingPhotos));
}

#[tokio::test]
async fn photo_upload_rejects_single_image_field_before_sending() {
    let uploader = ScriptedUploader::new();
    let mut wizard = Wizard::new(Role::Trainer);
    let files = vec![png("a.png"), png("b.png")];

    let result = upload_photos(&mut wizard, &uploader, UploadTarget::CertificationImage, files).await;

    assert_matches!(result, Err(ClientError::Core(_)));
    assert_eq!(uploader.calls.load(Ordering::SeqCst), 0);
    assert!(!wizard.is_uploading(UploadTarget::CertificationImage));
    assert!(wizard.errors().is_empty());
}

#[tokio::test]
async fn photo_upload_with_no_files_is_noop() {
    let uploader = ScriptedUploader::new();
    let mut wizard = Wizard::new(Role::Trainer);
    let added = upload_photos(&mut wizard, &uploader, UploadTarget::TrainingPhotos, vec![])
        .await
        .unwrap();
    assert_eq!(added, 0);
    assert_eq!(uploader.calls.load(Ordering::SeqCst), 0);
}
