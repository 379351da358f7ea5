//! Field report filing against the in-memory platform.

mod common;

use std::fs;

use common::*;
use gw_api::testing::{Call, Endpoint};
use gw_core::{GeoPoint, MediaType, ReportType};
use gw_session::{
    CaptureError, FileMediaCapture, MediaCapture, MemoryStorage, ReportDesk, ReportDraft,
    ReportError,
};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn voice_note_with_recording_is_filed_and_listed_first() {
    let api = platform();
    let session = session_with(api.clone(), MemoryStorage::new(), Some(GeoPoint::new(12.95, 77.7)));
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let path = tmp.path().join("gate-b.webm");
    fs::write(&path, vec![1u8; 4096]).unwrap();

    let clip = FileMediaCapture.capture(MediaType::Audio, &path).unwrap();
    let draft = ReportDraft::new(ReportType::VoiceNote, "  Gate B lighting  ")
        .with_description("Two lamps out near the barrier")
        .with_media(clip);

    let mut desk = ReportDesk::new();
    let location = session.locate_for_report().await;
    let created = desk
        .submit(session.api(), &staff(), &draft, location)
        .await
        .unwrap()
        .clone();
    assert_eq!(created.title, "Gate B lighting");
    assert_eq!(created.media_type, Some(MediaType::Audio));
    assert_eq!(created.location, Some(GeoPoint::new(12.95, 77.7)));
    assert_eq!(desk.recent()[0].id, created.id);

    let draft = ReportDraft::new(ReportType::Incident, "Fence panel loose");
    desk.submit(session.api(), &staff(), &draft, None).await.unwrap();
    assert_eq!(desk.recent().len(), 2);
    assert_eq!(desk.recent()[0].title, "Fence panel loose");

    let mut reloaded = ReportDesk::new();
    reloaded.load_recent(&api, &staff()).await.unwrap();
    assert_eq!(reloaded.recent().len(), 2);
    assert!(api.calls().contains(&Call::FieldReports {
        staff_id: "stf-204".into()
    }));
}

#[tokio::test]
async fn incomplete_draft_is_never_sent() {
    let api = platform();
    let mut desk = ReportDesk::new();

    let err = desk
        .submit(&api, &staff(), &ReportDraft::new(ReportType::Video, "Perimeter"), None)
        .await
        .unwrap_err();
    assert!(matches!(err, ReportError::MissingInformation(_)));

    let err = desk
        .submit(&api, &staff(), &ReportDraft::new(ReportType::Incident, " "), None)
        .await
        .unwrap_err();
    assert!(matches!(err, ReportError::MissingInformation(_)));
    assert_eq!(api.call_count(Endpoint::SubmitFieldReport), 0);
    assert!(desk.recent().is_empty());
}

#[tokio::test]
async fn failed_submission_keeps_recent_list() {
    let api = platform();
    let mut desk = ReportDesk::new();
    desk.submit(&api, &staff(), &ReportDraft::new(ReportType::Incident, "First"), None)
        .await
        .unwrap();
    api.fail_next(Endpoint::SubmitFieldReport);

    let err = desk
        .submit(&api, &staff(), &ReportDraft::new(ReportType::Incident, "Second"), None)
        .await
        .unwrap_err();
    assert!(matches!(err, ReportError::Api(_)));
    assert_eq!(desk.recent().len(), 1);
}

#[test]
fn missing_recording_blocks_with_device_message() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let err = FileMediaCapture
        .capture(MediaType::Video, &tmp.path().join("nothing.mp4"))
        .unwrap_err();
    assert!(matches!(err, CaptureError::Unavailable { device: "camera", .. }));
    let report_err = ReportError::from(err);
    assert!(report_err.to_string().starts_with("camera recording unavailable"));
}
