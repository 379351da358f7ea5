//! Field report drafting, media capture and submission.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use gw_api::{NewFieldReport, StaffApi};
use gw_core::{FieldReport, GeoPoint, MediaType, ReportType, Staff};
use serde::Serialize;

use crate::error::{CaptureError, ReportError};

// --- Media capture ---

/// A finished recording ready to attach to a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaClip {
    pub path: PathBuf,
    pub media_type: MediaType,
    pub bytes: u64,
}

/// Produces recordings. Device access is opaque to the report flow; only
/// the outcome matters.
pub trait MediaCapture {
    /// # Errors
    ///
    /// [`CaptureError::PermissionDenied`] when the device (microphone or
    /// camera) refuses access, [`CaptureError::Unavailable`] when no usable
    /// recording comes back.
    fn capture(&self, kind: MediaType, source: &Path) -> Result<MediaClip, CaptureError>;
}

/// Takes an already-recorded file from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileMediaCapture;

impl MediaCapture for FileMediaCapture {
    fn capture(&self, kind: MediaType, source: &Path) -> Result<MediaClip, CaptureError> {
        let device = kind.device();
        let metadata = fs::metadata(source).map_err(|e| match e.kind() {
            ErrorKind::PermissionDenied => CaptureError::PermissionDenied { device },
            _ => CaptureError::Unavailable {
                device,
                reason: format!("{}: {e}", source.display()),
            },
        })?;
        if !metadata.is_file() {
            return Err(CaptureError::Unavailable {
                device,
                reason: format!("{} is not a file", source.display()),
            });
        }
        if metadata.len() == 0 {
            return Err(CaptureError::Unavailable {
                device,
                reason: format!("{} is empty", source.display()),
            });
        }
        Ok(MediaClip {
            path: source.to_path_buf(),
            media_type: kind,
            bytes: metadata.len(),
        })
    }
}

// --- Drafts ---

#[derive(Debug, Clone)]
pub struct ReportDraft {
    pub report_type: ReportType,
    pub title: String,
    pub description: Option<String>,
    pub media: Option<MediaClip>,
}

impl ReportDraft {
    #[must_use]
    pub fn new(report_type: ReportType, title: impl Into<String>) -> Self {
        Self {
            report_type,
            title: title.into(),
            description: None,
            media: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_media(mut self, clip: MediaClip) -> Self {
        self.media = Some(clip);
        self
    }

    /// # Errors
    ///
    /// [`ReportError::MissingInformation`] for a blank title, or when a voice
    /// note or video lacks a recording of the matching kind.
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.title.trim().is_empty() {
            return Err(ReportError::MissingInformation(
                "a report needs a title".to_string(),
            ));
        }
        if let Some(required) = self.report_type.required_media() {
            match &self.media {
                Some(clip) if clip.media_type == required => {}
                Some(clip) => {
                    return Err(ReportError::MissingInformation(format!(
                        "a {} report needs {required} media, got {}",
                        self.report_type, clip.media_type
                    )));
                }
                None => {
                    return Err(ReportError::MissingInformation(format!(
                        "record {required} before submitting a {} report",
                        self.report_type
                    )));
                }
            }
        }
        Ok(())
    }

    /// Wire body for this draft. Title and description are trimmed; a blank
    /// description is dropped.
    #[must_use]
    pub fn to_submission(&self, staff: &Staff, location: Option<GeoPoint>) -> NewFieldReport {
        NewFieldReport {
            staff_id: staff.id.clone(),
            staff_name: staff.name.clone(),
            report_type: self.report_type,
            title: self.title.trim().to_string(),
            description: self
                .description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(ToString::to_string),
            media_type: self.media.as_ref().map(|clip| clip.media_type),
            location,
        }
    }
}

// --- Desk ---

/// Recently filed reports for the logged-in staff member.
#[derive(Debug, Clone, Default)]
pub struct ReportDesk {
    recent: Vec<FieldReport>,
}

impl ReportDesk {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn recent(&self) -> &[FieldReport] {
        &self.recent
    }

    /// # Errors
    ///
    /// Returns [`ReportError::Api`] if the list cannot be fetched; the cached
    /// list is kept.
    pub async fn load_recent<A: StaffApi>(
        &mut self,
        api: &A,
        staff: &Staff,
    ) -> Result<&[FieldReport], ReportError> {
        self.recent = api.field_reports(&staff.id).await?;
        Ok(&self.recent)
    }

    /// Validate and file a draft, then put the created report at the top of
    /// the recent list.
    ///
    /// # Errors
    ///
    /// [`ReportError::MissingInformation`] if the draft is incomplete (nothing
    /// is sent), [`ReportError::Api`] if the platform call fails.
    pub async fn submit<A: StaffApi>(
        &mut self,
        api: &A,
        staff: &Staff,
        draft: &ReportDraft,
        location: Option<GeoPoint>,
    ) -> Result<&FieldReport, ReportError> {
        draft.validate()?;
        let created = api
            .submit_field_report(&draft.to_submission(staff, location))
            .await?;
        tracing::debug!(report_id = %created.id, kind = %created.report_type, "field report filed");
        self.recent.insert(0, created);
        Ok(&self.recent[0])
    }
}

#[cfg(test)]
mod tests {
    use gw_core::{StaffRole, StaffStatus};
    use pretty_assertions::assert_eq;

    use super::*;

    fn clip(media_type: MediaType) -> MediaClip {
        MediaClip {
            path: PathBuf::from("/tmp/clip"),
            media_type,
            bytes: 2048,
        }
    }

    fn staff() -> Staff {
        Staff {
            id: "stf-204".into(),
            name: "Priya Raman".into(),
            email: "priya@guardwise.test".into(),
            phone: "+91 98450 00000".into(),
            employee_id: "GW-0204".into(),
            role: StaffRole::FieldOfficer,
            assigned_area: None,
            status: StaffStatus::Online,
        }
    }

    #[test]
    fn blank_title_is_rejected() {
        let draft = ReportDraft::new(ReportType::Incident, "   ");
        assert!(matches!(draft.validate(), Err(ReportError::MissingInformation(_))));
    }

    #[test]
    fn incident_needs_no_media() {
        assert!(ReportDraft::new(ReportType::Incident, "Fence down").validate().is_ok());
    }

    #[test]
    fn voice_note_needs_audio() {
        let draft = ReportDraft::new(ReportType::VoiceNote, "Gate B");
        let err = draft.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing information: record audio before submitting a voice_note report"
        );

        let wrong = draft.clone().with_media(clip(MediaType::Video));
        assert!(wrong.validate().is_err());

        let right = draft.with_media(clip(MediaType::Audio));
        assert!(right.validate().is_ok());
    }

    #[test]
    fn video_needs_video() {
        let draft = ReportDraft::new(ReportType::Video, "Perimeter walk");
        assert!(draft.validate().is_err());
        assert!(draft.with_media(clip(MediaType::Video)).validate().is_ok());
    }

    #[test]
    fn submission_trims_and_drops_blank_description() {
        let draft = ReportDraft::new(ReportType::Incident, "  Fence down  ").with_description(" \n ");
        let body = draft.to_submission(&staff(), None);
        assert_eq!(body.title, "Fence down");
        assert_eq!(body.description, None);
        assert_eq!(body.staff_name, "Priya Raman");
        assert_eq!(body.media_type, None);
    }

    #[test]
    fn file_capture_reads_recording() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("note.webm");
        fs::write(&path, b"RIFF....").unwrap();

        let clip = FileMediaCapture.capture(MediaType::Audio, &path).unwrap();
        assert_eq!(clip.media_type, MediaType::Audio);
        assert_eq!(clip.bytes, 8);
    }

    #[test]
    fn missing_or_empty_recording_is_unavailable() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let missing = tmp.path().join("missing.mp4");
        let err = FileMediaCapture.capture(MediaType::Video, &missing).unwrap_err();
        assert!(matches!(err, CaptureError::Unavailable { device: "camera", .. }));

        let empty = tmp.path().join("empty.webm");
        fs::write(&empty, b"").unwrap();
        let err = FileMediaCapture.capture(MediaType::Audio, &empty).unwrap_err();
        assert!(matches!(err, CaptureError::Unavailable { device: "microphone", .. }));
    }
}
