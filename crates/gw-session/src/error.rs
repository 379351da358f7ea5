//! Error types for session, duty, conveyance and report operations.

use std::path::PathBuf;

use gw_api::ApiError;
use gw_core::{ConveyanceStatus, CoreError};
use thiserror::Error;

/// Durable session storage failures.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("session storage I/O on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("session storage is read-only")]
    ReadOnly,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("not logged in, run `gw auth login`")]
    NotLoggedIn,

    #[error("{0}")]
    InvalidCredentials(String),

    #[error("already clocked in")]
    AlreadyOnDuty,

    #[error("not clocked in")]
    NotOnDuty,

    #[error(transparent)]
    Transition(#[from] CoreError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Error)]
pub enum ConveyanceError {
    #[error("no conveyance request with id {0}")]
    UnknownRequest(String),

    #[error("conveyance request {id} is already {status}")]
    AlreadyResolved { id: String, status: ConveyanceStatus },

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Device capture failures. Both block a submission that needs the media.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("{device} access denied")]
    PermissionDenied { device: &'static str },

    #[error("{device} recording unavailable: {reason}")]
    Unavailable { device: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("missing information: {0}")]
    MissingInformation(String),

    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Position lookup failures. Logged, never shown to the user.
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("location unavailable: {0}")]
    Unavailable(String),

    #[error("location lookup timed out")]
    TimedOut,
}
