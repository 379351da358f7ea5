//! # gw-session
//!
//! Client-side state for the Guardwise staff client:
//! - [`SessionStore`]: logged-in staff and open attendance, persisted through
//!   [`SessionStorage`] ([`FileStorage`] on disk, [`MemoryStorage`] in tests)
//! - [`StaffSession`]: the context object driving login, clock-in/out and
//!   attendance sync through the [`DutyState`] machine
//! - [`ConveyanceBoard`] and [`ReportDesk`] for approvals and field reports
//! - [`Poller`] background refreshes with explicit cancellation
//! - [`DashboardSummary`] for the overview screen

pub mod conveyance;
pub mod dashboard;
pub mod duty;
pub mod error;
pub mod location;
pub mod poll;
pub mod reports;
pub mod session;
pub mod storage;
pub mod store;

pub use conveyance::ConveyanceBoard;
pub use dashboard::DashboardSummary;
pub use duty::{DutyState, ElapsedClock};
pub use error::{
    CaptureError, ConveyanceError, LocationError, ReportError, SessionError, StorageError,
};
pub use location::{FixedLocation, LocationProvider, locate_within};
pub use poll::{PollHandle, Poller, clock_ticks, poll_attendance, poll_conveyance};
pub use reports::{FileMediaCapture, MediaCapture, MediaClip, ReportDesk, ReportDraft};
pub use session::{ClosedShift, StaffSession};
pub use storage::{ATTENDANCE_KEY, FileStorage, MemoryStorage, STAFF_KEY, SessionStorage};
pub use store::SessionStore;
