//! # gw-core
//!
//! Core types shared across the Guardwise staff client crates:
//! - Entity structs mirroring the platform server's JSON contract
//!   (staff, attendance, conveyance requests, field reports)
//! - Status and kind enums, including the conveyance state machine
//! - Time display helpers (elapsed shift clock, relative timestamps)
//! - Cross-cutting error types

pub mod clock;
pub mod entities;
pub mod enums;
pub mod errors;

pub use entities::{
    ConveyanceRequest, FieldReport, GeoPoint, Staff, StaffAttendance,
};
pub use enums::{
    ConveyanceAction, ConveyanceStatus, MediaType, ReportType, ShiftType, StaffRole, StaffStatus,
};
pub use errors::CoreError;
