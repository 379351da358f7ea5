mod attendance;
mod conveyance;
mod geo;
mod report;
mod staff;

pub use attendance::StaffAttendance;
pub use conveyance::ConveyanceRequest;
pub use geo::GeoPoint;
pub use report::FieldReport;
pub use staff::Staff;
