pub mod auth;
pub mod config;
pub mod conveyance;
pub mod duty;
pub mod report;

pub use auth::AuthCommands;
pub use config::ConfigCommands;
pub use conveyance::ConveyanceCommands;
pub use duty::DutyCommands;
pub use report::ReportCommands;
