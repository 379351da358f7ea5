pub mod auth;
pub mod config;
pub mod conveyance;
pub mod dashboard;
pub mod dispatch;
pub mod duty;
pub mod report;
pub mod shared;
