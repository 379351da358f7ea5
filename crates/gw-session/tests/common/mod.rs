#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use gw_api::testing::FakeStaffApi;
use gw_config::LocationConfig;
use gw_core::{ConveyanceRequest, ConveyanceStatus, GeoPoint, Staff, StaffRole, StaffStatus};
use gw_session::{FixedLocation, MemoryStorage, SessionStore, StaffSession};

pub const EMAIL: &str = "priya@guardwise.test";
pub const PASSWORD: &str = "patrol-42";

pub type TestSession = StaffSession<FakeStaffApi, MemoryStorage, FixedLocation>;

pub fn staff() -> Staff {
    Staff {
        id: "stf-204".into(),
        name: "Priya Raman".into(),
        email: EMAIL.into(),
        phone: "+91 98450 00000".into(),
        employee_id: "GW-0204".into(),
        role: StaffRole::Supervisor,
        assigned_area: Some("Whitefield Sector 2".into()),
        status: StaffStatus::Offline,
    }
}

pub fn platform() -> FakeStaffApi {
    FakeStaffApi::new().with_account(EMAIL, PASSWORD, staff())
}

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 22, 0, 0).unwrap()
}

pub fn session_with(
    api: FakeStaffApi,
    storage: MemoryStorage,
    position: Option<GeoPoint>,
) -> TestSession {
    StaffSession::new(
        api,
        SessionStore::restore(storage),
        FixedLocation::new(position),
        &LocationConfig::default(),
    )
}

pub async fn logged_in(api: FakeStaffApi, storage: MemoryStorage) -> TestSession {
    let mut session = session_with(api, storage, None);
    session.login(EMAIL, PASSWORD).await.unwrap();
    session
}

pub fn conveyance(id: &str, status: ConveyanceStatus) -> ConveyanceRequest {
    ConveyanceRequest {
        id: id.into(),
        guard_id: format!("grd-{id}"),
        guard_name: "Ravi K".into(),
        site_id: "site-3".into(),
        site_name: "Tech Park Gate B".into(),
        reason: "Medical emergency at home".into(),
        requested_at: t0(),
        status,
        responded_at: None,
        responded_by: None,
        staff_notes: None,
        estimated_duration: Some(45),
        current_location: None,
    }
}
