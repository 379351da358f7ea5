//! Background polls against a slow platform under a paused clock.

mod common;

use std::time::Duration;

use common::*;
use gw_api::testing::Endpoint;
use gw_core::{ConveyanceStatus, ShiftType};
use gw_session::{ConveyanceBoard, MemoryStorage, clock_ticks, poll_attendance, poll_conveyance};

#[tokio::test(start_paused = true)]
async fn slow_fetches_never_overlap() {
    let api = platform()
        .with_conveyance(vec![conveyance("cnv-1", ConveyanceStatus::Pending)])
        .with_latency(Duration::from_secs(45));
    let mut handle = poll_conveyance(api.clone(), Duration::from_secs(30));

    for _ in 0..4 {
        let list = handle.next().await.unwrap().unwrap();
        assert_eq!(list.len(), 1);
    }
    assert_eq!(api.max_in_flight(), 1);
    assert!(api.call_count(Endpoint::PendingConveyance) >= 4);
}

#[tokio::test(start_paused = true)]
async fn poll_results_feed_the_board() {
    let api = platform().with_conveyance(vec![
        conveyance("cnv-1", ConveyanceStatus::Pending),
        conveyance("cnv-2", ConveyanceStatus::Denied),
    ]);
    let mut handle = poll_conveyance(api.clone(), Duration::from_secs(30));
    let mut board = ConveyanceBoard::new();

    board.replace(handle.next().await.unwrap().unwrap());
    assert_eq!(board.pending_count(), 1);

    api.set_offline(true);
    let failed = handle.next().await.unwrap();
    assert!(failed.is_err());
    assert_eq!(board.all().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn cancelled_poll_stops_fetching() {
    let api = platform().with_latency(Duration::from_secs(5));
    let mut handle = poll_conveyance(api.clone(), Duration::from_secs(30));
    handle.next().await.unwrap().unwrap();

    handle.cancel();
    while handle.next().await.is_some() {}
    let calls = api.call_count(Endpoint::PendingConveyance);

    tokio::time::sleep(Duration::from_secs(300)).await;
    assert_eq!(api.call_count(Endpoint::PendingConveyance), calls);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_cancels() {
    let api = platform();
    {
        let mut handle = poll_conveyance(api.clone(), Duration::from_secs(30));
        handle.next().await.unwrap().unwrap();
    }
    tokio::time::sleep(Duration::from_secs(1)).await;
    let calls = api.call_count(Endpoint::PendingConveyance);
    tokio::time::sleep(Duration::from_secs(300)).await;
    assert_eq!(api.call_count(Endpoint::PendingConveyance), calls);
}

#[tokio::test(start_paused = true)]
async fn attendance_poll_reports_server_view() {
    let api = platform();
    let mut session = logged_in(api.clone(), MemoryStorage::new()).await;
    session.clock_in(ShiftType::Night).await.unwrap();

    let mut handle = poll_attendance(api.clone(), "stf-204".to_string(), Duration::from_secs(60));
    let remote = handle.next().await.unwrap().unwrap();
    session.apply_attendance(remote);
    assert!(session.is_on_duty());

    api.set_server_attendance(None);
    let remote = handle.next().await.unwrap().unwrap();
    session.apply_attendance(remote);
    assert!(!session.is_on_duty());
}

#[tokio::test(start_paused = true)]
async fn clock_ticks_advance() {
    let mut ticks = clock_ticks(Duration::from_secs(1));
    let first = ticks.next().await.unwrap();
    let second = ticks.next().await.unwrap();
    assert!(second >= first);
    ticks.shutdown().await;
}
