//! Periodic background fetches tied to a view's lifetime.
//!
//! A [`Poller`] runs one fetch per tick on a spawned task and hands results
//! back over a channel. Fetches never overlap: the task awaits each fetch
//! before waiting for the next tick, and ticks missed meanwhile are skipped.
//! Cancelling the token, or dropping the [`PollHandle`], stops the task at
//! its next await; a fetch already in flight completes and its result is
//! discarded.

use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Utc};
use gw_api::{ApiError, StaffApi};
use gw_core::{ConveyanceRequest, StaffAttendance};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

pub struct Poller {
    name: &'static str,
    period: Duration,
    token: CancellationToken,
}

impl Poller {
    #[must_use]
    pub fn new(name: &'static str, period: Duration) -> Self {
        Self {
            name,
            period,
            token: CancellationToken::new(),
        }
    }

    /// Stop this poller whenever `parent` is cancelled.
    #[must_use]
    pub fn child_of(mut self, parent: &CancellationToken) -> Self {
        self.token = parent.child_token();
        self
    }

    /// Start polling. The first fetch runs immediately.
    pub fn spawn<T, F, Fut>(self, mut fetch: F) -> PollHandle<T>
    where
        T: Send + 'static,
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(1);
        let token = self.token.clone();
        let name = self.name;
        let period = self.period;

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            tracing::debug!(poller = name, period_ms = period.as_millis(), "poller started");

            loop {
                tokio::select! {
                    () = token.cancelled() => break,
                    _ = ticker.tick() => {}
                }

                let value = fetch().await;
                if token.is_cancelled() {
                    break;
                }

                tokio::select! {
                    () = token.cancelled() => break,
                    sent = tx.send(value) => {
                        if sent.is_err() {
                            break;
                        }
                    }
                }
            }

            tracing::debug!(poller = name, "poller stopped");
        });

        PollHandle {
            rx,
            token: self.token,
            task: Some(task),
        }
    }
}

/// Receiving end of a [`Poller`]. Dropping it cancels the poller.
pub struct PollHandle<T> {
    rx: mpsc::Receiver<T>,
    token: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl<T> PollHandle<T> {
    /// Next fetched value, or `None` once the poller has stopped.
    pub async fn next(&mut self) -> Option<T> {
        self.rx.recv().await
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Cancel and wait for the task to exit.
    pub async fn shutdown(mut self) {
        self.token.cancel();
        self.rx.close();
        if let Some(task) = self.task.take()
            && let Err(error) = task.await
        {
            tracing::warn!(%error, "poller task failed");
        }
    }
}

impl<T> Drop for PollHandle<T> {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

// --- Ready-made pollers ---

/// Poll the conveyance list.
pub fn poll_conveyance<A>(
    api: A,
    period: Duration,
) -> PollHandle<Result<Vec<ConveyanceRequest>, ApiError>>
where
    A: StaffApi + Clone + 'static,
{
    Poller::new("conveyance", period).spawn(move || {
        let api = api.clone();
        async move { api.pending_conveyance().await }
    })
}

/// Poll one staff member's attendance status.
pub fn poll_attendance<A>(
    api: A,
    staff_id: String,
    period: Duration,
) -> PollHandle<Result<Option<StaffAttendance>, ApiError>>
where
    A: StaffApi + Clone + 'static,
{
    Poller::new("attendance", period).spawn(move || {
        let api = api.clone();
        let staff_id = staff_id.clone();
        async move { api.attendance_status(&staff_id).await }
    })
}

/// Wall-clock ticks driving the elapsed shift display.
#[must_use]
pub fn clock_ticks(period: Duration) -> PollHandle<DateTime<Utc>> {
    Poller::new("clock", period).spawn(|| async { Utc::now() })
}
