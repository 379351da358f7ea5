//! Cached conveyance requests and the approve/deny flow.

use chrono::{DateTime, Utc};
use gw_api::{RespondRequest, StaffApi};
use gw_core::{ConveyanceAction, ConveyanceRequest, Staff};

use crate::error::ConveyanceError;

/// Local view of the platform's conveyance list.
#[derive(Debug, Clone, Default)]
pub struct ConveyanceBoard {
    requests: Vec<ConveyanceRequest>,
    refreshed_at: Option<DateTime<Utc>>,
}

impl ConveyanceBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the list and replace the cache. On failure the previous list is
    /// kept.
    ///
    /// # Errors
    ///
    /// Returns [`ConveyanceError::Api`] if the fetch fails.
    pub async fn refresh<A: StaffApi>(
        &mut self,
        api: &A,
    ) -> Result<&[ConveyanceRequest], ConveyanceError> {
        let requests = api.pending_conveyance().await?;
        self.replace(requests);
        Ok(&self.requests)
    }

    /// Replace the cache with a list fetched elsewhere (e.g. by a poller).
    pub fn replace(&mut self, requests: Vec<ConveyanceRequest>) {
        tracing::debug!(count = requests.len(), "conveyance list refreshed");
        self.requests = requests;
        self.refreshed_at = Some(Utc::now());
    }

    #[must_use]
    pub fn all(&self) -> &[ConveyanceRequest] {
        &self.requests
    }

    pub fn pending(&self) -> impl Iterator<Item = &ConveyanceRequest> {
        self.requests.iter().filter(|r| r.is_pending())
    }

    pub fn processed(&self) -> impl Iterator<Item = &ConveyanceRequest> {
        self.requests.iter().filter(|r| !r.is_pending())
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending().count()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ConveyanceRequest> {
        self.requests.iter().find(|r| r.id == id)
    }

    #[must_use]
    pub const fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.refreshed_at
    }

    /// Approve or deny a pending request.
    ///
    /// On success the cached entry with the selected id is replaced by the
    /// server's returned object; no other entry is touched. Blank notes are
    /// not sent.
    ///
    /// # Errors
    ///
    /// [`ConveyanceError::UnknownRequest`] if `id` is not cached,
    /// [`ConveyanceError::AlreadyResolved`] if it is no longer pending, and
    /// [`ConveyanceError::Api`] if the platform call fails (cache unchanged).
    pub async fn respond<A: StaffApi>(
        &mut self,
        api: &A,
        staff: &Staff,
        id: &str,
        action: ConveyanceAction,
        notes: Option<&str>,
    ) -> Result<&ConveyanceRequest, ConveyanceError> {
        let index = self
            .requests
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| ConveyanceError::UnknownRequest(id.to_string()))?;
        let current = &self.requests[index];
        if !current.status.can_transition_to(action.resulting_status()) {
            return Err(ConveyanceError::AlreadyResolved {
                id: id.to_string(),
                status: current.status,
            });
        }

        let response = RespondRequest::new(action, staff.id.clone(), notes);
        let updated = api.respond_conveyance(id, &response).await?;
        tracing::debug!(request_id = id, status = %updated.status, "conveyance request resolved");
        self.requests[index] = updated;
        Ok(&self.requests[index])
    }
}
