use gw_api::PlatformClient;
use gw_config::GwConfig;
use gw_session::{FileStorage, FixedLocation, SessionStore, StaffSession};

pub type CliSession = StaffSession<PlatformClient, FileStorage, FixedLocation>;

/// Everything a command handler needs: resolved config and the restored session.
pub struct AppContext {
    pub config: GwConfig,
    pub session: CliSession,
}

impl AppContext {
    pub fn init(config: GwConfig) -> anyhow::Result<Self> {
        let api = PlatformClient::from_config(&config.api)?;
        let dir = config.session.resolve_dir()?;
        tracing::debug!(session_dir = %dir.display(), base_url = api.base_url(), "initializing session");

        let store = SessionStore::restore(FileStorage::new(dir));
        let location = FixedLocation::new(config.location.fixed_position());
        let session = StaffSession::new(api, store, location, &config.location);
        Ok(Self { config, session })
    }

    /// Cloned platform client for background pollers.
    pub fn api(&self) -> PlatformClient {
        self.session.api().clone()
    }
}
