use std::sync::Arc;

use desk_api::{ApiClient, TokenSource};
use desk_auth::SessionStore;
use desk_config::DeskConfig;

/// Everything a command handler needs.
pub struct AppContext {
    pub config: DeskConfig,
    pub store: SessionStore,
    pub client: ApiClient,
}

impl AppContext {
    pub fn init(config: DeskConfig) -> anyhow::Result<Self> {
        let store = SessionStore::from_config(&config.auth);
        let tokens: Arc<dyn TokenSource> = Arc::new(store.clone());
        let client = ApiClient::from_config(&config.server, tokens)?;
        Ok(Self {
            config,
            store,
            client,
        })
    }
}
