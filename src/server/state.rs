use std::sync::Arc;
use std::time::Instant;

use crate::config::Settings;
use crate::dispatch::BookingDispatcher;
use crate::token::{create_token_store, TokenStore};
use crate::transport::{create_transport, PushTransport};

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub token_store: Arc<dyn TokenStore>,
    pub transport: Arc<dyn PushTransport>,
    pub dispatcher: Arc<BookingDispatcher>,
    pub started_at: Instant,
}

impl AppState {
    /// Build the application state from configuration.
    ///
    /// All process-wide collaborators (token store, push transport) are
    /// constructed here, once, and injected into the dispatcher.
    pub async fn new(settings: Settings) -> anyhow::Result<Self> {
        let token_store = create_token_store(&settings.token_store).await?;
        let transport = create_transport(&settings.fcm);
        let dispatcher = Arc::new(BookingDispatcher::new(
            token_store.clone(),
            transport.clone(),
        ));

        Ok(Self {
            settings: Arc::new(settings),
            token_store,
            transport,
            dispatcher,
            started_at: Instant::now(),
        })
    }

    /// Build state around externally constructed collaborators.
    ///
    /// Used by tests to wire in the memory store and mock transport.
    pub fn with_components(
        settings: Settings,
        token_store: Arc<dyn TokenStore>,
        transport: Arc<dyn PushTransport>,
    ) -> Self {
        let dispatcher = Arc::new(BookingDispatcher::new(
            token_store.clone(),
            transport.clone(),
        ));

        Self {
            settings: Arc::new(settings),
            token_store,
            transport,
            dispatcher,
            started_at: Instant::now(),
        }
    }
}
