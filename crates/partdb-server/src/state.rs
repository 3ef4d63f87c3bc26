//! Shared application state.

use std::sync::Arc;

use partdb_auth::Authenticator;
use partdb_export::OutputEncoding;
use partdb_query::InventorySource;

/// State injected into the middleware and handlers.
///
/// Both collaborators are capability traits, so tests (and any future
/// alternate backend) can swap them without touching the gateway.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    authenticator: Arc<dyn Authenticator>,
    inventory: Arc<dyn InventorySource>,
    base_url: String,
    encoding: OutputEncoding,
}

impl AppState {
    pub fn new(
        authenticator: Arc<dyn Authenticator>,
        inventory: Arc<dyn InventorySource>,
        base_url: String,
        encoding: OutputEncoding,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                authenticator,
                inventory,
                base_url,
                encoding,
            }),
        }
    }

    pub fn authenticator(&self) -> &dyn Authenticator {
        self.inner.authenticator.as_ref()
    }

    pub fn inventory(&self) -> &dyn InventorySource {
        self.inner.inventory.as_ref()
    }

    /// Public base URL the `Link` column is built from.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub fn encoding(&self) -> OutputEncoding {
        self.inner.encoding
    }
}
