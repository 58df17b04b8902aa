//! API server state

use std::sync::Arc;

use crate::api::auth::Authenticator;
use crate::catalog::Catalog;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Read-only product catalog shared by every request
    pub catalog: Arc<Catalog>,

    /// Authentication gate for product routes (None = open access)
    pub authenticator: Option<Arc<dyn Authenticator>>,
}

impl AppState {
    /// Create state with open product routes
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            authenticator: None,
        }
    }

    /// Require an authenticated caller on product routes
    pub fn with_authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = Some(authenticator);
        self
    }
}
