//! Shared application state.

use url::Url;

use crate::{middleware::auth::AuthConfig, store::TransactionStore};

/// State handed to every handler via axum's `State` extractor.
///
/// Built once in `main` from [`crate::config::Config`]; nothing in the
/// application reads configuration or holds connections outside of it.
#[derive(Clone)]
pub struct AppState {
    /// Durable transaction store, owns the connection pool
    pub store: TransactionStore,

    /// Token verification settings for the authentication gate
    pub auth: AuthConfig,

    /// Base URL for mock payment links
    pub payment_gateway_url: Url,
}

impl AppState {
    pub fn new(store: TransactionStore, auth: AuthConfig, payment_gateway_url: Url) -> Self {
        Self {
            store,
            auth,
            payment_gateway_url,
        }
    }
}
