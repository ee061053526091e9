//! Capabilities of the receipt api consumed by the front end.
//!
//! Each surface is an object safe trait; `ApiClients` is the explicit set
//! that gets injected into views instead of a global registry.

mod auth;
mod http_client;
mod products;
mod sales;
mod settings;

pub use auth::*;
pub use http_client::HttpApiClient;
pub use products::*;
pub use sales::*;
pub use settings::*;

use serde::Deserialize;
use std::sync::Arc;

/// `{"message": ".."}` envelope used by the receipt api for acknowledgements and errors.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

#[derive(Clone)]
pub struct ApiClients {
    pub auth: Arc<dyn AuthApi>,
    pub products: Arc<dyn ProductsApi>,
    pub sales: Arc<dyn SalesApi>,
    pub settings: Arc<dyn SettingsApi>,
}

impl ApiClients {
    /// Every capability backed by the same http client.
    pub fn from_http_client(client: HttpApiClient) -> Self {
        let client = Arc::new(client);
        Self {
            auth: Arc::clone(&client) as Arc<dyn AuthApi>,
            products: Arc::clone(&client) as Arc<dyn ProductsApi>,
            sales: Arc::clone(&client) as Arc<dyn SalesApi>,
            settings: client,
        }
    }

    pub fn auth(&self) -> Arc<dyn AuthApi> {
        Arc::clone(&self.auth)
    }
}
