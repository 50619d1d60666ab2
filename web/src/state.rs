use crate::{config::AppConfig, error::RegistryError, registry::ResponderRegistry, routing::OsrmClient};

/// Everything the HTTP and realtime handlers need. Also provided to server
/// functions through Leptos context.
#[derive(Debug, Clone)]
pub struct ApiState {
    pub registry: ResponderRegistry,
    pub routing: OsrmClient,
}

impl ApiState {
    pub fn new(registry: ResponderRegistry, routing: OsrmClient) -> Self {
        Self { registry, routing }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, RegistryError> {
        let registry = ResponderRegistry::from_optional_file(config.responders_path.as_ref())?;
        let routing = OsrmClient::new(config.osrm_base_url.clone());
        Ok(Self::new(registry, routing))
    }
}
