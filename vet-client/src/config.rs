//! Client configuration

/// Default backend address
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Paths of the record endpoints, relative to the base URL
///
/// The backend reads collections from the plural path and writes clients
/// through the singular one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub clientes_list: String,
    pub clientes_write: String,
    pub mascotas_list: String,
    pub mascotas_write: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            clientes_list: "/clientes".to_string(),
            clientes_write: "/cliente".to_string(),
            mascotas_list: "/mascotas".to_string(),
            mascotas_write: "/mascotas".to_string(),
        }
    }
}

/// Client configuration for connecting to the records backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Endpoint paths
    pub endpoints: Endpoints,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            endpoints: Endpoints::default(),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Override the endpoint paths
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
