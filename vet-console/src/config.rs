//! Console configuration
//!
//! Every option can come from the command line or from the environment
//! (a `.env` file is loaded first). Flags win over the environment.

use clap::Parser;
use vet_client::config::DEFAULT_BASE_URL;
use vet_client::{ClientConfig, Endpoints};

#[derive(Debug, Clone, Parser)]
#[command(name = "vet-console", about = "Gestión de clientes y mascotas")]
pub struct Config {
    /// Backend base URL
    #[arg(long, env = "VET_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "VET_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout: u64,

    #[arg(long, env = "VET_CLIENTES_LIST_PATH", default_value = "/clientes")]
    pub clientes_list_path: String,

    #[arg(long, env = "VET_CLIENTES_WRITE_PATH", default_value = "/cliente")]
    pub clientes_write_path: String,

    #[arg(long, env = "VET_MASCOTAS_LIST_PATH", default_value = "/mascotas")]
    pub mascotas_list_path: String,

    #[arg(long, env = "VET_MASCOTAS_WRITE_PATH", default_value = "/mascotas")]
    pub mascotas_write_path: String,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, env = "LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Emit JSON logs
    #[arg(long, env = "LOG_JSON")]
    pub log_json: bool,

    /// Also write daily rotating log files here
    #[arg(long, env = "LOG_DIR")]
    pub log_dir: Option<String>,
}

impl Config {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.api_url)
            .with_timeout(self.timeout)
            .with_endpoints(Endpoints {
                clientes_list: self.clientes_list_path.clone(),
                clientes_write: self.clientes_write_path.clone(),
                mascotas_list: self.mascotas_list_path.clone(),
                mascotas_write: self.mascotas_write_path.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_build_client_config() {
        let config = Config::try_parse_from([
            "vet-console",
            "--api-url",
            "http://vet.local:9000",
            "--timeout",
            "5",
            "--clientes-write-path",
            "/clientes",
        ])
        .unwrap();
        let client = config.client_config();
        assert_eq!(client.base_url, "http://vet.local:9000");
        assert_eq!(client.timeout, 5);
        assert_eq!(client.endpoints.clientes_write, "/clientes");
        assert_eq!(client.endpoints.mascotas_list, "/mascotas");
    }

    #[test]
    fn test_rejects_non_numeric_timeout() {
        assert!(Config::try_parse_from(["vet-console", "--timeout", "soon"]).is_err());
    }
}
