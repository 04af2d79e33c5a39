//! Client error types

use thiserror::Error;

/// Shown when the server gives no usable message
pub const GENERIC_SERVER_ERROR: &str = "Error en el servidor";

/// Shown when the request never got a response
pub const GENERIC_NETWORK_ERROR: &str = "No se pudo conectar con el servidor";

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection refused, timeout, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("API error ({status}): {}", .message.as_deref().unwrap_or(GENERIC_SERVER_ERROR))]
    Api {
        status: u16,
        message: Option<String>,
    },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Text for the user-facing error notification
    ///
    /// The server's own message is used verbatim when it sent one.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api {
                message: Some(message),
                ..
            } => message.clone(),
            ClientError::Api {
                status,
                message: None,
            } => format!("{GENERIC_SERVER_ERROR} (HTTP {status})"),
            ClientError::Http(_) => GENERIC_NETWORK_ERROR.to_string(),
            ClientError::InvalidResponse(_) | ClientError::Serialization(_) => {
                "Respuesta inválida del servidor".to_string()
            }
        }
    }

    /// HTTP status, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
