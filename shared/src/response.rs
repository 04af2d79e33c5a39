//! API response envelopes
//!
//! The backend wraps collections in a `data` field and reports failures
//! with an optional `message`:
//! ```json
//! { "data": [ { "idCliente": 7, "nombre": "Ana" } ] }
//! { "message": "db down" }
//! ```

use serde::{Deserialize, Serialize};

/// Collection response (`GET /clientes`, `GET /mascotas`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
}

/// Body of a non-2xx response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Parse an error body, returning the message only when it carries text.
    pub fn message_from(text: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(text)
            .ok()
            .and_then(|body| body.message)
            .filter(|m| !m.trim().is_empty())
    }
}
