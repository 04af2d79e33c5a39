//! Shared types for the veterinary records client
//!
//! Record models (clients and pets), their editable drafts, the wire
//! envelopes used by the REST backend and the client-side validation rules.

pub mod error;
pub mod models;
pub mod response;
pub mod validation;

// Re-exports
pub use error::{UnknownField, ValidationError};
pub use models::{
    Cliente, ClienteCreate, ClienteDraft, ClienteField, ClienteUpdate, Mascota, MascotaCreate,
    MascotaDraft, MascotaField, MascotaUpdate,
};
pub use response::{ErrorBody, ListResponse};
pub use serde::{Deserialize, Serialize};
