//! Data models
//!
//! Records as the backend serves them, their create/update payloads and the
//! editable drafts held by forms. All IDs are `i64` (server-assigned).

pub mod cliente;
pub mod mascota;

// Re-exports
pub use cliente::*;
pub use mascota::*;
