//! Vet Client - records client for the clinic REST backend
//!
//! Provides the HTTP client for the client/pet endpoints and the form and
//! page state machines that drive create/update flows against it.

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod http;
pub mod notification;
pub mod page;
pub mod resource;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{VetApi, WriteCommand};
pub use config::{ClientConfig, Endpoints};
pub use error::{ClientError, ClientResult};
pub use form::{
    FormState, RecordForm, SubmitMode, SubmitOutcome, SubmitRejected, SubmitRequest, SubmitTicket,
};
pub use http::{HttpClient, NetworkHttpClient};
pub use notification::{Notification, NotificationKind};
pub use page::{ClientPage, PageController, PetPage};
pub use resource::{Resource, ValidationContext};

// Re-export shared types for convenience
pub use shared::{
    Cliente, ClienteDraft, ClienteField, Mascota, MascotaDraft, MascotaField, ValidationError,
};
