//! Record form state machine
//!
//! A form owns the draft of one record and moves between two states:
//!
//! ```text
//!            begin_submit (draft valid)
//!   Idle ───────────────────────────────▶ Submitting
//!    ▲                                        │
//!    └──────── finish_submit (any result) ────┘
//! ```
//!
//! While `Submitting` further submits are rejected, so a draft is never sent
//! twice concurrently. Every failure path lands back in `Idle` with the
//! draft untouched.
//!
//! Each selection change or reset bumps a generation counter. A submit that
//! settles after the selection changed is still reported (the backend did
//! change) but does not wipe the draft the user is now editing.

use thiserror::Error;

use crate::api::{VetApi, WriteCommand};
use crate::http::HttpClient;
use crate::notification::Notification;
use crate::resource::{Resource, ValidationContext};
use crate::{ClientError, ClientResult};
use shared::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
}

/// Whether a submit creates a record or updates the selected one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    Create,
    Update,
}

/// Identifies one in-flight submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    generation: u64,
    mode: SubmitMode,
    saved_message: String,
}

impl SubmitTicket {
    pub fn mode(&self) -> SubmitMode {
        self.mode
    }
}

/// A validated write, ready to be sent
#[derive(Debug, Clone)]
pub struct SubmitRequest<R: Resource> {
    pub ticket: SubmitTicket,
    pub command: WriteCommand<R>,
}

/// Why a submit was not started
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("a submit is already in progress")]
    Busy,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was sent
    Rejected(SubmitRejected),
    /// The backend accepted the write
    ///
    /// `stale` is set when the selection changed while the request was in
    /// flight; the form then kept the newer draft.
    Saved { mode: SubmitMode, stale: bool },
    /// The write failed; the draft is preserved for a retry
    Failed { message: String },
}

impl SubmitOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SubmitOutcome::Saved { .. })
    }
}

/// Editable form for one record type
#[derive(Debug, Clone)]
pub struct RecordForm<R: Resource> {
    draft: R::Draft,
    selection: Option<R>,
    state: FormState,
    notification: Option<Notification>,
    context: ValidationContext,
    generation: u64,
}

impl<R: Resource> Default for RecordForm<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> RecordForm<R> {
    pub fn new() -> Self {
        Self {
            draft: Default::default(),
            selection: None,
            state: FormState::Idle,
            notification: None,
            context: ValidationContext::default(),
            generation: 0,
        }
    }

    pub fn draft(&self) -> &R::Draft {
        &self.draft
    }

    /// Record being edited; `None` means the form creates a new record
    pub fn selection(&self) -> Option<&R> {
        self.selection.as_ref()
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    pub fn mode(&self) -> SubmitMode {
        if self.selection.is_some() {
            SubmitMode::Update
        } else {
            SubmitMode::Create
        }
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn dismiss_notification(&mut self) -> Option<Notification> {
        self.notification.take()
    }

    pub fn context(&self) -> &ValidationContext {
        &self.context
    }

    pub fn set_context(&mut self, context: ValidationContext) {
        self.context = context;
    }

    /// Merge one field into the draft
    pub fn on_field_change(&mut self, field: R::Field, value: impl Into<String>) {
        R::set_field(&mut self.draft, field, value.into());
    }

    /// Change the edit selection and reseed the draft from it
    pub fn select(&mut self, record: Option<R>) {
        self.draft = record.as_ref().map(R::to_draft).unwrap_or_default();
        tracing::debug!(
            resource = R::LABEL,
            id = record.as_ref().map(R::id),
            "edit selection changed"
        );
        self.selection = record;
        self.generation += 1;
    }

    /// Drop the selection and the draft
    pub fn cancel(&mut self) {
        self.select(None);
    }

    /// Validate the draft and move to `Submitting`
    ///
    /// On a validation failure the first error becomes an error notification
    /// and the form stays `Idle`.
    pub fn begin_submit(&mut self) -> Result<SubmitRequest<R>, SubmitRejected> {
        if self.is_submitting() {
            tracing::debug!(resource = R::LABEL, "submit ignored while another is in flight");
            return Err(SubmitRejected::Busy);
        }

        let fields = match R::validate(&self.draft, &self.context) {
            Ok(fields) => fields,
            Err(err) => {
                self.notification = Some(Notification::error(err.message.clone()));
                return Err(err.into());
            }
        };

        let (mode, command) = match &self.selection {
            Some(record) => (
                SubmitMode::Update,
                WriteCommand::Update(R::into_update(record.id(), fields)),
            ),
            None => (SubmitMode::Create, WriteCommand::Create(fields)),
        };

        self.state = FormState::Submitting;
        tracing::info!(resource = R::LABEL, ?mode, "submitting draft");
        Ok(SubmitRequest {
            ticket: SubmitTicket {
                generation: self.generation,
                mode,
                saved_message: R::saved_message(&self.draft, mode),
            },
            command,
        })
    }

    /// Apply the settled result of a submit and return to `Idle`
    pub fn finish_submit(
        &mut self,
        ticket: SubmitTicket,
        result: ClientResult<()>,
    ) -> SubmitOutcome {
        self.state = FormState::Idle;

        match result {
            Ok(()) => {
                let stale = ticket.generation != self.generation;
                self.notification = Some(Notification::success(ticket.saved_message));
                if stale {
                    tracing::info!(
                        resource = R::LABEL,
                        "submit settled after the selection changed; keeping current draft"
                    );
                } else {
                    self.cancel();
                }
                SubmitOutcome::Saved {
                    mode: ticket.mode,
                    stale,
                }
            }
            Err(err) => {
                let message = err.user_message();
                log_submit_error(R::LABEL, &err);
                self.notification = Some(Notification::error(message.clone()));
                SubmitOutcome::Failed { message }
            }
        }
    }

    /// Validate, send and apply the result in one step
    pub async fn submit<H: HttpClient>(&mut self, api: &VetApi<H>) -> SubmitOutcome {
        let request = match self.begin_submit() {
            Ok(request) => request,
            Err(rejected) => return SubmitOutcome::Rejected(rejected),
        };
        let result = api.execute::<R>(&request.command).await;
        self.finish_submit(request.ticket, result)
    }
}

fn log_submit_error(resource: &str, err: &ClientError) {
    match err {
        ClientError::Api { status, .. } => {
            tracing::warn!(resource, status, error = %err, "save rejected by server");
        }
        _ => tracing::error!(resource, error = %err, "save failed"),
    }
}
