//! List/page controllers
//!
//! A page holds the id-keyed collection of one record type, owns the form
//! that edits it and reloads the collection after every successful write.
//! A failed load keeps whatever was loaded before.

use std::collections::{BTreeMap, BTreeSet};

use shared::{Cliente, Mascota};

use crate::api::VetApi;
use crate::form::{RecordForm, SubmitOutcome};
use crate::http::HttpClient;
use crate::resource::{Resource, ValidationContext};
use crate::{ClientError, ClientResult};

/// Collection + form controller for one record type
#[derive(Debug, Clone)]
pub struct PageController<R: Resource> {
    collection: BTreeMap<i64, R>,
    loading: bool,
    form: RecordForm<R>,
}

pub type ClientPage = PageController<Cliente>;

impl<R: Resource> Default for PageController<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> PageController<R> {
    pub fn new() -> Self {
        Self {
            collection: BTreeMap::new(),
            loading: false,
            form: RecordForm::new(),
        }
    }

    /// Loaded records keyed by id
    pub fn collection(&self) -> &BTreeMap<i64, R> {
        &self.collection
    }

    pub fn records(&self) -> impl Iterator<Item = &R> {
        self.collection.values()
    }

    pub fn get(&self, id: i64) -> Option<&R> {
        self.collection.get(&id)
    }

    /// Set while `load_collection` awaits the backend
    ///
    /// The load holds `&mut self` for the whole request, so callers only
    /// observe this between loads, where it is always `false`.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn form(&self) -> &RecordForm<R> {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut RecordForm<R> {
        &mut self.form
    }

    /// Fetch the collection and replace the mapping
    ///
    /// On failure the error is logged, the previous mapping stays in place
    /// and the error is handed back for the caller to display.
    pub async fn load_collection<H: HttpClient>(
        &mut self,
        api: &VetApi<H>,
    ) -> ClientResult<usize> {
        self.loading = true;
        let result = api.list::<R>().await;
        self.loading = false;

        match result {
            Ok(records) => {
                self.collection = records.into_iter().map(|r| (r.id(), r)).collect();
                tracing::debug!(
                    resource = R::LABEL,
                    count = self.collection.len(),
                    "collection loaded"
                );
                Ok(self.collection.len())
            }
            Err(err) => {
                tracing::error!(
                    resource = R::LABEL,
                    error = %err,
                    kept = self.collection.len(),
                    "failed to load collection; keeping previous records"
                );
                Err(err)
            }
        }
    }

    /// Pick a record from the collection as the edit selection
    ///
    /// An unknown id clears the selection, returning the form to create mode.
    pub fn select_by_id(&mut self, id: i64) -> Option<&R> {
        let record = self.collection.get(&id).cloned();
        if record.is_none() {
            tracing::debug!(resource = R::LABEL, id, "selected id not in collection");
        }
        self.form.select(record);
        self.form.selection()
    }

    pub fn cancel_edit(&mut self) {
        self.form.cancel();
    }

    /// Reload after the form reported a successful write
    ///
    /// A reload failure is already logged by `load_collection`; the stale
    /// collection stays visible.
    pub async fn on_form_success<H: HttpClient>(&mut self, api: &VetApi<H>) {
        let _ = self.load_collection(api).await;
        self.form.cancel();
    }

    /// Submit the form; on success reload and clear the selection
    pub async fn submit<H: HttpClient>(&mut self, api: &VetApi<H>) -> SubmitOutcome {
        let outcome = self.form.submit(api).await;
        if let SubmitOutcome::Saved { stale, .. } = outcome {
            if stale {
                // keep the selection made while the write was in flight
                let _ = self.load_collection(api).await;
            } else {
                self.on_form_success(api).await;
            }
        }
        outcome
    }
}

/// Pet page: pets plus the client list used by the owner picker
#[derive(Debug, Clone, Default)]
pub struct PetPage {
    pets: PageController<Mascota>,
    owners: BTreeMap<i64, Cliente>,
}

impl PetPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pets(&self) -> &PageController<Mascota> {
        &self.pets
    }

    pub fn pets_mut(&mut self) -> &mut PageController<Mascota> {
        &mut self.pets
    }

    /// Clients available as owners, keyed by id
    pub fn owners(&self) -> &BTreeMap<i64, Cliente> {
        &self.owners
    }

    /// Owner of a loaded pet, when that client is loaded too
    pub fn owner_of(&self, pet: &Mascota) -> Option<&Cliente> {
        self.owners.get(&pet.id_cliente)
    }

    /// Fetch the client list for the owner picker
    ///
    /// The loaded ids feed the pet form's owner check. On failure the
    /// previous owners (and check) stay in place.
    pub async fn load_owners<H: HttpClient>(&mut self, api: &VetApi<H>) -> ClientResult<usize> {
        match api.list::<Cliente>().await {
            Ok(clientes) => {
                self.set_owners(clientes);
                Ok(self.owners.len())
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load owners for pet form");
                Err(err)
            }
        }
    }

    /// Replace the owner list with clients fetched elsewhere
    ///
    /// Lets a client page that just loaded share its records instead of
    /// fetching the same list again.
    pub fn set_owners(&mut self, clientes: impl IntoIterator<Item = Cliente>) {
        self.owners = clientes.into_iter().map(|c| (c.id_cliente, c)).collect();
        let known: BTreeSet<i64> = self.owners.keys().copied().collect();
        self.pets.form_mut().set_context(ValidationContext {
            known_owners: Some(known),
        });
    }

    /// Load pets and owners; both are attempted even if one fails
    pub async fn load<H: HttpClient>(&mut self, api: &VetApi<H>) -> Result<(), ClientError> {
        let pets = self.pets.load_collection(api).await;
        let owners = self.load_owners(api).await;
        pets.and(owners).map(|_| ())
    }

    pub async fn submit<H: HttpClient>(&mut self, api: &VetApi<H>) -> SubmitOutcome {
        self.pets.submit(api).await
    }
}
