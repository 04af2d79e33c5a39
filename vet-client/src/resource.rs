//! Record types managed by forms and pages
//!
//! `Resource` ties a record type to its draft, its field names, its
//! validation rule and its endpoints so one form/page implementation serves
//! both clients and pets.

use std::collections::BTreeSet;
use std::fmt::Debug;
use std::str::FromStr;

use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::validation::{validate_client, validate_pet};
use shared::{
    Cliente, ClienteCreate, ClienteDraft, ClienteField, ClienteUpdate, Mascota, MascotaCreate,
    MascotaDraft, MascotaField, MascotaUpdate, UnknownField, ValidationError,
};

use crate::Endpoints;
use crate::form::SubmitMode;

/// Extra knowledge validation may use beyond the draft itself
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationContext {
    /// Ids of the clients currently loaded, used to check pet owners
    pub known_owners: Option<BTreeSet<i64>>,
}

pub trait Resource: DeserializeOwned + Clone + Debug + Send + Sync + 'static {
    type Draft: Default + Clone + PartialEq + Debug + Send;
    type Field: Copy + Debug + FromStr<Err = UnknownField>;
    type Create: Serialize + Clone + Debug + Send + Sync;
    type Update: Serialize + Clone + Debug + Send + Sync;

    /// Lowercase noun for logs ("cliente", "mascota")
    const LABEL: &'static str;

    fn id(&self) -> i64;

    fn to_draft(&self) -> Self::Draft;

    fn set_field(draft: &mut Self::Draft, field: Self::Field, value: String);

    fn validate(
        draft: &Self::Draft,
        context: &ValidationContext,
    ) -> Result<Self::Create, ValidationError>;

    fn into_update(id: i64, fields: Self::Create) -> Self::Update;

    /// Success notification text for a saved draft
    fn saved_message(draft: &Self::Draft, mode: SubmitMode) -> String;

    fn list_path(endpoints: &Endpoints) -> &str;

    fn write_path(endpoints: &Endpoints) -> &str;
}

impl Resource for Cliente {
    type Draft = ClienteDraft;
    type Field = ClienteField;
    type Create = ClienteCreate;
    type Update = ClienteUpdate;

    const LABEL: &'static str = "cliente";

    fn id(&self) -> i64 {
        self.id_cliente
    }

    fn to_draft(&self) -> ClienteDraft {
        ClienteDraft::from(self)
    }

    fn set_field(draft: &mut ClienteDraft, field: ClienteField, value: String) {
        draft.set(field, value);
    }

    fn validate(
        draft: &ClienteDraft,
        _: &ValidationContext,
    ) -> Result<ClienteCreate, ValidationError> {
        validate_client(draft)
    }

    fn into_update(id: i64, fields: ClienteCreate) -> ClienteUpdate {
        ClienteUpdate {
            id_cliente: id,
            fields,
        }
    }

    fn saved_message(draft: &ClienteDraft, mode: SubmitMode) -> String {
        match mode {
            SubmitMode::Create => format!("¡Cliente {} creado exitosamente!", draft.nombre.trim()),
            SubmitMode::Update => {
                format!("¡Cliente {} actualizado exitosamente!", draft.nombre.trim())
            }
        }
    }

    fn list_path(endpoints: &Endpoints) -> &str {
        &endpoints.clientes_list
    }

    fn write_path(endpoints: &Endpoints) -> &str {
        &endpoints.clientes_write
    }
}

impl Resource for Mascota {
    type Draft = MascotaDraft;
    type Field = MascotaField;
    type Create = MascotaCreate;
    type Update = MascotaUpdate;

    const LABEL: &'static str = "mascota";

    fn id(&self) -> i64 {
        self.id_mascota
    }

    fn to_draft(&self) -> MascotaDraft {
        MascotaDraft::from(self)
    }

    fn set_field(draft: &mut MascotaDraft, field: MascotaField, value: String) {
        draft.set(field, value);
    }

    fn validate(
        draft: &MascotaDraft,
        context: &ValidationContext,
    ) -> Result<MascotaCreate, ValidationError> {
        validate_pet(draft, context.known_owners.as_ref())
    }

    fn into_update(id: i64, fields: MascotaCreate) -> MascotaUpdate {
        MascotaUpdate {
            id_mascota: id,
            fields,
        }
    }

    fn saved_message(draft: &MascotaDraft, mode: SubmitMode) -> String {
        match mode {
            SubmitMode::Create => format!("¡Mascota {} creada exitosamente!", draft.nombre.trim()),
            SubmitMode::Update => {
                format!("¡Mascota {} actualizada exitosamente!", draft.nombre.trim())
            }
        }
    }

    fn list_path(endpoints: &Endpoints) -> &str {
        &endpoints.mascotas_list
    }

    fn write_path(endpoints: &Endpoints) -> &str {
        &endpoints.mascotas_write
    }
}
