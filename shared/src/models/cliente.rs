//! Client Model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownField;

/// Client entity (cliente), as returned by `GET /clientes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    pub id_cliente: i64,
    pub nombre: String,
    pub apellido: String,
    #[serde(default)]
    pub telefono: String,
    #[serde(default)]
    pub email: String,
}

impl Cliente {
    /// "Nombre Apellido", used by the owner picker
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombre, self.apellido)
    }
}

/// Create client payload (no identifier)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClienteCreate {
    pub nombre: String,
    pub apellido: String,
    pub telefono: String,
    pub email: String,
}

/// Update client payload: identifier plus every editable field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClienteUpdate {
    pub id_cliente: i64,
    #[serde(flatten)]
    pub fields: ClienteCreate,
}

/// Editable draft of a client, one string per form field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClienteDraft {
    pub nombre: String,
    pub apellido: String,
    pub telefono: String,
    pub email: String,
}

impl ClienteDraft {
    pub fn set(&mut self, field: ClienteField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ClienteField::Nombre => self.nombre = value,
            ClienteField::Apellido => self.apellido = value,
            ClienteField::Telefono => self.telefono = value,
            ClienteField::Email => self.email = value,
        }
    }

    pub fn get(&self, field: ClienteField) -> &str {
        match field {
            ClienteField::Nombre => &self.nombre,
            ClienteField::Apellido => &self.apellido,
            ClienteField::Telefono => &self.telefono,
            ClienteField::Email => &self.email,
        }
    }
}

impl From<&Cliente> for ClienteDraft {
    fn from(cliente: &Cliente) -> Self {
        Self {
            nombre: cliente.nombre.clone(),
            apellido: cliente.apellido.clone(),
            telefono: cliente.telefono.clone(),
            email: cliente.email.clone(),
        }
    }
}

/// Editable client fields, named by their wire names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClienteField {
    Nombre,
    Apellido,
    Telefono,
    Email,
}

impl ClienteField {
    pub const ALL: [ClienteField; 4] = [Self::Nombre, Self::Apellido, Self::Telefono, Self::Email];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nombre => "nombre",
            Self::Apellido => "apellido",
            Self::Telefono => "telefono",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for ClienteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClienteField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
