//! Pet Model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownField;

/// Pet entity (mascota), as returned by `GET /mascotas`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mascota {
    pub id_mascota: i64,
    pub nombre: String,
    #[serde(default)]
    pub raza: String,
    #[serde(default)]
    pub especie: String,
    #[serde(default)]
    pub edad: i32,
    /// Owning client (`Cliente::id_cliente`)
    pub id_cliente: i64,
}

/// Create pet payload (no identifier)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MascotaCreate {
    pub nombre: String,
    pub raza: String,
    pub especie: String,
    pub edad: i32,
    pub id_cliente: i64,
}

/// Update pet payload: identifier plus every editable field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MascotaUpdate {
    pub id_mascota: i64,
    #[serde(flatten)]
    pub fields: MascotaCreate,
}

/// Editable draft of a pet
///
/// `edad` and `id_cliente` stay textual until validation coerces them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MascotaDraft {
    pub nombre: String,
    pub raza: String,
    pub especie: String,
    pub edad: String,
    pub id_cliente: String,
}

impl MascotaDraft {
    pub fn set(&mut self, field: MascotaField, value: impl Into<String>) {
        let value = value.into();
        match field {
            MascotaField::Nombre => self.nombre = value,
            MascotaField::Raza => self.raza = value,
            MascotaField::Especie => self.especie = value,
            MascotaField::Edad => self.edad = value,
            MascotaField::IdCliente => self.id_cliente = value,
        }
    }

    pub fn get(&self, field: MascotaField) -> &str {
        match field {
            MascotaField::Nombre => &self.nombre,
            MascotaField::Raza => &self.raza,
            MascotaField::Especie => &self.especie,
            MascotaField::Edad => &self.edad,
            MascotaField::IdCliente => &self.id_cliente,
        }
    }
}

impl From<&Mascota> for MascotaDraft {
    fn from(mascota: &Mascota) -> Self {
        Self {
            nombre: mascota.nombre.clone(),
            raza: mascota.raza.clone(),
            especie: mascota.especie.clone(),
            edad: mascota.edad.to_string(),
            id_cliente: mascota.id_cliente.to_string(),
        }
    }
}

/// Editable pet fields, named by their wire names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MascotaField {
    Nombre,
    Raza,
    Especie,
    Edad,
    IdCliente,
}

impl MascotaField {
    pub const ALL: [MascotaField; 5] = [
        Self::Nombre,
        Self::Raza,
        Self::Especie,
        Self::Edad,
        Self::IdCliente,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nombre => "nombre",
            Self::Raza => "raza",
            Self::Especie => "especie",
            Self::Edad => "edad",
            Self::IdCliente => "idCliente",
        }
    }
}

impl fmt::Display for MascotaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MascotaField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mascota_deserialize() {
        let json = r#"{"idMascota":3,"nombre":"Rex","raza":"Labrador","especie":"Perro","edad":3,"idCliente":7}"#;
        let mascota: Mascota = serde_json::from_str(json).unwrap();
        assert_eq!(mascota.id_mascota, 3);
        assert_eq!(mascota.id_cliente, 7);
        assert_eq!(mascota.edad, 3);
    }

    #[test]
    fn test_draft_from_record_stringifies_numbers() {
        let mascota = Mascota {
            id_mascota: 3,
            nombre: "Rex".into(),
            raza: "Labrador".into(),
            especie: "Perro".into(),
            edad: 3,
            id_cliente: 7,
        };
        let draft = MascotaDraft::from(&mascota);
        assert_eq!(draft.edad, "3");
        assert_eq!(draft.id_cliente, "7");
    }

    #[test]
    fn test_update_payload_carries_identifier() {
        let update = MascotaUpdate {
            id_mascota: 3,
            fields: MascotaCreate {
                nombre: "Rex".into(),
                raza: "Labrador".into(),
                especie: "Perro".into(),
                edad: 4,
                id_cliente: 7,
            },
        };
        let json = serde_json::to_string(&update).unwrap();
        assert!(json.contains("\"idMascota\":3"));
        assert!(json.contains("\"idCliente\":7"));
        assert!(json.contains("\"edad\":4"));
    }

    #[test]
    fn test_field_parse_uses_wire_names() {
        assert_eq!("idCliente".parse::<MascotaField>().unwrap(), MascotaField::IdCliente);
        assert_eq!("edad".parse::<MascotaField>().unwrap(), MascotaField::Edad);
        assert!("peso".parse::<MascotaField>().is_err());
    }
}
