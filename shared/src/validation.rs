//! Client-side validation rules
//!
//! Pure checks run by the forms before anything is sent to the backend.
//! Rules are evaluated in field order and the first failure is the one the
//! form surfaces; the `validate_all_*` variants report one error per field.
//! On success the draft is turned into its create payload (trimmed, with
//! numeric fields coerced).

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;
use crate::models::{ClienteCreate, ClienteDraft, MascotaCreate, MascotaDraft};

// ── Limits ──────────────────────────────────────────────────────────

/// Phone numbers are exactly this many digits
pub const PHONE_DIGITS: usize = 10;

/// Inclusive pet age bounds (years)
pub const MIN_PET_AGE: i32 = 0;
pub const MAX_PET_AGE: i32 = 50;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

// ── Field helpers ───────────────────────────────────────────────────

/// Required text: non-empty once trimmed.
fn required(value: &str, field: &'static str, message: &str) -> Option<ValidationError> {
    value
        .trim()
        .is_empty()
        .then(|| ValidationError::new(field, message))
}

/// Whether `value` has the basic `local@domain.tld` shape.
///
/// Surrounding whitespace is part of the value and fails the match.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Whether `value` is exactly [`PHONE_DIGITS`] ASCII digits.
pub fn is_valid_phone(value: &str) -> bool {
    value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
}

fn check_phone(value: &str) -> Option<ValidationError> {
    required(value, "telefono", "El teléfono es obligatorio").or_else(|| {
        (!is_valid_phone(value)).then(|| {
            ValidationError::new(
                "telefono",
                format!("El teléfono debe tener {PHONE_DIGITS} dígitos"),
            )
        })
    })
}

fn check_email(value: &str) -> Option<ValidationError> {
    required(value, "email", "El email es obligatorio").or_else(|| {
        (!is_valid_email(value)).then(|| ValidationError::new("email", "Ingrese un email válido"))
    })
}

fn parse_age(value: &str) -> Result<i32, ValidationError> {
    if let Some(err) = required(value, "edad", "La edad es obligatoria") {
        return Err(err);
    }
    value
        .trim()
        .parse::<i32>()
        .ok()
        .filter(|age| (MIN_PET_AGE..=MAX_PET_AGE).contains(age))
        .ok_or_else(|| {
            ValidationError::new(
                "edad",
                format!("La edad debe ser un número entero entre {MIN_PET_AGE} y {MAX_PET_AGE}"),
            )
        })
}

fn parse_owner(value: &str, known_owners: Option<&BTreeSet<i64>>) -> Result<i64, ValidationError> {
    let owner = value
        .trim()
        .parse::<i64>()
        .map_err(|_| {
            ValidationError::new("idCliente", "Seleccione el cliente dueño de la mascota")
        })?;
    match known_owners {
        Some(owners) if !owners.contains(&owner) => Err(ValidationError::new(
            "idCliente",
            "El cliente seleccionado no existe",
        )),
        _ => Ok(owner),
    }
}

// ── Clients ─────────────────────────────────────────────────────────

/// Every failing client field, in rule order.
pub fn validate_all_client(draft: &ClienteDraft) -> Vec<ValidationError> {
    [
        required(&draft.nombre, "nombre", "El nombre es obligatorio"),
        required(&draft.apellido, "apellido", "El apellido es obligatorio"),
        check_phone(&draft.telefono),
        check_email(&draft.email),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Validate a client draft; the first failing rule wins.
pub fn validate_client(draft: &ClienteDraft) -> Result<ClienteCreate, ValidationError> {
    if let Some(err) = validate_all_client(draft).into_iter().next() {
        tracing::debug!(field = err.field, "client draft rejected");
        return Err(err);
    }
    Ok(ClienteCreate {
        nombre: draft.nombre.trim().to_string(),
        apellido: draft.apellido.trim().to_string(),
        telefono: draft.telefono.trim().to_string(),
        email: draft.email.trim().to_string(),
    })
}

// ── Pets ────────────────────────────────────────────────────────────

/// Every failing pet field, in rule order.
///
/// When `known_owners` is supplied the selected owner must be one of them.
pub fn validate_all_pet(
    draft: &MascotaDraft,
    known_owners: Option<&BTreeSet<i64>>,
) -> Vec<ValidationError> {
    [
        required(&draft.nombre, "nombre", "El nombre es obligatorio"),
        required(&draft.raza, "raza", "La raza es obligatoria"),
        required(&draft.especie, "especie", "La especie es obligatoria"),
        parse_age(&draft.edad).err(),
        parse_owner(&draft.id_cliente, known_owners).err(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Validate a pet draft; the first failing rule wins.
pub fn validate_pet(
    draft: &MascotaDraft,
    known_owners: Option<&BTreeSet<i64>>,
) -> Result<MascotaCreate, ValidationError> {
    if let Some(err) = validate_all_pet(draft, known_owners).into_iter().next() {
        tracing::debug!(field = err.field, "pet draft rejected");
        return Err(err);
    }
    Ok(MascotaCreate {
        nombre: draft.nombre.trim().to_string(),
        raza: draft.raza.trim().to_string(),
        especie: draft.especie.trim().to_string(),
        edad: parse_age(&draft.edad)?,
        id_cliente: parse_owner(&draft.id_cliente, known_owners)?,
    })
}
