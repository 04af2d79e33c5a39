//! Console commands
//!
//! One line of input becomes one [`Command`], dispatched by the session.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Which page the console is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Clientes,
    Mascotas,
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageKind::Clientes => f.write_str("clientes"),
            PageKind::Mascotas => f.write_str("mascotas"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Switch the active page
    Page(PageKind),
    List,
    /// List the clients available as pet owners
    Owners,
    /// Select a record for editing
    Edit(i64),
    /// Back to create mode
    New,
    Set { field: String, value: String },
    Show,
    Submit,
    Cancel,
    Reload,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("línea vacía")]
    Empty,
    #[error("comando desconocido: {0} (escriba 'help')")]
    Unknown(String),
    #[error("falta el argumento <{0}>")]
    MissingArgument(&'static str),
    #[error("id inválido: {0}")]
    InvalidId(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match name.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "clientes" => Ok(Command::Page(PageKind::Clientes)),
            "mascotas" => Ok(Command::Page(PageKind::Mascotas)),
            "list" | "ls" => Ok(Command::List),
            "owners" => Ok(Command::Owners),
            "edit" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("id"));
                }
                rest.parse()
                    .map(Command::Edit)
                    .map_err(|_| CommandError::InvalidId(rest.to_string()))
            }
            "new" => Ok(Command::New),
            "set" => {
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value.trim()),
                    None => (rest, ""),
                };
                if field.is_empty() {
                    return Err(CommandError::MissingArgument("campo"));
                }
                Ok(Command::Set {
                    field: field.to_string(),
                    value: value.to_string(),
                })
            }
            "show" => Ok(Command::Show),
            "submit" | "save" => Ok(Command::Submit),
            "cancel" => Ok(Command::Cancel),
            "reload" => Ok(Command::Reload),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

pub const HELP: &str = "\
Comandos:
  clientes | mascotas     cambiar de página
  list                    listar registros
  owners                  listar clientes disponibles como dueños
  edit <id>               editar un registro existente
  new                     volver a modo creación
  set <campo> <valor>     cambiar un campo del formulario (valor vacío lo borra)
  show                    mostrar el formulario
  submit                  guardar
  cancel                  descartar cambios y selección
  reload                  recargar desde el servidor
  help | quit";
