//! Console session: both pages plus the command dispatcher
//!
//! `handle` turns one command into state changes on the active page and
//! returns the lines to print. Notifications raised by the forms are
//! printed once and dismissed. Commands run one at a time, so a save
//! always settles before the selection can change.

use shared::{Cliente, ClienteField, Mascota, MascotaField};
use vet_client::{ClientPage, HttpClient, PageController, PetPage, Resource, SubmitMode, VetApi};

use crate::command::{Command, HELP, PageKind};

pub struct Session<H: HttpClient> {
    api: VetApi<H>,
    clientes: ClientPage,
    mascotas: PetPage,
    active: PageKind,
}

impl<H: HttpClient> Session<H> {
    pub fn new(api: VetApi<H>) -> Self {
        Self {
            api,
            clientes: ClientPage::new(),
            mascotas: PetPage::new(),
            active: PageKind::Clientes,
        }
    }

    /// Prompt prefix, e.g. `clientes#7` while editing client 7
    pub fn prompt(&self) -> String {
        let selected = match self.active {
            PageKind::Clientes => self.clientes.form().selection().map(Cliente::id),
            PageKind::Mascotas => self.mascotas.pets().form().selection().map(Mascota::id),
        };
        match selected {
            Some(id) => format!("{}#{id}", self.active),
            None => self.active.to_string(),
        }
    }

    /// Initial load of both pages
    ///
    /// The client list is fetched once and shared with the pet page's
    /// owner picker.
    pub async fn start(&mut self) -> Vec<String> {
        let mut out = Vec::new();
        match self.clientes.load_collection(&self.api).await {
            Ok(_) => self.sync_owners(),
            Err(err) => out.push(format!(
                "[error] no se pudieron cargar los clientes: {}",
                err.user_message()
            )),
        }
        if let Err(err) = self.mascotas.pets_mut().load_collection(&self.api).await {
            out.push(format!(
                "[error] no se pudieron cargar las mascotas: {}",
                err.user_message()
            ));
        }
        out.push(format!(
            "{} clientes, {} mascotas cargados. Escriba 'help' para ver los comandos.",
            self.clientes.collection().len(),
            self.mascotas.pets().collection().len()
        ));
        out
    }

    pub async fn handle(&mut self, command: Command) -> Vec<String> {
        let mut out = Vec::new();
        match command {
            Command::Page(kind) => {
                self.active = kind;
                out.push(format!("Página: {kind}"));
            }
            Command::List => match self.active {
                PageKind::Clientes => out.extend(render_clientes(&self.clientes)),
                PageKind::Mascotas => out.extend(self.render_mascotas()),
            },
            Command::Owners => out.extend(
                self.mascotas
                    .owners()
                    .values()
                    .map(|c| format!("{:>5}  {}", c.id_cliente, c.full_name())),
            ),
            Command::Edit(id) => {
                let found = match self.active {
                    PageKind::Clientes => self.clientes.select_by_id(id).is_some(),
                    PageKind::Mascotas => self.mascotas.pets_mut().select_by_id(id).is_some(),
                };
                if found {
                    out.extend(self.render_form());
                } else {
                    out.push(format!("No existe el registro {id}; formulario en modo creación"));
                }
            }
            Command::New | Command::Cancel => {
                match self.active {
                    PageKind::Clientes => self.clientes.cancel_edit(),
                    PageKind::Mascotas => self.mascotas.pets_mut().cancel_edit(),
                }
                out.push("Formulario vacío".to_string());
            }
            Command::Set { field, value } => out.push(self.set_field(&field, value)),
            Command::Show => out.extend(self.render_form()),
            Command::Submit => match self.active {
                PageKind::Clientes => {
                    if self.clientes.submit(&self.api).await.is_saved() {
                        // the owner picker lists clients too
                        self.sync_owners();
                    }
                }
                PageKind::Mascotas => {
                    self.mascotas.submit(&self.api).await;
                }
            },
            Command::Reload => {
                let result = match self.active {
                    PageKind::Clientes => {
                        let loaded = self.clientes.load_collection(&self.api).await;
                        if loaded.is_ok() {
                            self.sync_owners();
                        }
                        loaded.map(|_| ())
                    }
                    PageKind::Mascotas => self.mascotas.load(&self.api).await,
                };
                match result {
                    Ok(()) => out.push("Datos recargados".to_string()),
                    Err(err) => out.push(format!(
                        "[error] {}; se muestran los últimos datos cargados",
                        err.user_message()
                    )),
                }
            }
            Command::Help => out.push(HELP.to_string()),
            Command::Quit => {}
        }

        if let Some(notification) = self.dismiss_notification() {
            out.push(notification.to_string());
        }
        out
    }

    fn sync_owners(&mut self) {
        self.mascotas.set_owners(self.clientes.records().cloned());
    }

    fn dismiss_notification(&mut self) -> Option<vet_client::Notification> {
        match self.active {
            PageKind::Clientes => self.clientes.form_mut().dismiss_notification(),
            PageKind::Mascotas => self.mascotas.pets_mut().form_mut().dismiss_notification(),
        }
    }

    fn set_field(&mut self, field: &str, value: String) -> String {
        let applied = match self.active {
            PageKind::Clientes => field
                .parse::<ClienteField>()
                .map(|f| self.clientes.form_mut().on_field_change(f, value))
                .map_err(|_| field_names(&ClienteField::ALL.map(|f| f.as_str()))),
            PageKind::Mascotas => field
                .parse::<MascotaField>()
                .map(|f| self.mascotas.pets_mut().form_mut().on_field_change(f, value))
                .map_err(|_| field_names(&MascotaField::ALL.map(|f| f.as_str()))),
        };
        match applied {
            Ok(()) => format!("{field} actualizado"),
            Err(names) => format!("Campo desconocido: {field} (campos: {names})"),
        }
    }

    fn render_form(&self) -> Vec<String> {
        match self.active {
            PageKind::Clientes => {
                let form = self.clientes.form();
                let id = form.selection().map(Cliente::id);
                let mut lines = vec![form_title("Nuevo cliente", "cliente", form.mode(), id)];
                lines.extend(
                    ClienteField::ALL
                        .iter()
                        .map(|f| format!("  {:<10} {}", f.as_str(), form.draft().get(*f))),
                );
                lines
            }
            PageKind::Mascotas => {
                let form = self.mascotas.pets().form();
                let id = form.selection().map(Mascota::id);
                let mut lines = vec![form_title("Nueva mascota", "mascota", form.mode(), id)];
                lines.extend(MascotaField::ALL.iter().map(|f| {
                    let value = form.draft().get(*f);
                    let owner = match f {
                        MascotaField::IdCliente => value
                            .trim()
                            .parse::<i64>()
                            .ok()
                            .and_then(|id| self.mascotas.owners().get(&id))
                            .map(|c| format!("  ({})", c.full_name()))
                            .unwrap_or_default(),
                        _ => String::new(),
                    };
                    format!("  {:<10} {value}{owner}", f.as_str())
                }));
                lines
            }
        }
    }

    fn render_mascotas(&self) -> Vec<String> {
        let page = self.mascotas.pets();
        if page.collection().is_empty() {
            return vec!["(sin mascotas)".to_string()];
        }
        page.records()
            .map(|m| {
                let owner = self
                    .mascotas
                    .owner_of(m)
                    .map(Cliente::full_name)
                    .unwrap_or_else(|| "?".to_string());
                format!(
                    "{:>5}  {}  {}  {}  {} años  dueño: {} ({})",
                    m.id_mascota, m.nombre, m.raza, m.especie, m.edad, owner, m.id_cliente
                )
            })
            .collect()
    }
}

fn render_clientes(page: &PageController<Cliente>) -> Vec<String> {
    if page.collection().is_empty() {
        return vec!["(sin clientes)".to_string()];
    }
    page.records()
        .map(|c| {
            format!(
                "{:>5}  {}  {}  {}",
                c.id_cliente,
                c.full_name(),
                c.telefono,
                c.email
            )
        })
        .collect()
}

fn form_title(create_title: &str, label: &str, mode: SubmitMode, id: Option<i64>) -> String {
    match (mode, id) {
        (SubmitMode::Update, Some(id)) => format!("Editando {label} #{id}"),
        _ => create_title.to_string(),
    }
}

fn field_names(names: &[&str]) -> String {
    names.join(", ")
}
