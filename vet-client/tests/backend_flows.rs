// vet-client/tests/backend_flows.rs
// End-to-end form/page flows against an in-process mock backend

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use vet_client::{
    ClientConfig, ClientPage, ClienteField, FormState, MascotaField, NotificationKind, PetPage,
    SubmitOutcome, VetApi,
};

#[derive(Debug, Clone)]
struct Recorded {
    method: Method,
    path: String,
    body: Option<Value>,
}

/// Canned reply for failing requests
#[derive(Debug, Clone)]
enum Failure {
    Json(StatusCode, Value),
    Text(StatusCode, &'static str),
}

#[derive(Default)]
struct BackendState {
    requests: Vec<Recorded>,
    fail_writes: Option<Failure>,
    fail_reads: Option<Failure>,
}

#[derive(Clone, Default)]
struct Backend(Arc<Mutex<BackendState>>);

impl Backend {
    fn requests(&self) -> Vec<Recorded> {
        self.0.lock().unwrap().requests.clone()
    }

    fn writes(&self) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method != Method::GET)
            .collect()
    }

    fn fail_writes(&self, failure: Failure) {
        self.0.lock().unwrap().fail_writes = Some(failure);
    }

    fn fail_reads(&self, failure: Failure) {
        self.0.lock().unwrap().fail_reads = Some(failure);
    }
}

fn failure_response(failure: Failure) -> Response {
    match failure {
        Failure::Json(status, body) => (status, Json(body)).into_response(),
        Failure::Text(status, text) => (status, text).into_response(),
    }
}

fn clientes() -> Value {
    json!([
        {"idCliente": 7, "nombre": "Ana", "apellido": "Lopez", "telefono": "1234567890", "email": "a@b.com"},
        {"idCliente": 9, "nombre": "Luis", "apellido": "Perez", "telefono": "5555555555", "email": "l@p.com"}
    ])
}

fn mascotas() -> Value {
    json!([
        {"idMascota": 3, "nombre": "Rex", "raza": "Labrador", "especie": "Perro", "edad": 3, "idCliente": 7}
    ])
}

async fn read(State(backend): State<Backend>, uri: Uri) -> Response {
    let mut state = backend.0.lock().unwrap();
    state.requests.push(Recorded {
        method: Method::GET,
        path: uri.path().to_string(),
        body: None,
    });
    if let Some(failure) = state.fail_reads.clone() {
        return failure_response(failure);
    }
    let data = if uri.path() == "/clientes" {
        clientes()
    } else {
        mascotas()
    };
    Json(json!({ "data": data })).into_response()
}

async fn write(
    State(backend): State<Backend>,
    method: Method,
    uri: Uri,
    Json(body): Json<Value>,
) -> Response {
    let mut state = backend.0.lock().unwrap();
    state.requests.push(Recorded {
        method,
        path: uri.path().to_string(),
        body: Some(body),
    });
    match state.fail_writes.clone() {
        Some(failure) => failure_response(failure),
        None => StatusCode::CREATED.into_response(),
    }
}

async fn spawn_backend() -> (Backend, VetApi) {
    let backend = Backend::default();
    let app = Router::new()
        .route("/clientes", get(read))
        .route("/cliente", axum::routing::post(write).put(write))
        .route("/mascotas", get(read).post(write).put(write))
        .with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = ClientConfig::new(format!("http://{addr}")).with_timeout(5);
    let api = VetApi::connect(&config).unwrap();
    (backend, api)
}

fn fill_ana(page: &mut ClientPage) {
    let form = page.form_mut();
    form.on_field_change(ClienteField::Nombre, "Ana");
    form.on_field_change(ClienteField::Apellido, "Lopez");
    form.on_field_change(ClienteField::Telefono, "1234567890");
    form.on_field_change(ClienteField::Email, "a@b.com");
}

#[tokio::test]
async fn test_create_client_posts_then_reloads() {
    let (backend, api) = spawn_backend().await;
    let mut page = ClientPage::new();
    page.load_collection(&api).await.unwrap();
    fill_ana(&mut page);

    let outcome = page.submit(&api).await;
    assert!(outcome.is_saved());

    let requests = backend.requests();
    let summary: Vec<_> = requests
        .iter()
        .map(|r| (r.method.clone(), r.path.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (Method::GET, "/clientes"),
            (Method::POST, "/cliente"),
            (Method::GET, "/clientes"),
        ]
    );
    assert_eq!(
        requests[1].body,
        Some(json!({
            "nombre": "Ana",
            "apellido": "Lopez",
            "telefono": "1234567890",
            "email": "a@b.com"
        }))
    );
    assert!(page.form().selection().is_none());
    assert_eq!(
        page.form().notification().unwrap().kind,
        NotificationKind::Success
    );
}

#[tokio::test]
async fn test_update_client_puts_selected_identifier() {
    let (backend, api) = spawn_backend().await;
    let mut page = ClientPage::new();
    page.load_collection(&api).await.unwrap();
    page.select_by_id(7);
    page.form_mut().on_field_change(ClienteField::Email, "x@y.com");

    assert!(page.submit(&api).await.is_saved());

    let writes = backend.writes();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].method, Method::PUT);
    let body = writes[0].body.as_ref().unwrap();
    assert_eq!(body["idCliente"], 7);
    assert_eq!(body["email"], "x@y.com");
    assert_eq!(body["nombre"], "Ana");
    assert!(page.form().draft().email.is_empty());
}

#[tokio::test]
async fn test_create_pet_coerces_integers() {
    let (backend, api) = spawn_backend().await;
    let mut page = PetPage::new();
    page.load(&api).await.unwrap();
    let form = page.pets_mut().form_mut();
    form.on_field_change(MascotaField::Nombre, "Rex");
    form.on_field_change(MascotaField::Raza, "Labrador");
    form.on_field_change(MascotaField::Especie, "Perro");
    form.on_field_change(MascotaField::Edad, "3");
    form.on_field_change(MascotaField::IdCliente, "7");

    assert!(page.submit(&api).await.is_saved());

    let writes = backend.writes();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].method, Method::POST);
    assert_eq!(writes[0].path, "/mascotas");
    assert_eq!(
        writes[0].body,
        Some(json!({
            "nombre": "Rex",
            "raza": "Labrador",
            "especie": "Perro",
            "edad": 3,
            "idCliente": 7
        }))
    );
}

#[tokio::test]
async fn test_server_error_message_is_surfaced_and_draft_kept() {
    let (backend, api) = spawn_backend().await;
    backend.fail_writes(Failure::Json(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"message": "db down"}),
    ));
    let mut page = ClientPage::new();
    fill_ana(&mut page);
    let before = page.form().draft().clone();

    let outcome = page.submit(&api).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Failed {
            message: "db down".into()
        }
    );
    let notification = page.form().notification().unwrap();
    assert_eq!(notification.kind, NotificationKind::Error);
    assert_eq!(notification.message, "db down");
    assert_eq!(page.form().draft(), &before);
    assert_eq!(page.form().state(), FormState::Idle);
    // no reload after a failed write
    assert_eq!(backend.requests().len(), 1);
}

#[tokio::test]
async fn test_unparseable_error_body_gives_generic_message() {
    let (backend, api) = spawn_backend().await;
    backend.fail_writes(Failure::Text(StatusCode::BAD_GATEWAY, "upstream timeout"));
    let mut page = ClientPage::new();
    fill_ana(&mut page);

    let outcome = page.submit(&api).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Failed {
            message: "Error en el servidor (HTTP 502)".into()
        }
    );
}

#[tokio::test]
async fn test_failed_reload_keeps_last_known_collection() {
    let (backend, api) = spawn_backend().await;
    let mut page = ClientPage::new();
    page.load_collection(&api).await.unwrap();

    backend.fail_reads(Failure::Json(
        StatusCode::SERVICE_UNAVAILABLE,
        json!({"message": "maintenance"}),
    ));
    let err = page.load_collection(&api).await.unwrap_err();

    assert_eq!(err.user_message(), "maintenance");
    assert_eq!(page.collection().len(), 2);
    assert!(!page.is_loading());
}

#[tokio::test]
async fn test_unreachable_backend_keeps_draft() {
    // reserve a port, then free it so nothing listens there
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ClientConfig::new(format!("http://{addr}")).with_timeout(2);
    let api = VetApi::connect(&config).unwrap();
    let mut page = ClientPage::new();
    assert!(page.load_collection(&api).await.is_err());
    fill_ana(&mut page);

    let outcome = page.submit(&api).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Failed {
            message: "No se pudo conectar con el servidor".into()
        }
    );
    assert_eq!(page.form().draft().nombre, "Ana");
    assert_eq!(page.form().state(), FormState::Idle);
}
